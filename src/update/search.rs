//! Search mode: linear substring search from the cursor, no wraparound

use crate::commands::Cmd;
use crate::messages::SearchMsg;
use crate::model::AppModel;

/// Handle search messages
pub fn update_search(model: &mut AppModel, msg: SearchMsg) -> Option<Cmd> {
    match msg {
        SearchMsg::Start => start_search(model),
        SearchMsg::Stop => stop_search(model),
    }
    Some(Cmd::Redraw)
}

/// Enter search mode, or find the next match when already searching
///
/// Entering with a selection seeds the query with the selected text and moves
/// the cursor to the start of the selection.
pub fn start_search(model: &mut AppModel) {
    if model.search.active {
        find_next(model);
        return;
    }

    model.search.active = true;
    model.search.query.clear();
    let hint = model.configured_hint("find");
    model.input.open(hint, None, false);

    if let Some((begin, _)) = model.selection_span() {
        if let Some(text) = model.selected_text() {
            model.search.query = text;
        }
        model.editor.cursor = begin;
        model.editor.clear_selection();
    }
    tracing::debug!(query = %model.search.query_lossy(), "search started");
}

/// Leave search mode. The input prompt stays open only if it is required.
/// Does nothing when search is not active.
pub fn stop_search(model: &mut AppModel) {
    if !model.search.active {
        return;
    }
    model.search.active = false;
    model.search.query.clear();
    if !model.input.required {
        model.input.active = false;
    }
}

/// Whether the query matches the buffer at `pos`
pub fn search_matches_at(model: &AppModel, pos: usize) -> bool {
    model.document.matches_at(pos, &model.search.query)
}

/// Move the cursor to the next match after it. Leaves the cursor unchanged
/// and returns false when there is none.
pub fn find_next(model: &mut AppModel) -> bool {
    let from = model.clamped_cursor() + 1;
    match model.document.find_from(from, &model.search.query) {
        Some(pos) => {
            model.editor.cursor = pos;
            true
        }
        None => false,
    }
}

/// Append typed bytes to the query, moving to the next match if the cursor
/// no longer matches
pub fn extend_query(model: &mut AppModel, bytes: &[u8]) {
    model.search.query.extend_from_slice(bytes);
    let cursor = model.clamped_cursor();
    if !search_matches_at(model, cursor) {
        find_next(model);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::model::Document;

    fn model(text: &str) -> AppModel {
        AppModel::with_document(Document::with_text(text), EditorConfig::default())
    }

    #[test]
    fn test_start_opens_prompt_with_hint() {
        let mut m = model("abc");
        start_search(&mut m);
        assert!(m.search.active);
        assert!(m.input.active);
        assert_eq!(m.input.hint, "Find: ");
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut m = model("abc");
        stop_search(&mut m);
        assert!(!m.search.active);
        start_search(&mut m);
        stop_search(&mut m);
        stop_search(&mut m);
        assert!(!m.search.active);
        assert!(!m.input.active);
        assert!(m.search.query.is_empty());
    }

    #[test]
    fn test_stop_keeps_required_prompt() {
        let mut m = model("abc");
        start_search(&mut m);
        m.input.required = true;
        stop_search(&mut m);
        assert!(m.input.active);
    }

    #[test]
    fn test_find_next_has_no_wraparound() {
        let mut m = model("ab ab");
        m.search.active = true;
        m.search.query = b"ab".to_vec();
        assert!(find_next(&mut m));
        assert_eq!(m.editor.cursor, 3);
        assert!(!find_next(&mut m));
        assert_eq!(m.editor.cursor, 3);
    }

    #[test]
    fn test_extend_query_jumps_when_cursor_stops_matching() {
        let mut m = model("xa xb");
        start_search(&mut m);
        extend_query(&mut m, b"x");
        assert_eq!(m.editor.cursor, 0);
        extend_query(&mut m, b"b");
        assert_eq!(m.editor.cursor, 3);
    }
}
