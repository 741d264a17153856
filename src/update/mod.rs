//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod document;
mod editor;
mod input;
mod search;
mod ui;

use crate::commands::Cmd;
use crate::messages::{DocumentMsg, Msg};
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::CursorSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::{save_to, update_app};
pub use document::{
    backward_kill_word, delete_backward, expand_snippet, hungry_delete_backward, insert_text,
    kill_line, kill_word, open_line, tab, update_document,
};
pub use editor::{
    back_to_indentation, goto, mark_paragraph, move_char_left, move_char_right,
    move_document_begin, move_document_end, move_line_begin, move_line_down, move_line_end,
    move_line_up, move_paragraph_down, move_paragraph_up, move_word_left, move_word_right,
    select_all, smart_line_begin, smart_line_end, update_editor,
};
pub use input::{confirm, parse_goto, update_input};
pub use search::{extend_query, find_next, search_matches_at, start_search, stop_search, update_search};
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    // Consecutive word kills append to the kill buffer; anything else ends the run
    if !matches!(msg, Msg::Document(DocumentMsg::KillWord)) {
        model.kill.reset_sequence();
    }

    match msg {
        Msg::Editor(m) => editor::update_editor(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::Search(m) => search::update_search(model, m),
        Msg::Input(m) => input::update_input(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after cursor state and logs diffs for debugging.
/// Frame ticks are not logged.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::UiMsg;

    let is_noisy = matches!(&msg, Msg::Ui(UiMsg::Tick(_)));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = CursorSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    if let Some(diff) = before.diff(&CursorSnapshot::from_model(model)) {
        debug!(target: "cursor", %diff, "state changed");
    }

    if let Err(violation) = model.check_invariants() {
        tracing::error!(msg = %msg_name, "invariant violated: {}", violation);
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Editor::MoveCursor { direction: Up, extend: false }`
/// - `Document::InsertChar('x')`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Editor(m) => format!("Editor::{:?}", m),
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Search(m) => format!("Search::{:?}", m),
        Msg::Input(m) => format!("Input::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
