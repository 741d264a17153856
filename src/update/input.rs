//! Input prompt handlers: confirm/cancel and the prompt actions

use std::path::PathBuf;
use std::time::Instant;

use crate::commands::Cmd;
use crate::messages::InputMsg;
use crate::model::{AppModel, InputAction};
use crate::util::text::parse_number;

use super::app::save_to;
use super::editor::goto;
use super::search::stop_search;

/// Handle input prompt messages
pub fn update_input(model: &mut AppModel, msg: InputMsg) -> Option<Cmd> {
    match msg {
        InputMsg::Confirm => confirm(model),
        InputMsg::Cancel => {
            stop_search(model);
            model.input.close();
            Some(Cmd::Redraw)
        }
    }
}

/// Return key: stop searching, run the prompt action, or insert a newline
pub fn confirm(model: &mut AppModel) -> Option<Cmd> {
    if model.search.active {
        stop_search(model);
        return Some(Cmd::Redraw);
    }

    if model.input.active {
        let (action, text) = model.input.close();
        return match action {
            Some(action) => run_action(model, action, text),
            None => Some(Cmd::Redraw),
        };
    }

    model.delete_selection();
    model.insert_at_cursor(b"\n");
    Some(Cmd::Redraw)
}

fn run_action(model: &mut AppModel, action: InputAction, text: String) -> Option<Cmd> {
    match action {
        InputAction::SaveAs => {
            let path = text.trim();
            if path.is_empty() {
                model.configured_popup("can not save", &[("err", "empty file name")], Instant::now());
                return Some(Cmd::Redraw);
            }
            save_to(model, PathBuf::from(path))
        }
        InputAction::GotoLine => {
            match parse_goto(&text) {
                Some((line, column)) => {
                    model.editor.clear_selection();
                    goto(model, line - 1, column - 1);
                }
                None => model.configured_popup("invalid goto", &[], Instant::now()),
            }
            Some(Cmd::Redraw)
        }
    }
}

/// Parse `LINE` or `LINE:COL` (1-based). Zero is treated as one.
pub fn parse_goto(text: &str) -> Option<(usize, usize)> {
    let text = text.trim();
    let (line, column) = match text.split_once(':') {
        Some((line, column)) => (parse_number(line)?, parse_number(column)?),
        None => (parse_number(text)?, 1),
    };
    Some((line.max(1), column.max(1)))
}
