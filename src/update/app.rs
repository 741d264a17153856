//! App message handlers (file operations, prompts that lead to them)

use std::path::PathBuf;
use std::time::Instant;

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{AppModel, InputAction};

/// Handle app messages (file operations)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::SaveFile => match model.document.file_path.clone() {
            Some(path) => save_to(model, path),
            None => {
                open_prompt(model, "save", InputAction::SaveAs, true);
                Some(Cmd::Redraw)
            }
        },

        AppMsg::SaveFileAs => {
            open_prompt(model, "save as", InputAction::SaveAs, false);
            Some(Cmd::Redraw)
        }

        AppMsg::SaveFileTo(path) => save_to(model, path),

        AppMsg::GotoLine => {
            open_prompt(model, "goto", InputAction::GotoLine, false);
            Some(Cmd::Redraw)
        }

        AppMsg::OpenFile(path) => Some(Cmd::LoadFile { path }),

        AppMsg::FileLoaded { path, result } => {
            match result {
                Ok(bytes) => {
                    tracing::info!("Loaded {} ({} bytes)", path.display(), bytes.len());
                    model.document.set_file_path(path);
                    model.load(bytes);
                }
                Err(e) => {
                    let path_str = path.display().to_string();
                    tracing::warn!("{}", e.user_message(&path_str));
                    model.configured_popup(
                        "can not open",
                        &[("path", &path_str), ("err", &e.to_string())],
                        Instant::now(),
                    );
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::SaveCompleted { path, result } => {
            match result {
                Ok(()) => {
                    let path_str = path.display().to_string();
                    tracing::info!("Saved {}", path_str);
                    model.document.set_file_path(path);
                    model.configured_popup("save ok", &[("path", &path_str)], Instant::now());
                }
                Err(e) => {
                    tracing::warn!("Failed to save {}: {}", path.display(), e);
                    model.configured_popup("can not save", &[("err", &e.to_string())], Instant::now());
                }
            }
            Some(Cmd::Redraw)
        }
    }
}

/// Write the buffer to `path`
pub fn save_to(model: &mut AppModel, path: PathBuf) -> Option<Cmd> {
    tracing::debug!("Saving as {}", path.display());
    Some(Cmd::SaveFile {
        path,
        content: model.document.data().to_vec(),
    })
}

fn open_prompt(model: &mut AppModel, hint_key: &str, action: InputAction, required: bool) {
    let hint = model.configured_hint(hint_key);
    model.input.open(hint, Some(action), required);
}
