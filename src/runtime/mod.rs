//! Runtime module - executes commands and feeds their results back
//!
//! - `clipboard` - system and in-memory clipboard providers
//!
//! The runtime owns the model. Every message goes through `update`; the
//! returned `Cmd` is executed here and any reply is queued as a new message
//! until the queue drains.

pub mod clipboard;

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::commands::Cmd;
use crate::messages::{AppMsg, DocumentMsg, Msg};
use crate::model::AppModel;
use crate::update::update;
use crate::util::{read_file, write_file};

pub use clipboard::{ClipboardError, ClipboardProvider, MemoryClipboard, SystemClipboard};

pub struct Runtime {
    pub model: AppModel,
    clipboard: Box<dyn ClipboardProvider>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    redraw_requested: bool,
}

impl Runtime {
    pub fn new(model: AppModel) -> Self {
        Self::with_clipboard(model, Box::new(SystemClipboard))
    }

    pub fn with_clipboard(model: AppModel, clipboard: Box<dyn ClipboardProvider>) -> Self {
        let (msg_tx, msg_rx) = channel();
        Self {
            model,
            clipboard,
            msg_tx,
            msg_rx,
            redraw_requested: false,
        }
    }

    /// Run `msg` and every message its commands produce
    pub fn dispatch(&mut self, msg: impl Into<Msg>) {
        let mut next = Some(msg.into());
        while let Some(msg) = next {
            if let Some(cmd) = update(&mut self.model, msg) {
                self.process_cmd(cmd);
            }
            next = self.msg_rx.try_recv().ok();
        }
    }

    /// Whether anything requested a redraw since the last call
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        if cmd.needs_redraw() {
            self.redraw_requested = true;
        }
        for cmd in cmd.into_vec() {
            match cmd {
                Cmd::None | Cmd::Redraw | Cmd::Batch(_) => {}
                Cmd::SaveFile { path, content } => {
                    let result = write_file(&path, &content);
                    let _ = self.msg_tx.send(Msg::App(AppMsg::SaveCompleted { path, result }));
                }
                Cmd::LoadFile { path } => {
                    let result = read_file(&path);
                    let _ = self.msg_tx.send(Msg::App(AppMsg::FileLoaded { path, result }));
                }
                Cmd::SetClipboard(bytes) => {
                    let text = String::from_utf8_lossy(&bytes);
                    if let Err(e) = self.clipboard.set_text(&text) {
                        tracing::warn!("Failed to copy: {}", e);
                    }
                }
                Cmd::RequestPaste => match self.clipboard.get_text() {
                    Ok(text) => {
                        let _ = self
                            .msg_tx
                            .send(Msg::Document(DocumentMsg::PasteText(text.into_bytes())));
                    }
                    Err(e) => tracing::warn!("Failed to paste: {}", e),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::messages::EditorMsg;
    use crate::model::Document;

    fn runtime(text: &str) -> Runtime {
        let model = AppModel::with_document(Document::with_text(text), EditorConfig::default());
        Runtime::with_clipboard(model, Box::new(MemoryClipboard::default()))
    }

    #[test]
    fn test_copy_then_paste_round_trips_through_clipboard() {
        let mut rt = runtime("hello");
        rt.dispatch(EditorMsg::SelectAll);
        rt.dispatch(DocumentMsg::Copy);
        rt.dispatch(EditorMsg::MoveCursorDocumentEnd { extend: false });
        rt.dispatch(DocumentMsg::Paste);
        assert_eq!(rt.model.document.to_string_lossy(), "hellohello");
    }

    #[test]
    fn test_redraw_flag() {
        let mut rt = runtime("abc");
        assert!(!rt.take_redraw());
        rt.dispatch(DocumentMsg::InsertChar('x'));
        assert!(rt.take_redraw());
        assert!(!rt.take_redraw());
    }
}
