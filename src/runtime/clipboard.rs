//! Clipboard access behind a trait so the runtime can run headless

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardError(pub String);

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clipboard unavailable: {}", self.0)
    }
}

impl std::error::Error for ClipboardError {}

pub trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
    fn get_text(&mut self) -> Result<String, ClipboardError>;
}

/// The OS clipboard. A fresh `arboard::Clipboard` is opened per call since
/// the platform handle may not outlive a display connection.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError(e.to_string()))
    }

    fn get_text(&mut self) -> Result<String, ClipboardError> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
        clipboard.get_text().map_err(|e| ClipboardError(e.to_string()))
    }
}

/// In-process clipboard for tests and headless runs
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: String,
}

impl ClipboardProvider for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = text.to_owned();
        Ok(())
    }

    fn get_text(&mut self) -> Result<String, ClipboardError> {
        Ok(self.contents.clone())
    }
}
