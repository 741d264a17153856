//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The runtime executes them and feeds results back as messages.

use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the frame
    Redraw,
    /// Write the buffer to disk; replies with `AppMsg::SaveCompleted`
    SaveFile { path: PathBuf, content: Vec<u8> },
    /// Read a file; replies with `AppMsg::FileLoaded`
    LoadFile { path: PathBuf },
    /// Put bytes on the system clipboard
    SetClipboard(Vec<u8>),
    /// Read the clipboard; replies with `DocumentMsg::PasteText`
    RequestPaste,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::SaveFile { .. } => true,
            Cmd::LoadFile { .. } => true,
            // Clipboard writes don't change what's on screen
            Cmd::SetClipboard(_) => false,
            // The paste reply triggers its own redraw
            Cmd::RequestPaste => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten nested batches into a list of leaf commands, dropping `None`
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            cmd => vec![cmd],
        }
    }
}
