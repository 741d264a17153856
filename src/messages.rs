//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Movement messages
//! carry `extend`, which is true while the selection modifier (Shift) is held.

use std::path::PathBuf;
use std::time::Instant;

use crate::util::FileError;

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Editor-specific messages (cursor movement and selection)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMsg {
    // === Basic Movement ===
    /// Move by one byte (Left/Right) or one line (Up/Down)
    MoveCursor { direction: Direction, extend: bool },
    /// Move by word (Ctrl+Left/Right)
    MoveCursorWord { direction: Direction, extend: bool },
    /// Move by paragraph (Ctrl+Up/Down)
    MoveCursorParagraph { direction: Direction, extend: bool },
    /// Move cursor to start of line (Home key)
    MoveCursorLineStart { extend: bool },
    /// Move cursor to end of line (End key)
    MoveCursorLineEnd { extend: bool },
    /// Move cursor to start of document (Ctrl+Home)
    MoveCursorDocumentStart { extend: bool },
    /// Move cursor to end of document (Ctrl+End)
    MoveCursorDocumentEnd { extend: bool },

    // === Emacs-style Movement ===
    /// Toggle between first non-whitespace and line start
    SmartLineStart { extend: bool },
    /// Toggle between last non-whitespace and line end
    SmartLineEnd { extend: bool },
    /// Jump to first non-whitespace of the line
    BackToIndentation { extend: bool },

    /// Jump to a 0-based line and column, clamped to the document
    GotoPosition { line: usize, column: usize },
    /// Place the cursor at a byte offset (from mouse click)
    SetCursorOffset(usize),

    // === Selection ===
    SelectAll,
    /// Select the current paragraph, or extend an existing selection by one
    MarkParagraph,
    /// Escape: stop search, then apply the selection rule
    Escape { extend: bool },
}

/// Document-specific messages (buffer modifications)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Typed text; routed to the search query or input prompt when active
    InsertText(Vec<u8>),
    /// Insert a single typed character
    InsertChar(char),
    /// Backspace; routed like typed text
    DeleteBackward,
    /// Delete key (ignored while searching)
    DeleteForward,
    /// Forward delete without the search guard
    DeleteChar,
    /// Delete the selection if there is one
    DeleteSelection,
    /// Delete a run of whitespace before the cursor
    HungryDeleteBackward,
    /// Tab: snippet expansion, find-next while searching, else indentation
    Tab,

    // === Kill Commands ===
    KillLine,
    KillWord,
    BackwardKillWord,
    /// Insert a newline and stay on the current line
    OpenLine,

    // === Clipboard ===
    Copy,
    Cut,
    Paste,
    /// Clipboard contents delivered by the runtime in response to `Paste`
    PasteText(Vec<u8>),
}

/// Search mode messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMsg {
    /// Ctrl+F: start searching, or find next when already searching
    Start,
    /// Leave search mode
    Stop,
}

/// Input prompt messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMsg {
    /// Return: stop search, run the prompt action, or insert a newline
    Confirm,
    /// Close the prompt without running its action
    Cancel,
}

/// UI messages (popups and per-frame bookkeeping)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    /// Frame tick: expire popups
    Tick(Instant),
    /// Show a configured popup by key with `{name}` placeholders
    ShowPopup {
        key: String,
        placeholders: Vec<(String, String)>,
    },
    /// Remove a popup before it expires
    DismissPopup(u64),
}

/// Application-level messages (file operations)
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Ctrl+S: save to the current path, or prompt for one
    SaveFile,
    /// Ctrl+Shift+S: prompt for a path
    SaveFileAs,
    /// Save to a path (result of the save-as prompt)
    SaveFileTo(PathBuf),
    /// Ctrl+G: prompt for `LINE[:COL]`
    GotoLine,
    /// Load a file into the buffer
    OpenFile(PathBuf),
    /// File load finished
    FileLoaded {
        path: PathBuf,
        result: Result<Vec<u8>, FileError>,
    },
    /// File save finished
    SaveCompleted {
        path: PathBuf,
        result: Result<(), FileError>,
    },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Editor(EditorMsg),
    Document(DocumentMsg),
    Search(SearchMsg),
    Input(InputMsg),
    Ui(UiMsg),
    App(AppMsg),
}

impl From<EditorMsg> for Msg {
    fn from(msg: EditorMsg) -> Self {
        Msg::Editor(msg)
    }
}

impl From<DocumentMsg> for Msg {
    fn from(msg: DocumentMsg) -> Self {
        Msg::Document(msg)
    }
}

impl From<SearchMsg> for Msg {
    fn from(msg: SearchMsg) -> Self {
        Msg::Search(msg)
    }
}

impl From<InputMsg> for Msg {
    fn from(msg: InputMsg) -> Self {
        Msg::Input(msg)
    }
}

impl From<UiMsg> for Msg {
    fn from(msg: UiMsg) -> Self {
        Msg::Ui(msg)
    }
}

impl From<AppMsg> for Msg {
    fn from(msg: AppMsg) -> Self {
        Msg::App(msg)
    }
}
