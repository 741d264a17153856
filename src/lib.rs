//! ded - Elm-style text editing engine
//!
//! This crate provides the core types and logic for a small code editor
//! implementing the Elm Architecture pattern: a byte buffer with derived
//! line and token indexes, cursor/selection movement, search, an input
//! prompt, emacs-style editing commands, snippets and timed popups.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod snippets;
pub mod syntax;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use runtime::Runtime;
