//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use ded::config::EditorConfig;
use ded::model::{AppModel, Document};
use ded::runtime::{MemoryClipboard, Runtime};

/// Create a test model with given text and cursor offset
pub fn test_model(text: &str, cursor: usize) -> AppModel {
    let mut model = AppModel::with_document(Document::with_text(text), EditorConfig::default());
    model.editor.cursor = cursor;
    model
}

/// Create a test model with a selection anchored at `anchor`
/// The cursor will be at `cursor`
pub fn test_model_with_selection(text: &str, anchor: usize, cursor: usize) -> AppModel {
    let mut model = test_model(text, cursor);
    model.editor.start_selection(anchor);
    model
}

/// Create a test model whose config carries the given snippets
pub fn test_model_with_snippets(text: &str, cursor: usize, snippets: &[(&str, &str)]) -> AppModel {
    let mut config = EditorConfig::default();
    for (key, content) in snippets {
        config.snippets.insert(key.to_string(), content.to_string());
    }
    let mut model = AppModel::with_document(Document::with_text(text), config);
    model.editor.cursor = cursor;
    model
}

/// Runtime over a test model with an in-memory clipboard
pub fn test_runtime(text: &str, cursor: usize) -> Runtime {
    Runtime::with_clipboard(test_model(text, cursor), Box::new(MemoryClipboard::default()))
}

/// Helper to get buffer content as string
pub fn buffer_to_string(model: &AppModel) -> String {
    model.document.to_string_lossy()
}
