//! Snippet expansion through Tab

mod common;

use common::{buffer_to_string, test_model, test_model_with_snippets};
use ded::config::EditorConfig;
use ded::messages::DocumentMsg;
use ded::model::AppModel;
use ded::update::update;

#[test]
fn test_tab_expands_snippet_and_places_cursor() {
    let mut model = test_model_with_snippets("main", 4, &[("main", "int main() {\n    $0\n}")]);
    update(&mut model, DocumentMsg::Tab.into());
    assert_eq!(buffer_to_string(&model), "int main() {\n    \n}");
    assert_eq!(model.editor.cursor, 17);
}

#[test]
fn test_expansion_indents_to_trigger_column() {
    let mut model =
        test_model_with_snippets("  if", 4, &[("if", "if (x) {\n    $0\n}")]);
    update(&mut model, DocumentMsg::Tab.into());
    assert_eq!(buffer_to_string(&model), "  if (x) {\n      \n  }");
    assert_eq!(model.cursor_row(), 1);
    assert_eq!(model.cursor_column(), 6);
}

#[test]
fn test_unknown_word_inserts_spaces() {
    let mut model = test_model_with_snippets("foo", 3, &[("main", "int main() {}")]);
    update(&mut model, DocumentMsg::Tab.into());
    assert_eq!(buffer_to_string(&model), "foo    ");
}

#[test]
fn test_tab_mid_word_uses_prefix() {
    let mut model = test_model_with_snippets("prx", 2, &[("pr", "printf($0);")]);
    update(&mut model, DocumentMsg::Tab.into());
    assert_eq!(buffer_to_string(&model), "printf();x");
    assert_eq!(model.editor.cursor, 7);
}

#[test]
fn test_snippets_load_from_yaml_config() {
    let yaml = "snippets:\n  todo: \"// TODO: $0\"\n";
    let config = EditorConfig::from_yaml_str(yaml).unwrap();
    let mut model = AppModel::with_document(ded::model::Document::with_text("todo"), config);
    model.editor.cursor = 4;
    update(&mut model, DocumentMsg::Tab.into());
    assert_eq!(buffer_to_string(&model), "// TODO: ");
    assert_eq!(model.editor.cursor, 9);
}

#[test]
fn test_tab_ignored_while_prompt_active() {
    let mut model = test_model("x", 1);
    update(&mut model, ded::messages::AppMsg::GotoLine.into());
    update(&mut model, DocumentMsg::Tab.into());
    assert_eq!(buffer_to_string(&model), "x");
}
