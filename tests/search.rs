//! Search tests - incremental query, find next, seeding from selection

mod common;

use common::{buffer_to_string, test_model, test_model_with_selection};
use ded::messages::{DocumentMsg, InputMsg, SearchMsg};
use ded::update::{search_matches_at, update};

#[test]
fn test_typing_while_searching_extends_query() {
    let mut model = test_model("alpha beta gamma", 0);
    update(&mut model, SearchMsg::Start.into());
    update(&mut model, DocumentMsg::InsertText(b"be".to_vec()).into());
    assert_eq!(model.search.query, b"be".to_vec());
    assert_eq!(model.editor.cursor, 6);
    assert_eq!(buffer_to_string(&model), "alpha beta gamma");
}

#[test]
fn test_start_again_finds_next() {
    let mut model = test_model("ab ab ab", 0);
    update(&mut model, SearchMsg::Start.into());
    update(&mut model, DocumentMsg::InsertText(b"ab".to_vec()).into());
    assert_eq!(model.editor.cursor, 0);
    update(&mut model, SearchMsg::Start.into());
    assert_eq!(model.editor.cursor, 3);
    update(&mut model, SearchMsg::Start.into());
    assert_eq!(model.editor.cursor, 6);
}

#[test]
fn test_find_next_does_not_wrap() {
    let mut model = test_model("ab ab", 0);
    update(&mut model, SearchMsg::Start.into());
    update(&mut model, DocumentMsg::InsertText(b"ab".to_vec()).into());
    update(&mut model, SearchMsg::Start.into());
    assert_eq!(model.editor.cursor, 3);
    update(&mut model, SearchMsg::Start.into());
    assert_eq!(model.editor.cursor, 3);
}

#[test]
fn test_tab_finds_next_while_searching() {
    let mut model = test_model("x y x", 0);
    update(&mut model, SearchMsg::Start.into());
    update(&mut model, DocumentMsg::InsertChar('x').into());
    update(&mut model, DocumentMsg::Tab.into());
    assert_eq!(model.editor.cursor, 4);
    assert_eq!(buffer_to_string(&model), "x y x");
}

#[test]
fn test_backspace_pops_query() {
    let mut model = test_model("abc", 0);
    update(&mut model, SearchMsg::Start.into());
    update(&mut model, DocumentMsg::InsertText(b"ab".to_vec()).into());
    update(&mut model, DocumentMsg::DeleteBackward.into());
    assert_eq!(model.search.query, b"a".to_vec());
    assert_eq!(buffer_to_string(&model), "abc");
}

#[test]
fn test_start_seeds_query_from_selection() {
    let mut model = test_model_with_selection("foo bar foo", 8, 10);
    update(&mut model, SearchMsg::Start.into());
    assert_eq!(model.search.query, b"foo".to_vec());
    assert_eq!(model.editor.cursor, 8);
    assert!(!model.editor.selection);
}

#[test]
fn test_stop_is_idempotent() {
    let mut model = test_model("abc", 1);
    update(&mut model, SearchMsg::Stop.into());
    assert!(!model.search.active);
    assert!(!model.input.active);
    assert_eq!(model.editor.cursor, 1);

    update(&mut model, SearchMsg::Start.into());
    update(&mut model, SearchMsg::Stop.into());
    update(&mut model, SearchMsg::Stop.into());
    assert!(!model.search.active);
    assert!(model.search.query.is_empty());
}

#[test]
fn test_confirm_stops_search_without_inserting() {
    let mut model = test_model("abc", 0);
    update(&mut model, SearchMsg::Start.into());
    update(&mut model, InputMsg::Confirm.into());
    assert!(!model.search.active);
    assert_eq!(buffer_to_string(&model), "abc");
}

#[test]
fn test_stop_keeps_required_prompt_open() {
    let mut model = test_model("abc", 0);
    update(&mut model, SearchMsg::Start.into());
    model.input.required = true;
    update(&mut model, SearchMsg::Stop.into());
    assert!(!model.search.active);
    assert!(model.input.active);
}

#[test]
fn test_empty_query_matches_everywhere() {
    let model = test_model("abc", 0);
    for pos in 0..=3 {
        assert!(search_matches_at(&model, pos), "pos {}", pos);
    }
    assert!(!search_matches_at(&model, 4));
}

#[test]
fn test_matches_at_near_end() {
    let mut model = test_model("abc", 0);
    model.search.query = b"bc".to_vec();
    assert!(search_matches_at(&model, 1));
    assert!(!search_matches_at(&model, 2));
}
