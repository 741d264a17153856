//! File load/save tests through the runtime

mod common;

use std::fs;

use common::{buffer_to_string, test_runtime};
use ded::messages::{AppMsg, DocumentMsg, InputMsg};
use ded::syntax::FileType;
use ded::util::{read_file, write_file, FileError};
use tempfile::TempDir;

#[test]
fn test_read_file_normalizes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("in.c");
    fs::write(&path, b"a\tb\r\nc\0ignored").unwrap();
    assert_eq!(read_file(&path).unwrap(), b"a    b\nc".to_vec());
}

#[test]
fn test_read_missing_file() {
    let dir = TempDir::new().unwrap();
    assert_eq!(read_file(&dir.path().join("nope")), Err(FileError::NotFound));
}

#[test]
fn test_read_directory_fails() {
    let dir = TempDir::new().unwrap();
    assert_eq!(read_file(dir.path()), Err(FileError::IsDirectory));
}

#[test]
fn test_write_appends_trailing_newline() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");
    write_file(&path, b"abc").unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"abc\n".to_vec());
    write_file(&path, b"abc\n").unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"abc\n".to_vec());
}

#[test]
fn test_open_file_loads_buffer_and_detects_type() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("main.c");
    fs::write(&path, "int main(void) {\n    return 0;\n}\n").unwrap();

    let mut rt = test_runtime("old", 3);
    rt.dispatch(AppMsg::OpenFile(path.clone()));

    assert_eq!(buffer_to_string(&rt.model), "int main(void) {\n    return 0;\n}\n");
    assert_eq!(rt.model.editor.cursor, 0);
    assert_eq!(rt.model.document.file_type, FileType::C);
    assert_eq!(rt.model.document.file_path, Some(path));
    assert!(!rt.model.document.tokens().is_empty());
    assert_eq!(rt.model.status_text(), "c  1 / 4");
}

#[test]
fn test_open_missing_file_leaves_buffer_and_reports() {
    let dir = TempDir::new().unwrap();
    let mut rt = test_runtime("keep me", 2);
    rt.dispatch(AppMsg::OpenFile(dir.path().join("missing.rs")));

    assert_eq!(buffer_to_string(&rt.model), "keep me");
    assert_eq!(rt.model.editor.cursor, 2);
    assert!(rt.model.document.file_path.is_none());
    let message = &rt.model.popups.popups()[0].message;
    assert!(message.starts_with("Can not open"), "got {}", message);
    assert!(message.contains("file not found"));
}

#[test]
fn test_save_file_writes_and_confirms() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "draft").unwrap();

    let mut rt = test_runtime("", 0);
    rt.dispatch(AppMsg::OpenFile(path.clone()));
    rt.dispatch(DocumentMsg::InsertText(b"final ".to_vec()));
    rt.dispatch(AppMsg::SaveFile);

    assert_eq!(fs::read_to_string(&path).unwrap(), "final draft\n");
    let message = &rt.model.popups.popups()[0].message;
    assert_eq!(message, &format!("Saved {}", path.display()));
}

#[test]
fn test_save_as_through_prompt_sets_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("new.py");

    let mut rt = test_runtime("print(1)", 0);
    rt.dispatch(AppMsg::SaveFile);
    assert!(rt.model.input.active);
    rt.dispatch(DocumentMsg::InsertText(path.to_string_lossy().as_bytes().to_vec()));
    rt.dispatch(InputMsg::Confirm);

    assert_eq!(fs::read_to_string(&path).unwrap(), "print(1)\n");
    assert_eq!(rt.model.document.file_path, Some(path));
    assert_eq!(rt.model.document.file_type, FileType::Python);
}

#[test]
fn test_save_to_directory_reports_error() {
    let dir = TempDir::new().unwrap();
    let mut rt = test_runtime("abc", 0);
    rt.dispatch(AppMsg::SaveFileTo(dir.path().to_path_buf()));

    assert!(rt.model.document.file_path.is_none());
    assert_eq!(
        rt.model.popups.popups()[0].message,
        "Can not save: is a directory"
    );
}
