mod common;
use common::*;

fn files() -> Box<MemoryFiles> {
    Box::new(
        MemoryFiles::default()
            .with("/tmp/names.txt", "alice bob")
            .with("/tmp/empty.txt", ""),
    )
}

#[test]
fn test_open_length_read() {
    let mut r = runtime(
        r#"
Set dir /tmp
FileOpen names ${dir}/names.txt
FileLength names n
FileReadAll names text
Print ${n}:${text}
"#,
    )
    .with_file_system(files());
    assert_eq!(exec(&mut r), "9:alice bob");
}

#[test]
fn test_length_folds_in_arithmetic() {
    let mut r = runtime(
        "FileOpen f /tmp/names.txt\nFileLength f n\nSet m ${n} + 1\nPreg m",
    )
    .with_file_system(files());
    assert_eq!(exec(&mut r), "10\n");
}

#[test]
fn test_reopen_replaces_handle() {
    let mut r = runtime(
        "FileOpen f /tmp/names.txt\nFileOpen f /tmp/empty.txt\nFileLength f n\nPreg n",
    )
    .with_file_system(files());
    assert_eq!(exec(&mut r), "0\n");
}

#[test]
fn test_missing_file_keeps_running() {
    let mut r = runtime(
        "FileOpen f /tmp/nope.txt\nFileReadAll f text\nPrint [${text}]",
    )
    .with_file_system(files());
    assert_eq!(exec(&mut r), "[]");
}

#[test]
fn test_unknown_handle_keeps_running() {
    let mut r = runtime("FileLength nope n\nPrint ok").with_file_system(files());
    assert_eq!(exec(&mut r), "ok");
}
