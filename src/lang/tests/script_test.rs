use super::*;

const SCRIPT: &str = "
# greeting macro

Print one
label hello
    Print two
main
Print three
";

#[test]
fn test_blank_and_comment_lines_dropped() {
    let s = Script::load_str(SCRIPT);
    assert_eq!(s.len(), 5);
    assert_eq!(s.line(0).unwrap().as_str(), "Print one");
    assert_eq!(s.line(2).unwrap().as_str(), "Print two");
}

#[test]
fn test_label_targets_following_line() {
    let s = Script::load_str(SCRIPT);
    assert_eq!(s.label("hello"), Some(2));
    assert_eq!(s.label("Hello"), None);
}

#[test]
fn test_entry_marker() {
    let s = Script::load_str(SCRIPT);
    assert_eq!(s.entry(), 3);
}

#[test]
fn test_entry_defaults_to_zero() {
    let s = Script::load_str("Print a\nPrint b");
    assert_eq!(s.entry(), 0);
}

#[test]
fn test_function_and_entry_keywords() {
    let s = Script::load_str("function f\nReturn\nentry\nf");
    assert_eq!(s.label("f"), Some(1));
    assert_eq!(s.entry(), 2);
}

#[test]
fn test_duplicate_label_last_wins() {
    let s = Script::load_str("label a\nPrint 1\nlabel a\nPrint 2");
    assert_eq!(s.label("a"), Some(3));
}

#[test]
fn test_declarations_are_case_sensitive() {
    let s = Script::load_str("Label a\nMAIN\nPrint 1");
    assert_eq!(s.label("a"), None);
    assert_eq!(s.entry(), 0);
}

#[test]
fn test_loading_twice_is_identical() {
    let a = Script::load_str(SCRIPT);
    let b = Script::load_str(SCRIPT);
    assert_eq!(a.labels(), b.labels());
    assert_eq!(a.entry(), b.entry());
}

#[test]
fn test_grows_past_initial_capacity() {
    let text: String = (0..1000).map(|n| format!("Print {}\n", n)).collect();
    let s = Script::load_str(&text);
    assert_eq!(s.len(), 1000);
    assert_eq!(s.line(0).unwrap().as_str(), "Print 0");
    assert_eq!(s.line(999).unwrap().as_str(), "Print 999");
}

#[test]
fn test_next_end_if() {
    let s = Script::load_str("If a is b\nPrint x\nendif\nEndIf");
    assert_eq!(s.next_end_if(0), Some(2));
    assert_eq!(s.next_end_if(3), Some(3));
    assert_eq!(s.next_end_if(4), None);
}
