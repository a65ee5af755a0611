use super::*;

#[test]
fn test_lf() {
    let l = Line::new("Print hello\n");
    assert_eq!(l.as_str(), "Print hello");
}

#[test]
fn test_crlf() {
    let l = Line::new("  End\r\n");
    assert_eq!(l.word(), Some(Word::End));
}

#[test]
fn test_fields_and_rest() {
    let l = Line::new("Set  greeting   hello  world ");
    let mut f = l.fields();
    assert_eq!(f.next(), Some("Set"));
    assert_eq!(f.next(), Some("greeting"));
    assert_eq!(f.rest(), "hello  world");
}

#[test]
fn test_raw_keeps_inner_spacing() {
    let l = Line::new("Send a  b");
    let mut f = l.fields();
    f.next();
    assert_eq!(f.raw(), "a  b");
}

#[test]
fn test_fields_exhausted() {
    let l = Line::new("Return");
    let mut f = l.fields();
    assert_eq!(f.next(), Some("Return"));
    assert_eq!(f.next(), None);
    assert_eq!(f.rest(), "");
}

#[test]
fn test_unknown_first_word() {
    let l = Line::new("greet");
    assert_eq!(l.word(), None);
    assert_eq!(l.first(), "greet");
}

#[test]
fn test_trailing_if() {
    let l = Line::new("Print yes if ${a} is 1");
    let (command, condition) = l.trailing_if().unwrap();
    assert_eq!(command.as_str(), "Print yes");
    assert_eq!(condition, Condition::new("${a}", "is", "1"));
}

#[test]
fn test_trailing_if_last_one_wins() {
    let l = Line::new("Print what if this if x not y");
    let (command, condition) = l.trailing_if().unwrap();
    assert_eq!(command.as_str(), "Print what if this");
    assert_eq!(condition.op, Operator::Not);
}

#[test]
fn test_trailing_if_without_comparison_never_holds() {
    let l = Line::new("Print what if you like");
    let (_, condition) = l.trailing_if().unwrap();
    assert_eq!(condition, Condition::default());
}

#[test]
fn test_block_if_is_not_trailing() {
    assert_eq!(Line::new("If a is a").trailing_if(), None);
}
