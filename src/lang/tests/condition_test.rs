use super::*;

#[test]
fn test_parse_with_spaces_in_operands() {
    let c = Condition::parse("hello world like h.* w.*").unwrap();
    assert_eq!(c.lhs, "hello world");
    assert_eq!(c.op, Operator::Like);
    assert_eq!(c.rhs, "h.* w.*");
}

#[test]
fn test_parse_rejects_missing_operator() {
    assert_eq!(Condition::parse("a equals b"), None);
}

#[test]
fn test_from_fields() {
    let l = Line::new("If ${x} not 3 trailing");
    let mut fields = l.fields();
    fields.next();
    let c = Condition::from_fields(fields);
    assert_eq!(c, Condition::new("${x}", "not", "3"));
}

#[test]
fn test_from_fields_missing() {
    let l = Line::new("If");
    let mut fields = l.fields();
    fields.next();
    let c = Condition::from_fields(fields);
    assert_eq!(c.op, Operator::Unknown(String::new()));
}

#[test]
fn test_operator_is_case_sensitive() {
    assert_eq!(Operator::from_str("IS"), Operator::Unknown("IS".to_string()));
}
