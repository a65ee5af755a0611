mod common;
use common::*;
use macroplay::lang::Script;
use macroplay::mach::{Runtime, Settings, Var};

const SUBROUTINES: &str = r#"
# three levels of calls
label one
Print 1>
Goto two
Print <1
Return
label two
Print 2>
Goto three
Print <2
Return
label three
Print 3>
Return
main
Goto one
Print done
End
"#;

#[test]
fn test_entry_line_is_first_executed() {
    let mut r = runtime("Print no\nentry\nPrint yes");
    assert_eq!(exec(&mut r), "yes");
}

#[test]
fn test_label_resolution_is_idempotent() {
    let a = Script::load_str(SUBROUTINES);
    let b = Script::load_str(SUBROUTINES);
    assert_eq!(a.labels(), b.labels());
    assert_eq!(a.entry(), b.entry());
    assert_eq!(a, b);
}

#[test]
fn test_counter_from_absent_register() {
    let mut r = runtime("Set foo++\nPreg foo\nPreg foo");
    assert_eq!(exec(&mut r), "1\n1\n");
}

#[test]
fn test_like_publishes_captures() {
    let mut r = runtime("Print matched if abc123 like ([a-z]+)([0-9]+)");
    assert_eq!(exec(&mut r), "matched");
    assert_eq!(r.vars().fetch("0"), "abc123");
    assert_eq!(r.vars().fetch("1"), "abc");
    assert_eq!(r.vars().fetch("2"), "123");
}

#[test]
fn test_nested_calls_resume_after_goto() {
    let mut r = runtime(SUBROUTINES);
    assert_eq!(exec(&mut r), "1>2>3><2<1done");
}

#[test]
fn test_call_beyond_max_depth_is_fatal() {
    let settings = Settings::default().with_max_depth(2);
    let mut r = Runtime::new(Script::load_str(SUBROUTINES), settings, Var::new());
    let s = exec(&mut r);
    assert_eq!(s, "1>2>CALL STACK TOO DEEP IN 7; LIMIT 2\n");
    assert!(r.is_stopped());
}

#[test]
fn test_interpolated_arithmetic() {
    let mut r = runtime("Set x 5\nPrint ${x} + 3");
    assert_eq!(exec(&mut r), "8");
}

#[test]
fn test_if_block_true_and_false() {
    let mut r = runtime("If a is a\nPrint body\nEndIf\nPrint -");
    assert_eq!(exec(&mut r), "body-");
    let mut r = runtime("If a is b\nPrint body\nEndIf\nPrint -");
    assert_eq!(exec(&mut r), "-");
}

#[test]
fn test_break_returns_to_first_call() {
    let mut r = runtime(
        r#"
main
Goto first
Print after first
End
label first
Goto second
Print never
label second
Goto third
label third
Break
"#,
    );
    assert_eq!(exec(&mut r), "after first");
    assert_eq!(r.depth(), 0);
}
