use super::{expand, Var};
use crate::lang::{Condition, Operator};
use regex::Regex;
use tracing::warn;

/// Expands both operands of `condition` then compares them.
pub fn evaluate(condition: &Condition, vars: &mut Var) -> bool {
    let lhs = expand(&condition.lhs, vars);
    let rhs = expand(&condition.rhs, vars);
    compare(&lhs, &condition.op, &rhs, vars)
}

/// ## Condition evaluation
///
/// `is` and `not` compare text. `like` requires `lhs` to match the
/// pattern `rhs` in full; on success the match and its groups are
/// written to the capture registers. Unknown operators never hold.
pub fn compare(lhs: &str, op: &Operator, rhs: &str, vars: &mut Var) -> bool {
    match op {
        Operator::Is => lhs == rhs,
        Operator::Not => lhs != rhs,
        Operator::Like => {
            let re = match Regex::new(&format!("^(?:{})$", rhs)) {
                Ok(re) => re,
                Err(error) => {
                    warn!("bad pattern '{}': {}", rhs, error);
                    return false;
                }
            };
            match re.captures(lhs) {
                Some(caps) => {
                    vars.store_captures(&caps);
                    true
                }
                None => false,
            }
        }
        Operator::Unknown(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn like(lhs: &str, rhs: &str, vars: &mut Var) -> bool {
        compare(lhs, &Operator::Like, rhs, vars)
    }

    #[test]
    fn test_is_and_not() {
        let mut v = Var::new();
        assert!(compare("a", &Operator::Is, "a", &mut v));
        assert!(!compare("a", &Operator::Is, "b", &mut v));
        assert!(compare("a", &Operator::Not, "b", &mut v));
        assert!(!compare("a", &Operator::Not, "a", &mut v));
    }

    #[test]
    fn test_like_captures() {
        let mut v = Var::new();
        assert!(like("abc123", "([a-z]+)([0-9]+)", &mut v));
        assert_eq!(v.fetch("0"), "abc123");
        assert_eq!(v.fetch("1"), "abc");
        assert_eq!(v.fetch("2"), "123");
    }

    #[test]
    fn test_like_is_anchored() {
        let mut v = Var::new();
        assert!(!like("xabc", "abc", &mut v));
        assert!(!like("abcx", "abc", &mut v));
        assert!(like("abc", "a|abc", &mut v));
    }

    #[test]
    fn test_failed_like_keeps_captures() {
        let mut v = Var::new();
        assert!(like("key=value", "(\\w+)=(\\w+)", &mut v));
        assert!(!like("nothing", "(\\d+)", &mut v));
        assert_eq!(v.fetch("1"), "key");
        assert_eq!(v.fetch("2"), "value");
    }

    #[test]
    fn test_bad_pattern_is_false() {
        let mut v = Var::new();
        assert!(!like("(", "(", &mut v));
    }

    #[test]
    fn test_unknown_operator() {
        let mut v = Var::new();
        let op = Operator::Unknown("equals".to_string());
        assert!(!compare("a", &op, "a", &mut v));
    }

    #[test]
    fn test_evaluate_expands_operands() {
        let mut v = Var::new();
        v.store("n", "4".to_string());
        assert!(evaluate(&Condition::new("${n}", "is", "2 + 2"), &mut v));
    }
}
