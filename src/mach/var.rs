use regex::Captures;
use std::collections::HashMap;

/// Register holding the continuation `Break` returns to.
pub const BREAK_TARGET: &str = "SCS";

/// ## Register memory
///
/// Every register holds text. Numbers are parsed when needed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Var {
    vars: HashMap<String, String>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Missing registers read as the empty string.
    pub fn fetch(&self, name: &str) -> &str {
        match self.vars.get(name) {
            Some(val) => val.as_str(),
            None => "",
        }
    }

    pub fn store(&mut self, name: &str, value: String) {
        match self.vars.get_mut(name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(name.to_string(), value);
            }
        }
    }

    /// Handles the `name++` and `name--` destinations. Returns false
    /// when `dest` is a plain register name.
    pub fn count(&mut self, dest: &str) -> bool {
        let (name, step) = if let Some(name) = dest.strip_suffix("++") {
            (name, 1.0)
        } else if let Some(name) = dest.strip_suffix("--") {
            (name, -1.0)
        } else {
            return false;
        };
        // The whole register must be a number. "3 apples" counts from 0.
        let value = self.fetch(name).trim().parse::<f64>().unwrap_or(0.0);
        self.store(name, number_to_string(value + step));
        true
    }

    /// Whole match goes to register "0", groups to "1", "2", ...
    /// Groups that did not take part in the match are stored empty.
    pub fn store_captures(&mut self, caps: &Captures) {
        for index in 0..caps.len() {
            let text = caps.get(index).map_or("", |m| m.as_str());
            self.store(&index.to_string(), text.to_string());
        }
    }

    pub fn iter(&self) -> std::collections::hash_map::Iter<'_, String, String> {
        self.vars.iter()
    }
}

/// Canonical text for a computed number. Integral values print in full
/// without a fraction. Everything else is rounded to 6 significant
/// digits and printed in plain decimal with trailing zeros dropped.
/// `-0` prints as `0`.
///
/// ```
/// use macroplay::mach::number_to_string;
/// assert_eq!(number_to_string(0.1 + 0.2), "0.3");
/// assert_eq!(number_to_string(1234567.0), "1234567");
/// ```
pub fn number_to_string(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if !n.is_finite() || (n.fract() == 0.0 && n.abs() < 1e15) {
        return format!("{}", n);
    }
    let rounded = format!("{:.5e}", n).parse::<f64>().unwrap_or(n);
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_is_empty() {
        let v = Var::new();
        assert_eq!(v.fetch("nope"), "");
    }

    #[test]
    fn test_increment_from_absent() {
        let mut v = Var::new();
        assert!(v.count("foo++"));
        assert_eq!(v.fetch("foo"), "1");
        assert!(v.count("foo++"));
        assert_eq!(v.fetch("foo"), "2");
    }

    #[test]
    fn test_decrement_real() {
        let mut v = Var::new();
        v.store("x", "2.5".to_string());
        assert!(v.count("x--"));
        assert_eq!(v.fetch("x"), "1.5");
    }

    #[test]
    fn test_count_garbage_is_zero() {
        let mut v = Var::new();
        v.store("x", "pickles".to_string());
        assert!(v.count("x--"));
        assert_eq!(v.fetch("x"), "-1");
        v.store("y", "3 apples".to_string());
        assert!(v.count("y++"));
        assert_eq!(v.fetch("y"), "1");
    }

    #[test]
    fn test_fractional_steps_stay_short() {
        let mut v = Var::new();
        v.store("x", "0.1".to_string());
        assert!(v.count("x++"));
        assert_eq!(v.fetch("x"), "1.1");
        v.store("x", "0.7".to_string());
        assert!(v.count("x--"));
        assert_eq!(v.fetch("x"), "-0.3");
    }

    #[test]
    fn test_plain_name_is_not_counted() {
        let mut v = Var::new();
        assert!(!v.count("x"));
        assert!(v.is_empty());
    }

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(8.0), "8");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(0.25), "0.25");
        assert_eq!(number_to_string(1000000.0), "1000000");
        assert_eq!(number_to_string(1234567.0), "1234567");
        assert_eq!(number_to_string(0.1 + 0.2), "0.3");
        assert_eq!(number_to_string(2.0 / 3.0), "0.666667");
        assert_eq!(number_to_string(-1.0 / 3.0), "-0.333333");
        assert_eq!(number_to_string(1234567.5), "1234570");
        assert_eq!(number_to_string(0.0000001), "0.0000001");
        assert_eq!(number_to_string(1.5), "1.5");
    }
}
