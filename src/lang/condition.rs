use regex::Regex;

thread_local!(
    static COMPARISON: Regex = Regex::new(r"^(.*) (is|not|like) (.*)$").unwrap();
);

/// ## Comparison operators
#[derive(Debug, Clone, PartialEq)]
pub enum Operator {
    Is,
    Not,
    Like,
    Unknown(String),
}

impl Operator {
    pub fn from_str(s: &str) -> Operator {
        match s {
            "is" => Operator::Is,
            "not" => Operator::Not,
            "like" => Operator::Like,
            _ => Operator::Unknown(s.to_string()),
        }
    }
}

impl Default for Operator {
    fn default() -> Operator {
        Operator::Unknown(String::new())
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Operator::Is => write!(f, "is"),
            Operator::Not => write!(f, "not"),
            Operator::Like => write!(f, "like"),
            Operator::Unknown(s) => write!(f, "{}", s),
        }
    }
}

/// ## `lhs OP rhs`
///
/// Operands are kept as written; expansion happens when the
/// condition is evaluated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Condition {
    pub lhs: String,
    pub op: Operator,
    pub rhs: String,
}

impl Condition {
    pub fn new(lhs: &str, op: &str, rhs: &str) -> Condition {
        Condition {
            lhs: lhs.to_string(),
            op: Operator::from_str(op),
            rhs: rhs.to_string(),
        }
    }

    /// Free form condition as found after a trailing `if`. Operands may
    /// contain spaces; the last operator on the line splits them.
    pub fn parse(s: &str) -> Option<Condition> {
        COMPARISON.with(|re| {
            let caps = re.captures(s)?;
            Some(Condition::new(&caps[1], &caps[2], &caps[3]))
        })
    }

    /// Condition of an `If` line: three single word fields.
    /// Missing fields are empty.
    pub fn from_fields<'a, T: Iterator<Item = &'a str>>(mut fields: T) -> Condition {
        let lhs = fields.next().unwrap_or("");
        let op = fields.next().unwrap_or("");
        let rhs = fields.next().unwrap_or("");
        Condition::new(lhs, op, rhs)
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}
