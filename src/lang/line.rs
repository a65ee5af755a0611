use super::{Condition, Word};
use regex::Regex;

thread_local!(
    static TRAILING_IF: Regex = Regex::new(r"^(.*) if (.*)$").unwrap();
);

/// ## One line of a macro script
///
/// Surrounding whitespace is removed when the line is created.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    text: String,
}

impl Line {
    pub fn new(s: &str) -> Line {
        Line {
            text: s.trim().to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_comment(&self) -> bool {
        self.text.starts_with('#')
    }

    /// First whitespace delimited token, or "" for an empty line.
    pub fn first(&self) -> &str {
        self.fields().next().unwrap_or("")
    }

    pub fn word(&self) -> Option<Word> {
        Word::from_string(self.first())
    }

    pub fn is_end_if(&self) -> bool {
        self.word() == Some(Word::EndIf)
    }

    pub fn fields(&self) -> Fields<'_> {
        Fields::new(&self.text)
    }

    /// Splits `<command> if <lhs> <op> <rhs>` into the command and its condition.
    /// The last ` if ` on the line wins. A condition that does not parse
    /// yields a condition that never holds.
    pub fn trailing_if(&self) -> Option<(Line, Condition)> {
        TRAILING_IF.with(|re| {
            let caps = re.captures(&self.text)?;
            let command = Line::new(&caps[1]);
            let condition = Condition::parse(&caps[2]).unwrap_or_default();
            Some((command, condition))
        })
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// ## Cursor over the fields of a line
///
/// Commands read as many whitespace separated fields as they need and
/// may take whatever remains as free text.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    rest: &'a str,
}

impl<'a> Fields<'a> {
    pub fn new(s: &'a str) -> Fields<'a> {
        Fields { rest: s }
    }

    /// Remainder after the consumed fields with the single separating
    /// whitespace character removed.
    pub fn raw(&self) -> &'a str {
        let mut chars = self.rest.chars();
        match chars.next() {
            Some(ch) if ch.is_whitespace() => chars.as_str(),
            _ => self.rest,
        }
    }

    /// Remainder after the consumed fields, trimmed.
    pub fn rest(&self) -> &'a str {
        self.rest.trim()
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let s = self.rest.trim_start();
        if s.is_empty() {
            self.rest = s;
            return None;
        }
        let end = s.find(char::is_whitespace).unwrap_or_else(|| s.len());
        let (field, rest) = s.split_at(end);
        self.rest = rest;
        Some(field)
    }
}
