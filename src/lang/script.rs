use super::{Address, Line};
use std::collections::HashMap;

/// ## Loaded macro script
///
/// Blank and comment lines are dropped while loading so every
/// address refers to a kept line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    lines: Vec<Line>,
    labels: HashMap<String, Address>,
    entry: Option<Address>,
}

impl Script {
    pub fn new() -> Script {
        Script::default()
    }

    pub fn load_str(text: &str) -> Script {
        let mut script = Script::new();
        for line in text.lines() {
            script.push(line);
        }
        script
    }

    /// Appends one source line, indexing any declaration it carries.
    pub fn push(&mut self, s: &str) {
        let line = Line::new(s);
        if line.is_empty() || line.is_comment() {
            return;
        }
        let index = self.lines.len();
        let mut fields = line.fields();
        match fields.next() {
            Some("label") | Some("function") => {
                if let Some(name) = fields.next() {
                    self.labels.insert(name.to_string(), index + 1);
                }
            }
            Some("entry") | Some("main") => self.entry = Some(index),
            _ => {}
        }
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, addr: Address) -> Option<&Line> {
        self.lines.get(addr)
    }

    pub fn lines(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    pub fn label(&self, name: &str) -> Option<Address> {
        self.labels.get(name).copied()
    }

    pub fn labels(&self) -> &HashMap<String, Address> {
        &self.labels
    }

    pub fn entry(&self) -> Address {
        self.entry.unwrap_or(0)
    }

    /// First line at or after `addr` that closes an `If` block.
    pub fn next_end_if(&self, addr: Address) -> Option<Address> {
        self.lines
            .iter()
            .enumerate()
            .skip(addr)
            .find(|(_, line)| line.is_end_if())
            .map(|(index, _)| index)
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
