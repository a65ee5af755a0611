use super::var::{number_to_string, Var};

/// Guards against registers that interpolate themselves.
const MAX_INTERPOLATIONS: usize = 1000;

/// ## Text expansion
///
/// Applied to free text before it is used. In order: the escapes `\n`,
/// `\t` and `\r`, hex byte literals `0xNN`, register interpolation
/// `${name}`, then folding of `+`/`-` arithmetic when the whole string
/// is nothing but numbers.
///
/// ```
/// use macroplay::mach::{expand, Var};
/// let mut vars = Var::new();
/// vars.store("x", "5".to_string());
/// assert_eq!(expand("${x} + 3", &vars), "8");
/// assert_eq!(expand("0x41${x}", &vars), "A5");
/// ```
pub fn expand(s: &str, vars: &Var) -> String {
    let s = escapes(s);
    let s = hex_bytes(&s);
    let s = interpolate(&s, vars);
    match fold(&s) {
        Some(n) => number_to_string(n),
        None => s,
    }
}

fn escapes(s: &str) -> String {
    s.replace("\\n", "\n")
        .replace("\\t", "\t")
        .replace("\\r", "\r")
}

/// `0x` plus the two characters after it become a single character.
/// Output is not rescanned.
fn hex_bytes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(found) = rest.find("0x") {
        out.push_str(&rest[..found]);
        let window: String = rest[found..].chars().take(4).collect();
        let digits: String = window
            .chars()
            .skip(2)
            .take_while(|c| c.is_ascii_hexdigit())
            .collect();
        match u32::from_str_radix(&digits, 16)
            .ok()
            .and_then(std::char::from_u32)
        {
            Some(ch) => {
                out.push(ch);
                rest = &rest[found + window.len()..];
            }
            None => {
                out.push_str("0x");
                rest = &rest[found + 2..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Replaces the first `${name}` until none remain, so register values
/// that themselves hold `${...}` are expanded too. A marker without a
/// closing brace takes the rest of the string as the name.
fn interpolate(s: &str, vars: &Var) -> String {
    let mut s = s.to_string();
    let mut count = 0;
    while let Some(start) = s.find("${") {
        if count == MAX_INTERPOLATIONS {
            break;
        }
        count += 1;
        let name_start = start + 2;
        let (name_end, end) = match s[name_start..].find('}') {
            Some(len) => (name_start + len, name_start + len + 1),
            None => (s.len(), s.len()),
        };
        let value = vars.fetch(&s[name_start..name_end]).to_string();
        s.replace_range(start..end, &value);
    }
    s
}

/// Left to right sum of `+`/`-` separated real numbers. None unless the
/// entire string is consumed.
fn fold(s: &str) -> Option<f64> {
    let mut scan = Scan {
        bytes: s.as_bytes(),
        pos: 0,
        text: s,
    };
    scan.spaces();
    let mut sum = scan.number()?;
    loop {
        scan.spaces();
        let negative = match scan.peek() {
            None => return Some(sum),
            Some(b'+') => false,
            Some(b'-') => true,
            Some(_) => return None,
        };
        scan.pos += 1;
        scan.spaces();
        let n = scan.number()?;
        if negative {
            sum -= n
        } else {
            sum += n
        }
    }
}

struct Scan<'a> {
    bytes: &'a [u8],
    pos: usize,
    text: &'a str,
}

impl<'a> Scan<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn spaces(&mut self) {
        while self.peek() == Some(b' ') {
            self.pos += 1;
        }
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
        self.pos - start
    }

    fn number(&mut self) -> Option<f64> {
        let start = self.pos;
        if let Some(b'+') | Some(b'-') = self.peek() {
            self.pos += 1;
        }
        let mut digits = self.digits();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            digits += self.digits();
        }
        if digits == 0 {
            return None;
        }
        if let Some(b'e') | Some(b'E') = self.peek() {
            let mark = self.pos;
            self.pos += 1;
            if let Some(b'+') | Some(b'-') = self.peek() {
                self.pos += 1;
            }
            if self.digits() == 0 {
                self.pos = mark;
            }
        }
        self.text[start..self.pos].parse::<f64>().ok()
    }
}
