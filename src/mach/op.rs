use super::{Keysym, Stroke};
use crate::error;
use crate::lang::{Condition, Error, Fields, Line, Word};
use regex::Regex;
use std::str::FromStr;

type Result<T> = std::result::Result<T, Error>;

thread_local!(
    static MOVE_WINDOW: Regex = Regex::new(r"^'(.*)',([\s\d]+),([\s\d]+)$").unwrap();
);

/// ## Decoded command
///
/// Each line is decoded when it is reached. Text fields are kept raw;
/// the runtime expands them at execution time.
///
/// For example: `Move 10 20` decodes to `Motion(10, 20)` and
/// `Set n ${n} + 1` decodes to `Set("n", "${n} + 1")`.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// Blank, comment, or nothing to do.
    Nop,

    // *** Registers and files
    /// Store expanded text, or count when the name ends in `++`/`--`.
    Set(String, String),
    FileOpen(String, String),
    FileReadAll(String, String),
    FileLength(String, String),

    // *** Console and timing
    EndL,
    In(String, String),
    Preg(String),
    Print(String),
    Delay(u64),
    USleep(u64),
    MouseDelay(u64),
    KeyDelay(u64),
    Exec(String),

    // *** Branch control
    End,
    If(Condition),
    EndIf,
    Goto(String),
    /// A bare word that may name a label.
    Call(String),
    Return,
    Break,
    Restart,

    // *** Emission and windows
    Button(u32, bool),
    Click,
    Motion(i32, i32),
    RelativeMotion(i32, i32),
    Keycode(u32, bool),
    Keysym(Keysym, Stroke),
    Send(String),
    MoveWindow(String, i32, i32),
    Focus(String),
}

impl Op {
    pub fn decode(line: &Line) -> Result<Op> {
        let mut fields = line.fields();
        let first = match fields.next() {
            Some(first) => first,
            None => return Ok(Op::Nop),
        };
        if first.starts_with('#') {
            return Ok(Op::Nop);
        }
        let word = match Word::from_string(first) {
            Some(word) => word,
            None => return Ok(Op::Call(first.to_string())),
        };
        let f = &mut fields;
        use Word::*;
        Ok(match word {
            End => Op::End,
            EndL => Op::EndL,
            Set => {
                let dest = field(f, "EXPECTED REGISTER")?;
                Op::Set(dest, f.rest().to_string())
            }
            FileOpen => {
                let handle = field(f, "EXPECTED HANDLE")?;
                Op::FileOpen(handle, f.rest().to_string())
            }
            FileReadAll => Op::FileReadAll(
                field(f, "EXPECTED HANDLE")?,
                field(f, "EXPECTED REGISTER")?,
            ),
            FileLength => Op::FileLength(
                field(f, "EXPECTED HANDLE")?,
                field(f, "EXPECTED REGISTER")?,
            ),
            In => {
                let reg = field(f, "EXPECTED REGISTER")?;
                Op::In(reg, f.rest().to_string())
            }
            If => Op::If(Condition::from_fields(f)),
            EndIf => Op::EndIf,
            Preg => Op::Preg(f.next().unwrap_or("").to_string()),
            Delay => Op::Delay(number(f)?),
            SetMouseDelay => Op::MouseDelay(number(f)?),
            SetKeyPressDelay => Op::KeyDelay(number(f)?),
            USleep => Op::USleep(number(f)?),
            Print => Op::Print(f.rest().to_string()),
            Restart => Op::Restart,
            Return => Op::Return,
            Break => Op::Break,
            Goto => Op::Goto(field(f, "EXPECTED LABEL")?),
            ButtonPress => Op::Button(number(f)?, true),
            ButtonRelease => Op::Button(number(f)?, false),
            Down => Op::Button(1, true),
            Up => Op::Button(1, false),
            Click => Op::Click,
            Move | MotionNotify => Op::Motion(number(f)?, number(f)?),
            RelativeMove => Op::RelativeMotion(number(f)?, number(f)?),
            KeyCodePress => Op::Keycode(number(f)?, true),
            KeyCodeRelease => Op::Keycode(number(f)?, false),
            KeySym => Op::Keysym(Keysym::Code(number(f)?), Stroke::Tap),
            KeySymPress => Op::Keysym(Keysym::Code(number(f)?), Stroke::Press),
            KeySymRelease => Op::Keysym(Keysym::Code(number(f)?), Stroke::Release),
            KeyStr => Op::Keysym(Keysym::Name(field(f, "EXPECTED KEY")?), Stroke::Tap),
            KeyStrPress => Op::Keysym(Keysym::Name(field(f, "EXPECTED KEY")?), Stroke::Press),
            KeyStrRelease => Op::Keysym(
                Keysym::Name(field(f, "EXPECTED KEY")?),
                Stroke::Release,
            ),
            Send => Op::Send(f.raw().to_string()),
            Exec => Op::Exec(f.raw().to_string()),
            MoveWindow => move_window(f.rest())?,
            Focus => {
                let name = f.rest();
                if name.chars().count() < 3 {
                    Op::Nop
                } else {
                    Op::Focus(name.to_string())
                }
            }
        })
    }
}

fn field(fields: &mut Fields, msg: &str) -> Result<String> {
    match fields.next() {
        Some(s) => Ok(s.to_string()),
        None => Err(error!(SyntaxError; msg)),
    }
}

fn number<T: FromStr>(fields: &mut Fields) -> Result<T> {
    match fields.next() {
        Some(s) => s
            .parse::<T>()
            .map_err(|_| error!(SyntaxError; &format!("EXPECTED NUMBER, FOUND {}", s))),
        None => Err(error!(SyntaxError; "EXPECTED NUMBER")),
    }
}

/// `'name',x,y`; anything else is ignored.
fn move_window(s: &str) -> Result<Op> {
    let caps = match MOVE_WINDOW.with(|re| re.captures(s).map(|c| {
        (c[1].to_string(), c[2].to_string(), c[3].to_string())
    })) {
        Some(caps) => caps,
        None => return Ok(Op::Nop),
    };
    let (name, x, y) = caps;
    let x = number(&mut Fields::new(&x))?;
    let y = number(&mut Fields::new(&y))?;
    Ok(Op::MoveWindow(name, x, y))
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Op::*;
        match self {
            Nop => write!(f, "NOP"),
            Set(d, v) => write!(f, "SET({}, {})", d, v),
            FileOpen(h, p) => write!(f, "FILEOPEN({}, {})", h, p),
            FileReadAll(h, r) => write!(f, "FILEREADALL({}, {})", h, r),
            FileLength(h, r) => write!(f, "FILELENGTH({}, {})", h, r),
            EndL => write!(f, "ENDL"),
            In(r, p) => write!(f, "IN({}, {})", r, p),
            Preg(r) => write!(f, "PREG({})", r),
            Print(s) => write!(f, "PRINT({})", s),
            Delay(n) => write!(f, "DELAY({})", n),
            USleep(n) => write!(f, "USLEEP({})", n),
            MouseDelay(n) => write!(f, "MOUSEDELAY({})", n),
            KeyDelay(n) => write!(f, "KEYDELAY({})", n),
            Exec(s) => write!(f, "EXEC({})", s),
            End => write!(f, "END"),
            If(c) => write!(f, "IF({})", c),
            EndIf => write!(f, "ENDIF"),
            Goto(l) => write!(f, "GOTO({})", l),
            Call(l) => write!(f, "CALL({})", l),
            Return => write!(f, "RETURN"),
            Break => write!(f, "BREAK"),
            Restart => write!(f, "RESTART"),
            Button(b, p) => write!(f, "BUTTON({}, {})", b, p),
            Click => write!(f, "CLICK"),
            Motion(x, y) => write!(f, "MOTION({}, {})", x, y),
            RelativeMotion(x, y) => write!(f, "RELATIVEMOTION({}, {})", x, y),
            Keycode(c, p) => write!(f, "KEYCODE({}, {})", c, p),
            Keysym(k, s) => write!(f, "KEYSYM({}, {:?})", k, s),
            Send(s) => write!(f, "SEND({})", s),
            MoveWindow(n, x, y) => write!(f, "MOVEWINDOW({}, {}, {})", n, x, y),
            Focus(s) => write!(f, "FOCUS({})", s),
        }
    }
}
