use super::LineIndex;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line: LineIndex,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn line(&self) -> LineIndex {
        self.line
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    /// Fatal errors stop the runtime. Everything else is a diagnostic
    /// that abandons the current command only.
    pub fn is_fatal(&self) -> bool {
        self.is(ErrorCode::Interrupted)
            || self.is(ErrorCode::StackTooDeep)
            || self.is(ErrorCode::LineOutOfRange)
            || self.is(ErrorCode::IfWithoutEndIf)
    }

    pub fn in_line(self, line: LineIndex) -> Error {
        debug_assert!(self.line.is_none());
        Error { line, ..self }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    Interrupted = 1,
    StackTooDeep = 2,
    LineOutOfRange = 3,
    IfWithoutEndIf = 4,
    UndefinedLabel = 5,
    SyntaxError = 6,
    FileNotFound = 7,
    BadFileHandle = 8,
    NoKeycode = 9,
    NoWindow = 10,
    InternalError = 51,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "INTERRUPTED",
            2 => "CALL STACK TOO DEEP",
            3 => "LINE OUT OF RANGE",
            4 => "IF WITHOUT ENDIF",
            5 => "UNDEFINED LABEL",
            6 => "SYNTAX ERROR",
            7 => "FILE NOT FOUND",
            8 => "BAD FILE HANDLE",
            9 => "NO KEYCODE",
            10 => "NO WINDOW",
            51 => "INTERNAL ERROR",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line) = self.line {
            suffix.push_str(&format!(" {}", line));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            if suffix.is_empty() {
                write!(f, "MACRO ERROR {}", self.code)
            } else {
                write!(f, "MACRO ERROR {} IN{}", self.code, suffix)
            }
        } else if suffix.is_empty() {
            write!(f, "{}", code_str)
        } else {
            write!(f, "{} IN{}", code_str, suffix)
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        let msg = error.to_string();
        match error.kind() {
            std::io::ErrorKind::NotFound => error!(FileNotFound; &msg),
            _ => error!(InternalError; &msg),
        }
    }
}
