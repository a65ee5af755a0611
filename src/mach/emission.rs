use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

/// A keysym given either by number or by name (`Return`, `a`, `F1`).
#[derive(Debug, Clone, PartialEq)]
pub enum Keysym {
    Code(u64),
    Name(String),
}

impl std::fmt::Display for Keysym {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Keysym::Code(n) => write!(f, "{}", n),
            Keysym::Name(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    Press,
    Release,
    /// Press, flush, release.
    Tap,
}

/// ## Input emission capability
///
/// Implemented outside the runtime by whatever talks to the display.
/// Coordinates arrive already scaled. Delays are in milliseconds.
pub trait Backend {
    fn button(&mut self, button: u32, pressed: bool, delay: u64) -> Result<()>;
    fn motion(&mut self, x: i32, y: i32, delay: u64) -> Result<()>;
    fn relative_motion(&mut self, dx: i32, dy: i32, delay: u64) -> Result<()>;
    fn keycode(&mut self, code: u32, pressed: bool, delay: u64) -> Result<()>;
    fn keysym(&mut self, sym: &Keysym, pressed: bool, delay: u64) -> Result<()>;
    /// Types each character, shifting where the keyboard needs it.
    fn text(&mut self, text: &str) -> Result<()>;
    fn find_window(&mut self, name: &str) -> Option<WindowId>;
    fn focus_window(&mut self, window: WindowId) -> Result<()>;
    fn move_window(&mut self, window: WindowId, x: i32, y: i32) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}

/// ## Values handed to the emission capability
#[derive(Debug, Clone, PartialEq)]
pub enum Emission {
    Button {
        button: u32,
        pressed: bool,
        delay: u64,
    },
    Motion {
        x: i32,
        y: i32,
        delay: u64,
    },
    RelativeMotion {
        dx: i32,
        dy: i32,
        delay: u64,
    },
    Keycode {
        code: u32,
        pressed: bool,
        delay: u64,
    },
    Keysym {
        sym: Keysym,
        stroke: Stroke,
        delay: u64,
    },
    Text(String),
    Focus(String),
    MoveWindow {
        name: String,
        x: i32,
        y: i32,
    },
    Flush,
}

impl Emission {
    /// A failed press abandons the rest of a tap.
    pub fn send(&self, backend: &mut dyn Backend) -> Result<()> {
        use Emission::*;
        match self {
            Button {
                button,
                pressed,
                delay,
            } => backend.button(*button, *pressed, *delay),
            Motion { x, y, delay } => backend.motion(*x, *y, *delay),
            RelativeMotion { dx, dy, delay } => backend.relative_motion(*dx, *dy, *delay),
            Keycode {
                code,
                pressed,
                delay,
            } => backend.keycode(*code, *pressed, *delay),
            Keysym { sym, stroke, delay } => match stroke {
                Stroke::Press => backend.keysym(sym, true, *delay),
                Stroke::Release => backend.keysym(sym, false, *delay),
                Stroke::Tap => {
                    backend.keysym(sym, true, *delay)?;
                    backend.flush()?;
                    backend.keysym(sym, false, *delay)
                }
            },
            Text(s) => backend.text(s),
            Focus(name) => match backend.find_window(name) {
                Some(window) => backend.focus_window(window),
                None => Err(error!(NoWindow; name)),
            },
            MoveWindow { name, x, y } => match backend.find_window(name) {
                Some(window) => backend.move_window(window, *x, *y),
                None => Err(error!(NoWindow; name)),
            },
            Flush => backend.flush(),
        }
    }
}

impl std::fmt::Display for Emission {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Emission::*;
        fn updown(pressed: &bool) -> &'static str {
            if *pressed {
                "Press"
            } else {
                "Release"
            }
        }
        match self {
            Button {
                button, pressed, ..
            } => write!(f, "Button{}: {}", updown(pressed), button),
            Motion { x, y, .. } => write!(f, "Move: {} {}", x, y),
            RelativeMotion { dx, dy, .. } => write!(f, "RelativeMove: {} {}", dx, dy),
            Keycode { code, pressed, .. } => write!(f, "KeyCode{}: {}", updown(pressed), code),
            Keysym { sym, stroke, .. } => match stroke {
                Stroke::Press => write!(f, "KeySymPress: {}", sym),
                Stroke::Release => write!(f, "KeySymRelease: {}", sym),
                Stroke::Tap => write!(f, "KeySym: {}", sym),
            },
            Text(s) => write!(f, "Send: {}", s),
            Focus(s) => write!(f, "Focus: {}", s),
            MoveWindow { name, x, y } => write!(f, "MoveWindow: {} {} {}", name, x, y),
            Flush => write!(f, "Flush"),
        }
    }
}
