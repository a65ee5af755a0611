use crate::lang::Error;
use crate::mach::{Backend, Keysym, WindowId};
use std::io::Write;

type Result<T> = std::result::Result<T, Error>;

/// ## Dry run backend
///
/// Writes one line per emission instead of talking to a display.
/// Every window name is found; ids are handed out in order of first use.
pub struct TraceBackend<W: Write> {
    out: W,
    windows: Vec<String>,
}

impl<W: Write> TraceBackend<W> {
    pub fn new(out: W) -> TraceBackend<W> {
        TraceBackend {
            out,
            windows: vec![],
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: std::fmt::Arguments) -> Result<()> {
        self.out.write_fmt(args)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

fn updown(pressed: bool) -> &'static str {
    if pressed {
        "Press"
    } else {
        "Release"
    }
}

impl<W: Write> Backend for TraceBackend<W> {
    fn button(&mut self, button: u32, pressed: bool, delay: u64) -> Result<()> {
        self.line(format_args!("Button{}: {} +{}ms", updown(pressed), button, delay))
    }

    fn motion(&mut self, x: i32, y: i32, delay: u64) -> Result<()> {
        self.line(format_args!("Move: {} {} +{}ms", x, y, delay))
    }

    fn relative_motion(&mut self, dx: i32, dy: i32, delay: u64) -> Result<()> {
        self.line(format_args!("RelativeMove: {} {} +{}ms", dx, dy, delay))
    }

    fn keycode(&mut self, code: u32, pressed: bool, delay: u64) -> Result<()> {
        self.line(format_args!("KeyCode{}: {} +{}ms", updown(pressed), code, delay))
    }

    fn keysym(&mut self, sym: &Keysym, pressed: bool, delay: u64) -> Result<()> {
        self.line(format_args!("KeySym{}: {} +{}ms", updown(pressed), sym, delay))
    }

    fn text(&mut self, text: &str) -> Result<()> {
        self.line(format_args!("Send: {:?}", text))
    }

    fn find_window(&mut self, name: &str) -> Option<WindowId> {
        let index = match self.windows.iter().position(|w| w == name) {
            Some(index) => index,
            None => {
                self.windows.push(name.to_string());
                self.windows.len() - 1
            }
        };
        Some(WindowId(index as u64 + 1))
    }

    fn focus_window(&mut self, window: WindowId) -> Result<()> {
        self.line(format_args!("Focus: window {}", window.0))
    }

    fn move_window(&mut self, window: WindowId, x: i32, y: i32) -> Result<()> {
        self.line(format_args!("MoveWindow: window {} {} {}", window.0, x, y))
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
