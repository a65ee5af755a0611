//! # macroplay
//!
//! Replays mouse and keyboard macros written in a small line-oriented
//! script language.
//!
//! Install with `cargo install macroplay` then run a script.
//! ```text
//! $ macroplay demo.txt
//! ```
//!
//! Scripts set registers, branch on conditions, call labelled
//! subroutines, and send pointer and key events to a display. The
//! [tutorial](_Introduction/index.html) is the place to start.
//!
//! The library is split the same way as the executable:
//! [`lang`] reads script text, [`mach`] runs it and hands every outward
//! effect back as an [`Event`](mach::Event), and [`term`] services those
//! events from a terminal.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
