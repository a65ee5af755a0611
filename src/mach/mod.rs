/*!
## Rust Machine Module

This Rust module runs macro scripts. It holds the registers, expands
text, evaluates conditions, and steps the program counter through
a `Script` one line at a time.

*/

pub use crate::lang::Address;

mod emission;
mod evaluate;
mod expand;
mod files;
mod op;
mod runtime;
mod settings;
mod stack;
mod var;

pub use emission::Backend;
pub use emission::Emission;
pub use emission::Keysym;
pub use emission::Stroke;
pub use emission::WindowId;
pub use evaluate::compare;
pub use evaluate::evaluate;
pub use expand::expand;
pub use files::FileSystem;
pub use files::Files;
pub use files::OpenFile;
pub use files::StdFileSystem;
pub use op::Op;
pub use runtime::Event;
pub use runtime::Runtime;
pub use settings::Settings;
pub use settings::DEFAULT_DELAY;
pub use settings::DEFAULT_MAX_DEPTH;
pub use stack::Stack;
pub use var::number_to_string;
pub use var::Var;
pub use var::BREAK_TARGET;

#[cfg(test)]
mod tests;
