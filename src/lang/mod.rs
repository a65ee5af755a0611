/*!
# Rust Language Module

This Rust module loads macro scripts and takes their lines apart.

*/

/// Index of a kept script line.
pub type Address = usize;
/// Script line an error refers to, if any.
pub type LineIndex = Option<Address>;

#[macro_use]
mod error;
mod condition;
mod line;
mod script;
mod word;

pub use condition::Condition;
pub use condition::Operator;
pub use error::Error;
pub use error::ErrorCode;
pub use line::Fields;
pub use line::Line;
pub use script::Script;
pub use word::Word;

#[cfg(test)]
mod tests;
