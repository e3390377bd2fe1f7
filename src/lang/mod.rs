/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of TMLX source.
The output is one raw instruction per source line with its jump targets
still written as labels. Linking and optimization happen in `mach`.

*/

#[macro_use]
mod error;
mod color;
mod dialect;
mod lex;
mod parse;

pub mod ast;
pub mod token;

pub use color::Color;
pub use dialect::{Dialect, Strictness, Vocabulary};
pub use error::{Error, ErrorCode};
pub use lex::{lex, BlockComment};
pub use parse::{parse, Parsed};

/// Zero based index of a source line. Every source line is one instruction.
pub type LineIndex = usize;

/// Status reported by `exit` or by walking off the canvas.
pub type ExitStatus = u32;

#[cfg(test)]
mod tests;
