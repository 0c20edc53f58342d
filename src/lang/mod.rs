/*!
# Rust Language Module

This Rust module provides scanning of MASIC source lines.

There is no token stream. A [`Cursor`](struct.Cursor.html) walks one
line of text and the compiler asks it for keywords, numbers,
identifiers and parenthesized groups as it goes.

*/

#[macro_use]
mod error;
mod cursor;

pub use cursor::Cursor;
pub use error::Error;
pub use error::ErrorCode;

/// Byte range within a source line.
pub type Column = std::ops::Range<usize>;

/// BASIC line numbers and numeric literals are unsigned cells.
pub type LineNumber = u32;
