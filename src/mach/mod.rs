/*!
## Rust Machine Module

This Rust module compiles MASIC source into Maker Forth text.

*/

mod compile;
mod config;
mod function;
mod link;
mod program;
mod segment;
mod var;

pub use compile::Compiler;
pub use config::Config;
pub use function::Function;
pub use link::LabelState;
pub use link::Link;
pub use program::Program;
pub use program::Stats;
pub use segment::Segment;
pub use var::Kind;
pub use var::Symbols;
