//! # MASIC
//!
//! Mako All-purpose Symbolic Instruction Code: a Tiny BASIC dialect
//! compiled in one pass to Maker Forth.
//!
//! ```
//! let forth = masic::compile("10 LET A = 2 + 3 * 4\n20 PRINT A\n30 END\n").unwrap();
//! assert_eq!(
//!     forth,
//!     ":var A\n\
//!      :include \"BasicLib.fs\"\n\
//!      : main \n\
//!      : line10 2 3 4 * + A ! \n\
//!      : line20 A @ print cr \n\
//!      : line30 halt \n\
//!      halt"
//! );
//! ```
//!
//! Declarations come first so they sit outside the entry word.
//!
//! Every source line is one statement, optionally prefixed by a line
//! number that becomes a jump target. Variables are declared the first
//! time they are referenced; arrays are declared by `DIM`.

pub mod lang;
pub mod mach;
pub mod term;

/// Compiles a whole MASIC program with the default target settings.
pub fn compile(source: &str) -> Result<String, lang::Error> {
    let mut program = mach::Program::new();
    program.compile(source)?;
    Ok(program.output().unwrap_or_default())
}
