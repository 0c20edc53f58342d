//! # MASIC
//!
//! `masic <INPUT> [OUTPUT]` compiles a MASIC program to Maker Forth.

fn main() {
    masic::term::main();
}
