#![allow(dead_code)]

use masic::lang::{Error, ErrorCode};

pub const HEADER: &str = ":include \"BasicLib.fs\"\n: main \n";

pub fn compile(source: &str) -> String {
    match masic::compile(source) {
        Ok(s) => s,
        Err(e) => panic!("{} : {:?}", e, e),
    }
}

pub fn compile_err(source: &str) -> Error {
    match masic::compile(source) {
        Ok(s) => panic!("expected an error, got {:?}", s),
        Err(e) => e,
    }
}

pub fn code(source: &str) -> ErrorCode {
    compile_err(source).code()
}

/// Directive lines ahead of the header.
pub fn data(output: &str) -> Vec<&str> {
    output
        .lines()
        .take_while(|l| l.starts_with(":var") || l.starts_with(":array"))
        .collect()
}

/// The code block opened for `line_number`, without its prefix.
pub fn block(output: &str, line_number: u32) -> String {
    let prefix = format!(": line{} ", line_number);
    for line in output.lines() {
        if let Some(body) = line.strip_prefix(prefix.as_str()) {
            return body.to_string();
        }
    }
    panic!("no block for line {} in {:?}", line_number, output);
}
