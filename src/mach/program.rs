use super::{Compiler, Config};
use crate::lang::{Cursor, Error};

type Result<T> = std::result::Result<T, Error>;

/// ## Program assembler
///
/// Drives one pass over the source. The result is the data segment, then
/// the header opening the entry word, then the code segment terminated
/// by `halt`. Declarations must stay outside the entry word.

#[derive(Debug, Default)]
pub struct Program {
    config: Config,
    comp: Compiler,
    lines: usize,
    compiled: bool,
}

/// Counters from the last successful compilation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub lines: usize,
    pub symbols: usize,
    pub prototypes: usize,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn with_config(config: Config) -> Program {
        Program {
            config,
            ..Program::default()
        }
    }

    pub fn clear(&mut self) {
        self.comp.clear();
        self.lines = 0;
        self.compiled = false;
    }

    /// Compiles `source` from scratch. The first error aborts the pass and
    /// carries the raw text of the line that caused it.
    pub fn compile(&mut self, source: &str) -> Result<()> {
        self.clear();
        for (index, raw) in source.lines().enumerate() {
            let mut line = Cursor::new(raw);
            // Blank lines carry no statement and open no block.
            if line.done() {
                continue;
            }
            tracing::trace!(line = index + 1, raw, "compiling");
            if let Err(error) = self.comp.line(&mut line) {
                return Err(error.in_line(index + 1, raw));
            }
            self.lines += 1;
        }
        self.comp.code.push_str("halt");
        self.compiled = true;
        Ok(())
    }

    pub fn data(&self) -> &str {
        self.comp.data().as_str()
    }

    pub fn code(&self) -> &str {
        self.comp.code().as_str()
    }

    pub fn header(&self) -> String {
        format!(
            ":include \"{}\"\n: {} \n",
            self.config.library, self.config.entry
        )
    }

    /// The complete target text, or `None` before a successful compile.
    pub fn output(&self) -> Option<String> {
        if !self.compiled {
            return None;
        }
        let mut s = self.data().to_string();
        s.push_str(&self.header());
        s.push_str(self.code());
        Some(s)
    }

    pub fn stats(&self) -> Stats {
        Stats {
            lines: self.lines,
            symbols: self.comp.symbols.len(),
            prototypes: self.comp.link.prototypes(),
        }
    }
}
