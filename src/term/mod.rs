/*!
## Command line driver

`masic <INPUT> [OUTPUT]` reads the whole source, compiles it, then writes
the whole result. Nothing is written when compilation fails.

*/

use crate::lang::{Column, Error};
use crate::mach::{Program, Stats};
use ansi_term::Style;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "masic", version, about = "Compile MASIC to Maker Forth", long_about = None)]
pub struct Args {
    /// MASIC source file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination for the Forth text; standard output when omitted
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub enum Failure {
    Read(PathBuf, std::io::Error),
    Write(Option<PathBuf>, std::io::Error),
    Compile(Error),
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Failure::Read(path, error) => write!(f, "CAN'T READ {}: {}", path.display(), error),
            Failure::Write(Some(path), error) => {
                write!(f, "CAN'T WRITE {}: {}", path.display(), error)
            }
            Failure::Write(None, error) => write!(f, "CAN'T WRITE OUTPUT: {}", error),
            Failure::Compile(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for Failure {}

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    let stdout = std::io::stdout();
    if let Err(failure) = run(&args, &mut stdout.lock()) {
        eprintln!("{}", Style::new().bold().paint(failure.to_string()));
        if let Failure::Compile(error) = &failure {
            if let Some(line) = error.line() {
                eprintln!("{}", decorate_line(line, error.column()));
            }
        }
        std::process::exit(1);
    }
}

/// Compiles `args.input`, writing to `args.output` or else to `stdout`.
pub fn run<W: Write>(args: &Args, stdout: &mut W) -> Result<Stats, Failure> {
    let source = std::fs::read_to_string(&args.input)
        .map_err(|error| Failure::Read(args.input.clone(), error))?;
    let mut program = Program::new();
    program.compile(&source).map_err(Failure::Compile)?;
    let output = program.output().unwrap_or_default();
    match &args.output {
        Some(path) => save(path, &output)
            .map_err(|error| Failure::Write(Some(path.clone()), error))?,
        None => stdout
            .write_all(output.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|error| Failure::Write(None, error))?,
    }
    let stats = program.stats();
    tracing::info!(
        input = %args.input.display(),
        lines = stats.lines,
        symbols = stats.symbols,
        prototypes = stats.prototypes,
        "compiled"
    );
    Ok(stats)
}

/// Writes `text` to a temporary file beside `path`, then renames it into
/// place. The destination either gets the whole text or is left untouched.
fn save(path: &Path, text: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(text.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Underlines `column` of a source line. An empty column at the end
/// of the line underlines one space past the last character.
pub fn decorate_line(line: &str, column: &Column) -> String {
    let style = Style::new().underline();
    match (
        line.get(..column.start),
        line.get(column.clone()),
        line.get(column.end..),
    ) {
        (Some(before), Some(""), Some("")) => format!("{}{}", before, style.paint(" ")),
        (Some(before), Some(marked), Some(after)) if !marked.is_empty() => {
            format!("{}{}{}", before, style.paint(marked), after)
        }
        _ => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorate_line() {
        let style = Style::new().underline();
        assert_eq!(
            decorate_line("10 FOO", &(3..4)),
            format!("10 {}OO", style.paint("F"))
        );
        assert_eq!(
            decorate_line("10 PRINT", &(8..8)),
            format!("10 PRINT{}", style.paint(" "))
        );
        assert_eq!(decorate_line("10 PRINT", &(0..0)), "10 PRINT");
        assert_eq!(decorate_line("10", &(5..9)), "10");
    }
}
