use super::Column;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line: Option<(usize, String)>,
    column: Column,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line: None,
            column: 0..0,
            message: "",
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Raw text of the offending source line, once the assembler attached it.
    pub fn line(&self) -> Option<&str> {
        self.line.as_ref().map(|(_, s)| s.as_str())
    }

    /// 1-based position of the offending line within the source.
    pub fn line_index(&self) -> Option<usize> {
        self.line.as_ref().map(|(n, _)| *n)
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    pub fn in_line(self, index: usize, raw: &str) -> Error {
        debug_assert!(self.line.is_none());
        Error {
            line: Some((index, raw.to_string())),
            ..self
        }
    }

    pub fn in_column(self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            column: column.clone(),
            ..self
        }
    }

    pub fn message(self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error { message, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnexpectedCharacter,
    ExpectedDigit,
    UnterminatedString,
    UnbalancedParentheses,
    ExpectedRelationalOperator,
    UnknownStatement,
    MalformedExpression,
    MalformedFactor,
    Overflow,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            UnexpectedCharacter => "UNEXPECTED CHARACTER",
            ExpectedDigit => "EXPECTED DIGIT",
            UnterminatedString => "UNTERMINATED STRING",
            UnbalancedParentheses => "UNBALANCED PARENTHESES",
            ExpectedRelationalOperator => "EXPECTED RELATIONAL OPERATOR",
            UnknownStatement => "UNKNOWN STATEMENT",
            MalformedExpression => "SYNTAX ERROR IN EXPRESSION",
            MalformedFactor => "SYNTAX ERROR IN FACTOR",
            Overflow => "OVERFLOW",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some((index, _)) = &self.line {
            suffix.push_str(&format!(" LINE {}", index));
        }
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if suffix.is_empty() {
            write!(f, "{}", self.code)?;
        } else {
            write!(f, "{} IN{}", self.code, suffix)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        if let Some((_, raw)) = &self.line {
            write!(f, ": {}", raw)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
