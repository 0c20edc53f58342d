use super::{Column, Error, LineNumber};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// ## Scanner over one source line
///
/// A cursor is a bounded view `pos..end` into a borrowed line. Every
/// consuming operation leaves the cursor trimmed so the next operation
/// starts on a significant character. Parenthesized groups become new
/// cursors over the same buffer, which keeps error columns absolute.

#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Cursor<'a> {
        Cursor::bounded(src, 0, src.len())
    }

    fn bounded(src: &'a str, pos: usize, end: usize) -> Cursor<'a> {
        let mut cursor = Cursor { src, pos, end };
        cursor.end = pos + cursor.rest().trim_end().len();
        cursor.trim();
        cursor
    }

    /// The unconsumed text.
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..self.end]
    }

    pub fn column(&self) -> Column {
        match self.peek() {
            Some(ch) => self.pos..self.pos + ch.len_utf8(),
            None => self.pos..self.pos,
        }
    }

    pub fn trim(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn done(&self) -> bool {
        self.pos >= self.end
    }

    pub fn is_digit(&self) -> bool {
        matches!(self.peek(), Some(ch) if ch.is_ascii_digit())
    }

    pub fn is_alpha(&self) -> bool {
        matches!(self.peek(), Some(ch) if ch.is_alphabetic())
    }

    pub fn at(&self, c: char) -> bool {
        self.peek() == Some(c)
    }

    /// Drops whatever is left on the line.
    pub fn skip_rest(&mut self) {
        self.pos = self.end;
    }

    pub fn r#match(&mut self, literal: &str) -> bool {
        if !self.rest().starts_with(literal) {
            return false;
        }
        self.pos += literal.len();
        self.trim();
        true
    }

    pub fn expect(&mut self, c: char) -> Result<()> {
        if !self.at(c) {
            return Err(error!(UnexpectedCharacter, ..&self.column()));
        }
        self.pos += c.len_utf8();
        self.trim();
        Ok(())
    }

    fn take_while<F: Fn(char) -> bool>(&mut self, f: F) -> Column {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !f(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        start..self.pos
    }

    pub fn parse_number(&mut self) -> Result<LineNumber> {
        if !self.is_digit() {
            return Err(error!(ExpectedDigit, ..&self.column()));
        }
        let col = self.take_while(|ch| ch.is_ascii_digit());
        let number = match self.src[col.clone()].parse::<LineNumber>() {
            Ok(n) => n,
            Err(_) => return Err(error!(Overflow, ..&col; "NUMBER TOO LARGE")),
        };
        self.trim();
        Ok(number)
    }

    /// Text between double quotes, without the quotes.
    pub fn parse_string(&mut self) -> Result<&'a str> {
        let open = self.column();
        if !self.at('"') {
            return Err(error!(UnexpectedCharacter, ..&open));
        }
        let start = self.pos + 1;
        let len = match self.src[start..self.end].find('"') {
            Some(len) => len,
            None => return Err(error!(UnterminatedString, ..&(open.start..self.end))),
        };
        self.pos = start + len + 1;
        self.trim();
        Ok(&self.src[start..start + len])
    }

    pub fn parse_var(&mut self) -> Result<&'a str> {
        let col = self.take_while(char::is_alphabetic);
        if col.is_empty() {
            return Err(error!(UnexpectedCharacter, ..&self.column(); "EXPECTED IDENTIFIER"));
        }
        self.trim();
        Ok(&self.src[col])
    }

    pub fn parse_rel_op(&mut self) -> Result<&'a str> {
        let start = self.pos;
        if self.at('=') {
            self.pos += 1;
        } else if self.at('<') {
            self.pos += 1;
            if self.at('>') || self.at('=') {
                self.pos += 1;
            }
        } else if self.at('>') {
            self.pos += 1;
            if self.at('=') {
                self.pos += 1;
            }
        } else {
            return Err(error!(ExpectedRelationalOperator, ..&self.column()));
        }
        let op = &self.src[start..self.pos];
        self.trim();
        Ok(op)
    }

    /// Consumes a balanced `( ... )` group and returns a cursor over its interior.
    pub fn parse_parens(&mut self) -> Result<Cursor<'a>> {
        let open = self.pos;
        self.expect('(')?;
        let start = self.pos;
        let mut depth = 1;
        for (index, ch) in self.rest().char_indices() {
            match ch {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => continue,
            }
            if depth == 0 {
                let close = start + index;
                self.pos = close + 1;
                self.trim();
                return Ok(Cursor::bounded(self.src, start, close));
            }
        }
        Err(error!(UnbalancedParentheses, ..&(open..self.end)))
    }

    /// True where an expression operand ends: end of line, a separator,
    /// a relational operator, or `THEN`.
    pub fn expr_done(&self) -> bool {
        self.done()
            || self.at(',')
            || self.at('<')
            || self.at('>')
            || self.at('=')
            || self.rest().starts_with("THEN")
    }
}
