/// ## Append-only emission buffer
///
/// Tokens are written followed by exactly one space. Directives are
/// whole lines written by the symbol tables.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Segment {
    text: String,
}

impl Segment {
    pub fn new() -> Segment {
        Segment::default()
    }

    pub fn clear(&mut self) {
        self.text.clear()
    }

    pub fn push(&mut self, token: &str) {
        debug_assert!(!token.is_empty());
        self.text.push_str(token);
        self.text.push(' ');
    }

    pub fn push_line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }

    pub fn newline(&mut self) {
        self.text.push('\n');
    }

    /// Appends text verbatim, with no separator.
    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
