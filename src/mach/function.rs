use crate::lang::Cursor;

/// ## Intrinsic functions
///
/// Each intrinsic compiles its arguments then one target word.

pub struct Function {}

const INTRINSICS: [(&str, &str, usize); 6] = [
    ("ABS", "abs", 1),
    ("SGN", "sgn", 1),
    ("PEEK", "@", 1),
    ("RND", "rnd", 1),
    ("MAX", "max", 2),
    ("MIN", "min", 2),
];

impl Function {
    /// Consumes an intrinsic keyword at the cursor.
    pub fn scan(line: &mut Cursor) -> Option<(&'static str, usize)> {
        for (name, word, arity) in INTRINSICS.iter() {
            if line.r#match(name) {
                return Some((*word, *arity));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan() {
        let mut line = Cursor::new("MAX(A, 2)");
        assert_eq!(Function::scan(&mut line), Some(("max", 2)));
        assert_eq!(line.rest(), "(A, 2)");
        let mut line = Cursor::new("PEEK(7)");
        assert_eq!(Function::scan(&mut line), Some(("@", 1)));
        let mut line = Cursor::new("A + 1");
        assert_eq!(Function::scan(&mut line), None);
        assert_eq!(line.rest(), "A + 1");
    }
}
