use super::Segment;
use crate::lang::LineNumber;
use std::collections::HashMap;

/// ## Variable declarations
///
/// Names are declared in the data segment the first time they are
/// referenced. Arrays are declared only by `DIM`. Kinds are recorded
/// but never checked against later uses.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind {
    Scalar,
    Array(LineNumber),
}

#[derive(Debug, Default)]
pub struct Symbols {
    vars: HashMap<String, Kind>,
}

impl Symbols {
    pub fn new() -> Symbols {
        Symbols::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn kind(&self, name: &str) -> Option<Kind> {
        self.vars.get(name).copied()
    }

    /// Emits `:var <name>` unless the name was seen before.
    pub fn declare_if_new(&mut self, name: &str, data: &mut Segment) {
        if self.vars.contains_key(name) {
            return;
        }
        tracing::debug!(name, "declaring variable");
        data.push_line(&format!(":var {}", name));
        self.vars.insert(name.to_string(), Kind::Scalar);
    }

    pub fn declare_array(&mut self, name: &str, size: LineNumber, data: &mut Segment) {
        if let Some(Kind::Scalar) = self.kind(name) {
            tracing::warn!(name, "array shares its name with a scalar");
        }
        tracing::debug!(name, size, "declaring array");
        data.push_line(&format!(":array {} {} 0", name, size));
        self.vars.insert(name.to_string(), Kind::Array(size));
    }
}
