use super::Segment;
use crate::lang::LineNumber;
use std::collections::HashMap;

/// ## Jump target labels
///
/// Every BASIC line number becomes a target word named `line<N>`.
/// A reference to a line that has not been compiled yet emits a
/// `:proto` so the single forward pass can name code that comes later.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelState {
    Unseen,
    ForwardDeclared,
    Defined,
}

#[derive(Debug, Default)]
pub struct Link {
    labels: HashMap<LineNumber, LabelState>,
    prototypes: usize,
}

impl Link {
    pub fn new() -> Link {
        Link::default()
    }

    pub fn clear(&mut self) {
        self.labels.clear();
        self.prototypes = 0;
    }

    pub fn name(line_number: LineNumber) -> String {
        format!("line{}", line_number)
    }

    pub fn state(&self, line_number: LineNumber) -> LabelState {
        match self.labels.get(&line_number) {
            Some(state) => *state,
            None => LabelState::Unseen,
        }
    }

    /// Number of `:proto` directives emitted so far.
    pub fn prototypes(&self) -> usize {
        self.prototypes
    }

    /// Emits a reference to `line_number`, prototyping it on first sight.
    /// With `address` the reference is preceded by `'` so the target word
    /// is pushed rather than invoked.
    pub fn reference(&mut self, line_number: LineNumber, address: bool, code: &mut Segment) {
        let name = Link::name(line_number);
        if self.state(line_number) == LabelState::Unseen {
            tracing::debug!(line_number, "forward declaring label");
            code.push(":proto");
            code.push(&name);
            self.labels.insert(line_number, LabelState::ForwardDeclared);
            self.prototypes += 1;
        }
        if address {
            code.push("'");
        }
        code.push(&name);
    }

    /// Opens the code block for `line_number`.
    pub fn define(&mut self, line_number: LineNumber, code: &mut Segment) {
        match self.state(line_number) {
            LabelState::Unseen | LabelState::ForwardDeclared => {
                self.labels.insert(line_number, LabelState::Defined);
            }
            LabelState::Defined => {
                tracing::warn!(line_number, "line number defined more than once");
            }
        }
        code.push(":");
        code.push(&Link::name(line_number));
    }
}
