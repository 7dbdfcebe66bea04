//! Recording context for emitted operations.
//!
//! A [`QueuingContext`] collects operations in emission order. Code that
//! builds throwaway intermediate operations wraps that work in
//! [`QueuingContext::stop_recording`], so only the operations meant for the
//! caller end up in the record.

use crate::operation::Operation;

/// An ordered record of emitted operations.
#[derive(Debug, Clone)]
pub struct QueuingContext {
    ops: Vec<Operation>,
    recording: bool,
}

impl QueuingContext {
    /// Create an empty context that records.
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            recording: true,
        }
    }

    /// Record an operation. Ignored while recording is stopped.
    pub fn record(&mut self, op: Operation) {
        if self.recording {
            self.ops.push(op);
        }
    }

    /// Record several operations in order.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = Operation>) {
        if self.recording {
            self.ops.extend(ops);
        }
    }

    /// Whether `record` currently stores operations.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Run `f` with recording disabled.
    ///
    /// The previous recording state is restored when `f` returns, so scopes
    /// nest: an inner scope never re-enables recording for an outer one.
    pub fn stop_recording<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let previous = std::mem::replace(&mut self.recording, false);
        let result = f(self);
        self.recording = previous;
        result
    }

    /// The recorded operations.
    pub fn ops(&self) -> &[Operation] {
        &self.ops
    }

    /// Number of recorded operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Consume the context, returning the recorded operations.
    pub fn into_ops(self) -> Vec<Operation> {
        self.ops
    }
}

impl Default for QueuingContext {
    fn default() -> Self {
        Self::new()
    }
}
