use std::num::NonZeroUsize;

use tracing::debug;

use crate::operation::Operation;

/// Manages undo/redo history over a single linear timeline
///
/// `done` holds applied operations (most recent last); `undone` holds the
/// reverted ones waiting for a redo. An operation lives in at most one of them.
#[derive(Debug)]
pub struct History<O> {
    done: Vec<O>,
    undone: Vec<O>,
    limit: Option<NonZeroUsize>,
}

impl<O> Default for History<O> {
    fn default() -> Self {
        Self {
            done: Vec::new(),
            undone: Vec::new(),
            limit: None,
        }
    }
}

impl<O: Operation> History<O> {
    pub fn new() -> Self {
        Self::default()
    }

    /// History that keeps at most `limit` undoable operations
    pub fn with_limit(limit: NonZeroUsize) -> Self {
        Self { limit: Some(limit), ..Self::default() }
    }

    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }

    /// Apply and record an operation (clears redo stack)
    pub fn record(&mut self, op: O) {
        op.apply();
        debug!(op = %op.describe(), "record");
        self.done.push(op);

        let discarded = self.undone.len();
        self.undone.clear();

        let mut evicted = 0;
        if let Some(limit) = self.limit {
            let overflow = self.done.len().saturating_sub(limit.get());
            if overflow > 0 {
                self.done.drain(..overflow);
                evicted = overflow;
            }
        }

        if discarded > 0 || evicted > 0 {
            debug!(discarded, evicted, done = self.done.len(), "history trimmed");
        }
    }

    /// Undo the last operation; `None` when there is nothing to undo
    pub fn undo(&mut self) -> Option<&O> {
        let op = self.done.pop()?;
        op.revert();
        debug!(op = %op.describe(), done = self.done.len(), undone = self.undone.len() + 1, "undo");
        self.undone.push(op);
        self.undone.last()
    }

    /// Redo the last undone operation; `None` when there is nothing to redo
    pub fn redo(&mut self) -> Option<&O> {
        let op = self.undone.pop()?;
        op.reapply();
        debug!(op = %op.describe(), done = self.done.len() + 1, undone = self.undone.len(), "redo");
        self.done.push(op);
        self.done.last()
    }

    /// True only while an undo and a redo are both available
    pub fn has_history(&self) -> bool {
        !self.done.is_empty() && !self.undone.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Peek at the next undo operation without removing it
    pub fn peek_undo(&self) -> Option<&O> {
        self.done.last()
    }

    /// Peek at the next redo operation without removing it
    pub fn peek_redo(&self) -> Option<&O> {
        self.undone.last()
    }

    pub fn undo_len(&self) -> usize {
        self.done.len()
    }

    pub fn redo_len(&self) -> usize {
        self.undone.len()
    }

    /// Applied operations, oldest first
    pub fn iter_done(&self) -> impl Iterator<Item = &O> {
        self.done.iter()
    }

    /// Pending redo operations, next redo last
    pub fn iter_undone(&self) -> impl Iterator<Item = &O> {
        self.undone.iter()
    }

    /// Forget everything without touching receivers
    pub fn clear(&mut self) {
        self.done.clear();
        self.undone.clear();
    }
}
