//! Linear undo/redo over deep element-list snapshots.
//!
//! Checkpoints are taken only at discrete, user-intentional operations
//! (add, delete, duplicate, project/template load) — never per
//! pointer-move. Entries past the cursor are the redo-able future and are
//! discarded whenever a new checkpoint lands after an undo.

use ig_core::Element;

const DEFAULT_MAX_DEPTH: usize = 100;

/// Snapshot stack with a cursor pointing at the current state.
///
/// Invariant: whenever `entries` is non-empty, `cursor < entries.len()`.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Vec<Element>>,
    cursor: usize,
    max_depth: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            max_depth: max_depth.max(1),
        }
    }

    /// Truncate any redo-able future, push a deep copy of `elements`, and
    /// advance the cursor. Oldest entries are trimmed past `max_depth`.
    pub fn checkpoint(&mut self, elements: &[Element]) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(elements.to_vec());
        if self.entries.len() > self.max_depth {
            self.entries.remove(0);
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Step back one entry. No-op at the bottom of the stack.
    pub fn undo(&mut self) -> Option<&[Element]> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward one entry. No-op at the top of the stack.
    pub fn redo(&mut self) -> Option<&[Element]> {
        if self.entries.is_empty() || self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
