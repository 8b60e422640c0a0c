use std::collections::VecDeque;

/// Maximum number of snapshots kept for undo/redo.
pub const UNDO_CAPACITY: usize = 50;

/// Editor content plus a linear undo/redo log of snapshots.
///
/// `cursor` always indexes a valid snapshot and the snapshot under the
/// cursor is the current content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentState {
    snapshots: VecDeque<String>,
    cursor: usize,
    capacity: usize,
}

impl DocumentState {
    pub fn new(initial: impl Into<String>) -> Self {
        Self::with_capacity(initial, UNDO_CAPACITY)
    }

    pub fn with_capacity(initial: impl Into<String>, capacity: usize) -> Self {
        let mut snapshots = VecDeque::with_capacity(capacity.min(UNDO_CAPACITY));
        snapshots.push_back(initial.into());
        Self {
            snapshots,
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    pub fn content(&self) -> &str {
        &self.snapshots[self.cursor]
    }

    /// Records `new_content` as the current content.
    ///
    /// Returns `false` (and leaves the log alone) when it equals the current
    /// snapshot. Otherwise every redo entry past the cursor is dropped before
    /// the push, and the oldest snapshot is evicted on overflow.
    pub fn commit(&mut self, new_content: impl Into<String>) -> bool {
        let new_content = new_content.into();
        if self.snapshots[self.cursor] == new_content {
            return false;
        }

        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push_back(new_content);
        if self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
        }
        self.cursor = self.snapshots.len() - 1;
        true
    }

    pub fn undo(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.content())
    }

    pub fn redo(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.content())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn snapshots(&self) -> impl Iterator<Item = &str> {
        self.snapshots.iter().map(String::as_str)
    }
}
