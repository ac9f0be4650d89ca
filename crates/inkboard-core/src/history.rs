//! Linear snapshot history with undo/redo.

/// An append-only timeline of full state snapshots with a cursor.
///
/// The entry under the cursor is the visible state. Completed interactions
/// append (`record`); updates inside an interaction overwrite the current
/// entry (`amend`); undo and redo only move the cursor. The timeline always
/// holds at least the initial entry it was constructed with.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: Vec<T>,
    cursor: usize,
}

impl<T> History<T> {
    /// Create a history whose single entry is `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// The snapshot under the cursor: the authoritative visible state.
    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    /// Append `state` after the cursor and advance onto it.
    ///
    /// Entries past the cursor are a redo future from an abandoned branch;
    /// they are discarded for good. One `record` per completed interaction.
    pub fn record(&mut self, state: T) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(state);
        self.cursor += 1;
    }

    /// Overwrite the entry under the cursor in place.
    ///
    /// No entry is created and the cursor stays put; this is the
    /// intra-interaction update path, one `amend` per pointer move.
    pub fn amend(&mut self, state: T) {
        self.entries[self.cursor] = state;
    }

    /// Step the cursor back one entry. No-op at the oldest entry.
    /// Returns whether the cursor moved.
    pub fn undo(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Step the cursor forward one entry. No-op at the newest entry.
    /// Returns whether the cursor moved.
    pub fn redo(&mut self) -> bool {
        if self.cursor < self.entries.len() - 1 {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len() - 1
    }

    /// Number of entries in the timeline.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Index of the cursor within the timeline.
    pub fn position(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_the_initial_entry() {
        let history = History::new("empty");
        assert_eq!(*history.current(), "empty");
        assert_eq!(history.depth(), 1);
        assert_eq!(history.position(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_appends_and_advances() {
        let mut history = History::new("empty");
        history.record("a");
        assert_eq!(*history.current(), "a");
        assert_eq!(history.depth(), 2);
        assert_eq!(history.position(), 1);
    }

    #[test]
    fn test_amend_overwrites_without_a_new_entry() {
        let mut history = History::new("empty");
        history.record("a");
        history.amend("b");
        history.record("c");
        // Timeline is [empty, b, c]; "a" was overwritten, never undoable.
        assert_eq!(history.depth(), 3);
        assert_eq!(history.position(), 2);
        assert_eq!(*history.current(), "c");
        assert!(history.undo());
        assert_eq!(*history.current(), "b");
        assert!(history.undo());
        assert_eq!(*history.current(), "empty");
    }

    #[test]
    fn test_undo_and_redo_stop_at_the_bounds() {
        let mut history = History::new("empty");
        history.record("a");
        history.record("b");
        assert!(history.undo());
        assert!(history.undo());
        assert!(!history.undo());
        assert_eq!(*history.current(), "empty");
        assert!(history.redo());
        assert!(history.redo());
        assert!(!history.redo());
        assert_eq!(*history.current(), "b");
        assert_eq!(history.position(), 2);
    }

    #[test]
    fn test_record_discards_the_redo_future() {
        let mut history = History::new("empty");
        history.record("a");
        history.record("b");
        history.undo();
        history.undo();
        history.record("x");
        assert_eq!(history.depth(), 2);
        assert_eq!(*history.current(), "x");
        assert!(!history.can_redo());
        history.undo();
        assert_eq!(*history.current(), "empty");
    }

    #[test]
    fn test_availability_tracks_the_cursor() {
        let mut history = History::new("empty");
        history.record("a");
        assert!(history.can_undo());
        assert!(!history.can_redo());
        history.undo();
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn test_amend_after_undo_rewrites_the_visible_entry() {
        let mut history = History::new("empty");
        history.record("a");
        history.undo();
        history.amend("patched");
        assert_eq!(*history.current(), "patched");
        assert_eq!(history.depth(), 2);
        history.redo();
        assert_eq!(*history.current(), "a");
    }
}
