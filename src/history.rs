use crate::board::Board;

/// Ordered sequence of board snapshots, one per applied move.
///
/// Append-only except for single-step undo, which truncates from the end.
/// The sequence never shrinks below the initial snapshot.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Board>,
}

impl History {
    /// Starts the history with the initial board as its first snapshot.
    pub fn new(initial: Board) -> Self {
        Self {
            snapshots: vec![initial],
        }
    }

    /// Appends a snapshot of `board`.
    pub fn record(&mut self, board: Board) {
        self.snapshots.push(board);
    }

    /// Drops the newest snapshot and returns the restore target, the new
    /// newest. Returns `None` when only the initial snapshot remains.
    pub fn undo(&mut self) -> Option<Board> {
        if self.snapshots.len() > 1 {
            self.snapshots.pop();
            self.snapshots.last().copied()
        } else {
            None
        }
    }

    /// Number of snapshots; N applied moves with no undos give N + 1.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Truncates back to a single fresh snapshot.
    pub fn reset(&mut self, initial: Board) {
        self.snapshots.clear();
        self.snapshots.push(initial);
    }
}
