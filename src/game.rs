use serde::Serialize;
use web_time::{Duration, Instant};

use crate::board::Board;
use crate::history::History;
use crate::types::{GameView, Player};

/// How long the reset confirmation stays armed.
const RESET_CONFIRM_WINDOW: Duration = Duration::from_secs(2);

/// Outcome of a reset button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetStep {
    /// First press: the confirmation window opened, nothing reinitialized.
    /// The presentation shows its prompt and schedules the expiry timer.
    Armed,
    /// Second press inside the window: the game was reinitialized.
    Done,
}

/// One game session: board, side to move, move history, assist flag and the
/// pending-reset window. Owned by the bindings layer for the lifetime of the
/// page; every user event funnels through exactly one of its methods.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    history: History,
    assist_enabled: bool,
    is_game_over: bool,
    /// End of the armed confirmation window, when a reset is pending.
    reset_deadline: Option<Instant>,
}

impl GameSession {
    pub fn new() -> Self {
        let board = Board::new();
        Self {
            board,
            current_player: Player::Black,
            history: History::new(board),
            assist_enabled: true,
            is_game_over: false,
            reset_deadline: None,
        }
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn assist_enabled(&self) -> bool {
        self.assist_enabled
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Move-request entry point.
    ///
    /// An illegal request changes nothing and returns `false`; the
    /// presentation reacts by not re-rendering. A legal one applies the
    /// move, snapshots the result, hands the turn over and re-checks for
    /// game end.
    pub fn try_move(&mut self, row: usize, col: usize) -> bool {
        let flips = self.board.place(row, col, self.current_player);
        if flips == 0 {
            return false;
        }

        self.history.record(self.board);
        self.current_player = self.current_player.opponent();
        self.refresh_game_over();
        true
    }

    /// Reverts the most recent move and hands the turn back.
    /// A no-op returning `false` when only the initial snapshot remains.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(board) => {
                self.board = board;
                self.current_player = self.current_player.opponent();
                self.refresh_game_over();
                true
            }
            None => false,
        }
    }

    /// Flips the assist-highlight flag and returns the new value.
    /// Rules are unaffected; only the view's rendering hint changes.
    pub fn toggle_assist(&mut self) -> bool {
        self.assist_enabled = !self.assist_enabled;
        self.assist_enabled
    }

    /// Reset button entry point; see [`ResetStep`].
    ///
    /// A press after the window lapsed behaves like a first press and opens
    /// a fresh window, even if the expiry event has not arrived yet.
    pub fn press_reset(&mut self) -> ResetStep {
        self.press_reset_at(Instant::now())
    }

    /// Timer-expiry entry point: clears the armed state once the window is
    /// really over. A stale timer from a superseded window is ignored.
    pub fn reset_window_elapsed(&mut self) {
        self.reset_window_elapsed_at(Instant::now());
    }

    /// True while the confirmation prompt should be shown.
    pub fn reset_pending(&self) -> bool {
        self.reset_deadline.is_some()
    }

    /// Assembles the render input for the presentation layer.
    pub fn view(&self) -> GameView {
        let (black_count, white_count) = self.board.count();
        GameView {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player.code(),
            black_count,
            white_count,
            legal_moves: self.board.legal_positions(self.current_player),
            assist_enabled: self.assist_enabled,
            is_game_over: self.is_game_over,
            board_digest: self.board.digest(),
        }
    }

    fn press_reset_at(&mut self, now: Instant) -> ResetStep {
        match self.reset_deadline {
            Some(deadline) if now <= deadline => {
                self.reinitialize();
                self.reset_deadline = None;
                ResetStep::Done
            }
            _ => {
                self.reset_deadline = Some(now + RESET_CONFIRM_WINDOW);
                ResetStep::Armed
            }
        }
    }

    fn reset_window_elapsed_at(&mut self, now: Instant) {
        if let Some(deadline) = self.reset_deadline
            && now >= deadline
        {
            self.reset_deadline = None;
        }
    }

    /// Fresh canonical game. The assist flag survives a reset.
    fn reinitialize(&mut self) {
        self.board = Board::new();
        self.current_player = Player::Black;
        self.history.reset(self.board);
        self.is_game_over = false;
    }

    /// Game end is reactive: set when neither side has a legal move.
    /// Which side is stuck, and who won, is not computed here.
    fn refresh_game_over(&mut self) {
        self.is_game_over = self.board.legal_moves(Player::Black) == 0
            && self.board.legal_moves(Player::White) == 0;
    }

    #[cfg(test)]
    fn set_position_for_test(&mut self, board: Board, current_player: Player) {
        self.board = board;
        self.current_player = current_player;
        self.history.reset(board);
        self.is_game_over = false;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
