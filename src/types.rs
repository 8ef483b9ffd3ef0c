use serde::Serialize;

/// One square of the 8x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cell {
    Empty,
    Black,
    White,
}

/// A disc color. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Wire code used in [`GameView`]: 1 = black, 2 = white.
    pub fn code(self) -> u8 {
        match self {
            Player::Black => 1,
            Player::White => 2,
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

/// Render input returned from WASM APIs after every state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// 64 cells row-major: 0 = empty, 1 = black, 2 = white.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    /// Legal moves for the side to move, row-major.
    /// Contract: always populated; `assist_enabled` decides whether the
    /// presentation paints them.
    pub legal_moves: Vec<Position>,
    pub assist_enabled: bool,
    pub is_game_over: bool,
    /// CRC32 of `board`. Equal digests mean the grid did not change.
    pub board_digest: u32,
}
