//! Read-only state view handed to the renderer.
//!
//! The driver keeps one `GameSnapshot` and refills it once per frame, after
//! all intents and the gravity tick have been applied; the renderer never
//! sees a partially updated state.

use crate::pieces::Piece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// The live piece as the renderer sees it: kind plus absolute cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub cells: [(i8, i8); 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            cells: value.cells(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    /// None between a lock and the next spawn, and after game over.
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.paused = false;
        self.game_over = false;
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            lines: 0,
            paused: false,
            game_over: false,
        }
    }
}
