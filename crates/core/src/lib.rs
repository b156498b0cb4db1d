//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with occupancy queries and line clearing
//! - [`pieces`]: Tetromino geometry and the live [`Piece`] with its pivot
//!   rotation
//! - [`collision`]: The single legality predicate for every placement
//! - [`rng`]: Seedable LCG and the uniform-random [`PieceFactory`]
//! - [`scoring`]: Line-clear score table and the gravity schedule
//! - [`game_state`]: The engine: spawn, fall, lock, clear, score, respawn
//! - [`snapshot`]: Read-only per-frame view for the renderer
//!
//! # Game Rules
//!
//! - Pieces are drawn uniformly and independently; repeats are allowed
//! - Rotation is a 90-degree transform about a per-kind pivot; O does not
//!   rotate
//! - Illegal moves and rotations are silent no-ops (speculate, test, revert)
//! - A gravity step that collides locks the piece, clears full rows, scores
//!   them (100/300/500/800 for 1-4), and spawns the next piece
//! - Gravity speeds up every 500 points, down to a floor
//! - A spawn that collides is the sole game-over condition
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::GameState;
//! use tui_blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // The first piece is locked at the bottom and the next one is live.
//! assert!(game.active().is_some());
//! ```
//!
//! Call [`GameState::tick`] every frame with the elapsed milliseconds; the
//! engine accumulates them against the current drop interval.

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use game_state::GameState;
pub use pieces::Piece;
pub use rng::{PieceFactory, SimpleRng};
pub use scoring::{drop_interval_ms, line_clear_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
