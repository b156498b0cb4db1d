//! Shared types module - constants and pure data structures
//!
//! Everything here is plain data with no dependencies, usable from the core
//! engine, the input layer, and the renderer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Timing
//!
//! All durations are in milliseconds. The driver runs a fixed timestep of
//! [`TICK_MS`]; gravity starts at [`BASE_DROP_MS`] per row and speeds up by
//! [`DROP_DECREMENT_MS`] each time the score crosses a multiple of
//! [`SPEEDUP_SCORE_STEP`], never dropping below [`DROP_FLOOR_MS`].

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed timestep for the frame loop (~60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity schedule (milliseconds per downward step)
pub const BASE_DROP_MS: u32 = 500;
pub const DROP_DECREMENT_MS: u32 = 50;
pub const DROP_FLOOR_MS: u32 = 100;

/// Score points per speed-up step
pub const SPEEDUP_SCORE_STEP: u32 = 500;

/// Points awarded per lines cleared in a single lock (index = line count).
/// Counts outside the table score nothing.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven tetromino kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in a fixed order (used for uniform random draws).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Player intents accepted by the engine.
///
/// Quit is not an engine intent: the driver checks for it before the engine
/// is consulted and tears the session down itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    TogglePause,
}

/// Cell on the board (None = empty, Some = locked with piece kind)
pub type Cell = Option<PieceKind>;
