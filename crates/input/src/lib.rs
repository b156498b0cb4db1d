//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into discrete [`crate::types::GameAction`]
//! intents, one per key press. Quit is a separate predicate because the
//! driver acts on it before the engine is consulted.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, should_quit};
