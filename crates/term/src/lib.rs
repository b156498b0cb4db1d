//! Terminal rendering module.
//!
//! A small game-oriented presentation layer: [`game_view`] maps a read-only
//! [`core::GameSnapshot`] into a character framebuffer, and [`renderer`]
//! flushes that framebuffer to the terminal. The view is pure (no I/O) so it
//! can be unit-tested; all terminal state handling lives in the renderer.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
