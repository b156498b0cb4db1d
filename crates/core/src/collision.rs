//! Collision module - the single legality predicate
//!
//! Every placement question in the game funnels through [`collides`]: spawn
//! validation, movement, rotation, and lock detection all ask the same thing,
//! so they can never disagree.

use crate::board::Board;
use crate::pieces::Piece;

/// True if any occupied cell of `piece` is out of bounds or overlaps a
/// filled board cell. False only when all four cells are in bounds and empty.
pub fn collides(piece: &Piece, board: &Board) -> bool {
    piece.cells().iter().any(|&(x, y)| !board.is_valid(x, y))
}
