//! Pieces module - tetromino geometry and the live piece
//!
//! Each of the seven kinds defines its four cell offsets in the spawn
//! orientation plus a rotation pivot. Rotation is a 90-degree transform about
//! the pivot, not a lookup table: for a cell offset `(dx, dy)` from the
//! pivot, the rotated offset is `(dy, -dx)`. For I and O the true rotation
//! center lies between cells, so the pivot is stored in half-cell units
//! (doubled integer coordinates) and is never rounded; only the derived cell
//! positions round to the nearest integer. O is rotationally symmetric and
//! skips the transform entirely.

use crate::types::{PieceKind, BOARD_WIDTH};

/// Offset of a single cell relative to the shape origin (x right, y down)
pub type CellOffset = (i8, i8);

/// Static geometry for one piece kind.
struct ShapeSpec {
    /// Cell offsets in the spawn orientation.
    cells: [CellOffset; 4],
    /// Pivot in half-cell units, relative to the same origin.
    pivot: (i16, i16),
    /// Footprint width in columns (for spawn centering).
    width: i8,
    /// False only for O, whose rotation is the identity.
    rotatable: bool,
}

const I_SPEC: ShapeSpec = ShapeSpec {
    cells: [(0, 0), (1, 0), (2, 0), (3, 0)],
    pivot: (3, 1),
    width: 4,
    rotatable: true,
};

const O_SPEC: ShapeSpec = ShapeSpec {
    cells: [(0, 0), (1, 0), (0, 1), (1, 1)],
    pivot: (1, 1),
    width: 2,
    rotatable: false,
};

const T_SPEC: ShapeSpec = ShapeSpec {
    cells: [(1, 0), (0, 1), (1, 1), (2, 1)],
    pivot: (2, 2),
    width: 3,
    rotatable: true,
};

const S_SPEC: ShapeSpec = ShapeSpec {
    cells: [(1, 0), (2, 0), (0, 1), (1, 1)],
    pivot: (2, 2),
    width: 3,
    rotatable: true,
};

const Z_SPEC: ShapeSpec = ShapeSpec {
    cells: [(0, 0), (1, 0), (1, 1), (2, 1)],
    pivot: (2, 2),
    width: 3,
    rotatable: true,
};

const J_SPEC: ShapeSpec = ShapeSpec {
    cells: [(0, 0), (0, 1), (1, 1), (2, 1)],
    pivot: (2, 2),
    width: 3,
    rotatable: true,
};

const L_SPEC: ShapeSpec = ShapeSpec {
    cells: [(2, 0), (0, 1), (1, 1), (2, 1)],
    pivot: (2, 2),
    width: 3,
    rotatable: true,
};

fn spec(kind: PieceKind) -> &'static ShapeSpec {
    match kind {
        PieceKind::I => &I_SPEC,
        PieceKind::O => &O_SPEC,
        PieceKind::T => &T_SPEC,
        PieceKind::S => &S_SPEC,
        PieceKind::Z => &Z_SPEC,
        PieceKind::J => &J_SPEC,
        PieceKind::L => &L_SPEC,
    }
}

/// Convert a half-cell coordinate to the nearest integer cell.
///
/// Ties (exact half positions) round up. With the pivots above the result is
/// always exact; the rounding is the contract, not a correction.
#[inline]
fn half_to_cell(h: i16) -> i8 {
    (h + 1).div_euclid(2) as i8
}

/// A live, mobile piece: a pivot plus four occupied cells.
///
/// `Piece` is a plain value; [`moved`](Piece::moved) and
/// [`rotated`](Piece::rotated) return transformed copies without consulting
/// the board. Callers validate the candidate and either commit it or drop it,
/// which makes every transform atomic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    /// Pivot in half-cell units (doubled board coordinates).
    pivot_x2: i16,
    pivot_y2: i16,
    /// Absolute occupied cells; always integer positions.
    cells: [(i8, i8); 4],
}

impl Piece {
    /// Create a piece with its shape origin at (x, y).
    pub fn new(kind: PieceKind, x: i8, y: i8) -> Self {
        let spec = spec(kind);
        let mut cells = spec.cells;
        for cell in &mut cells {
            cell.0 += x;
            cell.1 += y;
        }
        Self {
            kind,
            pivot_x2: 2 * x as i16 + spec.pivot.0,
            pivot_y2: 2 * y as i16 + spec.pivot.1,
            cells,
        }
    }

    /// Create a piece at the spawn position: top row, horizontally centered
    /// for its footprint.
    pub fn spawn(kind: PieceKind) -> Self {
        let x = (BOARD_WIDTH as i8 - spec(kind).width) / 2;
        Self::new(kind, x, 0)
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Absolute positions of the four occupied cells.
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.cells
    }

    /// Translate by (dx, dy) columns/rows.
    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        let mut cells = self.cells;
        for cell in &mut cells {
            cell.0 += dx;
            cell.1 += dy;
        }
        Self {
            pivot_x2: self.pivot_x2 + 2 * dx as i16,
            pivot_y2: self.pivot_y2 + 2 * dy as i16,
            cells,
            ..*self
        }
    }

    /// Rotate 90 degrees about the pivot. Identity for O.
    pub fn rotated(&self) -> Self {
        if !spec(self.kind).rotatable {
            return *self;
        }

        let mut cells = self.cells;
        for cell in &mut cells {
            let dx2 = 2 * cell.0 as i16 - self.pivot_x2;
            let dy2 = 2 * cell.1 as i16 - self.pivot_y2;
            *cell = (
                half_to_cell(self.pivot_x2 + dy2),
                half_to_cell(self.pivot_y2 - dx2),
            );
        }
        Self { cells, ..*self }
    }
}
