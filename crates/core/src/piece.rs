//! Active piece - the falling tetromino and its validated motion

use crate::board::Board;
use crate::pieces::{self, PieceShape, SPAWN_POSITION};
use blockfall_types::{PieceKind, Rotation};

/// The falling piece: kind, rotation state, and origin position
///
/// After every committed operation its four absolute cells lie inside the
/// grid and overlap no locked cell. Candidate states that fail validation
/// are never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a piece in rotation state 0 at the fixed spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Cell offsets for the current rotation state
    pub fn shape(&self) -> PieceShape {
        pieces::shape(self.kind, self.rotation)
    }

    /// Absolute board cells occupied by the piece
    pub fn cells(&self) -> PieceShape {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check that all four cells are inside the grid and unoccupied
    pub fn fits(&self, board: &Board) -> bool {
        self.cells().iter().all(|&(x, y)| board.is_empty(x, y))
    }

    /// Attempt a combined shift and rotation step
    ///
    /// The candidate rotation is the current state stepped by `dr` quarter
    /// turns, the candidate origin is offset by `(dx, dy)`. The piece
    /// changes only when every candidate cell is inside the grid and empty;
    /// otherwise it stays untouched and the step reports failure. A blocked
    /// rotation is rejected outright, with no nudge correction.
    pub fn try_step(&mut self, board: &Board, dx: i8, dy: i8, dr: i8) -> bool {
        let rotation = self.rotation.stepped(dr);
        let x = self.x + dx;
        let y = self.y + dy;

        let legal = pieces::shape(self.kind, rotation)
            .iter()
            .all(|&(cx, cy)| board.is_empty(x + cx, y + cy));

        if legal {
            self.rotation = rotation;
            self.x = x;
            self.y = y;
        }
        legal
    }
}
