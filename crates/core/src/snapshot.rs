use crate::piece::Tetromino;
use crate::pieces::{spawn_shape, PieceShape};
use blockfall_types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub next: PieceKind,
    pub next_shape: PieceShape,
    pub score: u32,
    pub credits: u32,
    pub pause_ticks: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = ActiveSnapshot {
            kind: PieceKind::I,
            rotation: Rotation::North,
            x: 0,
            y: 0,
        };
        self.next = PieceKind::I;
        self.next_shape = spawn_shape(PieceKind::I);
        self.score = 0;
        self.credits = 0;
        self.pause_ticks = 0;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot {
                kind: PieceKind::I,
                rotation: Rotation::North,
                x: 0,
                y: 0,
            },
            next: PieceKind::I,
            next_shape: spawn_shape(PieceKind::I),
            score: 0,
            credits: 0,
            pause_ticks: 0,
        };
        s.clear();
        s
    }
}
