//! Session module - the orchestrator that owns all game state
//!
//! The session holds the board, the falling piece, the lookahead slot, and
//! the score/credit/pause counters. Every mutation goes through
//! [`Session::apply`], which runs each command to completion, including any
//! cascading lock, row sweep, respawn, and game-over restart.

use crate::board::Board;
use crate::piece::Tetromino;
use crate::pieces::spawn_shape;
use crate::rng::{PieceSource, UniformPieces};
use crate::scoring::{line_clear_credits, line_clear_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use blockfall_types::{Command, Outcome, PieceKind, RAISE_COST, SOFT_DROP_SCORE};

/// Complete game session state
///
/// Owned as a plain value by the caller and passed by `&mut` into every
/// command; nothing else may write to the board or the counters.
pub struct Session {
    board: Board,
    active: Tetromino,
    next: PieceKind,
    source: Box<dyn PieceSource>,
    score: u32,
    credits: u32,
    pause_ticks: u32,
}

impl Session {
    /// Create a session with a seeded uniform piece source
    pub fn new(seed: u32) -> Self {
        Self::with_source(Box::new(UniformPieces::new(seed)))
    }

    /// Create a session drawing pieces from the given source
    pub fn with_source(mut source: Box<dyn PieceSource>) -> Self {
        let first = source.draw();
        let next = source.draw();
        Self {
            board: Board::new(),
            active: Tetromino::spawn(first),
            next,
            source,
            score: 0,
            credits: 0,
            pause_ticks: 0,
        }
    }

    /// Apply a command and report its outcome
    ///
    /// Commands never panic and never error during ordinary play; an
    /// illegal move comes back as [`Outcome::Rejected`] with the session
    /// untouched.
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::MoveLeft => self.shift(-1, 0, 0),
            Command::MoveRight => self.shift(1, 0, 0),
            Command::RotateCw => self.shift(0, 0, 1),
            Command::SoftDrop => self.descend(true),
            Command::Raise => self.raise(),
            Command::TypedDrop => {
                // The credit is granted up front; the drop step itself
                // costs nothing further.
                self.credits += 1;
                self.descend(true)
            }
            Command::Tick => self.tick(),
            Command::Pause(ticks) => {
                self.pause_ticks = ticks;
                Outcome::Applied
            }
        }
    }

    fn shift(&mut self, dx: i8, dy: i8, dr: i8) -> Outcome {
        if self.active.try_step(&self.board, dx, dy, dr) {
            Outcome::Applied
        } else {
            Outcome::Rejected
        }
    }

    /// One gravity pulse. A positive pause counter absorbs the pulse so the
    /// external timer keeps firing undisturbed.
    fn tick(&mut self) -> Outcome {
        if self.pause_ticks > 0 {
            self.pause_ticks -= 1;
            return Outcome::Skipped;
        }
        self.descend(false)
    }

    /// Move the piece down one row, or run the lock sequence when grounded
    fn descend(&mut self, manual: bool) -> Outcome {
        if self.active.try_step(&self.board, 0, 1, 0) {
            if manual {
                self.score += SOFT_DROP_SCORE;
            }
            Outcome::Applied
        } else {
            self.lock_active()
        }
    }

    /// A raise charges its credit only when the move actually lands
    fn raise(&mut self) -> Outcome {
        if self.credits < RAISE_COST {
            return Outcome::Rejected;
        }
        if self.active.try_step(&self.board, 0, -1, 0) {
            self.credits -= RAISE_COST;
            Outcome::Applied
        } else {
            Outcome::Rejected
        }
    }

    /// Lock sequence: merge the piece into the board, sweep full rows,
    /// award rewards, promote the lookahead, and restart the session when
    /// the fresh spawn overlaps the board.
    fn lock_active(&mut self) -> Outcome {
        let shape = self.active.shape();
        self.board
            .commit(&shape, self.active.x, self.active.y, self.active.kind);

        let lines = self.board.clear_full_rows().len() as u32;
        self.score += line_clear_score(lines);
        self.credits += line_clear_credits(lines);

        self.active = Tetromino::spawn(self.next);
        self.next = self.source.draw();

        if !self.active.fits(&self.board) {
            self.reset();
            return Outcome::GameOver;
        }

        Outcome::Locked {
            lines_cleared: lines,
        }
    }

    /// Fresh board, zeroed counters, two freshly drawn pieces. The terminal
    /// score is not recorded anywhere.
    fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.credits = 0;
        self.pause_ticks = 0;
        self.active = Tetromino::spawn(self.source.draw());
        self.next = self.source.draw();
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn pause_ticks(&self) -> u32 {
        self.pause_ticks
    }

    /// Kind waiting in the lookahead slot
    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn active(&self) -> Tetromino {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Fill a reusable snapshot with the render-facing state: the locked
    /// grid overlaid with the falling piece, the lookahead preview, and the
    /// counters
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        // The active piece's cells are in bounds by invariant
        for (x, y) in self.active.cells() {
            out.board[y as usize][x as usize] = self.active.kind.code();
        }

        out.active = ActiveSnapshot::from(self.active);
        out.next = self.next;
        out.next_shape = spawn_shape(self.next);
        out.score = self.score;
        out.credits = self.credits;
        out.pause_ticks = self.pause_ticks;
    }

    /// Allocating convenience wrapper around [`Session::snapshot_into`]
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
