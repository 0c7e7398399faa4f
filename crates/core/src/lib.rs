//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the rules of the falling-block engine. It has
//! zero dependencies on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: an injected piece source reproduces identical games
//! - **Testable**: every rule is pinned by unit and behavior tests
//! - **Portable**: runs anywhere commands can be fed to it
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of locked cells with the full-row sweep
//! - [`pieces`]: hand-authored shape tables for the 7 piece kinds
//! - [`piece`]: the falling tetromino and its validated motion
//! - [`rng`]: seedable and scriptable piece sources
//! - [`scoring`]: flat line-clear reward policy
//! - [`session`]: command entry point, credit economy, game-over restart
//! - [`snapshot`]: render-facing state export
//!
//! # Game Rules
//!
//! - Movement and rotation are all-or-nothing: a candidate placement with
//!   any cell outside the grid or on a locked cell is rejected outright.
//!   There is no kick correction and no lock-delay grace period.
//! - A piece that fails to descend locks immediately; full rows are swept
//!   and the lookahead piece spawns in the same step.
//! - Cleared rows pay score and credits; credits buy upward moves.
//! - A blocked spawn restarts the session on the spot, counters zeroed.
//!
//! # Example
//!
//! ```
//! use blockfall_core::Session;
//! use blockfall_types::{Command, Outcome};
//!
//! let mut session = Session::new(12345);
//!
//! session.apply(Command::MoveRight);
//! session.apply(Command::RotateCw);
//! assert_eq!(session.apply(Command::SoftDrop), Outcome::Applied);
//! assert_eq!(session.score(), 1);
//! ```

pub mod board;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use piece::Tetromino;
pub use pieces::{shape, spawn_shape, PieceShape, SPAWN_POSITION};
pub use rng::{PieceSource, ScriptedPieces, SimpleRng, UniformPieces};
pub use scoring::{line_clear_credits, line_clear_score};
pub use session::Session;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
