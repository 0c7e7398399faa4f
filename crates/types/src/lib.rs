//! Shared types module - data structures and constants for the rules engine
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, making them usable
//! in any context (engine logic, external rendering, input wiring).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: (3, 0) for every piece kind
//!
//! # Reward Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LINE_CLEAR_SCORE` | 100 | Score per cleared row |
//! | `LINE_CLEAR_CREDITS` | 1 | Credits per cleared row |
//! | `SOFT_DROP_SCORE` | 1 | Score per manual descent step |
//! | `RAISE_COST` | 1 | Credits spent by a successful raise |
//!
//! The engine never reads a clock. `FALL_INTERVAL_MS` only documents the
//! nominal cadence of the external timer that issues `Command::Tick`.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Parse a piece kind from string (case-insensitive)
//! let piece = PieceKind::T;
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, parsed);
//!
//! // Step a rotation state
//! let rotation = Rotation::North;
//! assert_eq!(rotation.rotate_cw(), Rotation::East);
//! assert_eq!(rotation.stepped(-1), Rotation::West);
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Score awarded per cleared row
pub const LINE_CLEAR_SCORE: u32 = 100;

/// Credits granted per cleared row
pub const LINE_CLEAR_CREDITS: u32 = 1;

/// Score awarded per successful manual descent step
pub const SOFT_DROP_SCORE: u32 = 1;

/// Credits spent by a successful raise
pub const RAISE_COST: u32 = 1;

/// Nominal interval of the external gravity timer in milliseconds
///
/// Owned by the caller; the engine only counts `Command::Tick` pulses.
pub const FALL_INTERVAL_MS: u32 = 500;

/// The seven tetromino piece kinds
///
/// The kind doubles as the occupancy tag written into the board and as the
/// color/category key an external renderer maps to its own palette:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
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
    /// All seven kinds, in canonical order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Byte tag for exported grids (1 through 7; 0 marks an empty cell)
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Rotation states of a piece
///
/// - **North**: Spawn orientation (rotation index 0)
/// - **East**: One clockwise quarter turn (index 1)
/// - **South**: Half turn (index 2)
/// - **West**: Three clockwise quarter turns (index 3)
///
/// Each state selects a hand-authored offset table; stepping wraps modulo 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// All four states, in clockwise order
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotation index in [0, 4)
    pub fn index(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    fn from_index(index: u8) -> Self {
        match index & 3 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Rotate clockwise (90 degrees)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (90 degrees the other way)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Step by a signed number of clockwise quarter turns, wrapping modulo 4
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.stepped(1), Rotation::East);
    /// assert_eq!(Rotation::North.stepped(-1), Rotation::West);
    /// assert_eq!(Rotation::South.stepped(6), Rotation::North);
    /// ```
    pub fn stepped(&self, steps: i8) -> Self {
        let index = (self.index() as i16 + steps as i16).rem_euclid(4) as u8;
        Self::from_index(index)
    }

    /// Parse rotation from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "north" | "n", "east" | "e", "south" | "s", "west" | "w"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(Rotation::North),
            "east" | "e" => Some(Rotation::East),
            "south" | "s" => Some(Rotation::South),
            "west" | "w" => Some(Rotation::West),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell tagged with the kind of the piece locked there
///
/// Used internally by the board as a flat array of cells.
pub type Cell = Option<PieceKind>;

/// Commands accepted by the game session
///
/// These are the only way to mutate a session: input wiring and the external
/// timer produce them, the engine consumes them through a single entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the piece one cell left
    MoveLeft,
    /// Move the piece one cell right
    MoveRight,
    /// Rotate the piece 90 degrees clockwise, no kick correction
    RotateCw,
    /// Step the piece one row down, scoring on success
    SoftDrop,
    /// Spend one credit to move the piece one row up
    Raise,
    /// Grant one credit, then step the piece one row down
    TypedDrop,
    /// One pulse of the external gravity timer
    Tick,
    /// Absorb the next `n` timer pulses without applying gravity
    Pause(u32),
}

/// Result of applying a [`Command`] to a session
///
/// Ordinary play never errors: an illegal command comes back as `Rejected`
/// and leaves the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command took effect
    Applied,
    /// The command was illegal and nothing changed
    Rejected,
    /// A tick was absorbed by the pause counter
    Skipped,
    /// The piece merged into the board and the lookahead piece spawned
    Locked { lines_cleared: u32 },
    /// The fresh spawn overlapped the board; the session already restarted
    GameOver,
}

impl Outcome {
    /// Rows cleared by this outcome
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Outcome;
    ///
    /// assert_eq!(Outcome::Locked { lines_cleared: 2 }.lines_cleared(), 2);
    /// assert_eq!(Outcome::Applied.lines_cleared(), 0);
    /// ```
    pub fn lines_cleared(&self) -> u32 {
        match self {
            Outcome::Locked { lines_cleared } => *lines_cleared,
            _ => 0,
        }
    }
}
