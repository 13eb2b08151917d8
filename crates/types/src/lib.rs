//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, UI rendering, driver protocol).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 22 rows (indexed 0-21, row 0 at the top)
//!
//! # Piece Codes
//!
//! Each piece kind carries a stable numeric code used on the render surface
//! (color lookup on the presentation side):
//!
//! | Code | Kind |
//! |------|------|
//! | 1 | L |
//! | 2 | I |
//! | 3 | T |
//! | 4 | S |
//! | 5 | Z |
//! | 6 | J |
//! | 7 | O |
//!
//! # Examples
//!
//! ```
//! use quadris_types::{GameCommand, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 22);
//!
//! assert_eq!(PieceKind::from_code(2), Some(PieceKind::I));
//! assert_eq!(PieceKind::I.code(), 2);
//!
//! let cmd = GameCommand::from_str("moveLeft").unwrap();
//! assert_eq!(cmd, GameCommand::MoveLeft);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: i8 = 10;

/// Board height in cells (22 rows)
pub const BOARD_HEIGHT: i8 = 22;

/// Base points for clearing N rows in one batch, indexed by N.
///
/// The batch value is multiplied by `(level + 1)` when applied.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1000];

/// The seven tetromino piece kinds.
///
/// Discriminants are the wire codes exposed on the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    L = 1,
    I = 2,
    T = 3,
    S = 4,
    Z = 5,
    J = 6,
    O = 7,
}

impl PieceKind {
    /// All kinds, indexed by `code - 1`.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::L,
        PieceKind::I,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::O,
    ];

    /// Numeric code (1..=7) for the render surface.
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Look up a kind by its numeric code.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_code(1), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_code(7), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_code(0), None);
    /// assert_eq!(PieceKind::from_code(8), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=7 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::L => "l",
            PieceKind::I => "i",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::O => "o",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell settled with the specified piece kind
///
/// Used internally by the board as a flat array of cells. Cell identity for
/// collision and line-full checks is purely positional; the kind is retained
/// only for rendering.
pub type Cell = Option<PieceKind>;

/// Discrete commands the presentation layer issues to the board.
///
/// A timer drives `MoveDown` at the current fall interval; keyboard events
/// drive the rest. Every command is an idempotent no-op when illegal or when
/// the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking and sweeping lines when blocked
    MoveDown,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
}

impl GameCommand {
    /// Parse command from string (for the driver protocol)
    ///
    /// # Examples
    ///
    /// ```
    /// use quadris_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("moveDown"), Some(GameCommand::MoveDown));
    /// assert_eq!(GameCommand::from_str("rotate"), Some(GameCommand::Rotate));
    /// assert_eq!(GameCommand::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "movedown" => Some(GameCommand::MoveDown),
            "rotate" => Some(GameCommand::Rotate),
            _ => None,
        }
    }

    /// Convert to camelCase string for the driver protocol
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::MoveDown => "moveDown",
            GameCommand::Rotate => "rotate",
        }
    }
}
