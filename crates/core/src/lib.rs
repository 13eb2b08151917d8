//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 10x22 game board with collision detection and the
//!   line-clear/gravity sweep
//! - [`shape`]: Tetromino spawn layouts and pivot-based rotation
//! - [`rng`]: Seedable LCG and the two-step anti-repeat piece picker
//! - [`scoring`]: Line-score table, level derivation, and the fall-interval
//!   curve
//!
//! # Game Rules
//!
//! - Seven piece kinds with fixed spawn layouts across columns 3-6
//! - Simplified clockwise rotation with no wall kicks; an infeasible
//!   rotation is a no-op
//! - Classic scoring (40/100/300/1000 per batch, times level + 1), level =
//!   cleared lines / 10
//! - Optional gravity compaction after a clear, iterated to a fixed point
//! - Game over when a blocked piece still occupies the spawn row
//!
//! # Example
//!
//! ```
//! use quadris_core::Board;
//!
//! let mut board = Board::new(12345);
//! board.move_left();
//! board.rotate();
//! board.move_down();
//!
//! assert!(!board.game_over());
//! assert_eq!(board.fall_interval_ms(), 800); // level 0
//! ```

pub mod board;
pub mod rng;
pub mod scoring;
pub mod shape;

pub use quadris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use rng::{PiecePicker, SimpleRng};
pub use scoring::{fall_interval_ms, level_for_lines, line_clear_score};
pub use shape::{CellPos, Shape};
