//! Session module - the presentation boundary around the board
//!
//! A [`GameSession`] is the thin orchestrator a driver talks to: a timer
//! fires [`GameCommand::MoveDown`] at the current fall interval, keyboard
//! events fire the other commands, and after each command the driver polls
//! [`GameSession::render_cells`] and [`GameSession::stats`] to redraw.
//!
//! The surface is conceptually a small RPC, so the snapshot types serialize
//! with serde (line-delimited JSON, or whatever the driver prefers). Nothing
//! here blocks or suspends; callers serialize commands onto one logical
//! thread (or guard the session with a single mutex when a timer thread and
//! an input thread both issue commands).
//!
//! # Example
//!
//! ```
//! use quadris_session::GameSession;
//! use quadris_types::GameCommand;
//!
//! let mut session = GameSession::new(12345);
//! session.apply(GameCommand::MoveLeft);
//! session.apply(GameCommand::Rotate);
//! session.apply(GameCommand::MoveDown);
//!
//! let stats = session.stats();
//! assert!(!stats.game_over);
//! assert_eq!(stats.fall_interval_ms, 800);
//! assert_eq!(session.render_cells().len(), 4);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use quadris_core::Board;
use quadris_types::GameCommand;

/// One renderable cell: position plus the piece-kind code (1..=7) the
/// presentation side maps to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderCell {
    pub col: u8,
    pub row: u8,
    pub kind: u8,
}

/// Read-only stats snapshot for the driver.
///
/// `fall_interval_ms` tells the driver when to schedule the next automatic
/// `moveDown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub score: u32,
    pub level: u32,
    pub cleared_lines: u32,
    pub game_over: bool,
    pub gravity: bool,
    pub fall_interval_ms: u32,
}

/// Thin command/query wrapper over a [`Board`].
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
}

impl GameSession {
    /// Start a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(seed),
        }
    }

    /// Apply a driver command. Illegal and post-game-over commands are
    /// silently absorbed as no-ops.
    pub fn apply(&mut self, command: GameCommand) {
        match command {
            GameCommand::MoveLeft => self.board.move_left(),
            GameCommand::MoveRight => self.board.move_right(),
            GameCommand::MoveDown => self.board.move_down(),
            GameCommand::Rotate => self.board.rotate(),
        }
    }

    /// De-duplicated union of settled and active cells, ready to draw
    pub fn render_cells(&self) -> Vec<RenderCell> {
        self.board
            .render_cells()
            .into_iter()
            .map(|(x, y, kind)| RenderCell {
                col: x as u8,
                row: y as u8,
                kind: kind.code(),
            })
            .collect()
    }

    /// Current stats snapshot
    pub fn stats(&self) -> GameStats {
        GameStats {
            score: self.board.score(),
            level: self.board.level(),
            cleared_lines: self.board.cleared_lines(),
            game_over: self.board.game_over(),
            gravity: self.board.gravity(),
            fall_interval_ms: self.board.fall_interval_ms(),
        }
    }

    /// Toggle post-clear gravity compaction
    pub fn set_gravity(&mut self, gravity: bool) {
        self.board.set_gravity(gravity);
    }

    /// Fall interval as a [`Duration`], for timer scheduling
    pub fn fall_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.board.fall_interval_ms()))
    }

    /// Read-only access to the underlying board
    pub fn board(&self) -> &Board {
        &self.board
    }
}
