//! Board module - settled grid, active shape, and the line sweep
//!
//! The board owns the settled-cell grid and the active shape, answers
//! collision queries, and runs the line-clear/gravity pass after a lock.
//! Settled cells live in a flat row-major array for cache locality; equality
//! is purely positional (the kind is kept only for rendering), so the grid
//! preserves the set-membership semantics the collision rules depend on.
//!
//! Coordinates: (x, y) with x in 0..=9 left to right and y in 0..=21 top to
//! bottom. New pieces spawn across columns 3-6 at rows 0-1.

use std::fmt;

use arrayvec::ArrayVec;

use quadris_types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

use crate::rng::PiecePicker;
use crate::scoring::{fall_interval_ms, level_for_lines, line_clear_score};
use crate::shape::Shape;

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board: 10x22 settled grid plus the active falling shape.
///
/// Two states only: active play and game over. Game over is terminal and is
/// reached exclusively through [`Board::move_down`]; every operation becomes
/// a no-op once it is set.
#[derive(Debug, Clone)]
pub struct Board {
    /// Flat array of settled cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
    /// The currently falling shape, replaced on lock
    shape: Shape,
    picker: PiecePicker,
    cleared_lines: u32,
    level: u32,
    score: u32,
    gravity: bool,
    game_over: bool,
}

impl Board {
    /// Create a new board with an empty grid and a first spawned shape.
    ///
    /// The seed fixes the whole piece sequence; same seed, same game.
    pub fn new(seed: u32) -> Self {
        let mut picker = PiecePicker::new(seed);
        let shape = Shape::spawn(picker.pick(None));

        Self {
            cells: [None; BOARD_SIZE],
            shape,
            picker,
            cleared_lines: 0,
            level: 0,
            score: 0,
            gravity: true,
            game_over: false,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH || y < 0 || y >= BOARD_HEIGHT {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get settled cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set settled cell at position (x, y), for fixtures and drivers
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a settled cell occupies (x, y); out of bounds reads as free
    fn is_settled(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// The active falling shape (read-only)
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn cleared_lines(&self) -> u32 {
        self.cleared_lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn gravity(&self) -> bool {
        self.gravity
    }

    /// Toggle post-clear gravity compaction (on by default)
    pub fn set_gravity(&mut self, gravity: bool) {
        self.gravity = gravity;
    }

    /// Milliseconds per automatic descent step, derived from the level
    pub fn fall_interval_ms(&self) -> u32 {
        fall_interval_ms(self.level)
    }

    fn blocked_left(&self) -> bool {
        self.shape
            .cells()
            .iter()
            .any(|&(x, y)| x == 0 || self.is_settled(x - 1, y))
    }

    fn blocked_right(&self) -> bool {
        self.shape
            .cells()
            .iter()
            .any(|&(x, y)| x == BOARD_WIDTH - 1 || self.is_settled(x + 1, y))
    }

    fn blocked_below(&self) -> bool {
        self.shape
            .cells()
            .iter()
            .any(|&(x, y)| y == BOARD_HEIGHT - 1 || self.is_settled(x, y + 1))
    }

    fn touches_top(&self) -> bool {
        self.shape.cells().iter().any(|&(_, y)| y == 0)
    }

    /// Move the active shape one column left, or do nothing when blocked
    /// by the wall, a settled neighbor, or game over.
    pub fn move_left(&mut self) {
        if self.game_over || self.blocked_left() {
            return;
        }
        self.shape.translate(-1, 0);
    }

    /// Move the active shape one column right, or do nothing when blocked.
    pub fn move_right(&mut self) {
        if self.game_over || self.blocked_right() {
            return;
        }
        self.shape.translate(1, 0);
    }

    /// Rotate the active shape clockwise.
    ///
    /// The candidate geometry is committed only if every resulting cell is
    /// in bounds and not settled. There is no wall-kick fallback; an
    /// infeasible rotation is a no-op.
    pub fn rotate(&mut self) {
        if self.game_over {
            return;
        }

        let candidate = self.shape.rotated();
        let feasible = candidate.cells().iter().all(|&(x, y)| {
            x >= 0 && x < BOARD_WIDTH && y >= 0 && y < BOARD_HEIGHT && !self.is_settled(x, y)
        });

        if feasible {
            self.shape = candidate;
        }
    }

    /// Advance the active shape one row down.
    ///
    /// When the shape cannot descend: if any of its cells still sits on the
    /// spawn row the game ends (no next piece is spawned); otherwise the
    /// shape locks into the settled grid, the next shape spawns, and the
    /// line sweep runs.
    pub fn move_down(&mut self) {
        if self.game_over {
            return;
        }

        if !self.blocked_below() {
            self.shape.translate(0, 1);
            return;
        }

        if self.touches_top() {
            self.game_over = true;
            return;
        }

        self.lock_and_spawn();
        self.sweep_lines();
    }

    /// Merge the active cells into the settled grid and spawn the successor.
    ///
    /// The successor is drawn before the sweep runs, matching the lock
    /// sequence the sweep's occupancy scans expect.
    fn lock_and_spawn(&mut self) {
        let kind = self.shape.kind();
        let cells = *self.shape.cells();
        for (x, y) in cells {
            self.set(x, y, Some(kind));
        }

        let next = self.picker.pick(Some(kind));
        self.shape = Shape::spawn(next);
    }

    /// Occupancy bitmap of the rendered union: settled cells plus the active
    /// shape. Row-full and gravity scans both work on this union.
    fn occupancy(&self) -> [bool; BOARD_SIZE] {
        let mut occ = [false; BOARD_SIZE];
        for (idx, cell) in self.cells.iter().enumerate() {
            occ[idx] = cell.is_some();
        }
        for &(x, y) in self.shape.cells() {
            if let Some(idx) = Self::index(x, y) {
                occ[idx] = true;
            }
        }
        occ
    }

    /// Remove the settled cells of row `y` and shift every settled row above
    /// it down by one. Active cells are untouched.
    fn clear_row(&mut self, y: i8) {
        let width = BOARD_WIDTH as usize;
        for row in (1..=y as usize).rev() {
            let src = (row - 1) * width;
            let dst = row * width;
            self.cells.copy_within(src..src + width, dst);
        }
        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }

    /// Line-clear / gravity pass, run once per lock event.
    ///
    /// Iterates to a fixed point: clear full rows, apply gravity compaction,
    /// and re-scan while compaction keeps forming new full rows. The batch
    /// score uses the level from before the pass; the level itself is
    /// recomputed only after the loop settles.
    fn sweep_lines(&mut self) {
        loop {
            let occ = self.occupancy();

            let mut full_rows: ArrayVec<i8, { BOARD_HEIGHT as usize }> = ArrayVec::new();
            for y in 0..BOARD_HEIGHT {
                let start = (y as usize) * (BOARD_WIDTH as usize);
                let end = start + BOARD_WIDTH as usize;
                if occ[start..end].iter().all(|&o| o) {
                    full_rows.push(y);
                }
            }

            if full_rows.is_empty() {
                break;
            }

            self.cleared_lines += full_rows.len() as u32;
            self.score += line_clear_score(full_rows.len(), self.level);

            // Rows are processed top to bottom; rows below a cleared row
            // never move, so later indices stay valid.
            let mut bottom_most = 0i8;
            for &row in &full_rows {
                bottom_most = bottom_most.max(row);
                self.clear_row(row);
            }

            let mut compacted = false;
            if self.gravity && bottom_most != BOARD_HEIGHT - 1 {
                let occ = self.occupancy();

                for col in 0..BOARD_WIDTH {
                    // Contiguous empty rows just below the bottom-most
                    // cleared row, stopping at the first occupied cell.
                    let mut empties = 0i8;
                    for row in (bottom_most + 1)..BOARD_HEIGHT {
                        let idx = (row as usize) * (BOARD_WIDTH as usize) + (col as usize);
                        if occ[idx] {
                            break;
                        }
                        empties += 1;
                    }

                    if empties == 0 {
                        continue;
                    }

                    // Drop the settled cells of this column at or above the
                    // cleared row, bottom-up so no target is still occupied.
                    for row in (0..=bottom_most).rev() {
                        if let Some(Some(kind)) = self.get(col, row) {
                            self.set(col, row, None);
                            self.set(col, row + empties, Some(kind));
                            compacted = true;
                        }
                    }
                }
            }

            if !compacted {
                break;
            }
        }

        self.level = level_for_lines(self.cleared_lines);
    }

    /// De-duplicated union (by position) of settled and active cells.
    ///
    /// Read-only and side-effect-free; a settled cell wins over a
    /// transiently overlapping active cell.
    pub fn render_cells(&self) -> Vec<(i8, i8, PieceKind)> {
        let mut out = Vec::with_capacity(64);
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                if let Some(Some(kind)) = self.get(x, y) {
                    out.push((x, y, kind));
                }
            }
        }
        for &(x, y) in self.shape.cells() {
            if !self.is_settled(x, y) {
                out.push((x, y, self.shape.kind()));
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(1)
    }
}

impl fmt::Display for Board {
    /// Text rendering of the full board, one digit per occupied cell
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut grid = [[b'.'; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (x, y, kind) in self.render_cells() {
            grid[y as usize][x as usize] = b'0' + kind.code();
        }
        for row in grid.iter() {
            for &ch in row.iter() {
                write!(f, "{}", ch as char)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
