//! Shape module - tetromino spawn layouts and rotation transforms
//!
//! A shape is the active falling piece: a kind, a rotation counter (0..=3),
//! and four absolute board coordinates. Rotation pivots on the bounding
//! minimum (low_x, low_y) of the current cells rather than a stored origin,
//! so the transforms below operate directly on absolute positions.
//!
//! `rotated` is pure: the board tests the candidate for feasibility and only
//! commits it when every resulting cell is legal.

use quadris_types::PieceKind;

/// Absolute board position of a single cell (col, row)
pub type CellPos = (i8, i8);

/// The active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    kind: PieceKind,
    rotation: u8,
    cells: [CellPos; 4],
}

impl Shape {
    /// Fixed 4-cell starting layout for a kind, anchored near the top-center
    /// columns, rotation state 0.
    pub fn spawn(kind: PieceKind) -> Self {
        let cells = match kind {
            PieceKind::L => [(5, 0), (4, 1), (5, 1), (3, 1)],
            PieceKind::I => [(3, 0), (4, 0), (5, 0), (6, 0)],
            PieceKind::T => [(4, 0), (4, 1), (5, 1), (3, 1)],
            PieceKind::S => [(4, 0), (5, 0), (4, 1), (3, 1)],
            PieceKind::Z => [(3, 0), (4, 0), (4, 1), (5, 1)],
            PieceKind::J => [(3, 0), (4, 1), (5, 1), (3, 1)],
            PieceKind::O => [(4, 0), (5, 0), (4, 1), (5, 1)],
        };
        Self {
            kind,
            rotation: 0,
            cells,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Rotation state: quarter-turns since spawn, mod 4
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn cells(&self) -> &[CellPos; 4] {
        &self.cells
    }

    /// Translate all cells in place. Callers validate the move first.
    pub fn translate(&mut self, dx: i8, dy: i8) {
        for (x, y) in self.cells.iter_mut() {
            *x += dx;
            *y += dy;
        }
    }

    /// Bounding minimum of the current cells, the rotation pivot.
    fn low_corner(&self) -> (i8, i8) {
        let mut low_x = i8::MAX;
        let mut low_y = i8::MAX;
        for &(x, y) in &self.cells {
            low_x = low_x.min(x);
            low_y = low_y.min(y);
        }
        (low_x, low_y)
    }

    /// Compute the next clockwise rotation as a candidate shape.
    ///
    /// - O keeps its geometry; only the rotation counter advances.
    /// - I uses a 4-branch transform keyed on the rotation state, reflecting
    ///   the asymmetric long-piece pivot.
    /// - All other kinds use one transform regardless of rotation state,
    ///   giving a simplified 4-state cycle.
    ///
    /// Candidate cells may land out of bounds; the board rejects those
    /// candidates instead of committing them.
    pub fn rotated(&self) -> Shape {
        let mut next = *self;

        match self.kind {
            PieceKind::O => {}
            PieceKind::I => {
                let (low_x, low_y) = self.low_corner();
                for (x, y) in next.cells.iter_mut() {
                    let (cx, cy) = (*x, *y);
                    let (nx, ny) = match self.rotation % 4 {
                        0 => (cy - low_y + low_x + 2, cx - low_x + low_y - 1),
                        1 => (cy - low_y + low_x - 2, cx - low_x + low_y + 2),
                        2 => (cy - low_y + low_x + 1, cx - low_x + low_y - 2),
                        _ => (cy - low_y + low_x - 1, cx - low_x + low_y + 1),
                    };
                    *x = nx;
                    *y = ny;
                }
            }
            _ => {
                let (low_x, low_y) = self.low_corner();
                for (x, y) in next.cells.iter_mut() {
                    let (cx, cy) = (*x, *y);
                    *x = 2 - (cy - low_y) + low_x;
                    *y = (cx - low_x) + low_y;
                }
            }
        }

        next.rotation = (self.rotation + 1) % 4;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(cells: &[CellPos; 4]) -> [CellPos; 4] {
        let mut out = *cells;
        out.sort_unstable();
        out
    }

    #[test]
    fn test_spawn_layouts() {
        assert_eq!(
            Shape::spawn(PieceKind::L).cells(),
            &[(5, 0), (4, 1), (5, 1), (3, 1)]
        );
        assert_eq!(
            Shape::spawn(PieceKind::I).cells(),
            &[(3, 0), (4, 0), (5, 0), (6, 0)]
        );
        assert_eq!(
            Shape::spawn(PieceKind::T).cells(),
            &[(4, 0), (4, 1), (5, 1), (3, 1)]
        );
        assert_eq!(
            Shape::spawn(PieceKind::S).cells(),
            &[(4, 0), (5, 0), (4, 1), (3, 1)]
        );
        assert_eq!(
            Shape::spawn(PieceKind::Z).cells(),
            &[(3, 0), (4, 0), (4, 1), (5, 1)]
        );
        assert_eq!(
            Shape::spawn(PieceKind::J).cells(),
            &[(3, 0), (4, 1), (5, 1), (3, 1)]
        );
        assert_eq!(
            Shape::spawn(PieceKind::O).cells(),
            &[(4, 0), (5, 0), (4, 1), (5, 1)]
        );
    }

    #[test]
    fn test_spawn_has_four_cells_per_kind() {
        for kind in PieceKind::ALL {
            let shape = Shape::spawn(kind);
            assert_eq!(shape.rotation(), 0);
            // All cells distinct, within the spawn band
            let cells = sorted(shape.cells());
            for w in cells.windows(2) {
                assert_ne!(w[0], w[1], "{:?} has duplicate spawn cells", kind);
            }
            for &(x, y) in shape.cells() {
                assert!((3..=6).contains(&x), "{:?} spawn col {}", kind, x);
                assert!((0..=1).contains(&y), "{:?} spawn row {}", kind, y);
            }
        }
    }

    #[test]
    fn test_o_rotation_is_geometric_identity() {
        let mut shape = Shape::spawn(PieceKind::O);
        let original = *shape.cells();

        for turn in 1..=4u8 {
            shape = shape.rotated();
            assert_eq!(shape.cells(), &original);
            assert_eq!(shape.rotation(), turn % 4);
        }
    }

    #[test]
    fn test_i_rotation_cycle_closure() {
        let mut shape = Shape::spawn(PieceKind::I);
        let original = *shape.cells();

        for _ in 0..4 {
            shape = shape.rotated();
        }

        assert_eq!(shape.cells(), &original);
        assert_eq!(shape.rotation(), 0);
    }

    #[test]
    fn test_i_rotation_states() {
        // Horizontal at rows 1 after one descent, pivot math per state
        let mut shape = Shape::spawn(PieceKind::I);
        shape.translate(0, 1);

        let vertical = shape.rotated();
        assert_eq!(sorted(vertical.cells()), [(5, 0), (5, 1), (5, 2), (5, 3)]);
        assert_eq!(vertical.rotation(), 1);

        let horizontal = vertical.rotated();
        assert_eq!(
            sorted(horizontal.cells()),
            [(3, 2), (4, 2), (5, 2), (6, 2)]
        );
        assert_eq!(horizontal.rotation(), 2);
    }

    #[test]
    fn test_rotation_counter_always_advances() {
        for kind in PieceKind::ALL {
            let mut shape = Shape::spawn(kind);
            for expected in [1u8, 2, 3, 0] {
                shape = shape.rotated();
                assert_eq!(shape.rotation(), expected, "{:?}", kind);
            }
        }
    }

    #[test]
    fn test_t_rotation_single_transform() {
        // (x, y) -> (2 - (y - low_y) + low_x, (x - low_x) + low_y)
        let shape = Shape::spawn(PieceKind::T);
        let rotated = shape.rotated();
        assert_eq!(rotated.cells(), &[(5, 1), (4, 1), (4, 2), (4, 0)]);
    }

    #[test]
    fn test_rotation_is_pure() {
        let shape = Shape::spawn(PieceKind::J);
        let before = shape;
        let _candidate = shape.rotated();
        assert_eq!(shape, before);
    }

    #[test]
    fn test_translate() {
        let mut shape = Shape::spawn(PieceKind::Z);
        shape.translate(2, 3);
        assert_eq!(shape.cells(), &[(5, 3), (6, 3), (6, 4), (7, 4)]);
        shape.translate(-1, 0);
        assert_eq!(shape.cells(), &[(4, 3), (5, 3), (5, 4), (6, 4)]);
    }
}
