use crate::world::{Bounds, Cell};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// A pattern placement reached outside the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("{pattern} does not fit the grid: cell ({},{}) is outside bounds ({},{})", cell.row, cell.col, bounds.max_row, bounds.max_col)]
pub struct OutOfBoundsError {
    pub pattern: &'static str,
    pub cell: Cell,
    pub bounds: Bounds,
}

fn place(
    pattern: &'static str,
    anchor: Cell,
    bounds: Bounds,
    offsets: &[(i64, i64)],
) -> Result<FxHashSet<Cell>, OutOfBoundsError> {
    offsets
        .iter()
        .map(|&(row, col)| {
            let cell = Cell::new(anchor.row + row, anchor.col + col);
            if bounds.contains(cell) {
                Ok(cell)
            } else {
                Err(OutOfBoundsError {
                    pattern,
                    cell,
                    bounds,
                })
            }
        })
        .collect()
}

/// A 5-cell glider anchored at `anchor`, travelling down-right.
pub fn glider(anchor: Cell, bounds: Bounds) -> Result<FxHashSet<Cell>, OutOfBoundsError> {
    place(
        "glider",
        anchor,
        bounds,
        &[(0, 0), (1, 1), (1, 2), (0, 2), (-1, 2)],
    )
}

/// The 36-cell Gosper glider gun, anchored at the left tip of its left
/// shooter arm. The layout spans rows `anchor.row - 5 ..= anchor.row + 3`
/// and columns `anchor.col - 10 ..= anchor.col + 25`.
pub fn gun(anchor: Cell, bounds: Bounds) -> Result<FxHashSet<Cell>, OutOfBoundsError> {
    #[rustfmt::skip]
    const OFFSETS: [(i64, i64); 36] = [
        // left block
        (0, -9), (0, -10), (-1, -9), (-1, -10),
        // right block
        (-2, 24), (-2, 25), (-3, 24), (-3, 25),
        // left shooter arm
        (0, 0), (1, 0), (2, 1), (3, 2), (3, 3), (0, 4), (2, 5), (0, 6),
        (0, 7), (1, 6), (-1, 6), (-1, 0), (-2, 1), (-3, 2), (-3, 3), (-2, 5),
        // right shooter arm
        (-1, 10), (-2, 10), (-3, 10), (-1, 11), (-2, 11), (-3, 11),
        (0, 12), (-4, 12), (0, 14), (1, 14), (-4, 14), (-5, 14),
    ];
    place("gun", anchor, bounds, &OFFSETS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glider_shape() {
        let cells = glider(Cell::new(2, 2), Bounds::new(10, 10)).unwrap();
        let expected: FxHashSet<Cell> = [(2, 2), (3, 3), (3, 4), (2, 4), (1, 4)]
            .iter()
            .map(|&c| Cell::from(c))
            .collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_glider_out_of_bounds() {
        // The topmost cell sits one row above the anchor.
        let err = glider(Cell::new(0, 2), Bounds::new(10, 10)).unwrap_err();
        assert_eq!(err.pattern, "glider");
        assert_eq!(err.cell, Cell::new(-1, 4));
        assert!(glider(Cell::new(9, 9), Bounds::new(10, 10)).is_err());
        assert!(glider(Cell::new(9, 8), Bounds::new(10, 10)).is_ok());
    }

    #[test]
    fn test_gun_shape() {
        let cells = gun(Cell::new(15, 25), Bounds::new(100, 100)).unwrap();
        assert_eq!(cells.len(), 36);
        assert!(cells.contains(&Cell::new(15, 15))); // left block
        assert!(cells.contains(&Cell::new(12, 50))); // right block
        assert!(cells.contains(&Cell::new(15, 25))); // anchor
    }

    #[test]
    fn test_gun_out_of_bounds() {
        assert!(gun(Cell::new(15, 25), Bounds::new(100, 100)).is_ok());
        // Too close to the left edge for the left block.
        assert!(gun(Cell::new(15, 9), Bounds::new(100, 100)).is_err());
        // Too close to the top for the right shooter arm.
        assert!(gun(Cell::new(4, 25), Bounds::new(100, 100)).is_err());
        assert!(gun(Cell::new(5, 25), Bounds::new(100, 100)).is_ok());
    }
}
