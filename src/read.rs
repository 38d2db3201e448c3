use crate::world::{Bounds, Cell, World};
use ca_formats::{
    rle::{Error as RleError, Rle},
    Input,
};
use rustc_hash::FxHashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("invalid RLE input: {0}")]
    Rle(#[from] RleError),
    #[error("pattern cell ({},{}) is outside bounds ({},{})", cell.row, cell.col, bounds.max_row, bounds.max_col)]
    OutOfBounds { cell: Cell, bounds: Bounds },
}

impl World {
    /// Builds a world from an RLE pattern, reading the rule from the header
    /// (`B3/S23` when absent). RLE `(x, y)` positions map to `(col, row)`.
    pub fn from_rle<I: Input>(rle: Rle<I>, bounds: Bounds) -> Result<Self, ReadError> {
        let rule = rle
            .header_data()
            .and_then(|header| header.rule.as_deref())
            .and_then(|rulestring| rulestring.parse().ok())
            .unwrap_or_default();
        let mut world = Self::new_with_rule(FxHashSet::default(), bounds, rule);
        for cell in rle {
            let (x, y) = cell?.position;
            let cell = Cell::new(y, x);
            if !bounds.contains(cell) {
                return Err(ReadError::OutOfBounds { cell, bounds });
            }
            world.current.insert(cell);
        }
        Ok(world)
    }
}
