use crate::rule::Rule;
use rustc_hash::FxHashSet;

/// A grid coordinate. Rows grow downwards, columns to the right.
#[derive(Hash, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Debug)]
pub struct Cell {
    pub row: i64,
    pub col: i64,
}

impl Cell {
    pub const fn new(row: i64, col: i64) -> Self {
        Cell { row, col }
    }
}

impl From<(i64, i64)> for Cell {
    fn from((row, col): (i64, i64)) -> Self {
        Cell { row, col }
    }
}

/// Inclusive grid bounds. `Bounds::new(100, 100)` addresses 101×101 cells,
/// `(0, 0)` through `(100, 100)`.
#[derive(Hash, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Debug)]
pub struct Bounds {
    pub max_row: i64,
    pub max_col: i64,
}

impl Bounds {
    pub const fn new(max_row: i64, max_col: i64) -> Self {
        Bounds { max_row, max_col }
    }

    pub const fn contains(&self, cell: Cell) -> bool {
        0 <= cell.row && cell.row <= self.max_row && 0 <= cell.col && cell.col <= self.max_col
    }
}

#[derive(Clone, Debug)]
pub struct World {
    pub(crate) rule: Rule,
    bounds: Bounds,
    pub(crate) generation: u64,
    pub(crate) current: FxHashSet<Cell>,
    pub(crate) previous: FxHashSet<Cell>,
}

impl World {
    /// Creates a world with the default `B3/S23` rule.
    ///
    /// The seed population is taken as-is: cells outside the bounds are
    /// tolerated, but clipping keeps them out of every neighborhood, so
    /// they die on the first step without influencing any count.
    pub fn new(initial_population: FxHashSet<Cell>, bounds: Bounds) -> Self {
        Self::new_with_rule(initial_population, bounds, Rule::default())
    }

    pub fn new_with_rule(initial_population: FxHashSet<Cell>, bounds: Bounds, rule: Rule) -> Self {
        World {
            rule,
            bounds,
            generation: 0,
            current: initial_population,
            previous: FxHashSet::default(),
        }
    }

    /// The set of currently alive cells.
    pub fn population(&self) -> &FxHashSet<Cell> {
        &self.current
    }

    /// Number of completed generation steps.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn get_cell(&self, row: i64, col: i64) -> bool {
        self.current.contains(&Cell::new(row, col))
    }

    /// Out-of-bounds writes are clipped away, like everything else outside
    /// the grid.
    pub fn set_cell(&mut self, row: i64, col: i64, state: bool) -> &mut Self {
        let cell = Cell::new(row, col);
        if self.bounds.contains(cell) {
            if state {
                self.current.insert(cell);
            } else {
                self.current.remove(&cell);
            }
        }
        self
    }

    /// The Moore neighborhood of `cell`, clipped to the bounds: up to 8
    /// cells, 5 on an edge, 3 in a corner. No wraparound.
    pub fn neighbors(&self, cell: Cell) -> FxHashSet<Cell> {
        let mut neighbors = FxHashSet::default();
        for row in cell.row - 1..=cell.row + 1 {
            for col in cell.col - 1..=cell.col + 1 {
                let candidate = Cell::new(row, col);
                if candidate != cell && self.bounds.contains(candidate) {
                    neighbors.insert(candidate);
                }
            }
        }
        neighbors
    }

    /// Alive neighbors of `cell` in last generation's snapshot.
    pub(crate) fn count_alive_neighbors(&self, cell: Cell) -> u8 {
        self.neighbors(cell)
            .into_iter()
            .filter(|neighbor| self.previous.contains(neighbor))
            .count() as u8
    }

    /// Dead cells adjacent to at least one cell of the snapshot. No other
    /// cell can reach three alive neighbors, so this is the exact birth
    /// candidate set.
    pub(crate) fn possible_newborns(&self) -> FxHashSet<Cell> {
        let mut candidates = FxHashSet::default();
        for &cell in &self.previous {
            candidates.extend(self.neighbors(cell));
        }
        candidates.retain(|cell| !self.previous.contains(cell));
        candidates
    }
}
