use crate::world::World;

impl World {
    /// Rasterizes the population into a dense boolean matrix of shape
    /// `(max_row + 1) × (max_col + 1)`. Out-of-bounds seed cells are
    /// clipped away, as everywhere else.
    pub fn to_grid(&self) -> Vec<Vec<bool>> {
        let bounds = self.bounds();
        let mut grid = vec![vec![false; bounds.max_col as usize + 1]; bounds.max_row as usize + 1];
        for cell in self.population() {
            if bounds.contains(*cell) {
                grid[cell.row as usize][cell.col as usize] = true;
            }
        }
        grid
    }

    /// Visits every alive cell as `(row, col)`, in no particular order.
    pub fn for_living_cells<F>(&self, f: F)
    where
        F: FnMut(i64, i64),
    {
        let mut f = f;
        for cell in self.population() {
            f(cell.row, cell.col);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::world::{Bounds, Cell, World};
    use rustc_hash::FxHashSet;

    #[test]
    fn test_to_grid() {
        let population: FxHashSet<Cell> =
            [(0, 0), (2, 3), (7, 9)].iter().map(|&c| Cell::from(c)).collect();
        let world = World::new(population, Bounds::new(2, 3));
        let grid = world.to_grid();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0].len(), 4);
        assert_eq!(grid[0][0], true);
        assert_eq!(grid[2][3], true);
        assert_eq!(grid[1][1], false);
        assert_eq!(grid.iter().flatten().filter(|&&b| b).count(), 2);
    }

    #[test]
    fn test_for_living_cells() {
        let population: FxHashSet<Cell> =
            [(1, 1), (2, 2)].iter().map(|&c| Cell::from(c)).collect();
        let world = World::new(population.clone(), Bounds::new(5, 5));
        let mut visited = FxHashSet::default();
        world.for_living_cells(|row, col| {
            visited.insert(Cell::new(row, col));
        });
        assert_eq!(visited, population);
    }
}
