use crate::world::World;

impl World {
    /// Advances the world by one generation.
    ///
    /// Neighbor counts for both the death and the birth pass are taken
    /// against the snapshot of the population at the start of the step,
    /// never against the set being mutated, so iteration order cannot
    /// affect the outcome. An empty world stays empty and the generation
    /// counter stays put.
    pub fn step(&mut self) {
        if self.current.is_empty() {
            return;
        }
        self.generation += 1;
        self.previous = self.current.clone();
        let newborn_candidates = self.possible_newborns();

        let deaths: Vec<_> = self
            .previous
            .iter()
            .copied()
            .filter(|&cell| !self.rule.survives(self.count_alive_neighbors(cell)))
            .collect();
        for cell in deaths {
            self.current.remove(&cell);
        }

        for &cell in &newborn_candidates {
            if self.rule.born(self.count_alive_neighbors(cell)) {
                self.current.insert(cell);
            }
        }
    }
}
