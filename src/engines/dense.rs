use crate::{Engine, Grid, PatternOptions, Result, Rule};
use ahash::AHashSet;

/// Straightforward engine that recomputes every cell on each generation.
pub struct DenseEngine {
    grid: Grid,
}

impl Engine for DenseEngine {
    fn with_rule(width: usize, height: usize, rule: Rule) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(width, height, rule)?,
        })
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn step(&mut self) {
        let n = self.grid.cells().len();
        self.grid.tally(0..n);
        self.grid.commit(0..n);
        self.grid.finish_generation();
        tracing::trace!(generation = self.grid.generation(), visited = n, "dense step");
    }

    fn reset(&mut self) {
        self.grid.reset();
    }

    fn set_alive(&mut self, x: i64, y: i64, alive: bool) {
        self.grid.set_alive(x, y, alive);
    }

    fn set_generation(&mut self, generation: u64) {
        self.grid.set_generation(generation);
    }

    fn load_pattern(
        &mut self,
        text: &str,
        options: &PatternOptions<'_>,
    ) -> Result<AHashSet<(usize, usize)>> {
        self.grid.load_pattern(text, options)
    }
}
