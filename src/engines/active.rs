use crate::{Engine, Grid, NiceInt, PatternOptions, Result, Rule};
use ahash::AHashSet;

/// Engine that only visits alive cells and their neighbors.
///
/// A cell can change state only if it is alive or touches an alive cell, so
/// each step works on the alive set plus its one-cell halo instead of the
/// whole grid. Rules with birth on 0 neighbors fall back to a full pass.
/// Results are identical to [`crate::DenseEngine`].
pub struct ActiveSetEngine {
    grid: Grid,
    /// Buffer indices of alive cells; always equal to `{c : c.alive}`.
    active: AHashSet<usize>,
    /// Number of cells visited by the last step.
    visited_last: usize,
}

impl ActiveSetEngine {
    /// Buffer indices of the currently alive cells.
    pub fn active(&self) -> &AHashSet<usize> {
        &self.active
    }

    fn track(&mut self, idx: usize) {
        if self.grid.cell_at(idx).is_alive() {
            self.active.insert(idx);
        } else {
            self.active.remove(&idx);
        }
    }
}

impl Engine for ActiveSetEngine {
    fn with_rule(width: usize, height: usize, rule: Rule) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(width, height, rule)?,
            active: AHashSet::new(),
            visited_last: 0,
        })
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn step(&mut self) {
        // The visit set must be complete before any cell is advanced.
        let visit: AHashSet<usize> = if self.grid.rule().is_born(0) {
            // isolated dead cells can be born, so nothing may be skipped
            (0..self.grid.cells().len()).collect()
        } else {
            let mut visit = AHashSet::with_capacity(self.active.len() * 9);
            for &idx in &self.active {
                visit.insert(idx);
                visit.extend(self.grid.neighbors_at(idx).iter().copied());
            }
            visit
        };

        self.grid.tally(visit.iter().copied());
        self.grid.commit(visit.iter().copied());
        self.active = visit
            .iter()
            .copied()
            .filter(|&idx| self.grid.cell_at(idx).is_alive())
            .collect();
        self.visited_last = visit.len();
        self.grid.finish_generation();
        tracing::trace!(
            generation = self.grid.generation(),
            visited = visit.len(),
            active = self.active.len(),
            "active-set step"
        );
    }

    fn reset(&mut self) {
        self.grid.reset();
        self.active.clear();
        self.visited_last = 0;
    }

    fn set_alive(&mut self, x: i64, y: i64, alive: bool) {
        let idx = self.grid.set_alive(x, y, alive);
        self.track(idx);
    }

    fn set_generation(&mut self, generation: u64) {
        self.grid.set_generation(generation);
    }

    fn load_pattern(
        &mut self,
        text: &str,
        options: &PatternOptions<'_>,
    ) -> Result<AHashSet<(usize, usize)>> {
        let touched = self.grid.load_pattern(text, options)?;
        if options.resize {
            self.active.clear();
            self.visited_last = 0;
        }
        for &(x, y) in &touched {
            let idx = self.grid.index(x as i64, y as i64);
            self.track(idx);
        }
        Ok(touched)
    }

    fn alive_cells(&self) -> Vec<(usize, usize)> {
        let mut indices = self.active.iter().copied().collect::<Vec<_>>();
        indices.sort_unstable();
        indices
            .into_iter()
            .map(|idx| self.grid.cell_at(idx).location())
            .collect()
    }

    fn population(&self) -> usize {
        self.active.len()
    }

    fn stats(&self) -> String {
        let (width, height) = self.grid.dimensions();
        format!(
            "generation: {}\npopulation: {}\nsize: {}x{}\nrule: {}\nvisited last step: {}",
            NiceInt::from(self.grid.generation()),
            NiceInt::from_usize(self.active.len()),
            width,
            height,
            self.grid.rule(),
            NiceInt::from_usize(self.visited_last),
        )
    }
}
