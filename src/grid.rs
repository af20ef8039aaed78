use crate::{Cell, Error, Markers, Result, Rule};
use std::fmt;

/// Relative positions of the Moore neighborhood, row by row.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Rectangular field of cells whose edges are stitched together.
///
/// Cells live in one row-major buffer (`y * width + x`); every integer
/// coordinate pair is wrapped onto it, so lookups never go out of bounds.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    /// Buffer indices of the 8 wrapped neighbors of every cell.
    neighbors: Vec<[usize; 8]>,
    generation: u64,
    rule: Rule,
}

impl Grid {
    /// Creates a blank `width x height` grid.
    ///
    /// Fails with [`Error::InvalidDimension`] if either side is zero.
    pub fn new(width: usize, height: usize, rule: Rule) -> Result<Self> {
        Self::check_dimensions(width, height)?;
        let mut grid = Self {
            width,
            height,
            cells: vec![],
            neighbors: vec![],
            generation: 0,
            rule,
        };
        grid.reset();
        Ok(grid)
    }

    fn check_dimensions(width: usize, height: usize) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of completed generations.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Normalizes a coordinate pair onto the torus.
    pub fn wrap(&self, x: i64, y: i64) -> (usize, usize) {
        (
            x.rem_euclid(self.width as i64) as usize,
            y.rem_euclid(self.height as i64) as usize,
        )
    }

    /// Buffer index of the cell at the wrapped coordinates.
    pub fn index(&self, x: i64, y: i64) -> usize {
        let (x, y) = self.wrap(x, y);
        y * self.width + x
    }

    pub fn get(&self, x: i64, y: i64) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    /// Number of alive cells among the 8 neighbors of `(x, y)`.
    pub fn count_neighbors(&self, x: i64, y: i64) -> u8 {
        self.count_neighbors_at(self.index(x, y))
    }

    pub(crate) fn count_neighbors_at(&self, idx: usize) -> u8 {
        self.neighbors[idx]
            .iter()
            .map(|&n| self.cells[n].as_int())
            .sum()
    }

    pub(crate) fn neighbors_at(&self, idx: usize) -> &[usize; 8] {
        &self.neighbors[idx]
    }

    pub(crate) fn cell_at(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Forces the state of one cell and returns its buffer index.
    pub(crate) fn set_alive(&mut self, x: i64, y: i64, alive: bool) -> usize {
        let idx = self.index(x, y);
        self.cells[idx].set_alive(alive);
        idx
    }

    pub(crate) fn set_generation(&mut self, generation: u64) {
        self.generation = generation;
    }

    /// First pass of a step: stores the neighbor count of every listed cell.
    ///
    /// Only `alive_neighbors` is written, so the counts all see the same
    /// pre-step generation.
    pub(crate) fn tally(&mut self, indices: impl IntoIterator<Item = usize>) {
        for idx in indices {
            let count = self.count_neighbors_at(idx);
            self.cells[idx].set_alive_neighbors(count);
        }
    }

    /// Second pass of a step: applies the rule to every listed cell.
    pub(crate) fn commit(&mut self, indices: impl IntoIterator<Item = usize>) {
        let rule = self.rule;
        for idx in indices {
            let cell = &mut self.cells[idx];
            let count = cell.alive_neighbors();
            cell.advance(count, &rule);
        }
    }

    pub(crate) fn finish_generation(&mut self) {
        self.generation += 1;
    }

    /// Sets the generation to 0 and recreates every cell dead.
    pub fn reset(&mut self) {
        let (w, h) = (self.width, self.height);
        self.generation = 0;
        self.cells = (0..w * h).map(|i| Cell::new(i % w, i / w)).collect();
        self.neighbors = (0..w * h)
            .map(|i| {
                let (x, y) = ((i % w) as i64, (i / w) as i64);
                NEIGHBOR_OFFSETS.map(|(dx, dy)| self.index(x + dx, y + dy))
            })
            .collect();
        tracing::debug!(width = w, height = h, "grid reset");
    }

    /// Discards every cell and recreates the grid with new dimensions.
    ///
    /// On error the grid is left untouched.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        Self::check_dimensions(width, height)?;
        self.width = width;
        self.height = height;
        self.reset();
        Ok(())
    }

    /// Locations of alive cells in row-major order.
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .filter(|c| c.is_alive())
            .map(|c| c.location())
            .collect()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Row-major text image of the grid, rows joined by `'\n'`.
    pub fn render(&self, markers: &Markers) -> String {
        let mut result = String::with_capacity((self.width + 1) * self.height);
        for (y, row) in self.cells.chunks(self.width).enumerate() {
            if y != 0 {
                result.push('\n');
            }
            result.extend(row.iter().map(|c| markers.glyph(c.is_alive())));
        }
        result
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Markers::default()))
    }
}
