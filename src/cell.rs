use crate::Rule;

/// State of one grid position.
///
/// `age` counts the generations the cell has been continuously alive and is
/// always 0 for a dead cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    location: (usize, usize),
    alive: bool,
    age: u32,
    alive_neighbors: u8,
}

impl Cell {
    pub(crate) fn new(x: usize, y: usize) -> Self {
        Self {
            location: (x, y),
            alive: false,
            age: 0,
            alive_neighbors: 0,
        }
    }

    pub fn location(&self) -> (usize, usize) {
        self.location
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Neighbor count stored by the last tally pass.
    pub fn alive_neighbors(&self) -> u8 {
        self.alive_neighbors
    }

    /// Liveness as 0 or 1, for summing neighborhoods.
    pub fn as_int(&self) -> u8 {
        self.alive as u8
    }

    pub(crate) fn set_alive_neighbors(&mut self, count: u8) {
        self.alive_neighbors = count;
    }

    /// Forces the state; a cell set alive starts at age 1, a dead one at 0.
    pub(crate) fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
        self.age = alive as u32;
    }

    /// Applies `rule` for the given neighbor count.
    pub fn advance(&mut self, neighbors: u8, rule: &Rule) {
        if self.alive {
            if rule.dies(neighbors) {
                self.alive = false;
                self.age = 0;
            } else {
                self.age = self.age.saturating_add(1);
            }
        } else if rule.is_born(neighbors) {
            self.alive = true;
            self.age = 1;
        }
    }
}
