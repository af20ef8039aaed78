use crate::{Error, Result, Rule};
use serde::{Deserialize, Serialize};

/// Minimal persistent state of a simulation.
///
/// Ages are not stored; restored live cells start at age 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub width: usize,
    pub height: usize,
    pub generation: u64,
    /// Rule in `B3/S23` notation.
    pub rule: String,
    /// Live cells as `[x, y]`, row-major.
    pub alive: Vec<[usize; 2]>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn parsed_rule(&self) -> Result<Rule> {
        self.rule.parse()
    }

    /// Checks that every live cell lies inside the recorded dimensions.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        for &[x, y] in &self.alive {
            if x >= self.width || y >= self.height {
                return Err(Error::SnapshotOutOfBounds { x, y });
            }
        }
        Ok(())
    }
}
