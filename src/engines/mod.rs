mod active;
mod dense;
#[cfg(test)]
mod tests;

pub use active::ActiveSetEngine;
pub use dense::DenseEngine;

use crate::{Engine, Result, Rule};
use std::fmt;
use std::str::FromStr;

/// Update strategy, for choosing an engine at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EngineKind {
    /// Every cell is recomputed each generation.
    Dense,
    /// Only alive cells and their neighbors are recomputed.
    #[default]
    ActiveSet,
}

impl EngineKind {
    /// Create a blank engine of this kind.
    pub fn create(self, width: usize, height: usize, rule: Rule) -> Result<Box<dyn Engine>> {
        Ok(match self {
            EngineKind::Dense => Box::new(DenseEngine::with_rule(width, height, rule)?),
            EngineKind::ActiveSet => Box::new(ActiveSetEngine::with_rule(width, height, rule)?),
        })
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EngineKind::Dense => "dense",
            EngineKind::ActiveSet => "active",
        })
    }
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dense" => Ok(EngineKind::Dense),
            "active" | "active-set" => Ok(EngineKind::ActiveSet),
            _ => Err(format!("unknown engine {:?}, expected \"dense\" or \"active\"", s)),
        }
    }
}
