#![warn(clippy::all)]

mod cell;
mod engines;
mod error;
mod grid;
mod pattern;
mod rule;
mod snapshot;
mod utils;

pub use cell::Cell;
pub use engines::{ActiveSetEngine, DenseEngine, EngineKind};
pub use error::{Error, Result};
pub use grid::Grid;
pub use pattern::{
    default_is_alive, lookup_named_pattern, pattern_dimensions, pattern_names, Markers,
    PatternOptions,
};
pub use rule::{NeighborSet, Rule};
pub use snapshot::Snapshot;
pub use utils::{Engine, NiceInt};

pub type DefaultEngine = ActiveSetEngine;
