use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A set of neighbor counts in `0..=8`, stored as a bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NeighborSet(u16);

impl NeighborSet {
    const FULL: u16 = 0x1ff;

    pub const fn empty() -> Self {
        Self(0)
    }

    /// Builds a set from counts; values above 8 are ignored.
    pub fn from_counts(counts: &[u8]) -> Self {
        let mut mask = 0;
        for &n in counts {
            if n <= 8 {
                mask |= 1 << n;
            }
        }
        Self(mask)
    }

    pub fn contains(&self, n: u8) -> bool {
        n <= 8 && self.0 & (1 << n) != 0
    }

    /// Counts in `0..=8` that are not in `self`.
    pub fn complement(&self) -> Self {
        Self(!self.0 & Self::FULL)
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=8).filter(|&n| self.contains(n))
    }
}

/// Transition rule of a two-state automaton on the Moore neighborhood.
///
/// A dead cell is born when its neighbor count is in `born`; an alive cell
/// dies when its count is in `die` and survives otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    born: NeighborSet,
    die: NeighborSet,
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

impl Rule {
    pub fn new(born: &[u8], die: &[u8]) -> Self {
        Self {
            born: NeighborSet::from_counts(born),
            die: NeighborSet::from_counts(die),
        }
    }

    /// Builds a rule from birth and survival counts (`B.../S...` notation).
    pub fn from_born_survive(born: &[u8], survive: &[u8]) -> Self {
        Self {
            born: NeighborSet::from_counts(born),
            die: NeighborSet::from_counts(survive).complement(),
        }
    }

    /// Conway's Game of Life, B3/S23.
    pub fn conway() -> Self {
        Self::new(&[3], &[0, 1, 4, 5, 6, 7, 8])
    }

    /// HighLife, B36/S23.
    pub fn high_life() -> Self {
        Self::from_born_survive(&[3, 6], &[2, 3])
    }

    /// Day & Night, B3678/S34678.
    pub fn day_and_night() -> Self {
        Self::from_born_survive(&[3, 6, 7, 8], &[3, 4, 6, 7, 8])
    }

    /// Seeds, B2/S: every alive cell dies each generation.
    pub fn seeds() -> Self {
        Self::from_born_survive(&[2], &[])
    }

    pub fn born(&self) -> NeighborSet {
        self.born
    }

    pub fn die(&self) -> NeighborSet {
        self.die
    }

    pub fn survive(&self) -> NeighborSet {
        self.die.complement()
    }

    pub fn is_born(&self, neighbors: u8) -> bool {
        self.born.contains(neighbors)
    }

    pub fn dies(&self, neighbors: u8) -> bool {
        self.die.contains(neighbors)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for n in self.born.iter() {
            write!(f, "{}", n)?;
        }
        write!(f, "/S")?;
        for n in self.survive().iter() {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

impl FromStr for Rule {
    type Err = Error;

    /// Parses `B3/S23`-style notation; the two halves may come in either order.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidRule(s.to_string());

        let (mut born, mut survive) = (None, None);
        for part in s.trim().split('/') {
            let mut chars = part.chars();
            let slot = match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => &mut born,
                Some('S') => &mut survive,
                _ => return Err(invalid()),
            };
            if slot.is_some() {
                return Err(invalid());
            }
            let counts = chars
                .map(|c| match c.to_digit(10) {
                    Some(d) if d <= 8 => Ok(d as u8),
                    _ => Err(invalid()),
                })
                .collect::<Result<Vec<u8>>>()?;
            *slot = Some(counts);
        }

        match (born, survive) {
            (Some(b), Some(s)) => Ok(Self::from_born_survive(&b, &s)),
            _ => Err(invalid()),
        }
    }
}
