use crate::{Error, Result};
use ahash::AHashMap;
use std::sync::OnceLock;

// Live cells are 'O', dead cells are spaces.

const BLOCK: &str = concat!("OO\n", "OO");

const BEEHIVE: &str = concat!(" OO \n", "O  O\n", " OO ");

const LOAF: &str = concat!(" OO \n", "O  O\n", " O O\n", "  O ");

const BOAT: &str = concat!("OO \n", "O O\n", " O ");

const BLINKER: &str = "OOO";

const TOAD: &str = concat!(" OOO\n", "OOO ");

const BEACON: &str = concat!("OO  \n", "OO  \n", "  OO\n", "  OO");

const PULSAR: &str = concat!(
    "  OOO   OOO  \n",
    "\n",
    "O    O O    O\n",
    "O    O O    O\n",
    "O    O O    O\n",
    "  OOO   OOO  \n",
    "\n",
    "  OOO   OOO  \n",
    "O    O O    O\n",
    "O    O O    O\n",
    "O    O O    O\n",
    "\n",
    "  OOO   OOO  ",
);

const GLIDER: &str = concat!(" O \n", "  O\n", "OOO");

const LWSS: &str = concat!("O  O \n", "    O\n", "O   O\n", " OOOO");

const R_PENTOMINO: &str = concat!(" OO\n", "OO \n", " O ");

const DIEHARD: &str = concat!("      O \n", "OO      \n", " O   OOO");

const ACORN: &str = concat!(" O     \n", "   O   \n", "OO  OOO");

const GOSPER_GLIDER_GUN: &str = concat!(
    "                        O           \n",
    "                      O O           \n",
    "            OO      OO            OO\n",
    "           O   O    OO            OO\n",
    "OO        O     O   OO              \n",
    "OO        O   O OO    O O           \n",
    "          O     O       O           \n",
    "           O   O                    \n",
    "            OO                      ",
);

const ENTRIES: [(&str, &str); 14] = [
    ("block", BLOCK),
    ("beehive", BEEHIVE),
    ("loaf", LOAF),
    ("boat", BOAT),
    ("blinker", BLINKER),
    ("toad", TOAD),
    ("beacon", BEACON),
    ("pulsar", PULSAR),
    ("glider", GLIDER),
    ("lwss", LWSS),
    ("r-pentomino", R_PENTOMINO),
    ("diehard", DIEHARD),
    ("acorn", ACORN),
    ("gosper-glider-gun", GOSPER_GLIDER_GUN),
];

fn catalog() -> &'static AHashMap<&'static str, &'static str> {
    static CATALOG: OnceLock<AHashMap<&'static str, &'static str>> = OnceLock::new();
    CATALOG.get_or_init(|| ENTRIES.into_iter().collect())
}

/// Returns the text of a built-in pattern; `name` is case-insensitive.
pub fn lookup_named_pattern(name: &str) -> Result<&'static str> {
    catalog()
        .get(name.to_lowercase().as_str())
        .copied()
        .ok_or_else(|| Error::UnknownPattern(name.to_string()))
}

/// Names of all built-in patterns, sorted.
pub fn pattern_names() -> Vec<&'static str> {
    let mut names = catalog().keys().copied().collect::<Vec<_>>();
    names.sort_unstable();
    names
}
