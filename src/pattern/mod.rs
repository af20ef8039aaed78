mod catalog;

pub use catalog::{lookup_named_pattern, pattern_names};

use crate::{Error, Grid, Result};
use ahash::AHashSet;

/// Default glyph classifier: any non-whitespace character is a live cell.
pub fn default_is_alive(c: char) -> bool {
    !c.is_whitespace()
}

/// How pattern text is placed onto a grid.
#[derive(Clone, Copy)]
pub struct PatternOptions<'a> {
    /// Grid coordinates of the pattern's first character.
    pub origin: (i64, i64),
    /// Decides whether a character marks a live cell.
    pub classifier: &'a dyn Fn(char) -> bool,
    pub line_separator: &'a str,
    /// Recreate the grid with the pattern's dimensions before stamping.
    pub resize: bool,
}

impl Default for PatternOptions<'_> {
    fn default() -> Self {
        Self {
            origin: (0, 0),
            classifier: &default_is_alive,
            line_separator: "\n",
            resize: false,
        }
    }
}

impl<'a> PatternOptions<'a> {
    pub fn at(x: i64, y: i64) -> Self {
        Self {
            origin: (x, y),
            ..Default::default()
        }
    }

    pub fn resized() -> Self {
        Self {
            resize: true,
            ..Default::default()
        }
    }

    pub fn with_classifier(self, classifier: &'a dyn Fn(char) -> bool) -> Self {
        Self { classifier, ..self }
    }

    pub fn with_line_separator(self, line_separator: &'a str) -> Self {
        Self {
            line_separator,
            ..self
        }
    }
}

/// Glyphs used to render dead and alive cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Markers {
    pub dead: char,
    pub alive: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            dead: ' ',
            alive: '#',
        }
    }
}

impl Markers {
    pub fn new(dead: char, alive: char) -> Self {
        Self { dead, alive }
    }

    pub fn glyph(&self, alive: bool) -> char {
        if alive {
            self.alive
        } else {
            self.dead
        }
    }

    /// Classifier that reads back text rendered with these markers.
    pub fn classifier(&self) -> impl Fn(char) -> bool {
        let alive = self.alive;
        move |c| c == alive
    }
}

/// Width (longest line, in chars) and height (line count) of pattern text.
pub fn pattern_dimensions(text: &str, line_separator: &str) -> (usize, usize) {
    let lines = text.split(line_separator);
    let (mut width, mut height) = (0, 0);
    for line in lines {
        width = width.max(line.chars().count());
        height += 1;
    }
    (width, height)
}

impl Grid {
    /// Stamps pattern text onto the grid.
    ///
    /// The character in row `Y`, column `X` sets the cell at
    /// `origin + (X, Y)` alive or dead according to the classifier. Live
    /// cells placed this way start at age 1.
    ///
    /// Returns the locations of all touched cells, alive or dead.
    pub fn load_pattern(
        &mut self,
        text: &str,
        options: &PatternOptions,
    ) -> Result<AHashSet<(usize, usize)>> {
        if options.resize {
            let (width, height) = pattern_dimensions(text, options.line_separator);
            if width == 0 || height == 0 {
                return Err(Error::InvalidDimension { width, height });
            }
            self.resize(width, height)?;
        }

        let (x0, y0) = self.wrap(options.origin.0, options.origin.1);
        let (width, height) = self.dimensions();
        let mut touched = AHashSet::new();
        for (y, line) in text.split(options.line_separator).enumerate() {
            for (x, c) in line.chars().enumerate() {
                let (x, y) = ((x0 + x % width) % width, (y0 + y % height) % height);
                let idx = self.set_alive(x as i64, y as i64, (options.classifier)(c));
                touched.insert(self.cell_at(idx).location());
            }
        }
        tracing::debug!(
            origin = ?options.origin,
            touched = touched.len(),
            resize = options.resize,
            "pattern loaded"
        );
        Ok(touched)
    }
}
