use crate::{
    lookup_named_pattern, Cell, Grid, Markers, NiceInt, PatternOptions, Result, Rule, Snapshot,
};
use ahash::AHashSet;
use std::io::{Read, Write};

/// Engine trait for Game of Life with edges stitched together.
pub trait Engine {
    /// Create a blank `width x height` field that evolves by `rule`.
    ///
    /// Fails with [`crate::Error::InvalidDimension`] if either side is zero.
    fn with_rule(width: usize, height: usize, rule: Rule) -> Result<Self>
    where
        Self: Sized;

    /// Create a blank field with the B3/S23 rule
    fn blank(width: usize, height: usize) -> Result<Self>
    where
        Self: Sized,
    {
        Self::with_rule(width, height, Rule::default())
    }

    /// Create a field with random cells
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    fn random(width: usize, height: usize, seed: Option<u64>, fill_rate: f64) -> Result<Self>
    where
        Self: Sized,
    {
        let mut result = Self::blank(width, height)?;
        result.randomize(seed, fill_rate);
        Ok(result)
    }

    /// Set every cell alive with probability `fill_rate`, keeping the rest as is.
    ///
    /// Rates outside `[0, 1]` are clamped; NaN fills nothing.
    fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        use rand::{Rng, SeedableRng};
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let fill_rate = if fill_rate.is_nan() {
            0.
        } else {
            fill_rate.clamp(0., 1.)
        };
        let (width, height) = self.dimensions();
        for y in 0..height {
            for x in 0..width {
                if rng.gen_bool(fill_rate) {
                    self.set_alive(x as i64, y as i64, true);
                }
            }
        }
    }

    /// Create a field sized to fit pattern text
    fn from_text(text: &str, rule: Rule) -> Result<Self>
    where
        Self: Sized,
    {
        let mut result = Self::with_rule(1, 1, rule)?;
        result.load_pattern(text, &PatternOptions::resized())?;
        Ok(result)
    }

    /// Read a field previously saved with [`Engine::write_to`]
    fn read_from<R: Read>(mut reader: R, rule: Rule, markers: &Markers) -> Result<Self>
    where
        Self: Sized,
    {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let classifier = markers.classifier();
        let mut result = Self::with_rule(1, 1, rule)?;
        result.load_pattern(&text, &PatternOptions::resized().with_classifier(&classifier))?;
        Ok(result)
    }

    /// Rebuild a field from a snapshot; live cells start at age 1.
    fn restore(snapshot: &Snapshot) -> Result<Self>
    where
        Self: Sized,
    {
        snapshot.validate()?;
        let mut result = Self::with_rule(snapshot.width, snapshot.height, snapshot.parsed_rule()?)?;
        for &[x, y] in &snapshot.alive {
            result.set_alive(x as i64, y as i64, true);
        }
        result.set_generation(snapshot.generation);
        Ok(result)
    }

    fn grid(&self) -> &Grid;

    /// Advance the field by one generation.
    fn step(&mut self);

    /// Advance the field by `generations` generations.
    fn update(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// Kill every cell and set the generation counter to zero.
    fn reset(&mut self);

    fn set_alive(&mut self, x: i64, y: i64, alive: bool);

    /// Overwrite the generation counter, e.g. when resuming a saved run.
    fn set_generation(&mut self, generation: u64);

    /// Stamp pattern text onto the field, see [`Grid::load_pattern`].
    fn load_pattern(
        &mut self,
        text: &str,
        options: &PatternOptions<'_>,
    ) -> Result<AHashSet<(usize, usize)>>;

    /// Stamp a catalog pattern with its top-left corner at `(x, y)`.
    fn load_named_pattern(&mut self, name: &str, x: i64, y: i64) -> Result<AHashSet<(usize, usize)>> {
        let text = lookup_named_pattern(name)?;
        self.load_pattern(text, &PatternOptions::at(x, y))
    }

    fn get(&self, x: i64, y: i64) -> &Cell {
        self.grid().get(x, y)
    }

    /// Locations of alive cells in row-major order.
    fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.grid().alive_cells()
    }

    fn population(&self) -> usize {
        self.grid().population()
    }

    fn generation(&self) -> u64 {
        self.grid().generation()
    }

    fn dimensions(&self) -> (usize, usize) {
        self.grid().dimensions()
    }

    fn render(&self, markers: &Markers) -> String {
        self.grid().render(markers)
    }

    /// Save the field as marker text, readable by [`Engine::read_from`].
    fn write_to(&self, writer: &mut dyn Write, markers: &Markers) -> Result<()> {
        writer.write_all(self.render(markers).as_bytes())?;
        Ok(())
    }

    fn snapshot(&self) -> Snapshot {
        let (width, height) = self.dimensions();
        Snapshot {
            width,
            height,
            generation: self.generation(),
            rule: self.grid().rule().to_string(),
            alive: self.alive_cells().into_iter().map(|(x, y)| [x, y]).collect(),
        }
    }

    /// Returns multiline string reporting engine stats.
    fn stats(&self) -> String {
        let (width, height) = self.dimensions();
        format!(
            "generation: {}\npopulation: {}\nsize: {}x{}\nrule: {}",
            NiceInt::from(self.generation()),
            NiceInt::from_usize(self.population()),
            width,
            height,
            self.grid().rule(),
        )
    }
}
