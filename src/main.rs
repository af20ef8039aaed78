#![warn(clippy::all)]

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use torus_life::{pattern_names, Engine, EngineKind, Markers, PatternOptions, Rule};
use tracing::info;

/// Runs Conway's Game of Life on a wrapping grid and prints it as text.
#[derive(Parser, Debug)]
#[command(name = "torus_life", version)]
struct Cli {
    #[arg(long, default_value_t = 80, env = "TORUS_LIFE_WIDTH")]
    width: usize,

    #[arg(long, default_value_t = 23, env = "TORUS_LIFE_HEIGHT")]
    height: usize,

    /// Rule in B/S notation.
    #[arg(long, default_value = "B3/S23", env = "TORUS_LIFE_RULE")]
    rule: Rule,

    /// Update strategy: "dense" or "active".
    #[arg(long, default_value_t = EngineKind::ActiveSet, env = "TORUS_LIFE_ENGINE")]
    engine: EngineKind,

    /// Catalog pattern to place, as NAME or NAME@X,Y (repeatable).
    #[arg(long = "pattern", short)]
    patterns: Vec<Placement>,

    /// Pattern text file; the grid is resized to fit it.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Fill the grid randomly with this probability before placing patterns.
    #[arg(long)]
    random: Option<f64>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, short, default_value_t = 100)]
    generations: u64,

    /// Print the grid every N generations (0 prints only the final state).
    #[arg(long, default_value_t = 0)]
    every: u64,

    #[arg(long, default_value_t = ' ')]
    dead_marker: char,

    #[arg(long, default_value_t = '#')]
    alive_marker: char,

    /// Write a JSON snapshot of the final state.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// List catalog patterns and exit.
    #[arg(long)]
    list: bool,
}

/// A catalog pattern and where to put its top-left corner.
#[derive(Clone, Debug)]
struct Placement {
    name: String,
    x: i64,
    y: i64,
}

impl FromStr for Placement {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let Some((name, position)) = s.split_once('@') else {
            return Ok(Self {
                name: s.to_string(),
                x: 0,
                y: 0,
            });
        };
        let (x, y) = position
            .split_once(',')
            .ok_or_else(|| format!("expected NAME@X,Y, got {:?}", s))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<i64>()
                .map_err(|e| format!("bad coordinate {:?}: {}", v, e))
        };
        Ok(Self {
            name: name.to_string(),
            x: parse(x)?,
            y: parse(y)?,
        })
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.list {
        for name in pattern_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let markers = Markers::new(cli.dead_marker, cli.alive_marker);
    let mut life = cli.engine.create(cli.width, cli.height, cli.rule)?;

    if let Some(path) = &cli.file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read pattern file {}", path.display()))?;
        life.load_pattern(&text, &PatternOptions::resized())
            .with_context(|| format!("failed to load pattern file {}", path.display()))?;
    }

    if let Some(fill_rate) = cli.random {
        if !(0. ..=1.).contains(&fill_rate) {
            bail!("--random must be within [0, 1], got {}", fill_rate);
        }
        life.randomize(cli.seed, fill_rate);
    }

    for placement in &cli.patterns {
        life.load_named_pattern(&placement.name, placement.x, placement.y)?;
    }

    info!(
        engine = %cli.engine,
        rule = %life.grid().rule(),
        population = life.population(),
        "starting simulation"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let timer = std::time::Instant::now();
    for generation in 1..=cli.generations {
        life.step();
        if cli.every != 0 && generation % cli.every == 0 && generation != cli.generations {
            print_frame(&mut out, &*life, &markers)?;
        }
    }
    print_frame(&mut out, &*life, &markers)?;
    info!(elapsed = ?timer.elapsed(), "simulation finished");
    writeln!(out, "{}", life.stats())?;

    if let Some(path) = &cli.snapshot {
        let json = life.snapshot().to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write snapshot {}", path.display()))?;
        info!(path = %path.display(), "snapshot written");
    }
    Ok(())
}

fn print_frame(out: &mut impl Write, life: &dyn Engine, markers: &Markers) -> Result<()> {
    writeln!(out, "{}", life.render(markers))?;
    writeln!(
        out,
        "Generation: {}  Population: {}\n",
        life.generation(),
        life.population()
    )?;
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
