use std::time::Instant;
use torus_life::{ActiveSetEngine, DenseEngine, Engine};

const N: usize = 1 << 10;
const GENERATIONS: u64 = 200;

/// A sparse field: a few gliders and methuselahs on a large torus.
fn seed(engine: &mut dyn Engine) {
    for (i, name) in ["glider", "r-pentomino", "acorn", "lwss", "diehard"]
        .iter()
        .enumerate()
    {
        let offset = (i * N / 5) as i64;
        engine.load_named_pattern(name, offset, offset).unwrap();
    }
}

fn main() {
    let timer = Instant::now();
    let mut dense = DenseEngine::blank(N, N).unwrap();
    let mut active = ActiveSetEngine::blank(N, N).unwrap();
    seed(&mut dense);
    seed(&mut active);
    println!("Time on building fields: {:?}", timer.elapsed());

    let timer = Instant::now();
    dense.update(GENERATIONS);
    println!("Time on dense update: {:?}", timer.elapsed());

    let timer = Instant::now();
    active.update(GENERATIONS);
    println!("Time on active-set update: {:?}", timer.elapsed());

    println!("{}", active.stats());
    assert_eq!(dense.alive_cells(), active.alive_cells());
}
