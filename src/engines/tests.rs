use super::*;
use crate::{pattern_names, Error, Markers, PatternOptions};

const OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

fn both(width: usize, height: usize) -> Vec<Box<dyn Engine>> {
    both_with_rule(width, height, Rule::default())
}

fn both_with_rule(width: usize, height: usize, rule: Rule) -> Vec<Box<dyn Engine>> {
    vec![
        EngineKind::Dense.create(width, height, rule).unwrap(),
        EngineKind::ActiveSet.create(width, height, rule).unwrap(),
    ]
}

fn glyph_count(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

#[test]
fn test_invalid_dimensions() {
    assert!(matches!(
        DenseEngine::blank(0, 10),
        Err(Error::InvalidDimension { width: 0, height: 10 })
    ));
    assert!(matches!(
        ActiveSetEngine::blank(10, 0),
        Err(Error::InvalidDimension { width: 10, height: 0 })
    ));
}

#[test]
fn test_neighbor_counts_across_edges() {
    for n in 0..=8 {
        for mut engine in both(10, 10) {
            for &(dx, dy) in OFFSETS.iter().take(n) {
                engine.set_alive(dx, dy, true);
            }
            assert_eq!(engine.grid().count_neighbors(0, 0), n as u8);
            assert_eq!(engine.grid().count_neighbors(10, -10), n as u8);
        }
    }
}

#[test]
fn test_birth_and_death_table() {
    for n in 0..=8usize {
        for center_alive in [false, true] {
            for mut engine in both(12, 12) {
                for &(dx, dy) in OFFSETS.iter().take(n) {
                    engine.set_alive(6 + dx, 6 + dy, true);
                }
                engine.set_alive(6, 6, center_alive);
                engine.step();

                let center = engine.get(6, 6);
                let expected = if center_alive { n == 2 || n == 3 } else { n == 3 };
                assert_eq!(center.is_alive(), expected, "n={} alive={}", n, center_alive);
                if !center.is_alive() {
                    assert_eq!(center.age(), 0);
                }
            }
        }
    }
}

#[test]
fn test_lone_cell_dies() {
    for mut engine in both(9, 9) {
        engine.set_alive(4, 4, true);
        engine.step();
        assert_eq!(engine.population(), 0);
        assert_eq!(engine.get(4, 4).age(), 0);
        assert_eq!(engine.generation(), 1);
    }
}

#[test]
fn test_block_is_still_life() {
    for mut engine in both(4, 4) {
        engine.load_named_pattern("block", 1, 1).unwrap();
        let block = vec![(1, 1), (2, 1), (1, 2), (2, 2)];
        for generation in 1..=12 {
            engine.step();
            assert_eq!(engine.alive_cells(), block);
            for &(x, y) in &block {
                assert_eq!(engine.get(x as i64, y as i64).age(), generation + 1);
            }
        }
    }
}

#[test]
fn test_blinker_oscillates() {
    let horizontal = vec![(2, 3), (3, 3), (4, 3)];
    let vertical = vec![(3, 2), (3, 3), (3, 4)];
    for mut engine in both(8, 8) {
        engine.load_named_pattern("blinker", 2, 3).unwrap();
        for generation in 1..=8u32 {
            engine.step();
            let (now, before) = if generation % 2 == 0 {
                (&horizontal, &vertical)
            } else {
                (&vertical, &horizontal)
            };
            assert_eq!(&engine.alive_cells(), now);
            assert_eq!(engine.get(3, 3).age(), generation + 1);
            for &(x, y) in [before[0], before[2]].iter() {
                assert_eq!(engine.get(x as i64, y as i64).age(), 0);
            }
            for &(x, y) in [now[0], now[2]].iter() {
                assert_eq!(engine.get(x as i64, y as i64).age(), 1);
            }
        }
    }
}

#[test]
fn test_age_counts_generations_since_birth() {
    for mut engine in both(8, 8) {
        // three corners of a block; the fourth is born on the first step
        engine.set_alive(2, 2, true);
        engine.set_alive(3, 2, true);
        engine.set_alive(2, 3, true);
        assert!(!engine.get(3, 3).is_alive());
        for k in 1..=10 {
            engine.step();
            assert!(engine.get(3, 3).is_alive());
            assert_eq!(engine.get(3, 3).age(), k);
        }
    }
}

#[test]
fn test_glider_travels_around_torus() {
    for mut engine in both(8, 8) {
        engine.load_named_pattern("glider", 0, 0).unwrap();
        let start = engine.alive_cells();

        engine.update(4);
        let mut shifted = start
            .iter()
            .map(|&(x, y)| ((x + 1) % 8, (y + 1) % 8))
            .collect::<Vec<_>>();
        shifted.sort();
        let mut moved = engine.alive_cells();
        moved.sort();
        assert_eq!(moved, shifted);

        engine.update(28);
        assert_eq!(engine.alive_cells(), start);
        assert_eq!(engine.generation(), 32);
    }
}

#[test]
fn test_catalog_populations() {
    for name in pattern_names() {
        let expected = glyph_count(crate::lookup_named_pattern(name).unwrap());
        for mut engine in both(100, 100) {
            engine.load_named_pattern(name, 20, 20).unwrap();
            assert_eq!(engine.population(), expected, "{}", name);
            assert_eq!(engine.alive_cells().len(), expected, "{}", name);
        }
    }
}

#[test]
fn test_unknown_pattern_leaves_grid_alone() {
    for mut engine in both(10, 10) {
        engine.load_named_pattern("blinker", 0, 0).unwrap();
        assert!(matches!(
            engine.load_named_pattern("no-such-thing", 0, 0),
            Err(Error::UnknownPattern(_))
        ));
        assert_eq!(engine.population(), 3);
    }
}

#[test]
fn test_overwriting_stamp_updates_active_set() {
    let mut engine = ActiveSetEngine::blank(10, 10).unwrap();
    engine.load_pattern("OOO\nOOO", &PatternOptions::at(2, 2)).unwrap();
    assert_eq!(engine.active().len(), 6);

    let touched = engine
        .load_pattern("   \nO  ", &PatternOptions::at(2, 2))
        .unwrap();
    assert_eq!(touched.len(), 6);
    assert_eq!(engine.active().len(), 1);
    assert_eq!(engine.alive_cells(), vec![(2, 3)]);
    assert_eq!(engine.alive_cells(), engine.grid().alive_cells());

    engine.step();
    assert!(engine.active().is_empty());
    assert_eq!(engine.grid().population(), 0);
}

#[test]
fn test_resizing_load_replaces_world() {
    for mut engine in both(20, 20) {
        engine.load_named_pattern("glider", 5, 5).unwrap();
        engine.update(3);
        engine
            .load_pattern("O O\n O", &PatternOptions::resized())
            .unwrap();
        assert_eq!(engine.dimensions(), (3, 2));
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.alive_cells(), vec![(0, 0), (2, 0), (1, 1)]);
        assert_eq!(engine.alive_cells(), engine.grid().alive_cells());
    }
}

#[test]
fn test_reset() {
    for mut engine in both(16, 12) {
        engine.load_named_pattern("r-pentomino", 6, 5).unwrap();
        engine.update(5);
        assert!(engine.population() > 0);
        engine.reset();
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.population(), 0);
        assert_eq!(engine.dimensions(), (16, 12));
        engine.step();
        assert_eq!(engine.population(), 0);
    }
}

#[test]
fn test_alternate_rule() {
    for mut engine in both_with_rule(10, 10, Rule::high_life()) {
        for &(dx, dy) in OFFSETS.iter().take(6) {
            engine.set_alive(5 + dx, 5 + dy, true);
        }
        engine.step();
        assert!(engine.get(5, 5).is_alive());
        assert_eq!(engine.get(5, 5).age(), 1);
    }
}

#[test]
fn test_snapshot_restore_continues_run() {
    let mut original = ActiveSetEngine::random(30, 20, Some(7), 0.35).unwrap();
    original.update(7);
    let snapshot = original.snapshot();
    assert_eq!(snapshot.generation, 7);
    assert_eq!(snapshot.alive.len(), original.population());

    let mut restored = DenseEngine::restore(&snapshot).unwrap();
    assert_eq!(restored.generation(), 7);
    assert_eq!(restored.alive_cells(), original.alive_cells());

    original.update(5);
    restored.update(5);
    assert_eq!(restored.alive_cells(), original.alive_cells());
    assert_eq!(restored.generation(), 12);
}

#[test]
fn test_random_fill_rate_out_of_range() {
    assert_eq!(DenseEngine::random(4, 4, Some(1), f64::NAN).unwrap().population(), 0);
    assert_eq!(ActiveSetEngine::random(4, 4, Some(1), f64::NAN).unwrap().population(), 0);
    assert_eq!(DenseEngine::random(4, 4, Some(1), -0.5).unwrap().population(), 0);
    assert_eq!(ActiveSetEngine::random(4, 4, Some(1), 2.0).unwrap().population(), 16);
}

#[test]
fn test_named_pattern_at_extreme_origin() {
    for mut engine in both(5, 5) {
        engine.load_named_pattern("blinker", i64::MAX, i64::MIN).unwrap();
        assert_eq!(engine.alive_cells(), vec![(2, 2), (3, 2), (4, 2)]);
    }
}

#[test]
fn test_write_read_round_trip() {
    let markers = Markers::new('.', 'O');
    for mut engine in both(11, 7) {
        engine.load_named_pattern("toad", 9, 5).unwrap();
        engine.step();
        let mut buf: Vec<u8> = vec![];
        engine.write_to(&mut buf, &markers).unwrap();

        let copy = DenseEngine::read_from(&buf[..], Rule::default(), &markers).unwrap();
        assert_eq!(copy.dimensions(), engine.dimensions());
        assert_eq!(copy.alive_cells(), engine.alive_cells());
        assert_eq!(copy.render(&markers), engine.render(&markers));
    }
}

#[test]
fn test_from_text() {
    let engine =
        ActiveSetEngine::from_text(crate::lookup_named_pattern("pulsar").unwrap(), Rule::default())
            .unwrap();
    assert_eq!(engine.dimensions(), (13, 13));
    assert_eq!(engine.population(), 48);
}

#[test]
fn test_stats_report_population() {
    let mut engine = ActiveSetEngine::blank(50, 50).unwrap();
    engine.load_named_pattern("glider", 0, 0).unwrap();
    engine.step();
    let stats = engine.stats();
    assert!(stats.contains("generation: 1"), "{}", stats);
    assert!(stats.contains("population: 5"), "{}", stats);
    assert!(stats.contains("rule: B3/S23"), "{}", stats);
}

#[test]
fn test_engine_kind_parsing() {
    assert_eq!("dense".parse::<EngineKind>().unwrap(), EngineKind::Dense);
    assert_eq!("Active".parse::<EngineKind>().unwrap(), EngineKind::ActiveSet);
    assert!("sparse".parse::<EngineKind>().is_err());
    assert_eq!(EngineKind::default().to_string(), "active");
}
