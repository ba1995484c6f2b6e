use super::*;
use crate::Pattern;

const SEED: u64 = 42;

fn grid_with(cols: usize, rows: usize, live: &[(usize, usize)]) -> Grid {
    Grid::from_live_cells(cols, rows, live.iter().copied()).unwrap()
}

#[test]
fn test_wrap_handles_negative_offsets() {
    assert_eq!(wrap(0, -1, 5), 4);
    assert_eq!(wrap(4, 1, 5), 0);
    assert_eq!(wrap(2, -1, 5), 1);
    assert_eq!(wrap(0, -1, 1), 0);
}

#[test]
fn test_corner_sees_opposite_corner() {
    let grid = grid_with(4, 3, &[(3, 2)]);
    assert_eq!(neighbour_sum(&grid, 0, 0).unwrap(), 1);
    let grid = grid_with(4, 3, &[(0, 0)]);
    assert_eq!(neighbour_sum(&grid, 3, 2).unwrap(), 1);
    assert_eq!(neighbour_sum(&grid, 3, 0).unwrap(), 1);
    assert_eq!(neighbour_sum(&grid, 0, 2).unwrap(), 1);
    assert_eq!(neighbour_sum(&grid, 0, 0).unwrap(), 0);
}

#[test]
fn test_neighbour_sum_range() {
    let full = grid_with(
        5,
        5,
        &(0..25).map(|i| (i % 5, i / 5)).collect::<Vec<_>>(),
    );
    let random = Grid::random(16, 9, &mut ChaCha8Rng::seed_from_u64(SEED)).unwrap();
    for x in 0..5 {
        for y in 0..5 {
            assert_eq!(neighbour_sum(&full, x, y).unwrap(), 8);
        }
    }
    for x in 0..16 {
        for y in 0..9 {
            assert!(neighbour_sum(&random, x, y).unwrap() <= 8);
        }
    }
}

#[test]
fn test_neighbour_sum_out_of_bounds() {
    let grid = Grid::new(3, 3).unwrap();
    assert!(matches!(
        neighbour_sum(&grid, 3, 0),
        Err(LifeError::Index { x: 3, y: 0, .. })
    ));
}

#[test]
fn test_single_cell_torus_counts_itself() {
    let grid = grid_with(1, 1, &[(0, 0)]);
    assert_eq!(neighbour_sum(&grid, 0, 0).unwrap(), 8);
    assert_eq!(step(&grid).population(), 0);
}

#[test]
fn test_rules_are_mutually_exclusive() {
    for state in [Cell::Dead, Cell::Alive] {
        for s in 0..=8 {
            let matching = Transition::RULES
                .iter()
                .filter(|r| r.applies(state, s))
                .copied()
                .collect::<Vec<_>>();
            assert!(matching.len() <= 1, "{state:?} {s}: {matching:?}");
            let expected = matching.first().copied().unwrap_or(Transition::Unchanged);
            assert_eq!(Transition::classify(state, s), expected);
            assert!(expected.applies(state, s));
        }
    }
}

#[test]
fn test_transition_table() {
    use Cell::{Alive, Dead};
    let expected_alive = [Dead, Dead, Alive, Alive, Dead, Dead, Dead, Dead, Dead];
    let expected_dead = [Dead, Dead, Dead, Alive, Dead, Dead, Dead, Dead, Dead];
    for s in 0..=8u8 {
        assert_eq!(next_state(Alive, s), expected_alive[s as usize]);
        assert_eq!(next_state(Dead, s), expected_dead[s as usize]);
    }
    assert_eq!(Transition::Unchanged.apply(Alive), Alive);
    assert_eq!(Transition::Unchanged.apply(Dead), Dead);
}

#[test]
fn test_step_does_not_mutate_input() {
    let grid = Grid::random(20, 13, &mut ChaCha8Rng::seed_from_u64(SEED)).unwrap();
    let snapshot = grid.clone();
    let next = step(&grid);
    assert_eq!(grid, snapshot);
    assert_eq!((next.cols(), next.rows()), (20, 13));
}

#[test]
fn test_block_is_still_life() {
    let mut block = Grid::new(6, 6).unwrap();
    block.stamp(&Pattern::block(), 2, 2);
    assert_eq!(step(&block), block);
}

#[test]
fn test_blinker_oscillates() {
    let horizontal = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
    let vertical = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
    let once = step(&horizontal);
    assert_eq!(once, vertical);
    assert_ne!(once, horizontal);
    assert_eq!(step(&once), horizontal);
}

#[test]
fn test_lone_cell_dies() {
    let grid = grid_with(5, 5, &[(2, 2)]);
    assert_eq!(step(&grid).get(2, 2).unwrap(), Cell::Dead);
}

#[test]
fn test_reproduction_needs_exactly_three() {
    let three = grid_with(6, 6, &[(1, 1), (2, 1), (3, 1)]);
    assert_eq!(neighbour_sum(&three, 2, 2).unwrap(), 3);
    assert_eq!(step(&three).get(2, 2).unwrap(), Cell::Alive);

    let two = grid_with(6, 6, &[(1, 1), (3, 1)]);
    assert_eq!(neighbour_sum(&two, 2, 2).unwrap(), 2);
    assert_eq!(step(&two).get(2, 2).unwrap(), Cell::Dead);

    let four = grid_with(6, 6, &[(1, 1), (2, 1), (3, 1), (3, 3)]);
    assert_eq!(neighbour_sum(&four, 2, 2).unwrap(), 4);
    assert_eq!(step(&four).get(2, 2).unwrap(), Cell::Dead);
}

#[test]
fn test_glider_crosses_the_edge() {
    let mut grid = Grid::new(8, 8).unwrap();
    grid.stamp(&Pattern::glider(), 6, 6);
    let mut expected = Grid::new(8, 8).unwrap();
    expected.stamp(&Pattern::glider(), 7, 7);

    let mut simulation = Simulation::from_grid(grid.clone());
    simulation.advance(4).unwrap();
    assert_eq!(simulation.grid(), &expected);
    // one full lap around the torus
    simulation.advance(4 * 7).unwrap();
    assert_eq!(simulation.grid(), &grid);
    assert_eq!(simulation.generation(), 32);
}

#[test]
fn test_serial_and_parallel_agree() {
    let mut serial = Simulation::initialize(64, 48, Some(SEED)).unwrap();
    let mut parallel =
        Simulation::initialize(64, 48, Some(SEED)).unwrap().with_mode(ExecutionMode::Parallel);
    for _ in 0..20 {
        serial.step().unwrap();
        parallel.step().unwrap();
        assert_eq!(serial.grid(), parallel.grid());
    }
}

#[test]
fn test_simulation_matches_pure_step() {
    let mut simulation = Simulation::initialize(30, 17, Some(SEED)).unwrap();
    let mut grid = simulation.grid().clone();
    for _ in 0..10 {
        grid = step(&grid);
        simulation.step().unwrap();
        assert_eq!(simulation.grid(), &grid);
    }
    assert_eq!(simulation.seed(), Some(SEED));
    assert_eq!(
        simulation.cell_state(0, 0).unwrap(),
        grid.get(0, 0).unwrap()
    );
}

#[test]
fn test_step_into_rejects_other_shape() {
    let current = Grid::new(4, 4).unwrap();
    let mut next = Grid::new(4, 5).unwrap();
    assert!(matches!(
        step_into(&current, &mut next, ExecutionMode::Serial),
        Err(LifeError::Configuration(_))
    ));
}

#[test]
fn test_step_into_overwrites_stale_cells() {
    let current = grid_with(5, 5, &[(2, 2)]);
    let mut next = grid_with(5, 5, &[(0, 0), (4, 4), (2, 2)]);
    step_into(&current, &mut next, ExecutionMode::Serial).unwrap();
    assert_eq!(next.population(), 0);
}

#[test]
fn test_parallel_step_into_on_uneven_shapes() {
    for (cols, rows) in [(1, 9), (9, 1), (3, 40), (40, 3), (17, 11)] {
        let current = Grid::random(cols, rows, &mut ChaCha8Rng::seed_from_u64(SEED)).unwrap();
        let mut serial = Grid::new(cols, rows).unwrap();
        // stale contents in the target must not leak into the result
        let mut parallel =
            Grid::random(cols, rows, &mut ChaCha8Rng::seed_from_u64(SEED + 1)).unwrap();
        step_into(&current, &mut serial, ExecutionMode::Serial).unwrap();
        step_into(&current, &mut parallel, ExecutionMode::Parallel).unwrap();
        assert_eq!(serial, parallel, "{cols}x{rows}");
        assert_eq!(serial, step(&current));
    }
}
