use life_sim::game_of_life::{
    life_106_to_string, parse_seed, Axis, Coordinate, GameOfLifeRules, LiveSet, RuleSet, World,
};
use life_sim::Simulation;
use pretty_assertions::assert_eq;

fn cells(coords: &[(i64, i64)]) -> Vec<Coordinate> {
    let mut cells: Vec<_> = coords.iter().copied().map(Coordinate::from).collect();
    cells.sort();
    cells
}

const GLIDER: [(i64, i64); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

#[test]
fn isolated_cell_dies() {
    let mut simulation = Simulation::new(World::default(), RuleSet::default(), cells(&[(7, -3)]));
    simulation.step();

    assert!(simulation.generation().alive().is_empty());
}

#[test]
fn block_is_stable() {
    let block = cells(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
    let mut simulation = Simulation::new(World::default(), RuleSet::default(), block.clone());

    simulation
        .run(50, |_, generation| {
            assert_eq!(generation.alive(), block);
            Ok(())
        })
        .unwrap();
}

#[test]
fn glider_translates_diagonally() {
    let world = World::new(Axis { min: -50, max: 50 }, Axis { min: -50, max: 50 }, true).unwrap();
    let mut simulation = Simulation::new(world, RuleSet::default(), cells(&GLIDER));

    let mut populations = Vec::new();
    simulation
        .run(4, |_, generation| {
            populations.push(generation.population());
            Ok(())
        })
        .unwrap();

    let shifted: Vec<_> = GLIDER.iter().map(|(x, y)| (x + 1, y + 1)).collect();
    assert_eq!(populations, vec![5; 5]);
    assert_eq!(simulation.generation().alive(), cells(&shifted));
}

#[test]
fn glider_wraps_around_small_torus() {
    // An 8x8 torus: after 32 ticks the glider has travelled (8, 8) and is home
    let world = World::new(Axis { min: 0, max: 7 }, Axis { min: 0, max: 7 }, true).unwrap();
    let seed = LiveSet::from_coordinates(world, cells(&GLIDER));
    let evolved = GameOfLifeRules::evolve_generations(seed.clone(), &RuleSet::default(), 32);

    assert_eq!(evolved, seed);
}

#[test]
fn glider_does_not_wrap_at_hard_edge() {
    let world = World::new(Axis { min: 0, max: 7 }, Axis { min: 0, max: 7 }, false).unwrap();
    let seed = LiveSet::from_coordinates(world, cells(&GLIDER));
    let evolved = GameOfLifeRules::evolve_generations(seed.clone(), &RuleSet::default(), 32);

    assert_ne!(evolved, seed);
    assert!(evolved.alive().into_iter().all(|c| world.contains(c)));
}

#[test]
fn hard_corner_counts_three_neighbors_at_most() {
    let world = World::new(Axis { min: 0, max: 9 }, Axis { min: 0, max: 9 }, false).unwrap();
    let everything: Vec<_> = (0..=9).flat_map(|x| (0..=9).map(move |y| Coordinate::new(x, y))).collect();
    let full = LiveSet::from_coordinates(world, everything);

    assert_eq!(GameOfLifeRules::count_neighbors(&full, Coordinate::new(0, 0)), 3);
    assert_eq!(GameOfLifeRules::count_neighbors(&full, Coordinate::new(0, 5)), 5);
    assert_eq!(GameOfLifeRules::count_neighbors(&full, Coordinate::new(5, 5)), 8);
}

#[test]
fn serialization_is_insertion_order_independent() {
    let coords = [(5, 1), (-3, 2), (5, -1), (0, 0), (-3, -2)];
    let a = LiveSet::from_coordinates(World::default(), coords.iter().copied().map(Coordinate::from));
    let b = LiveSet::from_coordinates(World::default(), coords.iter().rev().copied().map(Coordinate::from));

    let text = life_106_to_string(&a);
    assert_eq!(text, life_106_to_string(&b));
    assert_eq!(text, "#Life 1.06\n-3 -2\n-3 2\n0 0\n5 -1\n5 1\n");
}

#[test]
fn output_round_trips_as_seed() {
    let world = World::default();
    let mut simulation = Simulation::new(world, RuleSet::default(), cells(&GLIDER));
    for _ in 0..7 {
        simulation.step();
    }
    let first = life_106_to_string(simulation.generation());

    let reseeded = parse_seed(&first, &world).unwrap();
    let mut replay = Simulation::new(world, RuleSet::default(), reseeded);
    replay.run(0, |_, _| Ok(())).unwrap();

    assert_eq!(life_106_to_string(replay.generation()), first);
}
