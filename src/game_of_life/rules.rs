//! Birth/survival rules and the generation transition

use super::live_set::LiveSet;
use super::world::Coordinate;
use crate::error::ConfigError;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fmt;

/// Neighbor counts that create or preserve life
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    birth: BTreeSet<u32>,
    survive: BTreeSet<u32>,
}

impl RuleSet {
    /// Build a rule set, rejecting any count below 1
    pub fn new<B, S>(birth: B, survive: S) -> Result<Self, ConfigError>
    where
        B: IntoIterator<Item = i64>,
        S: IntoIterator<Item = i64>,
    {
        Ok(Self {
            birth: Self::collect_counts(birth)?,
            survive: Self::collect_counts(survive)?,
        })
    }

    fn collect_counts<I: IntoIterator<Item = i64>>(counts: I) -> Result<BTreeSet<u32>, ConfigError> {
        counts
            .into_iter()
            .map(|count| {
                u32::try_from(count)
                    .ok()
                    .filter(|count| *count > 0)
                    .ok_or(ConfigError::NonPositiveNeighborCount(count))
            })
            .collect()
    }

    pub fn birth(&self) -> &BTreeSet<u32> {
        &self.birth
    }

    pub fn survive(&self) -> &BTreeSet<u32> {
        &self.survive
    }

    #[inline]
    pub fn is_birth(&self, neighbors: u32) -> bool {
        self.birth.contains(&neighbors)
    }

    #[inline]
    pub fn is_survival(&self, neighbors: u32) -> bool {
        self.survive.contains(&neighbors)
    }

    /// Whether a cell is alive next generation given its current state and
    /// live neighbor count
    #[inline]
    pub fn next_state(&self, alive: bool, neighbors: u32) -> bool {
        if alive {
            self.is_survival(neighbors)
        } else {
            self.is_birth(neighbors)
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            birth: BTreeSet::from([3]),
            survive: BTreeSet::from([2, 3]),
        }
    }
}

/// `B3/S23` notation
impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |counts: &BTreeSet<u32>| {
            counts
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(if counts.iter().any(|c| *c > 9) { "," } else { "" })
        };
        write!(f, "B{}/S{}", join(&self.birth), join(&self.survive))
    }
}

/// Generation transition engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Count live neighbors of `coord` in `generation`.
    ///
    /// Neighbors beyond a hard edge do not exist and are not counted.
    pub fn count_neighbors(generation: &LiveSet, coord: Coordinate) -> u32 {
        generation
            .world()
            .neighbors(coord)
            .filter(|n| generation.is_alive(*n))
            .count() as u32
    }

    /// Evolve one generation forward.
    ///
    /// Only the entries of `current` are evaluated; nothing outside the halo
    /// of live cells can change in a single tick.
    pub fn evolve(current: &LiveSet, rules: &RuleSet) -> LiveSet {
        let survivors: Vec<Coordinate> = current
            .candidates()
            .into_par_iter()
            .filter(|coord| {
                let neighbors = Self::count_neighbors(current, *coord);
                rules.next_state(current.is_alive(*coord), neighbors)
            })
            .collect();

        LiveSet::from_coordinates(*current.world(), survivors)
    }

    /// Evolve the generation for multiple ticks
    pub fn evolve_generations(mut generation: LiveSet, rules: &RuleSet, ticks: u64) -> LiveSet {
        for _ in 0..ticks {
            generation = Self::evolve(&generation, rules);
        }
        generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::world::{Axis, World};

    fn cells(coords: &[(i64, i64)]) -> Vec<Coordinate> {
        coords.iter().copied().map(Coordinate::from).collect()
    }

    fn seed(world: World, coords: &[(i64, i64)]) -> LiveSet {
        LiveSet::from_coordinates(world, cells(coords))
    }

    #[test]
    fn test_isolated_cell_dies() {
        let generation = seed(World::default(), &[(0, 0)]);
        let next = GameOfLifeRules::evolve(&generation, &RuleSet::default());

        assert!(next.is_empty());
        assert_eq!(next.tracked_len(), 0);
    }

    #[test]
    fn test_still_life_block() {
        let block = seed(World::default(), &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let evolved = GameOfLifeRules::evolve_generations(block.clone(), &RuleSet::default(), 25);

        assert_eq!(evolved.alive(), block.alive());
    }

    #[test]
    fn test_oscillator_blinker() {
        let horizontal = seed(World::default(), &[(-1, 0), (0, 0), (1, 0)]);
        let rules = RuleSet::default();

        let vertical = GameOfLifeRules::evolve(&horizontal, &rules);
        assert_eq!(vertical.alive(), cells(&[(0, -1), (0, 0), (0, 1)]));

        let back = GameOfLifeRules::evolve(&vertical, &rules);
        assert_eq!(back, horizontal);
    }

    #[test]
    fn test_blinker_wraps_across_i64_boundary() {
        let generation = seed(World::default(), &[(i64::MAX, 0), (i64::MIN, 0), (i64::MIN + 1, 0)]);
        let next = GameOfLifeRules::evolve(&generation, &RuleSet::default());

        assert_eq!(next.alive(), cells(&[(i64::MIN, -1), (i64::MIN, 0), (i64::MIN, 1)]));
    }

    #[test]
    fn test_hard_edge_blinker_is_clipped() {
        let world = World::new(Axis { min: 0, max: 9 }, Axis { min: 0, max: 9 }, false).unwrap();
        let generation = seed(world, &[(0, 0), (1, 0), (2, 0)]);
        let next = GameOfLifeRules::evolve(&generation, &RuleSet::default());

        // The cell at y = -1 would be born but does not exist
        assert_eq!(next.alive(), cells(&[(1, 0), (1, 1)]));
    }

    #[test]
    fn test_count_neighbors_at_hard_corner() {
        let world = World::new(Axis { min: 0, max: 9 }, Axis { min: 0, max: 9 }, false).unwrap();
        let generation = seed(world, &[(0, 1), (1, 0), (1, 1), (9, 9), (9, 0), (0, 9)]);

        assert_eq!(GameOfLifeRules::count_neighbors(&generation, Coordinate::new(0, 0)), 3);
    }

    #[test]
    fn test_count_neighbors_two_wide_wrap() {
        let world = World::new(Axis { min: 0, max: 1 }, Axis { min: 0, max: 1 }, true).unwrap();
        let generation = seed(world, &[(0, 0), (1, 0), (0, 1), (1, 1)]);

        for coord in generation.alive() {
            assert_eq!(GameOfLifeRules::count_neighbors(&generation, coord), 3);
        }
    }

    #[test]
    fn test_custom_rules() {
        // B1/S: every dead neighbor of a lone cell is born, the cell itself dies
        let rules = RuleSet::new([1], Vec::new()).unwrap();
        let generation = seed(World::default(), &[(0, 0)]);
        let next = GameOfLifeRules::evolve(&generation, &rules);

        assert_eq!(next.population(), 8);
        assert!(!next.is_alive(Coordinate::new(0, 0)));
    }

    #[test]
    fn test_rule_logic() {
        let rules = RuleSet::default();
        assert!(rules.next_state(true, 2));
        assert!(rules.next_state(true, 3));
        assert!(rules.next_state(false, 3));
        assert!(!rules.next_state(true, 1));
        assert!(!rules.next_state(true, 4));
        assert!(!rules.next_state(false, 2));
    }

    #[test]
    fn test_rule_validation() {
        assert_eq!(
            RuleSet::new([3, 0], [2]).unwrap_err(),
            ConfigError::NonPositiveNeighborCount(0)
        );
        assert_eq!(
            RuleSet::new([3], [-2]).unwrap_err(),
            ConfigError::NonPositiveNeighborCount(-2)
        );
        assert_eq!(RuleSet::new([3], [3, 2, 2]).unwrap(), RuleSet::default());
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(RuleSet::default().to_string(), "B3/S23");
        assert_eq!(RuleSet::new([3, 6], [2, 3]).unwrap().to_string(), "B36/S23");
    }
}
