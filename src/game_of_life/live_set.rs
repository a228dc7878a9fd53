//! Sparse storage for one generation

use super::world::{Coordinate, World};
use rustc_hash::FxHashMap;

/// Observable state of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Alive,
    Dead,
}

/// Stored marker; coordinates without an entry are implicitly dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Alive,
    TrackedDead,
}

/// Live cells of one generation plus the dead halo around them.
///
/// Every existing neighbor of an alive cell has an entry, so the entries are
/// exactly the cells that may change state on the next tick.
#[derive(Debug, Clone)]
pub struct LiveSet {
    world: World,
    cells: FxHashMap<Coordinate, Marker>,
}

impl LiveSet {
    /// Create an empty generation in `world`
    pub fn new(world: World) -> Self {
        Self {
            world,
            cells: FxHashMap::default(),
        }
    }

    /// Create a generation with every coordinate in `coordinates` alive.
    ///
    /// Coordinates are assumed to lie inside `world`; seed parsing checks this.
    pub fn from_coordinates<I>(world: World, coordinates: I) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut set = Self::new(world);
        for coord in coordinates {
            set.insert_live(coord);
        }
        set
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mark `coord` alive and stub out its missing neighbors as tracked-dead
    pub fn insert_live(&mut self, coord: Coordinate) {
        for neighbor in self.world.neighbors(coord) {
            self.cells.entry(neighbor).or_insert(Marker::TrackedDead);
        }
        self.cells.insert(coord, Marker::Alive);
    }

    /// State of `coord`; anything without an alive entry is dead
    pub fn state_of(&self, coord: Coordinate) -> CellState {
        match self.cells.get(&coord) {
            Some(Marker::Alive) => CellState::Alive,
            _ => CellState::Dead,
        }
    }

    #[inline]
    pub fn is_alive(&self, coord: Coordinate) -> bool {
        self.state_of(coord) == CellState::Alive
    }

    /// Every coordinate with an entry, alive or tracked-dead, sorted by (x, y)
    pub fn candidates(&self) -> Vec<Coordinate> {
        let mut coords: Vec<_> = self.cells.keys().copied().collect();
        coords.sort_unstable();
        coords
    }

    /// Alive coordinates sorted by (x, y)
    pub fn alive(&self) -> Vec<Coordinate> {
        let mut coords: Vec<_> = self
            .cells
            .iter()
            .filter(|(_, marker)| **marker == Marker::Alive)
            .map(|(coord, _)| *coord)
            .collect();
        coords.sort_unstable();
        coords
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.values().filter(|m| **m == Marker::Alive).count()
    }

    /// Number of entries, alive and tracked-dead
    pub fn tracked_len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.population() == 0
    }

    /// Smallest `(min, max)` corners enclosing every alive cell
    pub fn bounding_box(&self) -> Option<(Coordinate, Coordinate)> {
        self.cells
            .iter()
            .filter(|(_, marker)| **marker == Marker::Alive)
            .map(|(coord, _)| *coord)
            .fold(None, |acc, c| match acc {
                None => Some((c, c)),
                Some((lo, hi)) => Some((
                    Coordinate::new(lo.x.min(c.x), lo.y.min(c.y)),
                    Coordinate::new(hi.x.max(c.x), hi.y.max(c.y)),
                )),
            })
    }
}

impl PartialEq for LiveSet {
    fn eq(&self, other: &Self) -> bool {
        self.world == other.world && self.alive() == other.alive()
    }
}

impl Eq for LiveSet {}
