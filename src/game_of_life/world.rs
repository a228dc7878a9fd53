//! Coordinates, world extent and neighbor resolution

use crate::error::ConfigError;
use itertools::iproduct;
use std::fmt;

/// A cell position on the plane.
///
/// Ordering is by `x`, then by `y`, which is the order cells are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Inclusive extent of one world axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    pub min: i64,
    pub max: i64,
}

impl Axis {
    pub const FULL: Axis = Axis { min: i64::MIN, max: i64::MAX };

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Neighbors of a single coordinate along one axis.
///
/// `None` means there is no neighbor in that direction (hard edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisNeighbors {
    pub lower: Option<i64>,
    pub upper: Option<i64>,
}

impl AxisNeighbors {
    /// Distinct positions covered on this axis: the coordinate itself, then
    /// whichever neighbors exist. On a two-wide wrapping axis both directions
    /// land on the same value, which is yielded once.
    fn span(&self, coord: i64) -> impl Iterator<Item = i64> + Clone {
        let upper = self.upper.filter(|upper| Some(*upper) != self.lower);
        std::iter::once(coord).chain(self.lower).chain(upper)
    }
}

/// Resolve the lower and upper neighbor of `coord` on an axis spanning
/// `min..=max`.
pub fn resolve_axis(coord: i64, min: i64, max: i64, wraparound: bool) -> AxisNeighbors {
    let lower = if coord == min {
        wraparound.then_some(max)
    } else {
        Some(coord - 1)
    };

    let upper = if coord == max {
        wraparound.then_some(min)
    } else {
        Some(coord + 1)
    };

    AxisNeighbors { lower, upper }
}

/// The addressable space and its edge behavior.
///
/// Bounds are validated once in [`World::new`] and trusted afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct World {
    x: Axis,
    y: Axis,
    wraparound: bool,
}

impl World {
    pub fn new(x: Axis, y: Axis, wraparound: bool) -> Result<Self, ConfigError> {
        if x.min >= x.max {
            return Err(ConfigError::InvalidBounds { axis: 'x', min: x.min, max: x.max });
        }
        if y.min >= y.max {
            return Err(ConfigError::InvalidBounds { axis: 'y', min: y.min, max: y.max });
        }

        Ok(Self { x, y, wraparound })
    }

    /// Full 64-bit plane with the given edge behavior
    pub fn unbounded(wraparound: bool) -> Self {
        Self { x: Axis::FULL, y: Axis::FULL, wraparound }
    }

    pub fn x(&self) -> Axis {
        self.x
    }

    pub fn y(&self) -> Axis {
        self.y
    }

    pub fn wraparound(&self) -> bool {
        self.wraparound
    }

    /// Whether `coord` lies within the inclusive bounds of the world
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.x.contains(coord.x) && self.y.contains(coord.y)
    }

    pub fn resolve_x(&self, x: i64) -> AxisNeighbors {
        resolve_axis(x, self.x.min, self.x.max, self.wraparound)
    }

    pub fn resolve_y(&self, y: i64) -> AxisNeighbors {
        resolve_axis(y, self.y.min, self.y.max, self.wraparound)
    }

    /// All distinct neighbors of `coord` that exist in this world.
    ///
    /// Yields at most 8 coordinates; fewer at hard edges or on very narrow
    /// wrapping axes. Never yields `coord` itself.
    pub fn neighbors(&self, coord: Coordinate) -> impl Iterator<Item = Coordinate> {
        let xs = self.resolve_x(coord.x).span(coord.x);
        let ys = self.resolve_y(coord.y).span(coord.y);

        iproduct!(xs, ys)
            .filter(move |&(x, y)| x != coord.x || y != coord.y)
            .map(Coordinate::from)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::unbounded(true)
    }
}
