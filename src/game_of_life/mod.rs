//! Game of Life core functionality

pub mod world;
pub mod live_set;
pub mod rules;
pub mod io;

pub use world::{resolve_axis, Axis, AxisNeighbors, Coordinate, World};
pub use live_set::{CellState, LiveSet};
pub use rules::{GameOfLifeRules, RuleSet};
pub use io::{load_seed_from_file, load_seed_from_reader, parse_seed, write_life_106, life_106_to_string, create_example_seeds};
