//! Sparse Game of Life simulator
//!
//! This library evolves Life-like cellular automata on a 64-bit integer
//! plane, with either toroidal wraparound or hard edges, and writes
//! generations in Life 1.06 format.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use error::{ConfigError, SeedError};
pub use game_of_life::{Coordinate, LiveSet, RuleSet, World};
pub use simulation::{Simulation, SimulationReport};

use anyhow::Result;

/// Main entry point for running a configured simulation
pub fn simulate(settings: &Settings) -> Result<SimulationReport> {
    simulation::run_with_settings(settings)
}
