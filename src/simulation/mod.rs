//! Running simulations and writing their output

pub mod output;
pub mod runner;

pub use output::{open_output, tick_padding, TickDirectory};
pub use runner::{run_with_settings, Simulation, SimulationReport};
