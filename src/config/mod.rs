//! Configuration management for the simulator

pub mod settings;

pub use settings::{
    Settings, InputConfig, OutputConfig, SimulationConfig, RulesConfig, WorldDimensions,
    AxisRange, CliOverrides, parse_world_dimensions, parse_neighbor_counts
};
