//! Configuration settings for the simulator

use crate::error::ConfigError;
use crate::game_of_life::{Axis, RuleSet, World};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub simulation: SimulationConfig,
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Seed file; stdin when unset
    pub input_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Final generation file; stdout when unset
    pub output_file: Option<PathBuf>,
    /// Directory receiving one file per tick
    pub output_directory: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub ticks: u64,
    pub wraparound: bool,
    pub world: WorldDimensions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldDimensions {
    pub x: AxisRange,
    pub y: AxisRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisRange {
    pub minimum: i64,
    pub maximum: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Neighbor counts that bring a dead cell to life
    pub birth: Vec<i64>,
    /// Neighbor counts that keep a live cell alive
    pub survive: Vec<i64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            ticks: 10,
            wraparound: true,
            world: WorldDimensions::default(),
        }
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self {
            minimum: i64::MIN,
            maximum: i64::MAX,
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            birth: vec![3],
            survive: vec![2, 3],
        }
    }
}

impl From<AxisRange> for Axis {
    fn from(range: AxisRange) -> Self {
        Axis {
            min: range.minimum,
            max: range.maximum,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// Callers validate after merging command line overrides.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.ticks == 0 {
            return Err(ConfigError::ZeroTicks);
        }

        self.world()?;
        self.rules()?;
        Ok(())
    }

    /// Build the world described by these settings
    pub fn world(&self) -> Result<World, ConfigError> {
        let dims = self.simulation.world;
        World::new(dims.x.into(), dims.y.into(), self.simulation.wraparound)
    }

    /// Build the rule set described by these settings
    pub fn rules(&self) -> Result<RuleSet, ConfigError> {
        RuleSet::new(
            self.rules.birth.iter().copied(),
            self.rules.survive.iter().copied(),
        )
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref input_file) = cli_overrides.input_file {
            self.input.input_file = Some(input_file.clone());
        }
        if let Some(ref output_file) = cli_overrides.output_file {
            self.output.output_file = Some(output_file.clone());
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = Some(output_dir.clone());
        }
        if let Some(ticks) = cli_overrides.ticks {
            self.simulation.ticks = ticks;
        }
        if cli_overrides.disable_wraparound {
            self.simulation.wraparound = false;
        }
        if let Some(world) = cli_overrides.world {
            self.simulation.world = world;
        }
        if let Some(ref birth) = cli_overrides.birth {
            self.rules.birth = birth.clone();
        }
        if let Some(ref survive) = cli_overrides.survive {
            self.rules.survive = survive.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub input_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub ticks: Option<u64>,
    pub disable_wraparound: bool,
    pub world: Option<WorldDimensions>,
    pub birth: Option<Vec<i64>>,
    pub survive: Option<Vec<i64>>,
}

fn parse_integer(value: &str) -> Result<i64, ConfigError> {
    let value = value.trim();
    value
        .parse()
        .map_err(|_| ConfigError::InvalidInteger(value.to_string()))
}

/// Parse world dimensions written as `min-x:max-x;min-y:max-y`.
///
/// Only the shape and the integers are checked here; `min < max` is enforced
/// when the [`World`] is built.
pub fn parse_world_dimensions(input: &str) -> Result<WorldDimensions, ConfigError> {
    let malformed = |reason: String| ConfigError::MalformedDimensions {
        input: input.to_string(),
        reason,
    };

    let axes: Vec<&str> = input.split(';').collect();
    if axes.len() != 2 {
        return Err(malformed(format!("expected 2 dimensions, found {}", axes.len())));
    }

    let mut ranges = Vec::with_capacity(2);
    for (name, axis) in ['x', 'y'].into_iter().zip(axes) {
        let bounds: Vec<&str> = axis.split(':').collect();
        if bounds.len() != 2 {
            return Err(malformed(format!(
                "expected 2 bounds in {} dimension, found {}",
                name,
                bounds.len()
            )));
        }
        ranges.push(AxisRange {
            minimum: parse_integer(bounds[0])?,
            maximum: parse_integer(bounds[1])?,
        });
    }

    Ok(WorldDimensions {
        x: ranges[0],
        y: ranges[1],
    })
}

/// Parse a comma-delimited list of positive neighbor counts
pub fn parse_neighbor_counts(input: &str) -> Result<Vec<i64>, ConfigError> {
    input
        .split(',')
        .map(|part| {
            let count = parse_integer(part)?;
            if count < 1 {
                return Err(ConfigError::NonPositiveNeighborCount(count));
            }
            Ok(count)
        })
        .collect()
}
