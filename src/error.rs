//! Typed errors for configuration and seed validation

use thiserror::Error;

/// Errors raised while building the simulation configuration.
///
/// Every variant is fatal: they are detected before the first tick runs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("world {axis} dimension minimum {min} must be less than maximum {max}")]
    InvalidBounds { axis: char, min: i64, max: i64 },
    #[error("neighbor count {0} must be greater than 0")]
    NonPositiveNeighborCount(i64),
    #[error("number of ticks must be greater than 0")]
    ZeroTicks,
    #[error("malformed world dimensions '{input}': {reason}")]
    MalformedDimensions { input: String, reason: String },
    #[error("unable to parse integer from '{0}'")]
    InvalidInteger(String),
}

/// Errors raised while parsing seed records.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("line {line}: expected '(' at start of record")]
    MissingLeftParen { line: usize },
    #[error("line {line}: expected ')' at end of record")]
    MissingRightParen { line: usize },
    #[error("line {line}: expected two coordinates, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: unable to parse {axis}-coordinate integer from '{value}'")]
    InvalidInteger {
        line: usize,
        axis: char,
        value: String,
    },
    #[error("line {line}: {axis}-coordinate {value} outside the world bounds {min}..={max}")]
    OutOfBounds {
        line: usize,
        axis: char,
        value: i64,
        min: i64,
        max: i64,
    },
}
