//! Terminal helpers

pub mod display;

pub use display::{Color, ColorOutput, GenerationFormatter};
