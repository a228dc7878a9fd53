//! Display and output formatting utilities

use crate::game_of_life::{Coordinate, LiveSet};

/// Largest bounding box side rendered as a picture
pub const MAX_RENDER_SIDE: u64 = 80;

/// Format generations for terminal display
pub struct GenerationFormatter;

impl GenerationFormatter {
    /// Short multi-line summary: population, halo size and extent
    pub fn format_summary(generation: &LiveSet) -> String {
        let mut output = String::new();

        output.push_str(&format!("Living cells: {}\n", generation.population()));
        output.push_str(&format!("Tracked cells: {}\n", generation.tracked_len()));

        match generation.bounding_box() {
            Some((lo, hi)) => {
                output.push_str(&format!("Bounding box: {} to {}\n", lo, hi));
                output.push_str(&format!(
                    "Extent: {}x{}\n",
                    Self::span(lo.x, hi.x),
                    Self::span(lo.y, hi.y)
                ));
            }
            None => output.push_str("Bounding box: empty\n"),
        }

        output
    }

    /// Number of cells between `lo` and `hi` inclusive, saturating
    fn span(lo: i64, hi: i64) -> u64 {
        hi.abs_diff(lo).saturating_add(1)
    }

    /// Render the bounding box of the live cells, one text row per y.
    ///
    /// Returns `None` when the generation is empty or too large to draw.
    pub fn format_generation_compact(generation: &LiveSet) -> Option<String> {
        let (lo, hi) = generation.bounding_box()?;
        if Self::span(lo.x, hi.x) > MAX_RENDER_SIDE || Self::span(lo.y, hi.y) > MAX_RENDER_SIDE {
            return None;
        }

        let mut output = String::new();
        for y in lo.y..=hi.y {
            for x in lo.x..=hi.x {
                let alive = generation.is_alive(Coordinate::new(x, y));
                output.push(if alive { '█' } else { '·' });
            }
            output.push('\n');
        }
        Some(output)
    }

    /// Like [`Self::format_generation_compact`], with x labels on top and
    /// y labels on the left
    pub fn format_generation_with_coords(generation: &LiveSet) -> Option<String> {
        let (lo, hi) = generation.bounding_box()?;
        if Self::span(lo.x, hi.x) > MAX_RENDER_SIDE || Self::span(lo.y, hi.y) > MAX_RENDER_SIDE {
            return None;
        }

        let label_width = lo.y.to_string().len().max(hi.y.to_string().len());
        let mut output = String::new();

        // Header with the last digit of each column
        output.push_str(&" ".repeat(label_width + 1));
        for x in lo.x..=hi.x {
            output.push_str(&format!("{:2}", x.rem_euclid(10)));
        }
        output.push('\n');

        for y in lo.y..=hi.y {
            output.push_str(&format!("{:>width$} ", y, width = label_width));
            for x in lo.x..=hi.x {
                let alive = generation.is_alive(Coordinate::new(x, y));
                output.push_str(if alive { "██" } else { "··" });
            }
            output.push('\n');
        }

        Some(output)
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
