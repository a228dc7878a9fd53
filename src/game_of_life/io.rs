//! Seed parsing and Life 1.06 output

use super::live_set::LiveSet;
use super::world::{Coordinate, World};
use crate::error::SeedError;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// First line of every Life 1.06 document
pub const LIFE_106_HEADER: &str = "#Life 1.06";

/// Parse one seed record.
///
/// Accepts `(x,y)` records and bare Life 1.06 `x y` cell lines, so the
/// program's own output can seed another run. Blank lines and `#` lines
/// yield `None`.
pub fn parse_seed_line(line: &str, line_number: usize, world: &World) -> Result<Option<Coordinate>, SeedError> {
    let line = line.trim();

    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = if let Some(rest) = line.strip_prefix('(') {
        let inner = rest
            .strip_suffix(')')
            .ok_or(SeedError::MissingRightParen { line: line_number })?;
        inner.split(',').collect()
    } else if line.contains([',', ')']) {
        return Err(SeedError::MissingLeftParen { line: line_number });
    } else {
        line.split_whitespace().collect()
    };

    if fields.len() != 2 {
        return Err(SeedError::FieldCount { line: line_number, found: fields.len() });
    }

    let x = parse_component(fields[0], 'x', line_number)?;
    let y = parse_component(fields[1], 'y', line_number)?;

    for (axis, value, range) in [('x', x, world.x()), ('y', y, world.y())] {
        if !range.contains(value) {
            return Err(SeedError::OutOfBounds {
                line: line_number,
                axis,
                value,
                min: range.min,
                max: range.max,
            });
        }
    }

    Ok(Some(Coordinate::new(x, y)))
}

fn parse_component(field: &str, axis: char, line: usize) -> Result<i64, SeedError> {
    let field = field.trim();
    field.parse().map_err(|_| SeedError::InvalidInteger {
        line,
        axis,
        value: field.to_string(),
    })
}

/// Parse a whole seed document held in memory
pub fn parse_seed(content: &str, world: &World) -> Result<Vec<Coordinate>, SeedError> {
    let mut seed = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if let Some(coord) = parse_seed_line(line, idx + 1, world)? {
            seed.push(coord);
        }
    }
    Ok(seed)
}

/// Read seed records from any buffered reader, e.g. locked stdin
pub fn load_seed_from_reader<R: BufRead>(reader: R, world: &World) -> Result<Vec<Coordinate>> {
    let mut seed = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read seed line {}", idx + 1))?;
        if let Some(coord) = parse_seed_line(&line, idx + 1, world)? {
            seed.push(coord);
        }
    }

    Ok(seed)
}

/// Read seed records from a file
pub fn load_seed_from_file<P: AsRef<Path>>(path: P, world: &World) -> Result<Vec<Coordinate>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open seed file: {}", path.as_ref().display()))?;

    load_seed_from_reader(BufReader::new(file), world)
        .with_context(|| format!("Failed to parse seed from file: {}", path.as_ref().display()))
}

/// Write `generation` in Life 1.06 format: the header, then one `x y` line
/// per alive cell ordered by x, then y. Tracked-dead cells are never written.
pub fn write_life_106<W: Write>(generation: &LiveSet, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", LIFE_106_HEADER)?;
    for coord in generation.alive() {
        writeln!(writer, "{} {}", coord.x, coord.y)?;
    }
    Ok(())
}

/// Render `generation` as a Life 1.06 string
pub fn life_106_to_string(generation: &LiveSet) -> String {
    let mut output = String::from(LIFE_106_HEADER);
    output.push('\n');
    for coord in generation.alive() {
        output.push_str(&format!("{} {}\n", coord.x, coord.y));
    }
    output
}

/// Save a generation to a Life 1.06 file, truncating any existing content
pub fn save_generation_to_file<P: AsRef<Path>>(generation: &LiveSet, path: P) -> Result<()> {
    let file = File::create(&path)
        .with_context(|| format!("Failed to create output file: {}", path.as_ref().display()))?;

    let mut writer = BufWriter::new(file);
    write_life_106(generation, &mut writer)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write generation to file: {}", path.as_ref().display()))?;

    Ok(())
}

fn seed_document(cells: &[(i64, i64)]) -> String {
    cells.iter().map(|(x, y)| format!("({},{})\n", x, y)).collect()
}

/// Create example seed files for experimenting
pub fn create_example_seeds<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let examples: [(&str, &[(i64, i64)]); 4] = [
        ("glider.txt", &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]),
        ("blinker.txt", &[(0, 1), (1, 1), (2, 1)]),
        ("block.txt", &[(0, 0), (1, 0), (0, 1), (1, 1)]),
        ("beacon.txt", &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)]),
    ];

    for (name, cells) in examples {
        std::fs::write(dir.join(name), seed_document(cells))
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}
