//! Output sinks for final and per-tick generations

use crate::game_of_life::io::write_life_106;
use crate::game_of_life::LiveSet;
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Directory receiving one Life 1.06 file per tick.
///
/// Files are named by the zero-padded tick index, padded to the digit count
/// of the total number of ticks (`00.txt` .. `12.txt` for 12 ticks).
#[derive(Debug, Clone)]
pub struct TickDirectory {
    dir: PathBuf,
    width: usize,
}

/// Decimal digit count of `total_ticks`
pub fn tick_padding(total_ticks: u64) -> usize {
    total_ticks.to_string().len()
}

impl TickDirectory {
    /// Use `dir` for per-tick output, creating it when missing
    pub fn create<P: Into<PathBuf>>(dir: P, total_ticks: u64) -> Result<Self> {
        let dir = dir.into();

        if dir.exists() {
            if !dir.is_dir() {
                bail!("Output directory {} exists but is not a directory", dir.display());
            }
        } else {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Unable to create output directory: {}", dir.display()))?;
            log::debug!("Created output directory {}", dir.display());
        }

        Ok(Self {
            dir,
            width: tick_padding(total_ticks),
        })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// File path used for `tick`
    pub fn path_for(&self, tick: u64) -> PathBuf {
        self.dir.join(format!("{:0width$}.txt", tick, width = self.width))
    }

    /// Write `generation` as the snapshot for `tick`
    pub fn write(&self, tick: u64, generation: &LiveSet) -> Result<()> {
        let path = self.path_for(tick);
        let file = File::create(&path)
            .with_context(|| format!("Error opening output file: {}", path.display()))?;

        let mut writer = BufWriter::new(file);
        write_life_106(generation, &mut writer)
            .and_then(|_| writer.flush())
            .with_context(|| format!("Error writing tick {} to {}", tick, path.display()))
    }
}

/// Open the final output sink: the given file (truncated) or stdout
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Error opening output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
