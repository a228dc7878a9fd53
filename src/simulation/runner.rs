//! Tick-by-tick driver

use super::output::{open_output, TickDirectory};
use crate::config::Settings;
use crate::game_of_life::io::{load_seed_from_file, load_seed_from_reader, write_life_106};
use crate::game_of_life::{Coordinate, GameOfLifeRules, LiveSet, RuleSet, World};
use anyhow::{Context, Result};
use std::io::Write;
use std::time::{Duration, Instant};

/// A running simulation: the current generation and how it evolves.
///
/// Each step replaces the generation wholesale; no history is kept.
#[derive(Debug, Clone)]
pub struct Simulation {
    rules: RuleSet,
    generation: LiveSet,
    tick: u64,
}

impl Simulation {
    /// Start at tick 0 with every `seed` coordinate alive
    pub fn new<I>(world: World, rules: RuleSet, seed: I) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        Self {
            rules,
            generation: LiveSet::from_coordinates(world, seed),
            tick: 0,
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn generation(&self) -> &LiveSet {
        &self.generation
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn into_generation(self) -> LiveSet {
        self.generation
    }

    /// Advance one tick
    pub fn step(&mut self) {
        self.generation = GameOfLifeRules::evolve(&self.generation, &self.rules);
        self.tick += 1;
    }

    /// Advance `ticks` ticks, handing every generation to `observer`:
    /// the current one first, then one per completed tick.
    ///
    /// Stops at the first observer error.
    pub fn run<F>(&mut self, ticks: u64, mut observer: F) -> Result<()>
    where
        F: FnMut(u64, &LiveSet) -> Result<()>,
    {
        observer(self.tick, &self.generation)?;
        for _ in 0..ticks {
            self.step();
            observer(self.tick, &self.generation)?;
        }
        Ok(())
    }
}

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub ticks: u64,
    pub seed_population: usize,
    pub final_population: usize,
    pub elapsed: Duration,
}

/// Run a whole simulation as described by `settings`.
///
/// Reads the seed from the configured file or stdin, writes per-tick
/// snapshots when an output directory is set and writes the final
/// generation to the configured file or stdout.
pub fn run_with_settings(settings: &Settings) -> Result<SimulationReport> {
    settings.validate().context("Configuration validation failed")?;

    let world = settings.world()?;
    let rules = settings.rules()?;
    let ticks = settings.simulation.ticks;

    log::info!(
        "Simulating {} ticks, rule {}, wraparound {}",
        ticks,
        rules,
        world.wraparound()
    );

    let seed = match settings.input.input_file {
        Some(ref path) => load_seed_from_file(path, &world)?,
        None => load_seed_from_reader(std::io::stdin().lock(), &world)
            .context("Failed to parse seed from stdin")?,
    };

    let tick_dir = settings
        .output
        .output_directory
        .as_ref()
        .map(|dir| TickDirectory::create(dir, ticks))
        .transpose()?;

    let start_time = Instant::now();
    let mut simulation = Simulation::new(world, rules, seed);
    let seed_population = simulation.generation().population();
    log::info!("Seeded {} live cells", seed_population);

    simulation.run(ticks, |tick, generation| {
        log::debug!(
            "Tick {}: {} alive, {} tracked",
            tick,
            generation.population(),
            generation.tracked_len()
        );
        match tick_dir {
            Some(ref dir) => dir.write(tick, generation),
            None => Ok(()),
        }
    })?;

    let mut sink = open_output(settings.output.output_file.as_deref())?;
    write_life_106(simulation.generation(), &mut sink)
        .and_then(|_| sink.flush())
        .context("Failed to write final generation")?;

    Ok(SimulationReport {
        ticks,
        seed_population,
        final_population: simulation.generation().population(),
        elapsed: start_time.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::life_106_to_string;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn cells(coords: &[(i64, i64)]) -> Vec<Coordinate> {
        coords.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn test_step_advances_tick() {
        let mut simulation = Simulation::new(
            World::default(),
            RuleSet::default(),
            cells(&[(0, 0), (1, 0), (2, 0)]),
        );
        simulation.step();

        assert_eq!(simulation.tick(), 1);
        assert_eq!(simulation.generation().alive(), cells(&[(1, -1), (1, 0), (1, 1)]));
    }

    #[test]
    fn test_run_observes_every_tick() {
        let mut simulation = Simulation::new(
            World::default(),
            RuleSet::default(),
            cells(&[(0, 0), (1, 0), (0, 1), (1, 1)]),
        );

        let mut seen = Vec::new();
        simulation
            .run(3, |tick, generation| {
                seen.push((tick, generation.population()));
                Ok(())
            })
            .unwrap();

        assert_eq!(seen, vec![(0, 4), (1, 4), (2, 4), (3, 4)]);
        assert_eq!(simulation.tick(), 3);
    }

    #[test]
    fn test_run_stops_on_observer_error() {
        let mut simulation = Simulation::new(World::default(), RuleSet::default(), cells(&[(0, 0)]));

        let result = simulation.run(5, |tick, _| {
            if tick == 2 {
                anyhow::bail!("sink closed");
            }
            Ok(())
        });

        assert!(result.is_err());
        assert_eq!(simulation.tick(), 2);
    }

    #[test]
    fn test_run_with_settings() {
        let temp_dir = tempdir().unwrap();
        let seed_path = temp_dir.path().join("seed.txt");
        let output_path = temp_dir.path().join("out.txt");
        let ticks_dir = temp_dir.path().join("ticks");
        std::fs::write(&seed_path, "(0,1)\n(1,1)\n(2,1)\n").unwrap();

        let mut settings = Settings::default();
        settings.input.input_file = Some(seed_path);
        settings.output.output_file = Some(output_path.clone());
        settings.output.output_directory = Some(ticks_dir.clone());
        settings.simulation.ticks = 10;

        let report = run_with_settings(&settings).unwrap();
        assert_eq!(report.ticks, 10);
        assert_eq!(report.seed_population, 3);
        assert_eq!(report.final_population, 3);

        let final_output = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(final_output, "#Life 1.06\n0 1\n1 1\n2 1\n");

        for tick in 0..=10 {
            assert!(ticks_dir.join(format!("{:02}.txt", tick)).exists());
        }
        assert_eq!(
            std::fs::read_to_string(ticks_dir.join("01.txt")).unwrap(),
            "#Life 1.06\n1 0\n1 1\n1 2\n"
        );
        assert_eq!(std::fs::read_to_string(ticks_dir.join("10.txt")).unwrap(), final_output);
    }

    #[test]
    fn test_run_with_settings_rejects_out_of_bounds_seed() {
        let temp_dir = tempdir().unwrap();
        let seed_path = temp_dir.path().join("seed.txt");
        std::fs::write(&seed_path, "(0,0)\n(50,0)\n").unwrap();

        let mut settings = Settings::default();
        settings.input.input_file = Some(seed_path);
        settings.output.output_file = Some(temp_dir.path().join("out.txt"));
        settings.simulation.world.x.maximum = 10;
        settings.simulation.world.x.minimum = -10;

        assert!(run_with_settings(&settings).is_err());
        assert!(!temp_dir.path().join("out.txt").exists());
    }

    #[test]
    fn test_run_with_settings_missing_input() {
        let mut settings = Settings::default();
        settings.input.input_file = Some(PathBuf::from("/nonexistent/seed.txt"));

        assert!(run_with_settings(&settings).is_err());
    }

    #[test]
    fn test_into_generation() {
        let simulation = Simulation::new(World::default(), RuleSet::default(), cells(&[(3, 4)]));
        assert_eq!(life_106_to_string(&simulation.into_generation()), "#Life 1.06\n3 4\n");
    }
}
