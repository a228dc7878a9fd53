//! Main CLI application for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_sim::{
    config::{parse_neighbor_counts, parse_world_dimensions, CliOverrides, Settings},
    game_of_life::{create_example_seeds, load_seed_from_file, GameOfLifeRules, LiveSet},
    utils::{ColorOutput, GenerationFormatter},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "life_sim")]
#[command(about = "Sparse Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and write the final generation in Life 1.06 format
    Run {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed file to use rather than stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file to use rather than stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory to write every tick to
        #[arg(short = 'd', long)]
        outdir: Option<PathBuf>,

        /// Number of ticks to run
        #[arg(short, long)]
        ticks: Option<u64>,

        /// Disable wrapping the world around at the edges
        #[arg(long)]
        nowrap: bool,

        /// World dimensions as min-x:max-x;min-y:max-y
        #[arg(short, long, allow_hyphen_values = true)]
        world: Option<String>,

        /// Neighbor counts that spawn new life, comma-delimited
        #[arg(long)]
        newlife: Option<String>,

        /// Neighbor counts that keep existing life alive, comma-delimited
        #[arg(long)]
        exlife: Option<String>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create an example configuration and seed files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Describe a seed, optionally after some ticks
    Analyze {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed file
        #[arg(short, long)]
        input: PathBuf,

        /// Ticks to evolve before describing
        #[arg(short, long, default_value_t = 0)]
        ticks: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Run { verbose: true, .. });
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "warn" }),
    )
    .init();

    match cli.command {
        Commands::Run {
            config, input, output, outdir, ticks, nowrap,
            world, newlife, exlife, verbose
        } => {
            let overrides = build_overrides(
                input, output, outdir, ticks, nowrap,
                world.as_deref(), newlife.as_deref(), exlife.as_deref()
            )?;
            run_command(config, overrides, verbose)
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
        Commands::Analyze { config, input, ticks } => {
            analyze_command(config, input, ticks)
        }
    }
}

/// Load settings from `config_path`, or defaults when no file is given
fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    match config_path {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Settings::default()),
    }
}

#[allow(clippy::too_many_arguments)]
fn build_overrides(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    outdir: Option<PathBuf>,
    ticks: Option<u64>,
    nowrap: bool,
    world: Option<&str>,
    newlife: Option<&str>,
    exlife: Option<&str>,
) -> Result<CliOverrides> {
    Ok(CliOverrides {
        input_file: input,
        output_file: output,
        output_dir: outdir,
        ticks,
        disable_wraparound: nowrap,
        world: world.map(parse_world_dimensions).transpose()
            .context("Invalid --world")?,
        birth: newlife.map(parse_neighbor_counts).transpose()
            .context("Invalid --newlife")?,
        survive: exlife.map(parse_neighbor_counts).transpose()
            .context("Invalid --exlife")?,
    })
}

fn run_command(config_path: Option<PathBuf>, overrides: CliOverrides, verbose: bool) -> Result<()> {
    let mut settings = load_settings(config_path.as_deref())?;
    settings.merge_with_cli(&overrides);

    if verbose {
        log::debug!("Configuration: {:?}", settings);
    }

    let report = life_sim::simulate(&settings)?;

    log::info!(
        "Completed {} ticks in {:.3}s: {} -> {} live cells",
        report.ticks,
        report.elapsed.as_secs_f64(),
        report.seed_population,
        report.final_population
    );

    if verbose {
        eprintln!("{}", ColorOutput::success(&format!(
            "Simulated {} ticks in {:.3}s",
            report.ticks,
            report.elapsed.as_secs_f64()
        )));
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let seed_dir = directory.join("seeds");

    for dir in [&config_dir, &seed_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let mut settings = Settings::default();
        settings.input.input_file = Some(PathBuf::from("seeds/glider.txt"));
        settings.output.output_directory = Some(PathBuf::from("output/ticks"));
        settings.to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("{}", ColorOutput::warning(&format!(
            "Skipped: {} (already exists)", config_path.display()
        )));
    }

    create_example_seeds(&seed_dir)
        .context("Failed to create example seeds")?;
    println!("Created example seeds in: {}", seed_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: life_sim run --config {}", config_path.display());

    Ok(())
}

fn analyze_command(config_path: Option<PathBuf>, input: PathBuf, ticks: u64) -> Result<()> {
    let settings = load_settings(config_path.as_deref())?;
    let world = settings.world()?;
    let rules = settings.rules()?;

    let seed = load_seed_from_file(&input, &world)?;
    let generation = GameOfLifeRules::evolve_generations(
        LiveSet::from_coordinates(world, seed),
        &rules,
        ticks,
    );

    println!("{}", ColorOutput::info(&format!(
        "{} after {} tick(s), rule {}", input.display(), ticks, rules
    )));
    print!("{}", GenerationFormatter::format_summary(&generation));

    match GenerationFormatter::format_generation_with_coords(&generation) {
        Some(picture) => println!("\n{}", picture),
        None if generation.is_empty() => println!("{}", ColorOutput::error("All cells are dead")),
        None => println!("{}", ColorOutput::warning("Pattern too large to draw")),
    }

    Ok(())
}
