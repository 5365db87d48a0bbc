//! Console driver for the Game of Life engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lifegame::{
    config::{CliOverrides, Settings},
    engine::{load_pattern, save_pattern, save_pattern_json, write_example_patterns, LifeRules},
    initial_grid,
    utils::{display, ColorOutput},
};
use std::io::Write as _;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "lifegame")]
#[command(about = "Conway's Game of Life in the terminal")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation as a terminal animation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Milliseconds between generations (overrides config)
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Stop after this many generations (overrides config)
        #[arg(short = 'g', long)]
        max_generations: Option<usize>,

        /// Live-cell density for random seeding (overrides config)
        #[arg(short, long)]
        density: Option<f64>,

        /// Seed from a pattern file instead of randomly (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// RNG seed for reproducible boards (overrides config)
        #[arg(long)]
        rng_seed: Option<u64>,
    },

    /// Advance a pattern a fixed number of generations and print it
    Step {
        /// Pattern file to start from
        #[arg(short, long)]
        pattern: PathBuf,

        /// Number of generations to advance
        #[arg(short, long, default_value_t = 1)]
        generations: usize,

        /// Write the result here instead of only printing it
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Save as JSON instead of the text pattern format
        #[arg(long)]
        json: bool,
    },

    /// Create a default configuration and example pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            width,
            height,
            interval_ms,
            max_generations,
            density,
            pattern,
            rng_seed,
        } => {
            let overrides = CliOverrides {
                width,
                height,
                interval_ms,
                max_generations,
                density,
                pattern_file: pattern,
                rng_seed,
            };
            run_command(config, overrides)
        }
        Commands::Step {
            pattern,
            generations,
            output,
            json,
        } => step_command(pattern, generations, output, json),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides) -> Result<()> {
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(&overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    let mut grid = initial_grid(&settings)?;

    // One snapshot buffer, reused for every frame.
    let mut snapshot = vec![0u8; grid.cell_count()];
    let mut generation = 0usize;

    loop {
        grid.fill_cells(&mut snapshot)?;
        let frame = display::render_frame(&snapshot, grid.width(), generation, settings.output.style);

        if settings.output.clear_screen {
            print!("{}{}", display::CLEAR_SCREEN, frame);
            std::io::stdout().flush().ok();
        } else {
            println!("{}", frame);
        }

        if let Some(max) = settings.simulation.max_generations {
            if generation >= max {
                break;
            }
        }

        thread::sleep(Duration::from_millis(settings.simulation.interval_ms));
        grid.next();
        generation += 1;
    }

    println!(
        "{}",
        ColorOutput::info(&format!(
            "Stopped after {} generation(s), {} cell(s) living",
            generation,
            grid.living_count()
        ))
    );

    Ok(())
}

fn step_command(
    pattern_path: PathBuf,
    generations: usize,
    output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let grid = load_pattern(&pattern_path)
        .with_context(|| format!("Failed to load pattern from {}", pattern_path.display()))?;

    println!(
        "Start ({}x{}, {} living):",
        grid.width(),
        grid.height(),
        grid.living_count()
    );
    println!("{}", display::format_grid_with_coords(&grid));

    let evolved = LifeRules::evolve_generations(grid, generations);

    println!(
        "After {} generation(s) ({} living):",
        generations,
        evolved.living_count()
    );
    println!("{}", display::format_grid_with_coords(&evolved));

    if let Some(path) = output {
        if json {
            save_pattern_json(&evolved, &path)?;
        } else {
            save_pattern(&evolved, &path)?;
        }
        println!(
            "{}",
            ColorOutput::success(&format!("Saved result to {}", path.display()))
        );
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    write_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    // A configuration variant that animates one of the example patterns.
    let mut glider_config = Settings::default();
    glider_config.seed.mode = lifegame::config::SeedMode::Pattern;
    glider_config.seed.pattern_file = Some(patterns_dir.join("glider.txt"));
    glider_config.simulation.interval_ms = 150;
    glider_config.to_file(&config_dir.join("glider.yaml"))?;
    println!("Created: {}", config_dir.join("glider.yaml").display());

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");
    println!("3. Or step a pattern: cargo run -- step --pattern patterns/blinker.txt");

    Ok(())
}
