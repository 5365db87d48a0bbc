//! Configuration settings for the simulation driver

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub seed: SeedConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Milliseconds to sleep between generations.
    pub interval_ms: u64,
    /// Stop after this many generations; `None` runs until interrupted.
    pub max_generations: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub mode: SeedMode,
    /// Probability that a cell starts alive under random seeding.
    pub density: f64,
    pub pattern_file: Option<PathBuf>,
    /// Fixed RNG seed for reproducible boards; `None` uses OS entropy.
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedMode {
    Random,
    Pattern,
    Empty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub style: CellStyle,
    pub clear_screen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStyle {
    Blocks,
    Ascii,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                width: 48,
                height: 24,
            },
            simulation: SimulationConfig {
                interval_ms: 100,
                max_generations: None,
            },
            seed: SeedConfig {
                mode: SeedMode::Random,
                density: 0.3,
                pattern_file: None,
                rng_seed: None,
            },
            output: OutputConfig {
                style: CellStyle::Blocks,
                clear_screen: true,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.grid.width == 0 || self.grid.height == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.grid.width,
                self.grid.height
            );
        }

        if !(0.0..=1.0).contains(&self.seed.density) {
            anyhow::bail!(
                "Seed density must be within [0, 1], got {}",
                self.seed.density
            );
        }

        if self.seed.mode == SeedMode::Pattern && self.seed.pattern_file.is_none() {
            anyhow::bail!("Seed mode 'pattern' requires a pattern file");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.grid.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.grid.height = height;
        }
        if let Some(interval_ms) = cli_overrides.interval_ms {
            self.simulation.interval_ms = interval_ms;
        }
        if let Some(max_generations) = cli_overrides.max_generations {
            self.simulation.max_generations = Some(max_generations);
        }
        if let Some(density) = cli_overrides.density {
            self.seed.density = density;
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.seed.pattern_file = Some(pattern_file.clone());
            self.seed.mode = SeedMode::Pattern;
        }
        if let Some(rng_seed) = cli_overrides.rng_seed {
            self.seed.rng_seed = Some(rng_seed);
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub interval_ms: Option<u64>,
    pub max_generations: Option<usize>,
    pub density: Option<f64>,
    pub pattern_file: Option<PathBuf>,
    pub rng_seed: Option<u64>,
}
