//! Conway's Game of Life engine with a console driver
//!
//! The engine owns the grid state, the B3/S23 transition, and snapshot
//! export into caller-supplied buffers. Timing, rendering, and randomized
//! seeding are driver concerns layered on top of the engine's call
//! interface; the engine itself knows nothing about them.

pub mod config;
pub mod engine;
pub mod utils;

pub use config::Settings;
pub use engine::{Cell, EngineError, Grid, LifeRules};

use anyhow::{Context, Result};
use config::SeedMode;

/// Build the starting grid described by `settings`.
///
/// Pattern seeding takes its dimensions from the pattern file; the other
/// modes use the configured grid size.
pub fn initial_grid(settings: &Settings) -> Result<Grid> {
    match settings.seed.mode {
        SeedMode::Pattern => {
            let path = settings
                .seed
                .pattern_file
                .as_ref()
                .context("Seed mode 'pattern' requires a pattern file")?;
            engine::load_pattern(path)
        }
        SeedMode::Empty => Ok(Grid::new(settings.grid.width, settings.grid.height)?),
        SeedMode::Random => {
            let mut grid = Grid::new(settings.grid.width, settings.grid.height)?;
            let mut rng = utils::seeding_rng(settings.seed.rng_seed);
            utils::seed_random(&mut grid, settings.seed.density, &mut rng)?;
            Ok(grid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_initial_grid_empty_mode() {
        let mut settings = Settings::default();
        settings.seed.mode = SeedMode::Empty;
        settings.grid.width = 7;
        settings.grid.height = 5;

        let grid = initial_grid(&settings).unwrap();
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 5);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_initial_grid_random_mode_is_reproducible() {
        let mut settings = Settings::default();
        settings.grid.width = 12;
        settings.grid.height = 12;
        settings.seed.rng_seed = Some(7);

        let first = initial_grid(&settings).unwrap();
        let second = initial_grid(&settings).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_initial_grid_pattern_mode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cross.txt");
        std::fs::write(&path, "010\n111\n010\n").unwrap();

        let mut settings = Settings::default();
        settings.seed.mode = SeedMode::Pattern;
        settings.seed.pattern_file = Some(path);

        let grid = initial_grid(&settings).unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 3));
        assert_eq!(grid.living_count(), 5);
    }
}
