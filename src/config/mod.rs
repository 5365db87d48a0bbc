//! Configuration management for the simulation driver

pub mod settings;

pub use settings::{
    CellStyle, CliOverrides, GridConfig, OutputConfig, SeedConfig, SeedMode, Settings,
    SimulationConfig,
};
