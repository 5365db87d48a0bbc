//! Driver-side helpers: console output and seeding

pub mod display;
pub mod seed;

pub use display::{format_grid_with_coords, render_frame, render_snapshot, ColorOutput, CLEAR_SCREEN};
pub use seed::{seed_random, seeding_rng};
