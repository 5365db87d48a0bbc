//! Cellular automaton engine: grid state, transition rule, snapshot export

pub mod error;
pub mod grid;
pub mod io;
pub mod rules;

pub use error::EngineError;
pub use grid::{Cell, Grid};
pub use io::{
    load_pattern, parse_pattern, pattern_to_string, save_pattern, save_pattern_json,
    write_example_patterns,
};
pub use rules::LifeRules;
