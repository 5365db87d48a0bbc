//! Pattern file I/O for grids

use super::grid::{Cell, Grid};
use anyhow::{Context, Result};
use std::path::Path;

/// Load a pattern from a text file.
/// Format: each line is a row, with '1' for alive cells and '0' for dead cells
pub fn load_pattern<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_pattern(&content)
        .with_context(|| format!("Failed to parse pattern from file: {}", path.as_ref().display()))
}

/// Parse a pattern from its string representation.
pub fn parse_pattern(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    let mut rows = Vec::with_capacity(lines.len());

    for (y, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (x, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(Cell::Dead),
                '1' => row.push(Cell::Alive),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    x,
                    y
                ),
            }
        }
        rows.push(row);
    }

    let grid = Grid::from_rows(rows)
        .context("Pattern rows must form a non-empty rectangular grid")?;
    Ok(grid)
}

/// Save a pattern to a text file.
pub fn save_pattern<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let content = pattern_to_string(grid);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write pattern to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Save a grid as pretty-printed JSON.
pub fn save_pattern_json<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let content = serde_json::to_string_pretty(grid).context("Failed to serialize grid")?;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a grid to its text pattern representation.
pub fn pattern_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.height() * (grid.width() + 1));

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            result.push(if grid.cells[grid.index(x, y)].is_alive() {
                '1'
            } else {
                '0'
            });
        }
        result.push('\n');
    }

    result
}

/// Write a set of well-known starting patterns into `dir`.
pub fn write_example_patterns<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let examples = [
        ("blinker.txt", "00000\n00100\n00100\n00100\n00000\n"),
        ("glider.txt", "0100000\n0010000\n1110000\n0000000\n0000000\n0000000\n0000000\n"),
        ("block.txt", "0000\n0110\n0110\n0000\n"),
    ];

    for (name, content) in examples {
        let path = dir.join(name);
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write example pattern: {}", path.display()))?;
    }

    Ok(())
}
