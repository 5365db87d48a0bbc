//! Game of Life transition rules

use super::grid::{Cell, Grid};

/// The standard Life rule, B3/S23.
pub struct LifeRules;

impl LifeRules {
    /// Compute the next generation of `current`.
    ///
    /// Every cell's next state is derived from the previous generation
    /// only; the result is built in a separate buffer so a partially
    /// updated generation is never read.
    pub fn evolve(current: &Grid) -> Grid {
        let mut next = current.clone();
        next.cells = Self::next_cells(current);
        next
    }

    /// Row-major cell buffer for the generation after `current`.
    pub(crate) fn next_cells(current: &Grid) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(current.cell_count());

        for y in 0..current.height() {
            for x in 0..current.width() {
                let cell = current.cells[current.index(x, y)];
                let neighbors = current.count_neighbors(x, y);
                cells.push(Cell::from_bool(Self::should_be_alive(cell, neighbors)));
            }
        }

        cells
    }

    /// Whether a cell is alive in the next generation, given its current
    /// state and live neighbor count.
    pub fn should_be_alive(cell: Cell, neighbors: u8) -> bool {
        matches!(
            (cell, neighbors),
            (Cell::Alive, 2) | (Cell::Alive, 3) | (Cell::Dead, 3)
        )
    }

    /// Evolve `grid` for `generations` steps.
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid.next();
        }
        grid
    }
}

impl Grid {
    /// Advance the grid by exactly one generation in place.
    ///
    /// The replacement buffer is computed in full before it is swapped in,
    /// so readers never observe a half-advanced grid.
    pub fn next(&mut self) {
        self.cells = LifeRules::next_cells(self);
    }
}
