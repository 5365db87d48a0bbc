//! Grid representation and snapshot export

use crate::engine::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single cell. There are no other states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    /// Whether this cell is alive.
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Snapshot encoding: `Dead` is 0, `Alive` is 1.
    #[inline]
    pub fn to_bit(self) -> u8 {
        match self {
            Cell::Dead => 0,
            Cell::Alive => 1,
        }
    }

    /// Inverse of [`Cell::is_alive`].
    #[inline]
    pub fn from_bool(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// A fixed-size Game of Life grid.
///
/// Cells are stored row-major, `index = y * width + x`, and the buffer
/// always holds exactly `width * height` cells. Dimensions are fixed at
/// construction. Callers read state through [`Grid::get`] and
/// [`Grid::fill_cells`], which hand out copies, never references into the
/// live buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    pub(crate) cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell `Dead`.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Build a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, EngineError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());

        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }

        for row in &rows {
            if row.len() != width {
                return Err(EngineError::SizeMismatch {
                    expected: width,
                    actual: row.len(),
                });
            }
        }

        let cells: Vec<Cell> = rows.into_iter().flatten().collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total cell count, `width * height`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Convert 2D coordinates to the row-major index.
    #[inline]
    pub(crate) fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), EngineError> {
        if x >= self.width || y >= self.height {
            return Err(EngineError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, EngineError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[self.index(x, y)])
    }

    /// Set the cell at `(x, y)`.
    ///
    /// Mutates exactly that cell and does not advance the generation.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), EngineError> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Write the current generation into `buffer`, row-major, `Dead` as 0
    /// and `Alive` as 1. The buffer length must be exactly `width * height`.
    ///
    /// Pure read: engine state is untouched, and the bytes belong to the
    /// caller, so mutating them later cannot corrupt the grid.
    pub fn fill_cells(&self, buffer: &mut [u8]) -> Result<(), EngineError> {
        if buffer.len() != self.cells.len() {
            return Err(EngineError::SizeMismatch {
                expected: self.cells.len(),
                actual: buffer.len(),
            });
        }
        for (slot, cell) in buffer.iter_mut().zip(&self.cells) {
            *slot = cell.to_bit();
        }
        Ok(())
    }

    /// Count living neighbors of `(x, y)` in the 8-cell Moore neighborhood.
    ///
    /// The grid is toroidal: the neighborhood wraps around both axes, so
    /// every cell has exactly eight neighbors and column `width - 1` is
    /// adjacent to column 0 (likewise for rows).
    pub fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;

        for dy in [-1isize, 0, 1] {
            for dx in [-1isize, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue; // Skip the cell itself
                }

                let nx = wrap(x as isize + dx, self.width);
                let ny = wrap(y as isize + dy, self.height);

                if self.cells[self.index(nx, ny)].is_alive() {
                    count += 1;
                }
            }
        }

        count
    }

    /// Count total living cells.
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Check if the grid has no living cells.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }
}

/// Wrap a possibly out-of-range coordinate into `[0, len)`.
#[inline]
fn wrap(coord: isize, len: usize) -> usize {
    let len = len as isize;
    (((coord % len) + len) % len) as usize
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let symbol = if self.cells[self.index(x, y)].is_alive() {
                    '█'
                } else {
                    '·'
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.cell_count(), 12);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(EngineError::InvalidDimensions { width: 0, height: 5 })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(EngineError::InvalidDimensions { width: 5, height: 0 })
        );
        assert_eq!(
            Grid::new(0, 0),
            Err(EngineError::InvalidDimensions { width: 0, height: 0 })
        );
    }

    #[test]
    fn test_fresh_grid_snapshot_is_all_zeros() {
        let grid = Grid::new(4, 3).unwrap();
        let mut buffer = vec![0xffu8; 12];
        grid.fill_cells(&mut buffer).unwrap();
        assert!(buffer.iter().all(|&bit| bit == 0));
    }

    #[test]
    fn test_set_then_get_reflects_exactly_one_cell() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set(2, 1, Cell::Alive).unwrap();

        for y in 0..3 {
            for x in 0..4 {
                let expected = if (x, y) == (2, 1) { Cell::Alive } else { Cell::Dead };
                assert_eq!(grid.get(x, y).unwrap(), expected);
            }
        }

        let mut buffer = vec![0u8; 12];
        grid.fill_cells(&mut buffer).unwrap();
        let mut expected = vec![0u8; 12];
        expected[6] = 1; // y * width + x
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert_eq!(
            grid.get(3, 0),
            Err(EngineError::OutOfBounds { x: 3, y: 0, width: 3, height: 3 })
        );
        assert_eq!(
            grid.get(0, 3),
            Err(EngineError::OutOfBounds { x: 0, y: 3, width: 3, height: 3 })
        );
        assert_eq!(
            grid.set(7, 7, Cell::Alive),
            Err(EngineError::OutOfBounds { x: 7, y: 7, width: 3, height: 3 })
        );
    }

    #[test]
    fn test_fill_cells_size_mismatch() {
        let grid = Grid::new(3, 3).unwrap();
        let mut short = vec![0u8; 8];
        assert_eq!(
            grid.fill_cells(&mut short),
            Err(EngineError::SizeMismatch { expected: 9, actual: 8 })
        );
        let mut long = vec![0u8; 10];
        assert_eq!(
            grid.fill_cells(&mut long),
            Err(EngineError::SizeMismatch { expected: 9, actual: 10 })
        );
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(vec![
            vec![Cell::Alive, Cell::Dead],
            vec![Cell::Dead, Cell::Alive],
        ])
        .unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.living_count(), 2);
        assert_eq!(grid.get(0, 0).unwrap(), Cell::Alive);
        assert_eq!(grid.get(1, 0).unwrap(), Cell::Dead);
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        assert_eq!(
            Grid::from_rows(vec![]),
            Err(EngineError::InvalidDimensions { width: 0, height: 0 })
        );
        assert_eq!(
            Grid::from_rows(vec![vec![Cell::Dead, Cell::Dead], vec![Cell::Dead]]),
            Err(EngineError::SizeMismatch { expected: 2, actual: 1 })
        );
    }

    #[test]
    fn test_toroidal_corner_adjacency() {
        // On a torus the far corner is diagonally adjacent to the origin.
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(2, 2, Cell::Alive).unwrap();
        assert_eq!(grid.count_neighbors(0, 0), 1);
    }

    #[test]
    fn test_wrapped_neighbor_counting() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(0, 0, Cell::Alive).unwrap();
        grid.set(1, 1, Cell::Alive).unwrap();
        // On a 2x2 torus four of the eight offsets land on (1, 1).
        assert_eq!(grid.count_neighbors(0, 0), 4);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(0, 0, Cell::Alive).unwrap();

        let mut buffer = vec![0u8; 4];
        grid.fill_cells(&mut buffer).unwrap();
        buffer[1] = 1; // caller-side mutation

        assert_eq!(grid.get(1, 0).unwrap(), Cell::Dead);
    }
}
