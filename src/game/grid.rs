//! The grid engine.
//!
//! Owns the cell-state matrix, counts neighbors (with or without toroidal
//! wraparound), applies the Game of Life transition rule, and exposes
//! single-cell read/write access for the presentation layer.

use serde::{Serialize, Deserialize};
use rand::Rng;

use crate::game::error::GridError;
use crate::game::systems::rules::next_state;
use crate::game::types::{Cell, GridConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    config: GridConfig,
    /// Row-major: cells[row][column].
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a grid with every cell dead.
    ///
    /// Rejects zero dimensions, and wrap-around grids smaller than 3x3:
    /// the wrap targets `rows - 2` / `columns - 2` only exist from 3 up.
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        if config.columns == 0 || config.rows == 0 {
            return Err(GridError::InvalidDimensions {
                columns: config.columns,
                rows: config.rows,
            });
        }
        if config.wrap_around && (config.columns < 3 || config.rows < 3) {
            return Err(GridError::InvalidDimensions {
                columns: config.columns,
                rows: config.rows,
            });
        }
        if config.noise_denominator == 0 {
            return Err(GridError::InvalidNoiseDenominator);
        }

        Ok(Self {
            cells: vec![vec![Cell::Dead; config.columns]; config.rows],
            config,
        })
    }

    pub fn columns(&self) -> usize {
        self.config.columns
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }

    /// Overwrite the whole grid with random noise.
    ///
    /// Cells are drawn in row-major order; a cell becomes alive exactly when
    /// the drawn value satisfies `value % noise_denominator == 0`, i.e. with
    /// probability 1 / noise_denominator. The draw order is part of the
    /// contract so a seeded generator can be replayed against the result.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = if rng.random::<u64>() % self.config.noise_denominator == 0 {
                    Cell::Alive
                } else {
                    Cell::Dead
                };
            }
        }
    }

    /// Mark a single cell alive.
    pub fn set_alive(&mut self, column: usize, row: usize) -> Result<(), GridError> {
        self.check_bounds(column, row)?;
        self.cells[row][column] = Cell::Alive;
        Ok(())
    }

    pub fn is_alive(&self, column: usize, row: usize) -> Result<bool, GridError> {
        self.check_bounds(column, row)?;
        Ok(self.cells[row][column].is_alive())
    }

    /// Advance the simulation by one generation.
    ///
    /// The next generation is computed into a fresh matrix while neighbor
    /// counts read the current one, then swapped in as a whole. Mutating
    /// cells in place mid-pass would corrupt the neighbor reads of cells
    /// processed later in the same generation.
    pub fn advance(&mut self) {
        let mut next = vec![vec![Cell::Dead; self.config.columns]; self.config.rows];

        for row in 0..self.config.rows {
            for column in 0..self.config.columns {
                let neighbors = self.count_neighbors(column, row);
                next[row][column] = next_state(self.cells[row][column], neighbors);
            }
        }

        self.cells = next;
    }

    /// Count alive cells among the 8 surrounding positions.
    ///
    /// Without wraparound, cells on the outer boundary skip the count
    /// entirely and see 0 neighbors. With wraparound, edge lookups use the
    /// historical wrap targets: above row 0 lands on `rows - 2`, below the
    /// last row lands on row 1 (columns symmetric). Both behaviors are kept
    /// bit-for-bit for compatibility with the reference simulation.
    fn count_neighbors(&self, column: usize, row: usize) -> u8 {
        let columns = self.config.columns;
        let rows = self.config.rows;

        if !self.config.wrap_around
            && (column == 0 || column == columns - 1 || row == 0 || row == rows - 1)
        {
            return 0;
        }

        let mut count = 0;
        for delta_column in [-1isize, 0, 1] {
            for delta_row in [-1isize, 0, 1] {
                if delta_column == 0 && delta_row == 0 {
                    continue;
                }
                let neighbor_column = Self::shift(column, delta_column, columns);
                let neighbor_row = Self::shift(row, delta_row, rows);
                if self.cells[neighbor_row][neighbor_column].is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Move an index by -1/0/+1 along an axis of the given length, wrapping
    /// at the edges. Only reachable on edges in wrap-around mode; bounded
    /// grids never ask for a neighbor of a boundary cell.
    fn shift(index: usize, delta: isize, len: usize) -> usize {
        match delta {
            -1 if index == 0 => len - 2,
            -1 => index - 1,
            1 if index == len - 1 => 1,
            1 => index + 1,
            _ => index,
        }
    }

    fn check_bounds(&self, column: usize, row: usize) -> Result<(), GridError> {
        if column >= self.config.columns || row >= self.config.rows {
            return Err(GridError::OutOfRange {
                column,
                row,
                columns: self.config.columns,
                rows: self.config.rows,
            });
        }
        Ok(())
    }
}
