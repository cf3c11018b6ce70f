//! The Game of Life transition rule.

use crate::game::types::Cell;

/// Compute a cell's next state from its current state and neighbor count.
pub fn next_state(cell: Cell, neighbors: u8) -> Cell {
    match (cell, neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Stable population.
        (Cell::Dead, 3) => Cell::Alive,                     // Reproduction.
        _ => Cell::Dead, // Underpopulation, overpopulation, or stays dead.
    }
}
