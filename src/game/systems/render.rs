//! Grid rendering system (terminal).
//!
//! This module provides functions to print the grid and simulation state
//! for debugging/demo.

use crate::game::grid::Grid;

/// Print the grid to the terminal, one glyph per cell.
pub fn print_grid(grid: &Grid) {
    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            // is_alive cannot fail here: we iterate the grid's own bounds.
            let symbol = match grid.is_alive(column, row) {
                Ok(true) => "██",
                _ => "  ",
            };
            print!("{}", symbol);
        }
        println!();
    }
}

/// Print the state of the simulation.
pub fn print_simulation_state(grid: &Grid, generation: u32) {
    let alive = (0..grid.rows())
        .flat_map(|row| (0..grid.columns()).map(move |column| (column, row)))
        .filter(|&(column, row)| grid.is_alive(column, row).unwrap_or(false))
        .count();

    println!("--- Generation {} ---", generation);
    println!("Alive cells: {} / {}", alive, grid.columns() * grid.rows());
    println!();
}
