//! Main entry point.
//!
//! Initializes logging, builds the grid engine from the compile-time
//! configuration, and hands control to the interactive demo loop.

use crate::game::demo::game_loop::run_game_loop;
use crate::game::grid::Grid;
use crate::game::types::GridConfig;

pub mod config;
mod game;


fn main() {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    let grid_config = GridConfig::new(
        config::game::GRID_COL,
        config::game::GRID_ROW,
        config::game::WRAP_AROUND,
        config::game::NOISE_DENOMINATOR,
    );

    let grid = match Grid::new(grid_config) {
        Ok(grid) => grid,
        Err(err) => {
            log::error!("invalid grid configuration: {err}");
            std::process::exit(1);
        }
    };

    run_game_loop(grid);
}
