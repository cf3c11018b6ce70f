//! Standalone simulation loop for local testing/demo.
//!
//! This module provides an interactive loop for running the simulation in
//! the terminal. Each tick either forwards a pointer-style coordinate into
//! the grid or advances one generation, then re-renders the grid.

use crate::config::game::SCALE;
use crate::game::grid::Grid;
use crate::game::systems::{print_grid, print_simulation_state};

use std::io::{self, Write};

/// One user decision per tick.
enum TickAction {
    Advance,
    SetAlive { x: usize, y: usize },
    Snapshot,
    Quit,
}

/// Prompt the user for the next tick action.
fn get_tick_input() -> TickAction {
    print!("Enter x,y (pixels) to paint, 's' for snapshot, 'q' to quit, or Enter to advance: ");
    io::stdout().flush().unwrap();

    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();

    let input = input.trim();
    match input {
        "" => TickAction::Advance,
        "q" => TickAction::Quit,
        "s" => TickAction::Snapshot,
        _ => match parse_pointer(input) {
            Some((x, y)) => TickAction::SetAlive { x, y },
            None => {
                println!("Unrecognized input '{}', advancing instead.", input);
                TickAction::Advance
            }
        },
    }
}

/// Parse a "x,y" pointer coordinate pair.
fn parse_pointer(input: &str) -> Option<(usize, usize)> {
    let (x, y) = input.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

/// Run the main simulation loop.
pub fn run_game_loop(mut grid: Grid) {
    let mut generation: u32 = 0;

    // Seed the grid with noise once at startup.
    grid.randomize(&mut rand::rng());
    log::info!("simulation started ({}x{} grid)", grid.columns(), grid.rows());

    println!("Simulation start!");
    print_simulation_state(&grid, generation);
    print_grid(&grid);

    loop {
        match get_tick_input() {
            TickAction::Advance => {
                grid.advance();
                generation += 1;
            }
            TickAction::SetAlive { x, y } => {
                // Pointer coordinates are in pixels; the grid speaks cells.
                let column = x / SCALE;
                let row = y / SCALE;
                if let Err(err) = grid.set_alive(column, row) {
                    log::warn!("ignoring click at ({x}, {y}): {err}");
                }
            }
            TickAction::Snapshot => match serde_json::to_string(&grid) {
                Ok(json) => println!("{json}"),
                Err(err) => log::error!("snapshot failed: {err}"),
            },
            TickAction::Quit => {
                println!("Simulation over after {} generations.", generation);
                break;
            }
        }

        print_simulation_state(&grid, generation);
        print_grid(&grid);
    }
}
