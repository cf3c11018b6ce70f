// Demo module for the simulation. Provides the interactive terminal tick
// loop that drives the grid engine.
pub mod game_loop;
