/// Game configuration constants.
///
/// This module defines the simulation parameters: logical canvas size,
/// cell-to-pixel scale, and the grid dimensions derived from them.
pub const WIDTH: usize = 640; // Logical canvas width in pixels.

/// Logical canvas height in pixels.
pub const HEIGHT: usize = 480;

/// Edge length of one cell in pixels. Pointer coordinates are divided by
/// this before they reach the grid.
pub const SCALE: usize = 5;

/// Number of columns in the game grid.
pub const GRID_COL: usize = WIDTH / SCALE;

/// Number of rows in the game grid.
pub const GRID_ROW: usize = HEIGHT / SCALE;

/// Whether neighbor lookups wrap around the grid edges (toroidal grid).
pub const WRAP_AROUND: bool = true;

/// Initial noise density: a cell starts alive with probability
/// 1 / NOISE_DENOMINATOR after `randomize`.
pub const NOISE_DENOMINATOR: u64 = 2;
