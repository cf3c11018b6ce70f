use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

/// Immutable grid configuration, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub columns: usize,
    pub rows: usize,
    pub wrap_around: bool,
    /// A cell starts alive with probability 1 / noise_denominator.
    pub noise_denominator: u64,
}

impl GridConfig {
    pub fn new(columns: usize, rows: usize, wrap_around: bool, noise_denominator: u64) -> Self {
        Self {
            columns,
            rows,
            wrap_around,
            noise_denominator,
        }
    }
}
