pub mod types;
pub mod error;

pub mod grid;
pub mod systems;
pub mod demo;
