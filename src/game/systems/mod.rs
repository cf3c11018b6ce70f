pub mod rules;
pub mod render;

pub use rules::*;
pub use render::*;
