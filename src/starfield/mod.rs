pub mod engine;
pub mod nebula;
pub mod pointer;
pub mod shooting_star;
pub mod star;

pub use engine::StarfieldEngine;
