//! Core module has the numeric traits and vector math every shape query is built on.
pub mod math;
pub mod traits;
