//! Operations module
//!
//! Coordinates the strip workflow: copying the input and removing rows from the copy

pub mod copy;
pub mod strip;

pub use copy::*;
pub use strip::*;
