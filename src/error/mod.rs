//! Error handling module
//!
//! Defines the error taxonomy surfaced to the command line

pub mod types;

pub use types::*;
