//! Utility modules
//!
//! Path naming and file size helpers shared by the resolver and the workflow

pub mod fs;
pub mod path;
