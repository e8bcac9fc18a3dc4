//! System abstraction for filesystem operations
//!
//! This module provides a unified trait for all file-system interactions,
//! allowing for easy testing with mock implementations.

use std::io::{self, Read, Write};
use std::path::Path;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for filesystem operations
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::fs`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    // `read`, `write` and `is_dir` back test fixtures and assertions;
    // the strip workflow itself only probes, opens, and creates.

    /// Read entire file contents as bytes
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Write bytes to a file, creating it if it doesn't exist
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path points to a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Check if a path points to a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Open a file for reading (returns a readable stream)
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>>;

    /// Create or truncate a file for writing (returns a writable stream)
    fn create(&self, path: &Path) -> io::Result<Box<dyn Write + '_>>;
}
