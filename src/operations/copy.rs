//! Byte-for-byte file copying

use crate::error::SheetStripError;
use crate::system::System;
use anyhow::Result;
use std::io::{self, Write as _};
use std::path::Path;
use tracing::debug;

/// Copy `source` to `target`, returning the number of bytes copied
///
/// The target is created or truncated. Both handles are dropped before
/// returning, on success and on error alike.
///
/// # Errors
///
/// Returns a copy error if:
/// - The source is not a regular file
/// - Opening, reading, creating, or writing fails
pub fn copy_file(system: &dyn System, source: &Path, target: &Path) -> Result<u64> {
    if !system.is_file(source) {
        return Err(SheetStripError::copy(format!(
            "{} is not a regular file",
            source.display()
        ))
        .into());
    }

    let mut reader = system.open(source).map_err(|e| {
        SheetStripError::copy(format!("Failed to open {}: {e}", source.display()))
    })?;
    let mut writer = system.create(target).map_err(|e| {
        SheetStripError::copy(format!("Failed to create {}: {e}", target.display()))
    })?;

    let bytes = io::copy(&mut reader, &mut writer).map_err(|e| {
        SheetStripError::copy(format!(
            "Failed to copy {} to {}: {e}",
            source.display(),
            target.display()
        ))
    })?;
    writer.flush().map_err(|e| {
        SheetStripError::copy(format!("Failed to flush {}: {e}", target.display()))
    })?;

    debug!(
        "Copied {bytes} bytes from {} to {}",
        source.display(),
        target.display()
    );
    Ok(bytes)
}
