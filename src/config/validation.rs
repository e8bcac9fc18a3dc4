//! Input validation logic

use crate::error::SheetStripError;
use crate::system::System;
use crate::utils::path::{XLSX_EXTENSION, has_xlsx_extension};
use anyhow::Result;
use std::path::Path;
use tracing::warn;

/// Validate the input workbook path
///
/// # Errors
///
/// Returns an error if:
/// - The path is empty or does not end with `.xlsx` (argument error)
/// - The path does not exist (not-found error)
#[inline]
pub fn validate_input_file(system: &dyn System, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SheetStripError::argument("Input file is required (-f)").into());
    }

    if !has_xlsx_extension(path) {
        return Err(SheetStripError::argument(format!(
            "Input file must end with {XLSX_EXTENSION}: '{path}'"
        ))
        .into());
    }

    if !system.exists(Path::new(path)) {
        return Err(SheetStripError::not_found(path).into());
    }

    Ok(())
}

/// Coerce the requested row count to a non-negative `u32`
#[must_use]
#[inline]
pub fn coerce_row_count(requested: i64) -> u32 {
    if requested < 0 {
        warn!("Negative row count {requested} treated as 0");
        return 0;
    }
    u32::try_from(requested).unwrap_or(u32::MAX)
}
