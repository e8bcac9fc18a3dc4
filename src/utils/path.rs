//! Output path naming

use crate::error::SheetStripError;
use crate::system::System;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Required suffix of input workbooks
pub const XLSX_EXTENSION: &str = ".xlsx";

/// Suffix inserted before the extension of the default output path
pub const CLEANED_SUFFIX: &str = "_cleaned";

/// Upper bound on numbered candidates tried when the output path is taken
pub const MAX_OUTPUT_CANDIDATES: u32 = 10_000;

/// Whether `path` names an `.xlsx` workbook
#[must_use]
pub fn has_xlsx_extension(path: &str) -> bool {
    path.len() > XLSX_EXTENSION.len() && path.ends_with(XLSX_EXTENSION)
}

/// Default output path for `input`: `<input without .xlsx>_cleaned.xlsx`
#[must_use]
pub fn default_output_path(input: &str) -> String {
    let stem = input.strip_suffix(XLSX_EXTENSION).unwrap_or(input);
    format!("{stem}{CLEANED_SUFFIX}{XLSX_EXTENSION}")
}

/// Numbered variant of `base`: `report.xlsx` becomes `report_<index>.xlsx`
///
/// Paths without an extension get the suffix appended at the end.
#[must_use]
pub fn numbered_path(base: &str, index: u32) -> String {
    let extension = Path::new(base)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"));

    match extension {
        Some(ext) => {
            let stem = base.strip_suffix(ext.as_str()).unwrap_or(base);
            format!("{stem}_{index}{ext}")
        }
        None => format!("{base}_{index}"),
    }
}

/// First path in `base`, `base_0`, `base_1`, ... that does not exist
///
/// # Errors
///
/// Returns an error if:
/// - `MAX_OUTPUT_CANDIDATES` numbered candidates are all taken
pub fn find_free_path(system: &dyn System, base: &str) -> Result<PathBuf> {
    if !system.exists(Path::new(base)) {
        return Ok(PathBuf::from(base));
    }

    for index in 0..MAX_OUTPUT_CANDIDATES {
        let candidate = numbered_path(base, index);
        if !system.exists(Path::new(&candidate)) {
            debug!("Output path {base} is taken, using {candidate}");
            return Ok(PathBuf::from(candidate));
        }
    }

    Err(SheetStripError::argument(format!(
        "No free output path found for '{base}' after {MAX_OUTPUT_CANDIDATES} attempts"
    ))
    .into())
}
