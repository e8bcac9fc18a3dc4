//! Configuration module
//!
//! Turns command-line arguments into a validated, immutable run configuration

pub mod validation;

use crate::cli::Args;
use crate::system::System;
use crate::utils::path::{default_output_path, find_free_path};
use anyhow::Result;
use std::path::PathBuf;
use tracing::info;
use validation::{coerce_row_count, validate_input_file};

/// Validated configuration for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Config {
    /// Workbook to copy
    pub input_file: PathBuf,

    /// Free path the stripped copy is written to
    pub output_file: PathBuf,

    /// Target sheet; `None` selects the first sheet by position
    pub sheet_name: Option<String>,

    /// Rows to delete from the top of the sheet
    pub rows_to_remove: u32,

    /// Report the plan without touching any file
    pub dry_run: bool,
}

impl Config {
    /// Resolve and validate a configuration from CLI arguments
    ///
    /// Reads file-system existence state only; nothing is created.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input path is empty or not an `.xlsx` file
    /// - The input file does not exist
    /// - No free output path can be found
    #[inline]
    pub fn resolve(args: &Args, system: &dyn System) -> Result<Self> {
        let input = args.file();
        validate_input_file(system, input)?;

        let sheet_name = args.sheet().map(str::to_owned);
        if sheet_name.is_none() {
            info!("No sheet name provided, using the first sheet");
        }

        let base_output = args
            .output()
            .map_or_else(|| default_output_path(input), str::to_owned);
        let output_file = find_free_path(system, &base_output)?;

        Ok(Self {
            input_file: PathBuf::from(input),
            output_file,
            sheet_name,
            rows_to_remove: coerce_row_count(args.lines),
            dry_run: args.dry_run,
        })
    }
}
