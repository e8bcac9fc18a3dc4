//! `SheetStrip` - A CLI tool for stripping leading rows from Excel workbooks
//!
//! This library copies an `.xlsx` workbook to a fresh, non-colliding path
//! and removes a fixed number of rows from the top of one of its sheets.
//! The original workbook is never modified.

pub mod cli;
pub mod config;
pub mod error;
pub mod operations;
pub mod system;
pub mod utils;
pub mod workbook;

use anyhow::Result;
use cli::Args;
use config::Config;
use operations::strip::{StripOperation, StripSummary};
use system::System;
use workbook::WorkbookOpener;

/// Main entry point for the sheetstrip library
///
/// # Errors
///
/// Returns an error if argument resolution or the strip workflow fails
pub fn run(args: &Args, system: &dyn System, opener: &dyn WorkbookOpener) -> Result<StripSummary> {
    let config = Config::resolve(args, system)?;
    StripOperation::new(config, system, opener).execute()
}
