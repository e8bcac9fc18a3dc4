//! Spreadsheet capability
//!
//! The row-stripping workflow only needs four things from a spreadsheet
//! library: open a file, name a sheet by position, remove a row, and save.
//! These traits keep that boundary explicit so any conforming library can
//! back the workflow.

use anyhow::Result;
use std::path::Path;

pub mod mock;
pub mod umya;

pub use mock::{MockOpener, MockWorkbook};
pub use umya::{UmyaOpener, UmyaWorkbook};

/// Opens workbooks from a path
pub trait WorkbookOpener {
    /// Open the workbook stored at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed as a workbook
    fn open(&self, path: &Path) -> Result<Box<dyn Workbook>>;
}

/// An opened workbook bound to the path it was read from
pub trait Workbook {
    /// Name of the sheet at zero-based `index` in workbook order
    fn sheet_name_at(&self, index: usize) -> Option<String>;

    /// Remove the row at one-indexed `position` from `sheet`, shifting the
    /// rows below it up by one
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The sheet does not exist
    /// - The sheet has no row at `position`
    fn remove_row(&mut self, sheet: &str, position: u32) -> Result<()>;

    /// Persist the workbook back to the path it was opened from
    ///
    /// # Errors
    ///
    /// Returns an error if the workbook cannot be written
    fn save(&mut self) -> Result<()>;
}
