//! `umya-spreadsheet` backed workbook

use super::{Workbook, WorkbookOpener};
use crate::error::SheetStripError;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;
use umya_spreadsheet::Spreadsheet;

/// Opens `.xlsx` files with `umya-spreadsheet`
#[derive(Debug, Clone, Copy, Default)]
pub struct UmyaOpener;

impl UmyaOpener {
    /// Create a new `UmyaOpener`
    #[must_use]
    pub const fn new() -> Self {
        return Self;
    }
}

impl WorkbookOpener for UmyaOpener {
    fn open(&self, path: &Path) -> Result<Box<dyn Workbook>> {
        let book = UmyaWorkbook::open(path)?;
        Ok(Box::new(book))
    }
}

/// A workbook held in memory by `umya-spreadsheet`
pub struct UmyaWorkbook {
    path: PathBuf,
    book: Spreadsheet,
}

impl UmyaWorkbook {
    /// Read the workbook at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file is not a readable `.xlsx` workbook
    pub fn open(path: &Path) -> Result<Self> {
        debug!("Opening workbook: {}", path.display());
        let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|e| {
            SheetStripError::workbook(format!(
                "Failed to open workbook {}: {e}",
                path.display()
            ))
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            book,
        })
    }
}

impl Workbook for UmyaWorkbook {
    fn sheet_name_at(&self, index: usize) -> Option<String> {
        self.book
            .get_sheet(&index)
            .map(|sheet| sheet.get_name().to_owned())
    }

    fn remove_row(&mut self, sheet: &str, position: u32) -> Result<()> {
        // `Spreadsheet::remove_row` shifts every sheet; go through the worksheet
        let worksheet = self
            .book
            .get_sheet_by_name_mut(sheet)
            .ok_or_else(|| SheetStripError::workbook(format!("Sheet '{sheet}' does not exist")))?;
        let highest_row = worksheet.get_highest_row();

        if position == 0 || position > highest_row {
            return Err(SheetStripError::workbook(format!(
                "Sheet '{sheet}' has no row {position} to remove ({highest_row} rows left)"
            ))
            .into());
        }

        worksheet.remove_row(&position, &1);
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        debug!("Saving workbook: {}", self.path.display());
        umya_spreadsheet::writer::xlsx::write(&self.book, &self.path).map_err(|e| {
            SheetStripError::workbook(format!(
                "Failed to save workbook {}: {e}",
                self.path.display()
            ))
        })?;
        Ok(())
    }
}
