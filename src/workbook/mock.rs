//! In-memory workbook for testing

#![expect(clippy::module_name_repetitions)]

use super::{Workbook, WorkbookOpener};
use crate::error::SheetStripError;
use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// A sheet as an ordered list of rows, each row a list of cell values
pub type MockSheet = (String, Vec<Vec<String>>);

/// In-memory stand-in for a spreadsheet library
///
/// Workbooks are registered per path. Opening hands out a copy; saving
/// writes the copy back, so tests observe only what was persisted.
///
/// # Example
/// ```
/// use sheetstrip::workbook::{MockOpener, Workbook as _, WorkbookOpener};
/// use std::path::Path;
///
/// let opener = MockOpener::new()
///     .with_workbook("/book.xlsx", vec![("A".to_owned(), vec![vec!["x".to_owned()]])]);
///
/// let book = opener.open(Path::new("/book.xlsx")).unwrap();
/// assert_eq!(book.sheet_name_at(0).as_deref(), Some("A"));
/// ```
#[derive(Clone, Default)]
pub struct MockOpener {
    books: Arc<RwLock<HashMap<PathBuf, Vec<MockSheet>>>>,
}

impl MockOpener {
    /// Create an opener with no registered workbooks
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a workbook at `path` (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_workbook<P: AsRef<Path>>(self, path: P, sheets: Vec<MockSheet>) -> Self {
        if let Ok(mut books) = self.books.write() {
            books.insert(path.as_ref().to_path_buf(), sheets);
        }
        self
    }

    /// Rows last saved for `sheet` of the workbook at `path`
    #[must_use]
    #[inline]
    pub fn rows(&self, path: &Path, sheet: &str) -> Option<Vec<Vec<String>>> {
        let books = self.books.read().ok()?;
        books
            .get(path)?
            .iter()
            .find(|(name, _)| name == sheet)
            .map(|(_, rows)| rows.clone())
    }
}

impl WorkbookOpener for MockOpener {
    fn open(&self, path: &Path) -> Result<Box<dyn Workbook>> {
        let sheets = self
            .books
            .read()
            .map_err(|e| SheetStripError::workbook(e.to_string()))?
            .get(path)
            .cloned()
            .ok_or_else(|| {
                SheetStripError::workbook(format!(
                    "Failed to open workbook {}: not a workbook",
                    path.display()
                ))
            })?;

        Ok(Box::new(MockWorkbook {
            path: path.to_path_buf(),
            sheets,
            opener: self.clone(),
        }))
    }
}

/// Workbook handed out by [`MockOpener`]
pub struct MockWorkbook {
    path: PathBuf,
    sheets: Vec<MockSheet>,
    opener: MockOpener,
}

impl Workbook for MockWorkbook {
    fn sheet_name_at(&self, index: usize) -> Option<String> {
        self.sheets.get(index).map(|(name, _)| name.clone())
    }

    fn remove_row(&mut self, sheet: &str, position: u32) -> Result<()> {
        let rows = self
            .sheets
            .iter_mut()
            .find(|(name, _)| name == sheet)
            .map(|(_, rows)| rows)
            .ok_or_else(|| SheetStripError::workbook(format!("Sheet '{sheet}' does not exist")))?;

        let index = usize::try_from(position)?
            .checked_sub(1)
            .filter(|index| *index < rows.len())
            .ok_or_else(|| {
                SheetStripError::workbook(format!(
                    "Sheet '{sheet}' has no row {position} to remove ({} rows left)",
                    rows.len()
                ))
            })?;

        rows.remove(index);
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        let mut books = self
            .opener
            .books
            .write()
            .map_err(|e| SheetStripError::workbook(e.to_string()))?;
        books.insert(self.path.clone(), self.sheets.clone());
        Ok(())
    }
}
