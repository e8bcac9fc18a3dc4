//! Row strip operation coordination

use crate::config::Config;
use crate::error::SheetStripError;
use crate::operations::copy::copy_file;
use crate::system::System;
use crate::utils::fs::format_file_size;
use crate::workbook::{Workbook, WorkbookOpener};
use anyhow::{Context as _, Result};
use std::path::PathBuf;
use tracing::{debug, info};

/// Outcome of a completed strip
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct StripSummary {
    /// Path of the written copy
    pub output_file: PathBuf,
    /// Sheet the rows were removed from; `None` for a dry run without `-s`
    pub sheet_name: Option<String>,
    /// Size of the copy before mutation
    pub bytes_copied: u64,
    /// Rows removed from the top of the sheet
    pub rows_removed: u32,
}

/// Coordinates the copy, strip, and save workflow
#[non_exhaustive]
#[expect(clippy::module_name_repetitions, reason = "StripOperation")]
pub struct StripOperation<'src> {
    config: Config,
    system: &'src dyn System,
    opener: &'src dyn WorkbookOpener,
}

impl<'src> StripOperation<'src> {
    /// Create a strip operation for a resolved configuration
    #[must_use]
    #[inline]
    pub fn new(config: Config, system: &'src dyn System, opener: &'src dyn WorkbookOpener) -> Self {
        Self {
            config,
            system,
            opener,
        }
    }

    /// Execute the strip operation
    ///
    /// A failure after the copy step leaves the partially processed output
    /// file on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input cannot be copied to the output path
    /// - The copy cannot be opened as a workbook
    /// - The workbook has no sheets and no sheet name was given
    /// - A row cannot be removed (unknown sheet, or fewer rows than requested)
    /// - The workbook cannot be saved
    #[inline]
    pub fn execute(self) -> Result<StripSummary> {
        if self.config.dry_run {
            return Ok(self.preview());
        }

        let config = &self.config;
        info!(
            "Copying {} to {}",
            config.input_file.display(),
            config.output_file.display()
        );
        let bytes_copied = copy_file(self.system, &config.input_file, &config.output_file)?;

        let mut workbook = self
            .opener
            .open(&config.output_file)
            .context("Failed to open copied workbook")?;

        let sheet = resolve_sheet(workbook.as_ref(), config.sheet_name.as_deref())?;
        debug!("Target sheet: {sheet}");

        remove_leading_rows(workbook.as_mut(), &sheet, config.rows_to_remove)?;
        workbook.save()?;

        let summary = StripSummary {
            output_file: config.output_file.clone(),
            sheet_name: Some(sheet),
            bytes_copied,
            rows_removed: config.rows_to_remove,
        };
        info!("\u{2713} Wrote {}", summary.output_file.display());
        info!("  Bytes copied: {}", format_file_size(summary.bytes_copied));
        info!(
            "  Rows removed from '{}': {}",
            summary.sheet_name.as_deref().unwrap_or_default(),
            summary.rows_removed
        );
        Ok(summary)
    }

    /// Log the planned operations without touching the file system
    fn preview(self) -> StripSummary {
        let config = self.config;
        info!("Dry run preview - no files will be modified:");
        info!("  Copy: {} -> {}", config.input_file.display(), config.output_file.display());
        match config.sheet_name.as_deref() {
            Some(name) => info!("  Sheet: {name}"),
            None => info!("  Sheet: first sheet in the workbook"),
        }
        info!("  Rows to remove: {}", config.rows_to_remove);

        StripSummary {
            output_file: config.output_file,
            sheet_name: config.sheet_name,
            bytes_copied: 0,
            rows_removed: 0,
        }
    }
}

/// Name of the sheet to strip: the requested one, or the first by position
///
/// # Errors
///
/// Returns an error if no name was requested and the workbook has no sheets
pub fn resolve_sheet(workbook: &dyn Workbook, requested: Option<&str>) -> Result<String> {
    if let Some(name) = requested {
        return Ok(name.to_owned());
    }

    workbook
        .sheet_name_at(0)
        .ok_or_else(|| SheetStripError::workbook("Workbook contains no sheets").into())
}

/// Remove the topmost row of `sheet`, `count` times
///
/// Always deleting row 1 removes the first `count` rows of the original
/// sheet, since every removal shifts the remaining rows up.
///
/// # Errors
///
/// Returns the first removal error; earlier removals stay applied to the
/// in-memory workbook.
pub fn remove_leading_rows(workbook: &mut dyn Workbook, sheet: &str, count: u32) -> Result<()> {
    for removed in 0..count {
        workbook.remove_row(sheet, 1).with_context(|| {
            format!("Failed to remove row {} of {count} from '{sheet}'", removed + 1)
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::MockSystem;
    use crate::workbook::MockOpener;
    use crate::workbook::mock::MockSheet;
    use std::path::Path;

    const INPUT: &str = "/d/in.xlsx";
    const OUTPUT: &str = "/d/in_cleaned.xlsx";

    fn sheet(name: &str, rows: &[&str]) -> MockSheet {
        (
            name.to_owned(),
            rows.iter().map(|r| vec![(*r).to_owned()]).collect(),
        )
    }

    fn config(sheet_name: Option<&str>, rows_to_remove: u32) -> Config {
        Config {
            input_file: PathBuf::from(INPUT),
            output_file: PathBuf::from(OUTPUT),
            sheet_name: sheet_name.map(str::to_owned),
            rows_to_remove,
            dry_run: false,
        }
    }

    fn fixture(sheets: Vec<MockSheet>) -> (MockSystem, MockOpener) {
        let system = MockSystem::new().with_file(INPUT, b"PK fake").unwrap();
        // The opener models the copied file; the copy itself goes through the system.
        let opener = MockOpener::new().with_workbook(OUTPUT, sheets);
        (system, opener)
    }

    fn column(opener: &MockOpener, name: &str) -> Vec<String> {
        opener
            .rows(Path::new(OUTPUT), name)
            .unwrap()
            .into_iter()
            .map(|row| row[0].clone())
            .collect()
    }

    #[test]
    fn test_strip_first_rows() {
        let (system, opener) = fixture(vec![sheet("A", &["r1", "r2", "r3", "r4", "r5"])]);

        let summary = StripOperation::new(config(None, 2), &system, &opener)
            .execute()
            .unwrap();

        assert_eq!(column(&opener, "A"), vec!["r3", "r4", "r5"]);
        assert_eq!(summary.sheet_name.as_deref(), Some("A"));
        assert_eq!(summary.rows_removed, 2);
        assert_eq!(summary.bytes_copied, 7);
        assert_eq!(system.read(Path::new(OUTPUT)).unwrap(), b"PK fake");
    }

    #[test]
    fn test_zero_rows_leaves_sheet_unchanged() {
        let (system, opener) = fixture(vec![sheet("A", &["r1", "r2"])]);

        StripOperation::new(config(None, 0), &system, &opener)
            .execute()
            .unwrap();

        assert_eq!(column(&opener, "A"), vec!["r1", "r2"]);
    }

    #[test]
    fn test_default_sheet_is_first_by_position() {
        let (system, opener) = fixture(vec![sheet("A", &["a1", "a2"]), sheet("B", &["b1", "b2"])]);

        StripOperation::new(config(None, 1), &system, &opener)
            .execute()
            .unwrap();

        assert_eq!(column(&opener, "A"), vec!["a2"]);
        assert_eq!(column(&opener, "B"), vec!["b1", "b2"]);
    }

    #[test]
    fn test_named_sheet() {
        let (system, opener) = fixture(vec![sheet("A", &["a1", "a2"]), sheet("B", &["b1", "b2"])]);

        StripOperation::new(config(Some("B"), 1), &system, &opener)
            .execute()
            .unwrap();

        assert_eq!(column(&opener, "A"), vec!["a1", "a2"]);
        assert_eq!(column(&opener, "B"), vec!["b2"]);
    }

    #[test]
    fn test_too_many_rows_fails_without_saving() {
        let (system, opener) = fixture(vec![sheet("A", &["r1", "r2"])]);

        let err = StripOperation::new(config(None, 3), &system, &opener)
            .execute()
            .unwrap_err();

        assert!(err.to_string().contains("row 3 of 3"));
        assert_eq!(column(&opener, "A"), vec!["r1", "r2"]);
        // The copy stays on disk
        assert!(system.exists(Path::new(OUTPUT)));
    }

    #[test]
    fn test_unknown_sheet_fails() {
        let (system, opener) = fixture(vec![sheet("A", &["r1"])]);

        let err = StripOperation::new(config(Some("Nope"), 1), &system, &opener)
            .execute()
            .unwrap_err();

        assert!(format!("{err:#}").contains("'Nope' does not exist"));
    }

    #[test]
    fn test_unknown_sheet_with_zero_rows_succeeds() {
        let (system, opener) = fixture(vec![sheet("A", &["r1"])]);

        let summary = StripOperation::new(config(Some("Nope"), 0), &system, &opener)
            .execute()
            .unwrap();
        assert_eq!(summary.rows_removed, 0);
    }

    #[test]
    fn test_empty_workbook_without_sheet_name() {
        let (system, opener) = fixture(Vec::new());

        let err = StripOperation::new(config(None, 1), &system, &opener)
            .execute()
            .unwrap_err();
        assert!(err.to_string().contains("no sheets"));
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let (system, opener) = fixture(vec![sheet("A", &["r1", "r2"])]);
        let config = Config {
            dry_run: true,
            ..config(None, 1)
        };

        let summary = StripOperation::new(config, &system, &opener)
            .execute()
            .unwrap();

        assert_eq!(summary.rows_removed, 0);
        assert!(!system.exists(Path::new(OUTPUT)));
        assert_eq!(column(&opener, "A"), vec!["r1", "r2"]);
    }
}
