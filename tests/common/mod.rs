//! Shared helpers for building real `.xlsx` fixtures

#![allow(dead_code)]

use std::path::Path;

/// Write a workbook whose sheets hold one value per row in column A
pub fn write_workbook(path: &Path, sheets: &[(&str, &[&str])]) {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();
    for (name, rows) in sheets {
        let sheet = book.new_sheet(*name).unwrap();
        for (index, value) in rows.iter().enumerate() {
            let row = u32::try_from(index).unwrap() + 1;
            sheet.get_cell_mut((1, row)).set_value(*value);
        }
    }
    umya_spreadsheet::writer::xlsx::write(&book, path).unwrap();
}

/// Column A of `sheet`, top to bottom
pub fn read_column(path: &Path, sheet: &str) -> Vec<String> {
    let book = umya_spreadsheet::reader::xlsx::read(path).unwrap();
    let sheet = book.get_sheet_by_name(sheet).unwrap();
    (1..=sheet.get_highest_row())
        .map(|row| sheet.get_value((1, row)))
        .collect()
}
