use clap::Parser;

/// One-line usage hint printed before argument errors
pub const USAGE: &str = "sheetstrip -f file -l rows [-s sheet -o output]";

/// Command-line arguments for sheetstrip
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "sheetstrip")]
#[command(about = "A CLI tool for stripping leading rows from a copy of an Excel workbook")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Path to the Excel (.xlsx) file
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<String>,

    /// Number of rows to remove from the top of the sheet
    #[arg(
        short = 'l',
        long = "lines",
        value_name = "ROWS",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub lines: i64,

    /// Sheet name (defaults to the first sheet)
    #[arg(short = 's', long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Output file path (defaults to <file>_cleaned.xlsx)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<String>,

    /// Preview operations without executing
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Input path, with an absent flag read as empty
    #[must_use]
    pub fn file(&self) -> &str {
        self.file.as_deref().unwrap_or_default()
    }

    /// Sheet name, with an empty flag read as absent
    #[must_use]
    pub fn sheet(&self) -> Option<&str> {
        self.sheet.as_deref().filter(|name| !name.is_empty())
    }

    /// Output path, with an empty flag read as absent
    #[must_use]
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref().filter(|path| !path.is_empty())
    }
}
