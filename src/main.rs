//! # `SheetStrip`
//!
//! `SheetStrip` copies an Excel workbook and removes rows from the top of one
//! of its sheets, leaving the original untouched.
//!
//! ## Usage
//!
//! ```sh
//! sheetstrip -f report.xlsx -l 3            # strip 3 rows from the first sheet
//! sheetstrip -f report.xlsx -l 1 -s Totals  # strip 1 row from "Totals"
//! sheetstrip -f report.xlsx -l 2 -o out.xlsx
//! ```
//!
//! Without `-o` the copy is written to `report_cleaned.xlsx`, or to
//! `report_cleaned_0.xlsx`, `report_cleaned_1.xlsx`, ... when taken.
//!
//! Set `RUST_LOG` to override the log level.

use clap::Parser as _;
use clap::error::ErrorKind;
use sheetstrip::cli::{Args, USAGE};
use sheetstrip::error::SheetStripError;
use sheetstrip::system::RealSystem;
use sheetstrip::workbook::UmyaOpener;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let parsed = Args::try_parse();

    let log_level = match parsed.as_ref() {
        Ok(args) if args.verbose => "debug",
        _ => "info",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    // Scoped rather than global: the subscriber is handed to this run only
    let code = tracing::subscriber::with_default(subscriber, || match parsed {
        Ok(args) => execute(&args),
        Err(err) => report_parse_error(&err),
    });
    std::process::exit(code);
}

fn execute(args: &Args) -> i32 {
    let system = RealSystem::new();
    let opener = UmyaOpener::new();

    match sheetstrip::run(args, &system, &opener) {
        Ok(_) => 0,
        Err(err) => {
            let domain = err.downcast_ref::<SheetStripError>();
            if domain.is_some_and(SheetStripError::is_argument) {
                error!("Usage: {USAGE}");
            }
            error!("{:#}", err);
            domain.map_or(1, SheetStripError::exit_code)
        }
    }
}

fn report_parse_error(err: &clap::Error) -> i32 {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        if let Err(print_err) = err.print() {
            error!("{print_err}");
            return 1;
        }
        return 0;
    }

    let message = err.to_string();
    let first_line = message.lines().next().unwrap_or_default();
    error!("Usage: {USAGE}");
    error!(
        "{}",
        SheetStripError::argument(first_line.trim_start_matches("error: "))
    );
    1
}
