//! Log output captured through a scoped subscriber

use sheetstrip::cli::Args;
use sheetstrip::system::MockSystem;
use sheetstrip::workbook::MockOpener;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    fn contents(&self) -> String {
        String::from_utf8(self.buffer.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let writer = CaptureWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    writer.contents()
}

#[test]
fn test_logs_default_sheet_notice_and_summary() {
    let system = MockSystem::new().with_file("/d/in.xlsx", b"PK").unwrap();
    let opener = MockOpener::new().with_workbook(
        "/d/in_cleaned.xlsx",
        vec![("Sheet1".to_owned(), vec![vec!["h".to_owned()]])],
    );
    let args = Args {
        file: Some("/d/in.xlsx".to_owned()),
        lines: 1,
        ..Args::default()
    };

    let logs = capture(|| {
        sheetstrip::run(&args, &system, &opener).unwrap();
    });

    assert!(logs.contains("No sheet name provided, using the first sheet"));
    assert!(logs.contains("Target sheet: Sheet1"));
    assert!(logs.contains("Rows removed from 'Sheet1': 1"));
}

#[test]
fn test_dry_run_logs_plan() {
    let system = MockSystem::new().with_file("/d/in.xlsx", b"PK").unwrap();
    let opener = MockOpener::new();
    let args = Args {
        file: Some("/d/in.xlsx".to_owned()),
        lines: 3,
        sheet: Some("Totals".to_owned()),
        dry_run: true,
        ..Args::default()
    };

    let logs = capture(|| {
        sheetstrip::run(&args, &system, &opener).unwrap();
    });

    assert!(logs.contains("Dry run preview"));
    assert!(logs.contains("Sheet: Totals"));
    assert!(logs.contains("Rows to remove: 3"));
    assert!(!logs.contains("No sheet name provided"));
}
