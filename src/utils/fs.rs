//! File system utilities

/// Get human-readable file size
#[must_use]
#[allow(clippy::cast_precision_loss, reason = "Display only")]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= THRESHOLD && unit < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}
