// src/writer.rs
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::report::{Report, ReportRow};

/// Writes the report as UTF-8 CSV, header first, one data row per
/// line. The writer owns the file handle, so it is closed on every
/// exit path, including a failed write.
pub fn write_report(report: &Report, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(report.header())?;
    for row in &report.rows {
        writer.write_record(render_row(row))?;
    }
    writer.flush()?;

    info!("Report written to {}", path.display());
    Ok(())
}

// f64 Display is locale-independent, which the sink contract requires.
fn render_row(row: &ReportRow) -> Vec<String> {
    let mut record = vec![
        row.index.to_string(),
        row.tema_high.to_string(),
        row.tema_low.to_string(),
        row.tema_up.to_string(),
        row.tema_down.to_string(),
    ];
    if let (Some(line), Some(signal), Some(hist)) =
        (row.macd_line, row.signal_line, row.histogram)
    {
        record.push(line.to_string());
        record.push(signal.to_string());
        record.push(hist.to_string());
    }
    record
}
