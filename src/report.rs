// src/report.rs
use serde::Serialize;
use tracing::debug;

use crate::config::IndicatorSettings;
use crate::error::{AppError, Result};
use crate::indicators::tema;
use crate::macd::macd;

/// The four mandatory series plus the optional close series that
/// drives the MACD columns.
#[derive(Debug, Clone, Copy)]
pub struct ReportInputs<'a> {
    pub high: &'a [f64],
    pub low: &'a [f64],
    pub up: &'a [f64],
    pub down: &'a [f64],
    pub close: Option<&'a [f64]>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub index: usize,
    pub tema_high: f64,
    pub tema_low: f64,
    pub tema_up: f64,
    pub tema_down: f64,
    pub macd_line: Option<f64>,
    pub signal_line: Option<f64>,
    pub histogram: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub has_macd: bool,
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Column names, matching the row layout. MACD columns appear only
    /// when a close series was supplied.
    pub fn header(&self) -> Vec<&'static str> {
        let mut cols = vec!["index", "tema_high", "tema_low", "tema_up", "tema_down"];
        if self.has_macd {
            cols.extend(["macd_line", "signal_line", "histogram"]);
        }
        cols
    }
}

fn check_length(name: &'static str, expected: usize, actual: usize) -> Result<()> {
    if actual != expected {
        return Err(AppError::LengthMismatch {
            name,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Aligns TEMA outputs for the four input series, and MACD outputs when
/// close is present, into one row per time index.
pub fn assemble_report(inputs: ReportInputs<'_>, settings: &IndicatorSettings) -> Result<Report> {
    let n = inputs.high.len();
    check_length("low", n, inputs.low.len())?;
    check_length("up", n, inputs.up.len())?;
    check_length("down", n, inputs.down.len())?;
    if let Some(close) = inputs.close {
        check_length("close", n, close.len())?;
    }

    let tema_high = tema(inputs.high, settings.length)?;
    let tema_low = tema(inputs.low, settings.length)?;
    let tema_up = tema(inputs.up, settings.length)?;
    let tema_down = tema(inputs.down, settings.length)?;

    let macd_result = match inputs.close {
        Some(close) => Some(macd(
            close,
            settings.macd_fast,
            settings.macd_slow,
            settings.macd_signal,
        )?),
        None => None,
    };

    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let (macd_line, signal_line, histogram) = match &macd_result {
            Some(m) => (
                Some(m.macd_line[i]),
                Some(m.signal_line[i]),
                Some(m.histogram[i]),
            ),
            None => (None, None, None),
        };
        rows.push(ReportRow {
            index: i,
            tema_high: tema_high[i],
            tema_low: tema_low[i],
            tema_up: tema_up[i],
            tema_down: tema_down[i],
            macd_line,
            signal_line,
            histogram,
        });
    }

    debug!(
        "Assembled {} report rows (macd columns: {})",
        rows.len(),
        macd_result.is_some()
    );

    Ok(Report {
        has_macd: macd_result.is_some(),
        rows,
    })
}
