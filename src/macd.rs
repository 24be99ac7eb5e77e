// src/macd.rs
use serde::Serialize;

use crate::error::Result;
use crate::indicators::smooth;

/// All derived MACD series plus the detected crossover indices.
/// Every vector has the same length as the input close series.
#[derive(Debug, Clone, Serialize)]
pub struct MacdResult {
    pub fast_ema: Vec<f64>,
    pub slow_ema: Vec<f64>,
    pub macd_line: Vec<f64>,
    pub signal_line: Vec<f64>,
    pub histogram: Vec<f64>,
    pub cross_up: Vec<usize>,
    pub cross_down: Vec<usize>,
}

pub fn macd(
    close: &[f64],
    fast_length: usize,
    slow_length: usize,
    signal_length: usize,
) -> Result<MacdResult> {
    let fast_ema = smooth(close, fast_length)?;
    let slow_ema = smooth(close, slow_length)?;

    let macd_line: Vec<f64> = fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(f, s)| f - s)
        .collect();
    let signal_line = smooth(&macd_line, signal_length)?;
    let histogram: Vec<f64> = macd_line
        .iter()
        .zip(signal_line.iter())
        .map(|(m, s)| m - s)
        .collect();

    // Index 0 has no predecessor and can never be a crossover point.
    let mut cross_up = Vec::new();
    let mut cross_down = Vec::new();
    for i in 1..histogram.len() {
        if histogram[i] > 0.0 && histogram[i - 1] <= 0.0 {
            cross_up.push(i);
        } else if histogram[i] < 0.0 && histogram[i - 1] >= 0.0 {
            cross_down.push(i);
        }
    }

    Ok(MacdResult {
        fast_ema,
        slow_ema,
        macd_line,
        signal_line,
        histogram,
        cross_up,
        cross_down,
    })
}
