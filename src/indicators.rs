// src/indicators.rs
use crate::error::{AppError, Result};

/// Exponential smoothing core shared by the TEMA and MACD paths.
/// Deterministic, single pass per series.

#[derive(Debug)]
pub struct Ema {
    mult: f64,
    current: Option<f64>,
}

impl Ema {
    pub fn new(length: usize) -> Self {
        let mult = 2.0 / (length as f64 + 1.0);
        Ema {
            mult,
            current: None,
        }
    }

    pub fn next(&mut self, value: f64) -> f64 {
        match self.current {
            None => {
                self.current = Some(value);
                value
            }
            Some(prev) => {
                let v = prev + self.mult * (value - prev);
                self.current = Some(v);
                v
            }
        }
    }
}

/// Exponential moving average over a whole series. Element 0 seeds the
/// average; every later element is a convex combination of the previous
/// output and the current input, with factor 2/(length+1).
pub fn smooth(series: &[f64], length: usize) -> Result<Vec<f64>> {
    if series.is_empty() {
        return Err(AppError::EmptyInput("series"));
    }
    let mut ema = Ema::new(length);
    Ok(series.iter().map(|&v| ema.next(v)).collect())
}

/// Triple EMA: 3*e1 - 3*e2 + e3 over three chained smoothings of the
/// same length. Reduces lag relative to a single EMA.
pub fn tema(series: &[f64], length: usize) -> Result<Vec<f64>> {
    let e1 = smooth(series, length)?;
    let e2 = smooth(&e1, length)?;
    let e3 = smooth(&e2, length)?;
    let out = e1
        .iter()
        .zip(e2.iter())
        .zip(e3.iter())
        .map(|((a, b), c)| 3.0 * a - 3.0 * b + c)
        .collect();
    Ok(out)
}
