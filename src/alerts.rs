// src/alerts.rs
use tracing::info;

use crate::config::{AlertConfig, IndicatorSettings};
use crate::error::Result;
use crate::macd::{MacdResult, macd};

/// Fixed MACD parameters plus the two notification flags. No hidden
/// state; every call recomputes from the full series.
#[derive(Debug, Clone)]
pub struct CrossoverAlerter {
    fast_length: usize,
    slow_length: usize,
    signal_length: usize,
    alert_on_cross_up: bool,
    alert_on_cross_down: bool,
}

impl CrossoverAlerter {
    pub fn new(settings: &IndicatorSettings, alerts: &AlertConfig) -> Self {
        CrossoverAlerter {
            fast_length: settings.macd_fast,
            slow_length: settings.macd_slow,
            signal_length: settings.macd_signal,
            alert_on_cross_up: alerts.on_cross_up,
            alert_on_cross_down: alerts.on_cross_down,
        }
    }

    /// Runs the MACD computation and emits one notification per
    /// crossover index, ascending. Notifications are best-effort side
    /// output and never a source of failure.
    pub fn evaluate(&self, close: &[f64]) -> Result<MacdResult> {
        let result = macd(
            close,
            self.fast_length,
            self.slow_length,
            self.signal_length,
        )?;

        if self.alert_on_cross_up {
            for &i in &result.cross_up {
                info!(
                    "MACD crossover up at index {} (histogram {:.6})",
                    i, result.histogram[i]
                );
            }
        }
        if self.alert_on_cross_down {
            for &i in &result.cross_down {
                info!(
                    "MACD crossover down at index {} (histogram {:.6})",
                    i, result.histogram[i]
                );
            }
        }

        Ok(result)
    }
}
