// src/config.rs
use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::env;

use crate::error::{AppError, Result};

#[derive(Debug, Deserialize, Clone)]
pub struct IndicatorConfig {
    pub length: i64,
    pub macd_fast: i64,
    pub macd_slow: i64,
    pub macd_signal: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AlertConfig {
    pub on_cross_up: bool,
    pub on_cross_down: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    pub output_file: String,
    pub sample_size: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub name: String,
    pub environment: String,
    pub indicator: IndicatorConfig,
    pub alerts: AlertConfig,
    pub report: ReportConfig,
}

/// Smoothing periods after validation of the raw signed config values.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorSettings {
    pub length: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
}

impl AppConfig {
    pub fn new() -> std::result::Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::new("config/default.toml", FileFormat::Toml))
            .add_source(
                File::new(&format!("config/{}.toml", run_mode), FileFormat::Toml).required(false),
            )
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

impl IndicatorConfig {
    /// Rejects negative lengths before they reach the smoothing core.
    pub fn validated(&self) -> Result<IndicatorSettings> {
        Ok(IndicatorSettings {
            length: to_length(self.length)?,
            macd_fast: to_length(self.macd_fast)?,
            macd_slow: to_length(self.macd_slow)?,
            macd_signal: to_length(self.macd_signal)?,
        })
    }
}

fn to_length(raw: i64) -> Result<usize> {
    usize::try_from(raw).map_err(|_| AppError::InvalidParameter(raw))
}
