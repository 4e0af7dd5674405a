use crate::config::ConfigError;
use crate::leads::domain::ParseValueError;
use crate::telemetry::TelemetryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv export error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid input: {0}")]
    Parse(#[from] ParseValueError),
    #[error("render error: {0}")]
    Render(String),
}
