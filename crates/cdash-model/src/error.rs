use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashError {
    #[error("dataset not found: {path}")]
    NotFound { path: PathBuf },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("unknown metric: {0}")]
    InvalidMetric(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DashError>;
