//! Error types for sthiti-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid timestamp: {0} (must be finite and non-negative)")]
    InvalidTimestamp(f64),

    #[error("Out-of-order observation: timestamp {timestamp} is not after {last}")]
    OutOfOrder { timestamp: f64, last: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
