//! Error types for sthiti-eye

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EyeError {
    #[error("Camera error: {0}")]
    Camera(String),

    #[error("Detector error: {0}")]
    Detector(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Core error: {0}")]
    Core(#[from] sthiti_core::Error),
}
