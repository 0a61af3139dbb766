//! Theme error types

use thiserror::Error;

/// Theme loading and validation errors
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Failed to read a theme file
    #[error("Failed to read theme file: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file is not valid TOML or has the wrong shape
    #[error("Failed to parse theme: {0}")]
    Parse(#[from] toml::de::Error),

    /// A metric is out of range
    #[error("Invalid slider style: {0}")]
    InvalidStyle(String),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
