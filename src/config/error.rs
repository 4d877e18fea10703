//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Initial P lower bound must be strictly positive")]
    InvalidInitialPMin,

    #[error("Initial P upper bound is below the lower bound")]
    InvertedInitialP,

    #[error("P infinity threshold must be strictly positive")]
    InvalidInfinityThreshold,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
