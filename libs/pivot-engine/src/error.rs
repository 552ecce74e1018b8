//! # Engine Errors
//!
//! Error types for the pivot engine.
//!
//! ## Error Policy
//!
//! - Malformed input (bad indices, non-finite coordinates, inconsistent
//!   buffer counts) is rejected at ingestion
//! - Degenerate geometry is not an error and resolves to local fallbacks

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while ingesting or processing meshes.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Edge indices out of range or non-finite vertex data
    #[error("Invalid geometry: {message}")]
    InvalidGeometry { message: String },

    /// Count arrays that disagree with each other or with buffer lengths
    #[error("Buffer mismatch: {message}")]
    BufferMismatch { message: String },

    /// Rejected engine configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl EngineError {
    /// Creates an invalid geometry error.
    pub fn invalid_geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            message: message.into(),
        }
    }

    /// Creates a buffer mismatch error.
    pub fn buffer_mismatch(message: impl Into<String>) -> Self {
        Self::BufferMismatch {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;
