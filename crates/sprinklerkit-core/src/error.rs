//! Error handling for SprinklerKit
//!
//! Degenerate geometry (empty yards, zero-length edges) is not an error: the
//! engine recovers locally and produces a smaller plan. Errors are reserved
//! for misconfiguration and for the placement failsafe cap.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Layout engine error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Layout configuration failed validation
    #[error("Invalid layout configuration: {reason}")]
    InvalidConfig {
        /// The reason the configuration was rejected.
        reason: String,
    },

    /// The placement failsafe cap was exceeded
    #[error("Layout too large: {placed} placements exceed the cap of {cap}")]
    TooLarge {
        /// Number of placements emitted when the cap tripped.
        placed: usize,
        /// The configured placement cap.
        cap: usize,
    },
}

impl LayoutError {
    /// Check if this is the placement-cap error
    pub fn is_too_large(&self) -> bool {
        matches!(self, LayoutError::TooLarge { .. })
    }
}

/// Result type using LayoutError
pub type Result<T> = std::result::Result<T, LayoutError>;
