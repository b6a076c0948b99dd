//! Policy error types.

use thiserror::Error;

/// Errors surfaced when selecting or activating a policy.
///
/// Per-request queries never fail; only the startup-time seam
/// (preset lookup, source resolution) can.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// Preset lookup miss — keys are exact, no case folding.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}
