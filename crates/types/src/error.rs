//! Failures surfaced by a telemetry fetch

use thiserror::Error;

/// Why a poll cycle produced no snapshot
///
/// Per-field problems (missing channel, wrong type) are not errors; they
/// are handled by the renderers skipping the line.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Service unreachable, connection refused or the request timed out
    #[error("no signal: {0}")]
    Transport(String),

    /// A response arrived but its body could not be read
    #[error("failed to read response body: {0}")]
    Read(String),

    /// The body is not a JSON object of channel values
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Transport failures are the ordinary "simulator not running" state
    pub fn is_no_signal(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}
