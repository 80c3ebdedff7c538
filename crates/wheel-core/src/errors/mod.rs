mod candidate_error;
mod config_error;
mod source_error;

pub use candidate_error::CandidateError;
pub use config_error::ConfigError;
pub use source_error::SourceError;

/// Top-level error for the place-matching workspace.
///
/// "Too few results" is deliberately absent: an empty candidate list is a
/// valid outcome, not a failure.
#[derive(Debug, thiserror::Error)]
pub enum WheelError {
    #[error("invalid candidate: {0}")]
    Candidate(#[from] CandidateError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("candidate source error: {0}")]
    Source(#[from] SourceError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type WheelResult<T> = Result<T, WheelError>;
