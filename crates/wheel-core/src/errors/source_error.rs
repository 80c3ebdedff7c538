/// Failures reported by the POI acquisition collaborator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    #[error("candidate source unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("candidate source timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    #[error("candidate source rejected the query: {reason}")]
    Rejected { reason: String },
}
