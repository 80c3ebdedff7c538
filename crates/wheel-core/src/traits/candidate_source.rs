use crate::errors::WheelResult;
use crate::models::AcquisitionQuery;
use crate::Candidate;

/// Supplies raw POI candidates for a location and intent.
///
/// Network access, pagination and backoff live behind this trait. The
/// pipeline only ever sees the in-memory batch it returns.
pub trait ICandidateSource: Send + Sync {
    /// Fetch candidates around `query.center`. An empty batch is valid.
    fn fetch(&self, query: &AcquisitionQuery) -> WheelResult<Vec<Candidate>>;
}
