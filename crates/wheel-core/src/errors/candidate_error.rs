/// A raw POI record that cannot be turned into a [`Candidate`](crate::Candidate).
///
/// These never abort a pipeline run; the offending record is skipped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CandidateError {
    #[error("record {position} is missing required field `{field}`")]
    MissingField { position: usize, field: &'static str },

    #[error("record `{identity}` has price level {level}, expected 0..=4")]
    PriceLevelOutOfRange { identity: String, level: i64 },

    #[error("record `{identity}` has rating {rating}, expected 0..=5")]
    RatingOutOfRange { identity: String, rating: f64 },

    #[error("record {position} is not a POI object: {reason}")]
    Malformed { position: usize, reason: String },
}
