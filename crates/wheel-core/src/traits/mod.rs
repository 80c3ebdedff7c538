mod candidate_source;

pub use candidate_source::ICandidateSource;
