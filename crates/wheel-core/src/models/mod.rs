pub mod acquisition;
pub mod match_tier;
pub mod rejection;
pub mod result_entry;

pub use acquisition::AcquisitionQuery;
pub use match_tier::MatchTier;
pub use rejection::{Rejection, RejectionReason};
pub use result_entry::ResultEntry;
