use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Coordinates, Intent};

/// What the caller asks a POI source for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionQuery {
    pub center: Coordinates,
    /// `None` means "anything", fetched with the surprise rules.
    pub intent: Option<Intent>,
    pub radius_m: u32,
    /// Ids the user has dismissed this session. Sources may skip them
    /// up front; the search service removes them regardless.
    #[serde(default)]
    pub exclude_ids: BTreeSet<String>,
}
