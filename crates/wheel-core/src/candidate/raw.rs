use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::{Candidate, Coordinates};
use crate::constants::{MAX_PRICE_LEVEL, MAX_RATING};
use crate::errors::CandidateError;

/// The lenient shape a POI source hands over. Every field is optional so a
/// single bad record can be reported instead of failing the whole batch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCandidate {
    #[serde(alias = "place_id")]
    pub id: Option<String>,
    #[serde(alias = "display_name")]
    pub name: Option<String>,
    pub types: Vec<String>,
    /// Either a number or a provider enum string such as `PRICE_LEVEL_FREE`.
    pub price_level: Option<Value>,
    pub rating: Option<f64>,
    #[serde(alias = "user_ratings_total")]
    pub rating_count: Option<u32>,
    #[serde(alias = "formatted_address")]
    pub address: Option<String>,
    #[serde(alias = "vicinity")]
    pub locality: Option<String>,
    #[serde(alias = "editorial_summary")]
    pub description: Option<String>,
    pub location: Option<Coordinates>,
    #[serde(alias = "photos")]
    pub photo_refs: Vec<String>,
    #[serde(alias = "is_free")]
    pub tagged_free: Option<bool>,
}

impl RawCandidate {
    fn convert(self, position: usize) -> Result<Candidate, CandidateError> {
        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or(CandidateError::MissingField {
                position,
                field: "name",
            })?;
        let identity = self
            .id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| name.to_lowercase());

        let price_level = match self.price_level {
            None | Some(Value::Null) => None,
            Some(value) => parse_price_level(&value, &identity, position)?,
        };

        let rating = match self.rating {
            Some(r) if !r.is_finite() || !(0.0..=MAX_RATING).contains(&r) => {
                return Err(CandidateError::RatingOutOfRange {
                    identity,
                    rating: r,
                });
            }
            other => other,
        };

        Ok(Candidate {
            id: self.id.filter(|id| !id.is_empty()),
            name,
            types: self
                .types
                .into_iter()
                .map(|t| t.trim().to_ascii_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
            price_level,
            rating,
            rating_count: self.rating_count.unwrap_or(0),
            address: self.address,
            locality: self.locality,
            description: self.description,
            location: self.location,
            photo_refs: self.photo_refs,
            tagged_free: self.tagged_free.unwrap_or(false),
        })
    }
}

impl TryFrom<RawCandidate> for Candidate {
    type Error = CandidateError;

    fn try_from(raw: RawCandidate) -> Result<Self, Self::Error> {
        raw.convert(0)
    }
}

fn parse_price_level(
    value: &Value,
    identity: &str,
    position: usize,
) -> Result<Option<u8>, CandidateError> {
    let level = match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| CandidateError::Malformed {
            position,
            reason: format!("non-integer price level {n}"),
        })?,
        Value::String(s) => match s.as_str() {
            "PRICE_LEVEL_FREE" => 0,
            "PRICE_LEVEL_INEXPENSIVE" => 1,
            "PRICE_LEVEL_MODERATE" => 2,
            "PRICE_LEVEL_EXPENSIVE" => 3,
            "PRICE_LEVEL_VERY_EXPENSIVE" => 4,
            "PRICE_LEVEL_UNSPECIFIED" => return Ok(None),
            other => other.parse::<i64>().map_err(|_| CandidateError::Malformed {
                position,
                reason: format!("unrecognised price level `{other}`"),
            })?,
        },
        other => {
            return Err(CandidateError::Malformed {
                position,
                reason: format!("price level must be a number or string, got {other}"),
            })
        }
    };

    if !(0..=i64::from(MAX_PRICE_LEVEL)).contains(&level) {
        return Err(CandidateError::PriceLevelOutOfRange {
            identity: identity.to_string(),
            level,
        });
    }
    // Range checked above.
    Ok(Some(level as u8))
}

/// Outcome of converting a batch of raw records.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub candidates: Vec<Candidate>,
    /// One entry per record that was skipped.
    pub skipped: Vec<CandidateError>,
}

/// Convert raw JSON POI records into candidates.
///
/// A malformed record is logged and skipped; it never fails the batch.
pub fn ingest(records: &[Value]) -> IngestReport {
    let mut report = IngestReport::default();

    for (position, value) in records.iter().enumerate() {
        let converted = RawCandidate::deserialize(value)
            .map_err(|e| CandidateError::Malformed {
                position,
                reason: e.to_string(),
            })
            .and_then(|raw| raw.convert(position));

        match converted {
            Ok(candidate) => report.candidates.push(candidate),
            Err(err) => {
                warn!(position, error = %err, "skipping malformed candidate");
                report.skipped.push(err);
            }
        }
    }

    report
}
