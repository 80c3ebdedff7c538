//! Candidate POI records.
//!
//! A [`Candidate`] is read-only input to the pipeline. Sources hand over
//! [`RawCandidate`] records; [`ingest`] turns a batch of them into
//! candidates, skipping any record that is malformed.

mod raw;

pub use raw::{ingest, IngestReport, RawCandidate};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A single point-of-interest record under evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Candidate {
    /// Stable external identifier. Used for dedup and caching when present.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    /// Source type tags, e.g. `restaurant`, `park`, `bar`.
    #[serde(default)]
    pub types: Vec<String>,
    /// 0 (free) ..= 4 (very expensive). Absent when the source doesn't know.
    #[serde(default)]
    pub price_level: Option<u8>,
    /// 0.0 ..= 5.0.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub rating_count: u32,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    /// Editorial or descriptive text from the source.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<Coordinates>,
    #[serde(default)]
    pub photo_refs: Vec<String>,
    /// The source explicitly marks this place as free to visit.
    #[serde(default)]
    pub tagged_free: bool,
}

impl Candidate {
    /// Minimal candidate with a name and type tags.
    pub fn new(id: impl Into<String>, name: impl Into<String>, types: &[&str]) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            types: types.iter().map(|t| (*t).to_string()).collect(),
            price_level: None,
            rating: None,
            rating_count: 0,
            address: None,
            locality: None,
            description: None,
            location: None,
            photo_refs: Vec::new(),
            tagged_free: false,
        }
    }

    pub fn with_price_level(mut self, level: u8) -> Self {
        self.price_level = Some(level);
        self
    }

    pub fn with_rating(mut self, rating: f64, count: u32) -> Self {
        self.rating = Some(rating);
        self.rating_count = count;
        self
    }

    pub fn with_locality(mut self, locality: impl Into<String>) -> Self {
        self.locality = Some(locality.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn tagged_free(mut self) -> Self {
        self.tagged_free = true;
        self
    }

    /// Dedup identity: the external id, or the lowercased name when absent.
    pub fn identity(&self) -> String {
        match &self.id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => self.name.trim().to_lowercase(),
        }
    }

    /// Lowercased `name + address + locality`, the text keyword rules match against.
    pub fn searchable_text(&self) -> String {
        let mut text = self.name.to_lowercase();
        for part in [&self.address, &self.locality].into_iter().flatten() {
            text.push(' ');
            text.push_str(&part.to_lowercase());
        }
        text
    }

    /// Lowercased `name + description`, the text paid-signal rules match against.
    pub fn descriptive_text(&self) -> String {
        let mut text = self.name.to_lowercase();
        if let Some(description) = &self.description {
            text.push(' ');
            text.push_str(&description.to_lowercase());
        }
        text
    }

    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }
}
