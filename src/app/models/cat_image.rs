//! # Cat Image Model
//!
//! Mirrors the JSON documents served by The Cat API. Every breed attribute is
//! optional: an absent field means "unknown", never zero.

use serde::{Deserialize, Serialize};

/// One image returned by The Cat API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatImage {
    pub id: String,
    pub url: String,
    /// Absent when the search endpoint has no breed data; may also be empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breeds: Option<Vec<Breed>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl CatImage {
    /// Pixel dimensions, only when the API reported both of them
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.width.zip(self.height)
    }

    /// First breed attached to the image, if any
    pub fn primary_breed(&self) -> Option<&Breed> {
        self.breeds.as_deref().and_then(<[Breed]>::first)
    }
}

/// Weight range of a breed as free-form text, e.g. "7 - 10"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weight {
    pub imperial: Option<String>,
    pub metric: Option<String>,
}

/// Breed description attached to a cat image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breed {
    pub weight: Option<Weight>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub cfa_url: Option<String>,
    pub vetstreet_url: Option<String>,
    pub vcahospitals_url: Option<String>,
    pub temperament: Option<String>,
    pub origin: Option<String>,
    pub country_codes: Option<String>,
    pub country_code: Option<String>,
    pub description: Option<String>,
    pub life_span: Option<String>,
    pub indoor: Option<u8>,
    pub lap: Option<u8>,
    pub alt_names: Option<String>,
    pub adaptability: Option<u8>,
    pub affection_level: Option<u8>,
    pub child_friendly: Option<u8>,
    pub dog_friendly: Option<u8>,
    pub energy_level: Option<u8>,
    pub grooming: Option<u8>,
    pub health_issues: Option<u8>,
    pub intelligence: Option<u8>,
    pub shedding_level: Option<u8>,
    pub social_needs: Option<u8>,
    pub stranger_friendly: Option<u8>,
    pub vocalisation: Option<u8>,
    pub experimental: Option<u8>,
    pub hairless: Option<u8>,
    pub natural: Option<u8>,
    pub rare: Option<u8>,
    pub rex: Option<u8>,
    pub suppressed_tail: Option<u8>,
    pub short_legs: Option<u8>,
    pub wikipedia_url: Option<String>,
    pub hypoallergenic: Option<u8>,
    pub reference_image_id: Option<String>,
}

impl Breed {
    /// Headline 1-5 ratings that are present, in display order
    pub fn ratings(&self) -> Vec<(&'static str, u8)> {
        [
            ("Adaptability", self.adaptability),
            ("Energy level", self.energy_level),
            ("Affection level", self.affection_level),
            ("Intelligence", self.intelligence),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }

    /// Metric weight range, if known
    pub fn metric_weight(&self) -> Option<&str> {
        self.weight.as_ref().and_then(|w| w.metric.as_deref())
    }
}
