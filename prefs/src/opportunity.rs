//! Wire types for the by-product opportunity finder.
//!
//! The client posts the crop it grows and the district it farms in; the
//! server answers with nearby companies that can use the crop's by-products.
//! The response body is exactly one of three shapes, told apart by key.

#[cfg(test)]
#[path = "opportunity_test.rs"]
mod opportunity_test;

use serde::{Deserialize, Serialize};

use crate::records::LocationPreference;

/// `POST /recommendations` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpportunityRequest {
    pub crop_name: String,
    pub district: String,
}

impl OpportunityRequest {
    #[must_use]
    pub fn new(crop_name: impl Into<String>, district: impl Into<String>) -> Self {
        Self { crop_name: crop_name.into(), district: district.into() }
    }

    /// Request for `crop_name` in the subregion of `location`.
    #[must_use]
    pub fn for_location(crop_name: impl Into<String>, location: &LocationPreference) -> Self {
        Self::new(crop_name, location.subregion.clone())
    }
}

/// One company that could take the crop's by-products.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub company_name: String,
    pub address: String,
    pub status: String,
    pub domain: String,
    /// Kilometres from the district centre.
    pub distance: f64,
    pub rating: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpportunityResponse {
    Recommendations { recommendations: Vec<Opportunity> },
    /// The crop is known but no company in the district matched.
    Message { message: String },
    /// The crop is not in the by-product dataset.
    Error { error: String },
}

impl OpportunityResponse {
    /// Matched companies; empty for the message and error shapes.
    #[must_use]
    pub fn recommendations(&self) -> &[Opportunity] {
        match self {
            Self::Recommendations { recommendations } => recommendations,
            Self::Message { .. } | Self::Error { .. } => &[],
        }
    }

    /// Text to show the user when there is nothing to list.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        match self {
            Self::Recommendations { .. } => None,
            Self::Message { message } => Some(message),
            Self::Error { error } => Some(error),
        }
    }
}
