//! By-product opportunity matching.
//!
//! A crop's by-products are useful to a fixed set of industry domains. A
//! company is a match when it sits in the requested district and works in one
//! of those domains. Matches keep dataset order and are capped at the
//! configured limit.

use prefs::opportunity::{Opportunity, OpportunityRequest, OpportunityResponse};

use crate::dataset::{Company, Datasets};

pub const DEFAULT_STATUS: &str = "Unknown";
pub const DEFAULT_DISTANCE_KM: f64 = 80.0;
pub const DEFAULT_RATING: f64 = 4.5;

/// Answer one opportunity request against `data`.
#[must_use]
pub fn recommend(data: &Datasets, request: &OpportunityRequest, limit: usize) -> OpportunityResponse {
    let crop_name = request.crop_name.trim().to_lowercase();
    let district = request.district.trim().to_lowercase();

    let Some(crop) = data.crop(&crop_name) else {
        return OpportunityResponse::Error { error: format!("No data available for crop: {crop_name}") };
    };

    let recommendations: Vec<Opportunity> = data
        .companies
        .iter()
        .filter(|c| c.district.trim().to_lowercase() == district)
        .filter(|c| crop.useful_domains.iter().any(|d| d.trim() == c.domain.trim()))
        .take(limit)
        .map(to_opportunity)
        .collect();

    if recommendations.is_empty() {
        return OpportunityResponse::Message {
            message: format!("No companies found in district {district} for crop {crop_name} by-products"),
        };
    }
    OpportunityResponse::Recommendations { recommendations }
}

fn to_opportunity(company: &Company) -> Opportunity {
    Opportunity {
        company_name: company.company_name.clone(),
        address: company.address.clone(),
        status: company.status.clone().unwrap_or_else(|| DEFAULT_STATUS.to_owned()),
        domain: company.domain.clone(),
        distance: company.distance.unwrap_or(DEFAULT_DISTANCE_KM),
        rating: company.rating.unwrap_or(DEFAULT_RATING),
    }
}

#[cfg(test)]
#[path = "recommend_test.rs"]
mod tests;
