//! `POST /recommendations` handler.

use axum::Json;
use axum::extract::State;
use prefs::opportunity::{OpportunityRequest, OpportunityResponse};

use crate::services::recommend;
use crate::state::AppState;

/// Every outcome is `200 OK`; the body shape tells the caller which one.
pub async fn recommendations(
    State(state): State<AppState>,
    Json(request): Json<OpportunityRequest>,
) -> Json<OpportunityResponse> {
    let response = recommend::recommend(&state.datasets, &request, state.max_results);
    tracing::info!(
        crop = %request.crop_name,
        district = %request.district,
        matches = response.recommendations().len(),
        "recommendations served"
    );
    Json(response)
}

#[cfg(test)]
#[path = "recommendations_test.rs"]
mod tests;
