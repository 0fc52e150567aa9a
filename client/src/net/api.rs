//! Opportunity-finder HTTP call.
//!
//! Browser (csr): a single `POST` via `gloo-net`. Native builds: a stub that
//! reports the call as unavailable.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result<_, String>` to show inline. There is no retry, no
//! timeout and no cancellation; a second search started before the first
//! returns races it, and whichever response lands last is shown.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use prefs::opportunity::{OpportunityRequest, OpportunityResponse};

pub const DEFAULT_OPPORTUNITY_URL: &str = "http://127.0.0.1:8000";

/// Base URL of the opportunity service, fixed at build time.
#[cfg(any(test, feature = "csr"))]
fn opportunity_base_url() -> &'static str {
    option_env!("KRISHI_OPPORTUNITY_URL").unwrap_or(DEFAULT_OPPORTUNITY_URL)
}

#[cfg(any(test, feature = "csr"))]
fn recommendations_endpoint(base_url: &str) -> String {
    format!("{}/recommendations", base_url.trim_end_matches('/'))
}

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(status: u16) -> String {
    format!("opportunity request failed: {status}")
}

/// Ask the opportunity service for companies near `request.district`.
///
/// # Errors
///
/// Returns an error string if the request fails, the service answers with a
/// non-OK status, or the body is none of the known response shapes.
pub async fn find_opportunities(request: &OpportunityRequest) -> Result<OpportunityResponse, String> {
    #[cfg(feature = "csr")]
    {
        let url = recommendations_endpoint(opportunity_base_url());
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<OpportunityResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err("not available outside the browser".to_owned())
    }
}
