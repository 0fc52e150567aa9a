//! Shared application state.

use std::sync::Arc;

use crate::dataset::Datasets;

/// Injected into handlers via the `State` extractor. Datasets are read-only
/// after start-up, so a plain `Arc` is enough.
#[derive(Clone)]
pub struct AppState {
    pub datasets: Arc<Datasets>,
    pub max_results: usize,
}

impl AppState {
    #[must_use]
    pub fn new(datasets: Datasets, max_results: usize) -> Self {
        Self { datasets: Arc::new(datasets), max_results }
    }
}
