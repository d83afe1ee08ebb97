use crate::dataset::AqiDataset;
use std::sync::Arc;

/// Shared read-only view of the dataset. Cloning only bumps the refcount.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<AqiDataset>,
}

impl AppState {
    pub fn new(dataset: AqiDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}
