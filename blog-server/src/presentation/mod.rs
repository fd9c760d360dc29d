use std::sync::Arc;

use crate::application::listing_service::ListingSnapshot;

pub(crate) mod http;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) snapshot: Arc<ListingSnapshot>,
}

impl AppState {
    pub(crate) fn new(snapshot: ListingSnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }
}
