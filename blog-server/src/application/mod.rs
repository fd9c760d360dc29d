pub(crate) mod listing_service;
