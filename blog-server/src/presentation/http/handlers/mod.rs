pub(crate) mod listing;
