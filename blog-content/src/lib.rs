//! Библиотека списка постов блога поверх headless CMS (Prismic-совместимый API).
//!
//! Состоит из двух частей:
//! - `ListingLoader` загружает первую страницу постов при генерации сайта;
//! - `ListingController` подгружает следующие страницы по курсору на клиенте.
//!
//! Сырые документы сервиса (`RawPostRecord`) всегда переводятся в
//! `PostSummary` перед отображением.
#![warn(missing_docs)]

mod client;
mod error;
#[cfg(feature = "http")]
mod http_client;
mod loader;
mod mapping;
mod models;
mod pagination;
pub mod render;

pub use client::{
    ContentServiceClient, DocumentQuery, MAX_PAGE_SIZE, POST_SUMMARY_FIELDS, POSTS_DOCUMENT_TYPE,
    PageFetcher, validate_page_size,
};
pub use error::{ContentError, ContentResult};
#[cfg(feature = "http")]
pub use http_client::HttpContentClient;
pub use loader::ListingLoader;
pub use mapping::{format_display_date, format_publication_date};
pub use models::{PageResult, PostSummary, RawPage, RawPostData, RawPostRecord};
pub use pagination::{ListingController, LoadState, LoadTicket};
