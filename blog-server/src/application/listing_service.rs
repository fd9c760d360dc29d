use anyhow::{Context, Result};
use blog_content::render::{RenderOptions, render_listing_page};
use blog_content::{ContentServiceClient, ListingLoader, PageResult};
use chrono::{DateTime, Utc};
use tracing::info;

/// Снимок главной страницы, полученный при генерации.
#[derive(Debug, Clone)]
pub(crate) struct ListingSnapshot {
    pub(crate) page: PageResult,
    pub(crate) html: String,
    pub(crate) generated_at: DateTime<Utc>,
}

pub(crate) struct ListingService<C: ContentServiceClient> {
    loader: ListingLoader<C>,
    render_options: RenderOptions,
}

impl<C: ContentServiceClient> ListingService<C> {
    pub(crate) fn new(loader: ListingLoader<C>, render_options: RenderOptions) -> Self {
        Self {
            loader,
            render_options,
        }
    }

    /// Загружает первую страницу и рендерит HTML. Ошибка сервиса контента
    /// прерывает генерацию.
    pub(crate) async fn generate(&self) -> Result<ListingSnapshot> {
        let page = self
            .loader
            .load()
            .await
            .context("failed to load listing page from content service")?;
        let html = render_listing_page(&page, &self.render_options)
            .context("failed to render listing page")?;

        let snapshot = ListingSnapshot {
            page,
            html,
            generated_at: Utc::now(),
        };
        info!(
            posts = snapshot.page.posts.len(),
            page_size = self.loader.page_size(),
            generated_at = %snapshot.generated_at,
            "listing snapshot generated"
        );
        Ok(snapshot)
    }
}
