use tracing::{debug, info};

use crate::client::{ContentServiceClient, DocumentQuery, validate_page_size};
use crate::error::ContentResult;
use crate::models::PageResult;

/// Загрузчик первой страницы списка постов на этапе генерации.
///
/// Клиент сервиса контента передаётся явно при создании.
pub struct ListingLoader<C: ContentServiceClient> {
    client: C,
    page_size: u32,
}

impl<C: ContentServiceClient> ListingLoader<C> {
    /// Создаёт загрузчик; размер страницы проверяется сразу (`1..=100`).
    pub fn new(client: C, page_size: u32) -> ContentResult<Self> {
        validate_page_size(page_size)?;
        Ok(Self { client, page_size })
    }

    /// Размер страницы, с которым работает загрузчик.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Запрашивает первую страницу постов и переводит её в `PageResult`.
    ///
    /// Ошибка сервиса контента возвращается вызывающему без повторов.
    pub async fn load(&self) -> ContentResult<PageResult> {
        let query = DocumentQuery::posts(self.page_size)?;
        let raw = self.client.query(&query).await?;

        debug!(
            results = raw.results.len(),
            total = raw.total_results_size,
            next_page = ?raw.next_page,
            "content service responded"
        );

        let page = PageResult::from(raw);
        info!(
            posts = page.posts.len(),
            has_next_page = page.has_next_page(),
            "listing page loaded"
        );
        Ok(page)
    }
}
