//! Подгрузка следующих страниц списка по курсору.
//!
//! `ListingController` не выполняет сетевых запросов сам: `begin_load`
//! выдаёт билет с URL курсора, а `complete` применяет ответ. Одновременно
//! в полёте может быть только один запрос; ответы по устаревшим билетам
//! отбрасываются. `load_more` объединяет оба шага для асинхронного кода,
//! которому доступен `PageFetcher`.

use tracing::{debug, warn};

use crate::client::PageFetcher;
use crate::error::{ContentError, ContentResult};
use crate::models::{PageResult, PostSummary};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Состояние подгрузки.
pub enum LoadState {
    /// Ещё ничего не подгружалось (или запрос был отменён).
    Idle,
    /// Запрос следующей страницы в полёте.
    Loading,
    /// Последняя подгрузка завершилась успешно.
    Loaded,
    /// Последняя подгрузка завершилась ошибкой.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Разрешение на один запрос следующей страницы.
pub struct LoadTicket {
    url: String,
    generation: u64,
}

impl LoadTicket {
    /// URL курсора, по которому нужно выполнить GET.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Состояние списка на клиенте: посты, курсор и статус подгрузки.
pub struct ListingController {
    posts: Vec<PostSummary>,
    cursor: Option<String>,
    state: LoadState,
    generation: u64,
}

impl ListingController {
    /// Инициализирует список первой страницей, полученной при генерации.
    pub fn new(initial: PageResult) -> Self {
        Self {
            posts: initial.posts,
            cursor: initial.next_page_token,
            state: LoadState::Idle,
            generation: 0,
        }
    }

    /// Посты в порядке добавления.
    pub fn posts(&self) -> &[PostSummary] {
        &self.posts
    }

    /// Текущий курсор следующей страницы.
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Есть ли ещё страницы (показывать ли кнопку «загрузить ещё»).
    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }

    /// Статус последней подгрузки.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Запрос в полёте.
    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Можно ли прямо сейчас начать подгрузку.
    pub fn can_load_more(&self) -> bool {
        self.has_more() && !self.is_loading()
    }

    /// Сообщение об ошибке последней подгрузки, если она была.
    pub fn failure(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Начинает подгрузку следующей страницы.
    ///
    /// Возвращает `None`, если курсор исчерпан или запрос уже в полёте:
    /// в этом случае запрос выполнять не нужно.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.is_loading() {
            debug!("load more ignored: request already in flight");
            return None;
        }
        let url = self.cursor.clone()?;

        self.generation += 1;
        self.state = LoadState::Loading;
        Some(LoadTicket {
            url,
            generation: self.generation,
        })
    }

    /// Применяет результат запроса по билету.
    ///
    /// Возвращает `false`, если билет устарел (запрос отменён) и ответ
    /// проигнорирован. При ошибке посты и курсор не меняются.
    pub fn complete(&mut self, ticket: LoadTicket, outcome: ContentResult<PageResult>) -> bool {
        match outcome {
            Ok(page) => self.apply_page(&ticket, page),
            Err(err) => self.apply_failure(&ticket, &err),
        }
    }

    fn is_current(&self, ticket: &LoadTicket) -> bool {
        let current = ticket.generation == self.generation && self.is_loading();
        if !current {
            debug!(url = %ticket.url, "stale page response discarded");
        }
        current
    }

    fn apply_page(&mut self, ticket: &LoadTicket, page: PageResult) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.posts.extend(page.posts);
        self.cursor = page.next_page_token;
        self.state = LoadState::Loaded;
        true
    }

    fn apply_failure(&mut self, ticket: &LoadTicket, err: &ContentError) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        warn!(url = %ticket.url, error = %err, "failed to load next page");
        self.state = LoadState::Failed(err.to_string());
        true
    }

    /// Отменяет запрос в полёте: его ответ будет отброшен.
    pub fn cancel(&mut self) {
        if self.is_loading() {
            self.generation += 1;
            self.state = LoadState::Idle;
        }
    }

    /// Подгружает следующую страницу через `fetcher`.
    ///
    /// Возвращает количество добавленных постов; `Ok(0)` без запроса, если
    /// курсор исчерпан. Ошибка запроса сохраняется в `state()` и
    /// возвращается вызывающему.
    pub async fn load_more<F>(&mut self, fetcher: &F) -> ContentResult<usize>
    where
        F: PageFetcher + ?Sized,
    {
        let Some(ticket) = self.begin_load() else {
            return Ok(0);
        };

        match fetcher.fetch_page(ticket.url()).await {
            Ok(raw) => {
                let page = PageResult::from(raw);
                let appended = page.posts.len();
                self.apply_page(&ticket, page);
                Ok(appended)
            }
            Err(err) => {
                self.apply_failure(&ticket, &err);
                Err(err)
            }
        }
    }
}
