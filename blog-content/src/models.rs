use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Карточка поста для списка: готовые к отображению поля.
pub struct PostSummary {
    /// Slug поста, используется в ссылке `/post/{slug}`.
    pub slug: String,
    /// Дата публикации в формате `dd mmm yyyy` (pt-BR).
    pub first_publication_date: String,
    /// Заголовок.
    pub title: String,
    /// Подзаголовок.
    pub subtitle: String,
    /// Автор.
    pub author: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Страница постов вместе с курсором следующей страницы.
pub struct PageResult {
    /// Посты страницы в порядке, в котором их вернул сервис.
    pub posts: Vec<PostSummary>,
    /// URL следующей страницы; `None`, если страниц больше нет.
    pub next_page_token: Option<String>,
}

impl PageResult {
    /// Есть ли ещё страницы для подгрузки.
    pub fn has_next_page(&self) -> bool {
        self.next_page_token.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Поля документа типа `posts`, которые запрашиваются у сервиса контента.
pub struct RawPostData {
    /// Заголовок.
    #[serde(default)]
    pub title: String,
    /// Подзаголовок.
    #[serde(default)]
    pub subtitle: String,
    /// Автор.
    #[serde(default)]
    pub author: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Документ в исходном представлении сервиса контента.
pub struct RawPostRecord {
    /// Внутренний идентификатор документа.
    #[serde(default)]
    pub id: String,
    /// Уникальный человекочитаемый идентификатор (slug).
    #[serde(default)]
    pub uid: Option<String>,
    /// Тип документа.
    #[serde(rename = "type", default)]
    pub document_type: String,
    /// Время первой публикации; `null` у неопубликованных документов.
    #[serde(default)]
    pub first_publication_date: Option<String>,
    /// Время последней публикации.
    #[serde(default)]
    pub last_publication_date: Option<String>,
    /// Поля документа.
    #[serde(default)]
    pub data: RawPostData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Ответ поиска документов: одна страница результатов.
pub struct RawPage {
    /// Номер страницы (с 1).
    #[serde(default)]
    pub page: u32,
    /// Запрошенный размер страницы.
    #[serde(default)]
    pub results_per_page: u32,
    /// Количество документов на этой странице.
    #[serde(default)]
    pub results_size: u32,
    /// Общее количество документов по запросу.
    #[serde(default)]
    pub total_results_size: u32,
    /// Общее количество страниц.
    #[serde(default)]
    pub total_pages: u32,
    /// URL следующей страницы.
    #[serde(default)]
    pub next_page: Option<String>,
    /// URL предыдущей страницы.
    #[serde(default)]
    pub prev_page: Option<String>,
    /// Документы страницы.
    #[serde(default)]
    pub results: Vec<RawPostRecord>,
}
