use async_trait::async_trait;

use crate::error::{ContentError, ContentResult};
use crate::models::RawPage;

/// Тип документов с постами блога.
pub const POSTS_DOCUMENT_TYPE: &str = "posts";

/// Поля поста, нужные для карточки в списке.
pub const POST_SUMMARY_FIELDS: [&str; 3] = ["title", "subtitle", "author"];

/// Максимальный размер страницы, который принимает сервис контента.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Запрос страницы документов одного типа.
pub struct DocumentQuery {
    /// Тип документа (`document.type`).
    pub document_type: String,
    /// Поля документа, которые нужно вернуть.
    pub fields: Vec<String>,
    /// Размер страницы (`1..=100`).
    pub page_size: u32,
}

impl DocumentQuery {
    /// Создаёт запрос с проверкой размера страницы.
    pub fn new(
        document_type: impl Into<String>,
        fields: &[&str],
        page_size: u32,
    ) -> ContentResult<Self> {
        validate_page_size(page_size)?;
        Ok(Self {
            document_type: document_type.into(),
            fields: fields.iter().map(|field| field.to_string()).collect(),
            page_size,
        })
    }

    /// Запрос первой страницы постов для списка.
    pub fn posts(page_size: u32) -> ContentResult<Self> {
        Self::new(POSTS_DOCUMENT_TYPE, &POST_SUMMARY_FIELDS, page_size)
    }

    /// Предикаты в синтаксисе сервиса: `[[at(document.type, "posts")]]`.
    pub fn predicates(&self) -> String {
        format!("[[at(document.type, \"{}\")]]", self.document_type)
    }

    /// Список полей с префиксом типа: `posts.title,posts.subtitle,...`.
    pub fn fetch_fields(&self) -> String {
        self.fields
            .iter()
            .map(|field| format!("{}.{field}", self.document_type))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Проверяет размер страницы: `1..=MAX_PAGE_SIZE`.
pub fn validate_page_size(page_size: u32) -> ContentResult<()> {
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(ContentError::InvalidRequest(format!(
            "page size must be in 1..={MAX_PAGE_SIZE}, got {page_size}"
        )));
    }
    Ok(())
}

/// Доступ к сервису контента: поиск документов по запросу.
#[async_trait]
pub trait ContentServiceClient: Send + Sync {
    /// Возвращает первую страницу документов, подходящих под запрос.
    async fn query(&self, query: &DocumentQuery) -> ContentResult<RawPage>;
}

/// Загрузка следующей страницы по непрозрачному курсору (URL).
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Выполняет GET по URL курсора и возвращает страницу.
    async fn fetch_page(&self, url: &str) -> ContentResult<RawPage>;
}

#[async_trait]
impl<T: ContentServiceClient + ?Sized> ContentServiceClient for std::sync::Arc<T> {
    async fn query(&self, query: &DocumentQuery) -> ContentResult<RawPage> {
        (**self).query(query).await
    }
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for std::sync::Arc<T> {
    async fn fetch_page(&self, url: &str) -> ContentResult<RawPage> {
        (**self).fetch_page(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_query_requests_summary_fields() {
        let query = DocumentQuery::posts(20).expect("valid page size");
        assert_eq!(query.document_type, "posts");
        assert_eq!(query.fields, vec!["title", "subtitle", "author"]);
        assert_eq!(query.page_size, 20);
    }

    #[test]
    fn predicates_and_fetch_fields_use_cms_syntax() {
        let query = DocumentQuery::posts(5).expect("valid page size");
        assert_eq!(query.predicates(), r#"[[at(document.type, "posts")]]"#);
        assert_eq!(
            query.fetch_fields(),
            "posts.title,posts.subtitle,posts.author"
        );
    }

    #[test]
    fn page_size_zero_is_rejected() {
        let err = DocumentQuery::posts(0).expect_err("zero page size must fail");
        assert!(matches!(err, ContentError::InvalidRequest(_)));
    }

    #[test]
    fn page_size_above_limit_is_rejected() {
        assert!(DocumentQuery::posts(MAX_PAGE_SIZE).is_ok());
        assert!(DocumentQuery::posts(MAX_PAGE_SIZE + 1).is_err());
    }
}
