use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::debug;

use crate::client::{ContentServiceClient, DocumentQuery, PageFetcher};
use crate::error::{ContentError, ContentResult};
use crate::models::RawPage;

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Deserialize)]
struct ApiInfoDto {
    #[serde(default)]
    refs: Vec<RefDto>,
}

#[derive(Debug, Deserialize)]
struct RefDto {
    #[serde(rename = "ref")]
    reference: String,
    #[serde(rename = "isMasterRef", default)]
    is_master_ref: bool,
}

#[derive(Serialize)]
struct SearchQuery<'a> {
    #[serde(rename = "ref")]
    reference: &'a str,
    q: String,
    fetch: String,
    #[serde(rename = "pageSize")]
    page_size: u32,
}

impl ApiInfoDto {
    fn master_ref(self) -> ContentResult<String> {
        self.refs
            .into_iter()
            .find(|r| r.is_master_ref)
            .map(|r| r.reference)
            .ok_or_else(|| ContentError::InvalidResponse("api has no master ref".to_string()))
    }
}

#[derive(Debug, Clone)]
/// HTTP-клиент для Prismic-совместимого REST API (v2).
///
/// Каждый запрос поиска сначала получает актуальный master ref, затем
/// выполняет `documents/search` на нём.
pub struct HttpContentClient {
    api_endpoint: String,
    client: Client,
}

impl HttpContentClient {
    /// Создаёт клиент с таймаутами по умолчанию.
    ///
    /// `api_endpoint`: адрес API, например `https://repo.cdn.prismic.io/api/v2`.
    pub fn new(api_endpoint: impl Into<String>) -> ContentResult<Self> {
        Self::with_timeouts(api_endpoint, DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Создаёт клиент с явными таймаутами подключения и запроса.
    pub fn with_timeouts(
        api_endpoint: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> ContentResult<Self> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()?;

        Ok(Self {
            api_endpoint: api_endpoint.into(),
            client,
        })
    }

    /// Адрес API, с которым работает клиент.
    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_endpoint.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> ContentError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        ContentError::from_error_body(status, &body)
    }

    /// универсальный helper для GET-запросов с json-ответом
    async fn get_json<TQuery, TRes>(&self, url: &str, query: Option<&TQuery>) -> ContentResult<TRes>
    where
        TQuery: Serialize,
        TRes: DeserializeOwned,
    {
        let mut request = self.client.request(Method::GET, url);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(ContentError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response
            .json::<TRes>()
            .await
            .map_err(|err| ContentError::Decode(err.to_string()))
    }

    /// Возвращает текущий master ref репозитория.
    pub async fn master_ref(&self) -> ContentResult<String> {
        let info: ApiInfoDto = self
            .get_json::<(), _>(&self.api_endpoint, None)
            .await?;
        info.master_ref()
    }
}

#[async_trait]
impl ContentServiceClient for HttpContentClient {
    async fn query(&self, query: &DocumentQuery) -> ContentResult<RawPage> {
        let reference = self.master_ref().await?;
        let search = SearchQuery {
            reference: &reference,
            q: query.predicates(),
            fetch: query.fetch_fields(),
            page_size: query.page_size,
        };

        debug!(
            document_type = %query.document_type,
            page_size = query.page_size,
            "querying content service"
        );

        self.get_json(&self.endpoint("/documents/search"), Some(&search))
            .await
    }
}

#[async_trait]
impl PageFetcher for HttpContentClient {
    async fn fetch_page(&self, url: &str) -> ContentResult<RawPage> {
        debug!(url, "fetching next page");
        self.get_json::<(), _>(url, None).await
    }
}
