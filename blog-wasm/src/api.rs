use blog_content::{ContentError, PageResult, RawPage};
use gloo_net::http::Request;

/// GET по URL курсора; ответ CMS переводится в `PageResult`.
pub(crate) async fn fetch_page(url: &str) -> Result<PageResult, ContentError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| ContentError::Network(err.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ContentError::from_error_body(status, &body));
    }

    let raw = response
        .json::<RawPage>()
        .await
        .map_err(|err| ContentError::Decode(err.to_string()))?;
    Ok(PageResult::from(raw))
}
