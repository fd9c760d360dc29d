//! HTML-страница списка постов, которая сохраняется при генерации.

use std::fmt::Write as _;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::models::{PageResult, PostSummary};

/// `id` элемента `<script>` с данными первой страницы для гидратации.
pub const PAGE_PROPS_ELEMENT_ID: &str = "__PAGE_PROPS__";

/// Текст кнопки подгрузки следующей страницы.
pub const LOAD_MORE_LABEL: &str = "Carregar mais posts";

/// Символы, которые остаются в сегменте пути как есть (unreserved из RFC 3986).
const SLUG_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone)]
/// Параметры рендеринга страницы.
pub struct RenderOptions {
    /// Содержимое `<title>`.
    pub title: String,
    /// Путь к логотипу.
    pub logo_src: String,
    /// URL скрипта гидратации (wasm-бандл); без него страница статична.
    pub hydration_script: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "spacetraveling".to_string(),
            logo_src: "/Logo.svg".to_string(),
            hydration_script: None,
        }
    }
}

/// Экранирует спецсимволы HTML в тексте и значениях атрибутов.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Ссылка на страницу поста; slug кодируется как один сегмент пути.
pub fn post_href(slug: &str) -> String {
    format!("/post/{}", utf8_percent_encode(slug, SLUG_SEGMENT))
}

/// JSON с данными страницы, безопасный для вставки внутрь `<script>`.
pub fn page_props_json(page: &PageResult) -> serde_json::Result<String> {
    let json = serde_json::to_string(page)?;
    Ok(json.replace('<', "\\u003c"))
}

fn render_post(out: &mut String, post: &PostSummary) {
    let _ = write!(
        out,
        concat!(
            r#"<a href="{href}">"#,
            "<strong>{title}</strong>",
            "<p>{subtitle}</p>",
            "<div>",
            r#"<time class="calendar">{date}</time>"#,
            r#"<span class="user">{author}</span>"#,
            "</div>",
            "</a>"
        ),
        href = html_escape(&post_href(&post.slug)),
        title = html_escape(&post.title),
        subtitle = html_escape(&post.subtitle),
        date = html_escape(&post.first_publication_date),
        author = html_escape(&post.author),
    );
}

/// Рендерит только список постов и (если есть курсор) кнопку подгрузки.
pub fn render_posts(page: &PageResult) -> String {
    let mut out = String::from(r#"<div class="posts">"#);
    for post in &page.posts {
        render_post(&mut out, post);
    }
    if page.has_next_page() {
        let _ = write!(
            out,
            r#"<button type="button" class="load-more">{LOAD_MORE_LABEL}</button>"#
        );
    }
    out.push_str("</div>");
    out
}

/// Рендерит полную HTML-страницу списка со встроенными данными страницы.
pub fn render_listing_page(
    page: &PageResult,
    options: &RenderOptions,
) -> serde_json::Result<String> {
    let props = page_props_json(page)?;

    let mut out = String::with_capacity(1024 + page.posts.len() * 256);
    out.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", html_escape(&options.title));
    out.push_str("</head>\n<body>\n<main class=\"container\">\n");
    let _ = writeln!(
        out,
        r#"<img src="{}" alt="logo" class="logo">"#,
        html_escape(&options.logo_src)
    );
    let _ = writeln!(out, r#"<div id="listing">{}</div>"#, render_posts(page));
    out.push_str("</main>\n");
    let _ = writeln!(
        out,
        r#"<script id="{PAGE_PROPS_ELEMENT_ID}" type="application/json">{props}</script>"#
    );
    if let Some(script) = &options.hydration_script {
        let _ = writeln!(
            out,
            r#"<script type="module" src="{}"></script>"#,
            html_escape(script)
        );
    }
    out.push_str("</body>\n</html>\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, title: &str) -> PostSummary {
        PostSummary {
            slug: slug.to_string(),
            first_publication_date: "25 mar 2021".to_string(),
            title: title.to_string(),
            subtitle: "subtitle".to_string(),
            author: "Joseph Oliveira".to_string(),
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn post_href_keeps_plain_slug() {
        assert_eq!(post_href("como-utilizar-hooks"), "/post/como-utilizar-hooks");
        assert_eq!(post_href("v1.2_notes~draft"), "/post/v1.2_notes~draft");
    }

    #[test]
    fn post_href_encodes_reserved_characters() {
        assert_eq!(post_href("a b"), "/post/a%20b");
        assert_eq!(post_href("what?#now"), "/post/what%3F%23now");
        assert_eq!(post_href("nested/slug"), "/post/nested%2Fslug");
        assert_eq!(post_href("ação"), "/post/a%C3%A7%C3%A3o");
    }

    #[test]
    fn render_posts_links_every_post_and_shows_load_more() {
        let page = PageResult {
            posts: vec![post("post-a", "A")],
            next_page_token: Some("https://x/page2".to_string()),
        };

        let html = render_posts(&page);
        assert_eq!(html.matches("<a href=").count(), 1);
        assert!(html.contains(r#"<a href="/post/post-a">"#));
        assert!(html.contains("<strong>A</strong>"));
        assert!(html.contains("25 mar 2021"));
        assert!(html.contains("Joseph Oliveira"));
        assert!(html.contains(LOAD_MORE_LABEL));
    }

    #[test]
    fn render_posts_hides_load_more_without_cursor() {
        let page = PageResult {
            posts: vec![post("post-a", "A"), post("post-b", "B")],
            next_page_token: None,
        };

        let html = render_posts(&page);
        assert_eq!(html.matches("<a href=").count(), 2);
        assert!(!html.contains(LOAD_MORE_LABEL));
    }

    #[test]
    fn render_posts_escapes_user_content() {
        let page = PageResult {
            posts: vec![post("x", "<script>alert(1)</script>")],
            next_page_token: None,
        };

        let html = render_posts(&page);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn page_props_json_cannot_close_script_tag() {
        let page = PageResult {
            posts: vec![post("x", "</script><b>")],
            next_page_token: None,
        };

        let json = page_props_json(&page).expect("serialize");
        assert!(!json.contains("</script>"));

        let decoded: PageResult = serde_json::from_str(&json).expect("json stays valid");
        assert_eq!(decoded, page);
    }

    #[test]
    fn render_listing_page_embeds_props_and_hydration_script() {
        let page = PageResult {
            posts: vec![post("post-a", "A")],
            next_page_token: Some("https://x/page2".to_string()),
        };
        let options = RenderOptions {
            hydration_script: Some("/pkg/blog_wasm.js".to_string()),
            ..RenderOptions::default()
        };

        let html = render_listing_page(&page, &options).expect("render");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(&format!(r#"<script id="{PAGE_PROPS_ELEMENT_ID}""#)));
        assert!(html.contains(r#""nextPageToken":"https://x/page2""#));
        assert!(html.contains(r#"src="/pkg/blog_wasm.js""#));
        assert!(html.contains("<title>spacetraveling</title>"));
    }

    #[test]
    fn render_listing_page_without_hydration_is_static() {
        let html =
            render_listing_page(&PageResult::default(), &RenderOptions::default()).expect("render");
        assert!(!html.contains(r#"type="module""#));
    }
}
