use blog_content::PageResult;

/// Разбирает данные первой страницы, встроенные в HTML при генерации.
pub fn parse_page_props(raw: &str) -> Option<PageResult> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    serde_json::from_str::<PageResult>(raw).ok()
}

/// Читает данные первой страницы из `<script id="__PAGE_PROPS__">`.
#[cfg(target_arch = "wasm32")]
pub fn load_page_props() -> Option<PageResult> {
    use blog_content::render::PAGE_PROPS_ELEMENT_ID;

    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(PAGE_PROPS_ELEMENT_ID)?;
    parse_page_props(&element.text_content()?)
}
