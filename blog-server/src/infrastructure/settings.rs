use anyhow::{Context, Result, anyhow};
use blog_content::MAX_PAGE_SIZE;

#[derive(Debug, Clone)]
pub struct Settings {
    pub content_api_url: String,
    pub page_size: u32,
    pub http_addr: String,
    pub cors_origins: Vec<String>,
    pub log_level: String,
    pub hydration_script: Option<String>,
    pub http_concurrency_limit: usize,
    pub http_request_timeout_secs: u64,
    pub content_request_timeout_secs: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let content_api_url =
            get_required(&lookup, "CONTENT_API_URL").context("CONTENT_API_URL is required")?;

        let page_size = parse_u64_env(&lookup, "PAGE_SIZE", 20)?;
        if page_size > u64::from(MAX_PAGE_SIZE) {
            return Err(anyhow!("PAGE_SIZE must be <= {MAX_PAGE_SIZE}"));
        }
        let page_size = page_size as u32;

        let http_addr = lookup("HTTP_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string());
        let cors_origins = parse_cors_origins(
            lookup("CORS_ORIGINS")
                .unwrap_or_else(|| "http://localhost:8000,http://127.0.0.1:8000".to_string()),
        );
        let log_level = lookup("LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());
        let hydration_script = lookup("HYDRATION_SCRIPT")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        let http_concurrency_limit =
            parse_u64_env(&lookup, "HTTP_CONCURRENCY_LIMIT", 256)? as usize;
        let http_request_timeout_secs = parse_u64_env(&lookup, "HTTP_REQUEST_TIMEOUT_SECS", 10)?;
        let content_request_timeout_secs =
            parse_u64_env(&lookup, "CONTENT_REQUEST_TIMEOUT_SECS", 15)?;

        Ok(Self {
            content_api_url,
            page_size,
            http_addr,
            cors_origins,
            log_level,
            hydration_script,
            http_concurrency_limit,
            http_request_timeout_secs,
            content_request_timeout_secs,
        })
    }
}

fn get_required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).ok_or_else(|| anyhow!("{key} is not set"))?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(anyhow!("{key} must not be empty"));
    }
    Ok(value)
}

fn parse_cors_origins(raw: String) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_u64_env<F>(lookup: &F, key: &str, default: u64) -> Result<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key)
        .unwrap_or_else(|| default.to_string())
        .trim()
        .parse::<u64>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}
