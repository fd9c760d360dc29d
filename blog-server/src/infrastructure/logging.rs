use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// Шумные зависимости, которые логируются только начиная с `warn`.
const QUIET_TARGETS: &str = "hyper_util=warn,reqwest=warn";

fn build_filter(env_filter: Option<&str>, default_level: &str) -> EnvFilter {
    env_filter
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .or_else(|| EnvFilter::try_new(format!("{default_level},{QUIET_TARGETS}")).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Инициализирует `tracing`: `RUST_LOG` имеет приоритет над уровнем из настроек.
pub fn init_logging(default_level: &str) -> Result<()> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(from_env.as_deref(), default_level);

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_filter_wins_over_default_level() {
        let filter = build_filter(Some("blog_server=trace"), "info");
        assert_eq!(filter.to_string(), "blog_server=trace");
    }

    #[test]
    fn default_level_quiets_http_internals() {
        let filter = build_filter(None, "debug").to_string();
        assert!(filter.contains("debug"));
        assert!(filter.contains("reqwest=warn"));
    }

    #[test]
    fn invalid_env_filter_falls_back_to_default_level() {
        let filter = build_filter(Some("blog_server=loudest"), "warn").to_string();
        assert!(filter.contains("reqwest=warn"));
        assert!(!filter.contains("blog_server"));
    }
}
