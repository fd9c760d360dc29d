use std::time::Duration;

use anyhow::{Context, Result};
use blog_content::render::RenderOptions;
use blog_content::{HttpContentClient, ListingLoader};
use tracing::info;

mod application;
mod infrastructure;
mod presentation;
mod server;

use application::listing_service::ListingService;
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let client = HttpContentClient::with_timeouts(
        settings.content_api_url.clone(),
        CONNECT_TIMEOUT,
        Duration::from_secs(settings.content_request_timeout_secs),
    )
    .context("failed to build content service client")?;
    info!(api = %client.api_endpoint(), "content service client ready");
    let loader = ListingLoader::new(client, settings.page_size)?;

    let render_options = RenderOptions {
        hydration_script: settings.hydration_script.clone(),
        ..RenderOptions::default()
    };
    let listing = ListingService::new(loader, render_options);

    info!("generating listing snapshot");
    let snapshot = listing.generate().await?;

    server::run_http(&settings, AppState::new(snapshot)).await
}
