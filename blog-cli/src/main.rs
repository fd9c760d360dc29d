use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, anyhow};
use blog_content::render::{RenderOptions, render_listing_page};
use blog_content::{
    ContentError, HttpContentClient, ListingController, ListingLoader, PageResult, PostSummary,
};
use clap::{Parser, Subcommand};

const API_ENV: &str = "CONTENT_API_URL";
const DEFAULT_PAGE_SIZE: u32 = 20;
const INDEX_FILE: &str = "index.html";
const PROPS_FILE: &str = "home.json";

#[derive(Debug, Parser)]
#[command(name = "blog-cli", version, about = "CLI для списка постов блога из CMS")]
struct Cli {
    /// Адрес API сервиса контента (по умолчанию из CONTENT_API_URL).
    #[arg(long, global = true)]
    api: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Первая страница постов.
    List {
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,
    },
    /// Одна страница по курсору (`next_page` из предыдущего ответа).
    More {
        #[arg(long)]
        cursor: String,
    },
    /// Все страницы подряд, пока курсор не закончится.
    All {
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,
    },
    /// Статическая генерация: index.html и home.json в указанный каталог.
    Export {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,
        /// URL скрипта гидратации (wasm-бандл).
        #[arg(long)]
        hydration_script: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let api = resolve_api(cli.api, std::env::var(API_ENV).ok())?;
    let client = HttpContentClient::new(api).map_err(map_client_error)?;

    match cli.command {
        Command::List { page_size } => {
            let page = load_first_page(&client, page_size).await?;
            print_page("Первая страница", &page.posts, page.next_page_token.as_deref());
        }
        Command::More { cursor } => {
            let mut controller = ListingController::new(PageResult {
                posts: Vec::new(),
                next_page_token: Some(cursor),
            });
            controller
                .load_more(&client)
                .await
                .map_err(map_client_error)?;
            print_page("Страница", controller.posts(), controller.cursor());
        }
        Command::All { page_size } => {
            let first = load_first_page(&client, page_size).await?;
            let mut controller = ListingController::new(first);
            let mut pages = 1;
            while controller.has_more() {
                controller
                    .load_more(&client)
                    .await
                    .map_err(map_client_error)?;
                pages += 1;
            }
            print_page(
                &format!("Все посты ({pages} стр.)"),
                controller.posts(),
                controller.cursor(),
            );
        }
        Command::Export {
            out,
            page_size,
            hydration_script,
        } => {
            let page = load_first_page(&client, page_size).await?;
            let options = RenderOptions {
                hydration_script,
                ..RenderOptions::default()
            };
            export_site(&out, &page, &options)?;
            println!(
                "Сайт сохранён в {}: постов {}, есть ещё страницы: {}",
                out.display(),
                page.posts.len(),
                page.has_next_page()
            );
        }
    }

    Ok(())
}

async fn load_first_page(client: &HttpContentClient, page_size: u32) -> Result<PageResult> {
    let loader = ListingLoader::new(client.clone(), page_size).map_err(map_client_error)?;
    loader.load().await.map_err(map_client_error)
}

fn resolve_api(flag: Option<String>, env: Option<String>) -> Result<String> {
    let raw = flag
        .or(env)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| anyhow!("не задан адрес API: укажите --api или {API_ENV}"))?;
    Ok(normalize_api(raw))
}

fn normalize_api(api: String) -> String {
    if api.starts_with("http://") || api.starts_with("https://") {
        return api;
    }

    format!("https://{api}")
}

fn export_site(out: &Path, page: &PageResult, options: &RenderOptions) -> Result<()> {
    fs::create_dir_all(out)
        .with_context(|| format!("не удалось создать каталог {}", out.display()))?;

    let html = render_listing_page(page, options).context("не удалось отрендерить страницу")?;
    fs::write(out.join(INDEX_FILE), html).context("не удалось сохранить index.html")?;

    let props = serde_json::to_string_pretty(page).context("не удалось сериализовать данные")?;
    fs::write(out.join(PROPS_FILE), props).context("не удалось сохранить home.json")?;
    Ok(())
}

fn map_client_error(err: ContentError) -> anyhow::Error {
    let message = match err {
        ContentError::NotFound => "ресурс не найден (проверьте адрес API или курсор)".to_string(),
        ContentError::InvalidRequest(message) => format!("некорректный запрос: {message}"),
        ContentError::InvalidResponse(message) => format!("некорректный ответ CMS: {message}"),
        ContentError::Status { status, message } => format!("CMS ответила {status}: {message}"),
        ContentError::Decode(message) => format!("не удалось разобрать ответ: {message}"),
        ContentError::Network(message) => format!("сетевая ошибка: {message}"),
        ContentError::Http(err) => format!("ошибка HTTP: {err}"),
    };
    anyhow!(message)
}

fn print_page(title: &str, posts: &[PostSummary], cursor: Option<&str>) {
    println!("{title}: постов {}", posts.len());

    for post in posts {
        println!(
            "- [{}] {}: {} ({}, {})",
            post.slug, post.title, post.subtitle, post.first_publication_date, post.author
        );
    }

    match cursor {
        Some(cursor) => println!("next_page: {cursor}"),
        None => println!("next_page: -"),
    }
}
