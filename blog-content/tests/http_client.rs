use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use blog_content::{
    ContentError, HttpContentClient, ListingController, ListingLoader, LoadState, PageFetcher,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

const MASTER_REF: &str = "YF-master-ref";

#[derive(Clone)]
struct FakeCms {
    base_url: String,
}

fn post(uid: &str, published: &str) -> Value {
    json!({
        "id": uid.to_uppercase(),
        "uid": uid,
        "type": "posts",
        "tags": [],
        "first_publication_date": published,
        "last_publication_date": published,
        "lang": "pt-br",
        "data": {
            "title": format!("Title {uid}"),
            "subtitle": format!("Subtitle {uid}"),
            "author": "Danilo Vieira"
        }
    })
}

async fn api_info() -> Json<Value> {
    Json(json!({
        "refs": [
            {"id": "preview", "ref": "YF-preview", "isMasterRef": false},
            {"id": "master", "ref": MASTER_REF, "isMasterRef": true}
        ]
    }))
}

async fn search(
    State(cms): State<FakeCms>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    if params.get("ref").map(String::as_str) != Some(MASTER_REF) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "unknown ref"})),
        );
    }

    if params.get("page").map(String::as_str) == Some("2") {
        return (
            StatusCode::OK,
            Json(json!({
                "page": 2,
                "results_per_page": 1,
                "results_size": 1,
                "total_results_size": 2,
                "total_pages": 2,
                "next_page": null,
                "prev_page": format!("{}/api/v2/documents/search?ref={MASTER_REF}&page=1", cms.base_url),
                "results": [post("post-b", "2021-04-02T12:00:00+0000")]
            })),
        );
    }

    let expected_q = r#"[[at(document.type, "posts")]]"#;
    let expected_fetch = "posts.title,posts.subtitle,posts.author";
    if params.get("q").map(String::as_str) != Some(expected_q)
        || params.get("fetch").map(String::as_str) != Some(expected_fetch)
        || params.get("pageSize").map(String::as_str) != Some("1")
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": format!("unexpected query: {params:?}")})),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "page": 1,
            "results_per_page": 1,
            "results_size": 1,
            "total_results_size": 2,
            "total_pages": 2,
            "next_page": format!("{}/api/v2/documents/search?ref={MASTER_REF}&page=2", cms.base_url),
            "prev_page": null,
            "results": [post("post-a", "2021-03-25T00:00:00+0000")]
        })),
    )
}

async fn broken() -> impl IntoResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"message": "repository is being rebuilt"})),
    )
}

async fn not_json() -> &'static str {
    "definitely not json"
}

async fn spawn_fake_cms() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let base_url = format!("http://{}", listener.local_addr().expect("local addr"));

    let app = Router::new()
        .route("/api/v2", get(api_info))
        .route("/api/v2/documents/search", get(search))
        .route("/broken", get(broken))
        .route("/not-json", get(not_json))
        .with_state(FakeCms {
            base_url: base_url.clone(),
        });

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake cms must run");
    });

    base_url
}

#[tokio::test]
async fn loader_and_controller_walk_all_pages() {
    let base_url = spawn_fake_cms().await;
    let client =
        HttpContentClient::new(format!("{base_url}/api/v2")).expect("client must build");

    let loader = ListingLoader::new(client.clone(), 1).expect("valid page size");
    let first = loader.load().await.expect("first page must load");

    assert_eq!(first.posts.len(), 1);
    assert_eq!(first.posts[0].slug, "post-a");
    assert_eq!(first.posts[0].first_publication_date, "25 mar 2021");
    assert!(first.next_page_token.is_some());

    let mut controller = ListingController::new(first);
    let appended = controller
        .load_more(&client)
        .await
        .expect("second page must load");

    assert_eq!(appended, 1);
    let slugs: Vec<&str> = controller.posts().iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["post-a", "post-b"]);
    assert_eq!(controller.posts()[1].first_publication_date, "02 abr 2021");
    assert!(!controller.has_more());
    assert_eq!(controller.state(), &LoadState::Loaded);

    let appended = controller.load_more(&client).await.expect("no-op");
    assert_eq!(appended, 0);
}

#[tokio::test]
async fn missing_page_maps_to_not_found() {
    let base_url = spawn_fake_cms().await;
    let client = HttpContentClient::new(format!("{base_url}/api/v2")).expect("client");

    let err = client
        .fetch_page(&format!("{base_url}/nowhere"))
        .await
        .expect_err("must fail");
    assert!(matches!(err, ContentError::NotFound));
}

#[tokio::test]
async fn server_error_keeps_body_message() {
    let base_url = spawn_fake_cms().await;
    let client = HttpContentClient::new(format!("{base_url}/api/v2")).expect("client");

    let err = client
        .fetch_page(&format!("{base_url}/broken"))
        .await
        .expect_err("must fail");
    match err {
        ContentError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "repository is being rebuilt");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_body_is_decode_error() {
    let base_url = spawn_fake_cms().await;
    let client = HttpContentClient::new(format!("{base_url}/api/v2")).expect("client");

    let err = client
        .fetch_page(&format!("{base_url}/not-json"))
        .await
        .expect_err("must fail");
    assert!(matches!(err, ContentError::Decode(_)));
}

#[tokio::test]
async fn failed_load_more_is_reported_in_state() {
    let base_url = spawn_fake_cms().await;
    let client = HttpContentClient::new(format!("{base_url}/api/v2")).expect("client");

    let mut controller = ListingController::new(blog_content::PageResult {
        posts: vec![],
        next_page_token: Some(format!("{base_url}/broken")),
    });

    controller
        .load_more(&client)
        .await
        .expect_err("must fail");
    assert!(matches!(controller.state(), LoadState::Failed(_)));
    assert!(controller.has_more());
}
