//! HTTP layer tests
//!
//! Drives the full route table with `actix_web::test` against a
//! temporary SQLite store.

use std::sync::{Arc, Once};

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use serde_json::{Value, json};
use tempfile::TempDir;

use tagshort::api::services::{AppStartTime, configure_routes};
use tagshort::config::init_config;
use tagshort::storage::LinkStore;

static INIT: Once = Once::new();

fn init_test_config() {
    INIT.call_once(|| {
        init_config();
    });
}

async fn create_temp_store() -> (Arc<LinkStore>, TempDir) {
    init_test_config();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("api_test.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let store = LinkStore::new(&db_url).await.expect("Failed to create store");
    (Arc::new(store), temp_dir)
}

macro_rules! app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($store.clone()))
                .app_data(web::Data::new(AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .configure(configure_routes),
        )
        .await
    };
}

fn location(resp: &actix_web::dev::ServiceResponse) -> String {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

// =============================================================================
// Redirect
// =============================================================================

#[actix_web::test]
async fn test_redirect_known_code() {
    let (store, _dir) = create_temp_store().await;
    let code = store.add_url("http://a.test", &[], None).await.unwrap();
    let app = app!(store);

    let path = format!("/{}", code);

    let resp = test::call_service(&app, TestRequest::get().uri(&path).to_request()).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "http://a.test");

    let req = TestRequest::default()
        .method(actix_web::http::Method::HEAD)
        .uri(&path)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[actix_web::test]
async fn test_redirect_unknown_and_malformed_codes_are_404() {
    let (store, _dir) = create_temp_store().await;
    let app = app!(store);

    for path in ["/zzzzzzzzzz", "/favicon.ico", "/0", "/-----------"] {
        let resp = test::call_service(&app, TestRequest::get().uri(path).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{path}");
    }
}

#[actix_web::test]
async fn test_redirect_percent_encoded_code() {
    let (store, _dir) = create_temp_store().await;

    // id 56 编码为 "#"
    let mut last = String::new();
    for i in 1..=56 {
        last = store
            .add_url(&format!("http://{}.seq.test", i), &[], None)
            .await
            .unwrap();
    }
    assert_eq!(last, "#");

    let app = app!(store);
    let resp = test::call_service(&app, TestRequest::get().uri("/%23").to_request()).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "http://56.seq.test");
}

// =============================================================================
// Create
// =============================================================================

#[actix_web::test]
async fn test_create_via_json() {
    let (store, _dir) = create_temp_store().await;
    let app = app!(store);

    let req = TestRequest::post()
        .uri("/api/urls")
        .set_json(json!({ "url": "a.test", "tags": ["news", " tech ", ""] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["code"], "b");
    assert!(body["data"]["short_url"].as_str().unwrap().ends_with("/b"));
    assert!(
        body["data"]["details_url"]
            .as_str()
            .unwrap()
            .ends_with("/details/b")
    );

    let details = store.get_url_details("b").await.unwrap().unwrap();
    assert_eq!(details.uri, "http://a.test");
    assert_eq!(details.tags, vec!["news".to_string(), "tech".to_string()]);
}

#[actix_web::test]
async fn test_create_via_json_duplicate_returns_existing_code() {
    let (store, _dir) = create_temp_store().await;
    let existing = store.add_url("http://dup.test", &[], None).await.unwrap();
    let app = app!(store);

    let req = TestRequest::post()
        .uri("/api/urls")
        .set_json(json!({ "url": "http://dup.test", "tags": ["late"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["code"], existing.as_str());
    assert!(store.list_tags().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_create_via_json_rejects_bad_input() {
    let (store, _dir) = create_temp_store().await;
    let app = app!(store);

    let req = TestRequest::post()
        .uri("/api/urls")
        .set_json(json!({ "url": "javascript:alert(1)" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 3002);

    for url in ["http://192.168.0.1/admin", "http://localhost:8080"] {
        let req = TestRequest::post()
            .uri("/api/urls")
            .set_json(json!({ "url": url }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{url}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 3002);
    }

    let req = TestRequest::post()
        .uri("/api/urls")
        .set_json(json!({ "url": "http://ok.test", "creator": "nobody" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 3008);

    assert_eq!(store.count_urls().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_create_via_json_with_named_creator() {
    let (store, _dir) = create_temp_store().await;
    let app = app!(store);

    let req = TestRequest::post()
        .uri("/api/urls")
        .set_json(json!({ "url": "http://anon.test", "creator": "anonymous" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn test_create_via_form_redirects_to_details() {
    let (store, _dir) = create_temp_store().await;
    let app = app!(store);

    let req = TestRequest::post()
        .uri("/new")
        .set_form([("url", "example.com"), ("tags", "x, y,,")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/details/b");

    let details = store.get_url_details("b").await.unwrap().unwrap();
    assert_eq!(details.uri, "http://example.com");
    assert_eq!(details.tags, vec!["x".to_string(), "y".to_string()]);
}

#[actix_web::test]
async fn test_create_via_form_without_tags() {
    let (store, _dir) = create_temp_store().await;
    let app = app!(store);

    let req = TestRequest::post()
        .uri("/new")
        .set_form([("url", "https://notags.test")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

#[actix_web::test]
async fn test_create_via_form_rejects_empty_url() {
    let (store, _dir) = create_temp_store().await;
    let app = app!(store);

    let req = TestRequest::post()
        .uri("/new")
        .set_form([("url", "   ")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Details / tags
// =============================================================================

#[actix_web::test]
async fn test_details_endpoints() {
    let (store, _dir) = create_temp_store().await;
    store
        .add_url("http://a.test", &["news".to_string()], None)
        .await
        .unwrap();
    store.add_url("http://b.test", &[], None).await.unwrap();
    let app = app!(store);

    let body: Value =
        test::call_and_read_body_json(&app, TestRequest::get().uri("/details/b").to_request())
            .await;
    assert_eq!(body["data"]["uri"], "http://a.test");
    assert_eq!(body["data"]["creator_name"], "anonymous");
    assert_eq!(body["data"]["tags"], json!(["news"]));
    assert!(body["data"]["short_url"].as_str().unwrap().ends_with("/b"));

    let body: Value =
        test::call_and_read_body_json(&app, TestRequest::get().uri("/details").to_request()).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let resp =
        test::call_service(&app, TestRequest::get().uri("/details/zzzz").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(&app, TestRequest::get().uri("/details/0").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_tag_cloud_and_by_tag() {
    let (store, _dir) = create_temp_store().await;
    store
        .add_url(
            "http://a.test",
            &["news".to_string(), "tech".to_string()],
            None,
        )
        .await
        .unwrap();
    store
        .add_url("http://b.test", &["tech".to_string()], None)
        .await
        .unwrap();
    let app = app!(store);

    let body: Value =
        test::call_and_read_body_json(&app, TestRequest::get().uri("/tags").to_request()).await;
    assert_eq!(body["data"]["max_count"], 2);
    assert_eq!(body["data"]["tags"].as_array().unwrap().len(), 2);

    let body: Value =
        test::call_and_read_body_json(&app, TestRequest::get().uri("/tags/tech").to_request())
            .await;
    let list = body["data"].as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert!(list[0].get("tags").is_none());
    assert!(list[0]["short_url"].is_string());

    let body: Value =
        test::call_and_read_body_json(&app, TestRequest::get().uri("/tags/nothing").to_request())
            .await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_empty_tag_cloud() {
    let (store, _dir) = create_temp_store().await;
    let app = app!(store);

    let body: Value =
        test::call_and_read_body_json(&app, TestRequest::get().uri("/tags").to_request()).await;
    assert_eq!(body["data"]["max_count"], 0);
}

// =============================================================================
// Health / index
// =============================================================================

#[actix_web::test]
async fn test_health_and_index() {
    let (store, _dir) = create_temp_store().await;
    store.add_url("http://a.test", &[], None).await.unwrap();
    let app = app!(store);

    let resp = test::call_service(&app, TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["urls_count"], 1);
    assert_eq!(body["data"]["backend"], "sqlite");

    let resp = test::call_service(&app, TestRequest::get().uri("/health/live").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let body: Value =
        test::call_and_read_body_json(&app, TestRequest::get().uri("/").to_request()).await;
    assert_eq!(body["data"]["name"], "tagshort");
}
