use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use pinhole_gateway::model::{ErrorResponse, ShortenResponse};
use pinhole_gateway::{App, AppState, BaseUrl};
use pinhole_generator::seq::SeqGenerator;
use pinhole_shortener::ShortenerService;
use pinhole_storage::InMemoryRepository;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn test_app(base_url: &str) -> Router {
    let shortener = ShortenerService::new(InMemoryRepository::new(), SeqGenerator::new());
    let state = AppState::new(Arc::new(shortener), BaseUrl::new(base_url).unwrap());
    App::router(state)
}

fn shorten_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/shorten")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn shorten(app: &Router, long_url: &str) -> String {
    let body = serde_json::json!({ "long_url": long_url }).to_string();
    let response = app.clone().oneshot(shorten_request(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let parsed: ShortenResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    parsed.short_url
}

#[tokio::test]
async fn shorten_returns_created_short_url() {
    let app = test_app("http://localhost:8080");

    let first = shorten(&app, "https://example.com/a/b").await;
    let second = shorten(&app, "https://example.com/c").await;

    assert_eq!(first, "http://localhost:8080/1");
    assert_eq!(second, "http://localhost:8080/2");
}

#[tokio::test]
async fn shorten_same_url_returns_same_short_url() {
    let app = test_app("https://pin.hole/");

    let first = shorten(&app, "https://example.com").await;
    let again = shorten(&app, "https://example.com").await;
    let other = shorten(&app, "https://example.org").await;

    assert_eq!(first, again);
    assert_eq!(other, "https://pin.hole/2");
}

#[tokio::test]
async fn redirect_resolves_short_code() {
    let app = test_app("https://pin.hole/");
    shorten(&app, "https://example.com/a/b").await;

    let response = app.clone().oneshot(get_request("/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://example.com/a/b"
    );
}

#[tokio::test]
async fn unknown_code_is_not_found() {
    let app = test_app("https://pin.hole/");

    for uri in ["/zzz", "/not-a-code"] {
        let response = app.clone().oneshot(get_request(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri {}", uri);

        let error: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.message, "short url not found");
    }
}

#[tokio::test]
async fn root_without_code_is_bad_request() {
    let app = test_app("https://pin.hole/");

    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_long_url_is_bad_request() {
    let app = test_app("https://pin.hole/");

    for long_url in ["", "not-a-valid-url", "ftp://example.com", "http://localhost"] {
        let body = serde_json::json!({ "long_url": long_url }).to_string();
        let response = app.clone().oneshot(shorten_request(&body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "url {:?}", long_url);
    }

    let health = app.oneshot(get_request("/health")).await.unwrap();
    let health: Value = serde_json::from_slice(&body_bytes(health).await).unwrap();
    assert_eq!(health["records"], 0);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let app = test_app("https://pin.hole/");

    for body in ["{", "{\"url\": \"https://example.com\"}", "[]"] {
        let response = app.clone().oneshot(shorten_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {}", body);

        let error: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(error.message.starts_with("invalid request body"));
    }
}

#[tokio::test]
async fn wrong_method_is_rejected() {
    let app = test_app("https://pin.hole/");

    let response = app.clone().oneshot(get_request("/shorten")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn health_reports_record_count() {
    let app = test_app("https://pin.hole/");
    shorten(&app, "https://example.com/1").await;
    shorten(&app, "https://example.com/2").await;

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["records"], 2);
}
