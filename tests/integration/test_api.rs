//! HTTP-level endpoint tests.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use strand::{create_rest_router, ApiConfig, EmbeddedStore};

fn test_router() -> Router {
    let store = Arc::new(EmbeddedStore::in_memory());
    create_rest_router(store, &ApiConfig::default())
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_string(value: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/strings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "value": value }).to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_create_string() {
    let router = test_router();
    let (status, body) = send(&router, post_string("madam")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["value"], "madam");
    assert_eq!(body["properties"]["is_palindrome"], true);
    assert_eq!(body["properties"]["length"], 5);
    assert!(body["properties"]["sha256_hash"].is_string());
    assert_eq!(body["id"], body["properties"]["sha256_hash"]);
    assert!(body["created_at"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_create_case_insensitive_palindrome() {
    let router = test_router();
    let (status, body) = send(&router, post_string("Racecar")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["value"], "Racecar");
    assert_eq!(body["properties"]["is_palindrome"], true);
}

#[tokio::test]
async fn test_create_string_conflict() {
    let router = test_router();
    send(&router, post_string("madam")).await;
    let (status, body) = send(&router, post_string("madam")).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "already_exists");
}

#[tokio::test]
async fn test_create_empty_string_rejected() {
    let router = test_router();
    let (status, body) = send(&router, post_string("   ")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "empty_value");
}

#[tokio::test]
async fn test_get_specific_string() {
    let router = test_router();
    send(&router, post_string("madam")).await;

    let (status, body) = send(&router, get("/strings/madam")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "madam");
    assert_eq!(body["properties"]["is_palindrome"], true);
}

#[tokio::test]
async fn test_get_missing_string() {
    let router = test_router();
    let (status, body) = send(&router, get("/strings/doesnotexist")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn test_filter_by_palindrome() {
    let router = test_router();
    send(&router, post_string("madam")).await;
    send(&router, post_string("Racecar")).await;
    send(&router, post_string("banana")).await;

    let (status, body) = send(&router, get("/strings?is_palindrome=true")).await;
    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert!(data
        .iter()
        .all(|item| item["properties"]["is_palindrome"] == true));
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn test_filter_by_length_range() {
    let router = test_router();
    send(&router, post_string("hi")).await;
    send(&router, post_string("madam")).await;
    send(&router, post_string("a much longer string")).await;

    let (status, body) = send(&router, get("/strings?min_length=3&max_length=10")).await;
    assert_eq!(status, StatusCode::OK);
    for item in body["data"].as_array().unwrap() {
        let length = item["properties"]["length"].as_i64().unwrap();
        assert!((3..=10).contains(&length));
    }
    assert_eq!(body["count"], 1);
}

#[tokio::test]
async fn test_filter_without_params_lists_all() {
    let router = test_router();
    send(&router, post_string("madam")).await;
    send(&router, post_string("banana")).await;

    let (status, body) = send(&router, get("/strings")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn test_natural_language_palindrome() {
    let router = test_router();
    send(&router, post_string("madam")).await;
    send(&router, post_string("hello world")).await;

    let (status, body) = send(
        &router,
        get("/strings/filter-by-natural-language?query=all%20single%20word%20palindromic%20strings"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let filters = &body["interpreted_query"]["parsed_filters"];
    assert_eq!(filters["is_palindrome"], true);
    assert_eq!(filters["word_count"], 1);
    assert_eq!(
        body["interpreted_query"]["original"],
        "all single word palindromic strings"
    );
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["value"], "madam");
}

#[tokio::test]
async fn test_natural_language_contains_letter() {
    let router = test_router();
    send(&router, post_string("madam")).await;
    send(&router, post_string("noon")).await;

    let (status, body) = send(
        &router,
        get("/strings/filter-by-natural-language?query=strings%20containing%20the%20letter%20m"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["interpreted_query"]["parsed_filters"]["contains_character"],
        "m"
    );
    assert_eq!(body["count"], 1);
}

#[tokio::test]
async fn test_natural_language_empty_query() {
    let router = test_router();
    let (status, body) = send(
        &router,
        get("/strings/filter-by-natural-language?query=%20%20"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "empty_query");
    assert_eq!(body["error"], "Query cannot be empty");
}

#[tokio::test]
async fn test_natural_language_unparseable_query() {
    let router = test_router();
    let (status, body) = send(
        &router,
        get("/strings/filter-by-natural-language?query=banana"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "unparseable_query");
}

#[tokio::test]
async fn test_natural_language_conflicting_filters() {
    let router = test_router();
    let (status, body) = send(
        &router,
        get("/strings/filter-by-natural-language?query=strings%20longer%20than%2020%20but%20shorter%20than%2010"),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "conflicting_filters");
    assert_eq!(body["error"], "Conflicting filters: min_length > max_length");
}

#[tokio::test]
async fn test_delete_string() {
    let router = test_router();
    send(&router, post_string("madam")).await;

    let (status, _) = send(&router, delete("/strings/madam")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&router, get("/strings/madam")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_non_existent_string() {
    let router = test_router();
    let (status, body) = send(&router, delete("/strings/doesnotexist")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn test_stats() {
    let router = test_router();
    send(&router, post_string("madam")).await;
    send(&router, post_string("banana")).await;

    let (status, body) = send(&router, get("/stats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["string_count"], 2);
    assert_eq!(body["palindrome_count"], 1);
}

#[tokio::test]
async fn test_service_info() {
    let router = test_router();
    let (status, body) = send(&router, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Strand REST API");
}
