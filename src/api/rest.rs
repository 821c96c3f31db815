//! REST API router and configuration.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::api::handlers::{
    create_string_handler, delete_string_handler, get_string_handler, list_strings_handler,
    natural_language_handler, stats_handler, ApiState,
};
use crate::config::ApiConfig;
use crate::store::StringStore;

/// Create the REST API router.
///
/// Endpoints:
/// - POST   /strings                            - Analyze and store a string
/// - GET    /strings?is_palindrome=...          - List strings by structured filters
/// - GET    /strings/filter-by-natural-language - List strings by natural language query
/// - GET    /strings/:value                     - Fetch a stored string
/// - DELETE /strings/:value                     - Remove a stored string
/// - GET    /stats                              - Store statistics
pub fn create_rest_router(store: Arc<dyn StringStore>, config: &ApiConfig) -> Router {
    let state = Arc::new(ApiState::new(store));

    let router = Router::new()
        .route("/", get(service_info_handler))
        .route(
            "/strings",
            get(list_strings_handler).post(create_string_handler),
        )
        .route(
            "/strings/filter-by-natural-language",
            get(natural_language_handler),
        )
        .route(
            "/strings/:value",
            get(get_string_handler).delete(delete_string_handler),
        )
        .route("/stats", get(stats_handler))
        .with_state(state);

    // Add CORS if enabled
    if config.enable_cors {
        let origin = if config.cors_origins.iter().any(|o| o == "*") {
            AllowOrigin::any()
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|o| o.parse().ok())
                .collect();
            AllowOrigin::list(origins)
        };
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .allow_origin(origin);

        router.layer(cors)
    } else {
        router
    }
}

/// Service info handler.
async fn service_info_handler() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "Strand REST API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "String analysis and natural language filter queries",
        "endpoints": {
            "create": {
                "method": "POST",
                "path": "/strings",
                "description": "Analyze and store a string"
            },
            "list": {
                "method": "GET",
                "path": "/strings",
                "description": "List stored strings by structured filters",
                "params": {
                    "is_palindrome": "Palindrome flag (true/false)",
                    "min_length": "Minimum string length (inclusive)",
                    "max_length": "Maximum string length (inclusive)",
                    "word_count": "Exact word count",
                    "contains_character": "Single character to search for"
                }
            },
            "natural_language": {
                "method": "GET",
                "path": "/strings/filter-by-natural-language",
                "description": "List stored strings by a natural language query",
                "params": {
                    "query": "Query text (required)"
                }
            },
            "get": {
                "method": "GET",
                "path": "/strings/:value",
                "description": "Fetch a stored string by value"
            },
            "delete": {
                "method": "DELETE",
                "path": "/strings/:value",
                "description": "Remove a stored string by value"
            },
            "stats": {
                "method": "GET",
                "path": "/stats",
                "description": "Store statistics"
            }
        }
    }))
}
