//! REST API request handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::analysis::{sha256_hash, StringProperties};
use crate::error::{QueryError, StoreError, StrandError};
use crate::query::{InterpretedQuery, QueryExecutor, StringFilters};
use crate::store::{StringRecord, StringStore};

/// Application state shared across handlers.
pub struct ApiState {
    /// Record store for all string operations.
    pub store: Arc<dyn StringStore>,
    /// Natural language query executor.
    pub executor: QueryExecutor,
}

impl ApiState {
    /// Create new API state.
    pub fn new(store: Arc<dyn StringStore>) -> Self {
        Self {
            executor: QueryExecutor::new(store.clone()),
            store,
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Create string request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStringRequest {
    /// The string to analyze and store.
    pub value: String,
}

/// A stored string with its properties.
#[derive(Debug, Clone, Serialize)]
pub struct StringResponse {
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}

impl From<StringRecord> for StringResponse {
    fn from(record: StringRecord) -> Self {
        let properties = record.properties();
        Self {
            id: record.id,
            value: record.value,
            properties,
            created_at: record.created_at,
        }
    }
}

/// Filtered listing response.
#[derive(Debug, Clone, Serialize)]
pub struct ListStringsResponse {
    pub data: Vec<StringResponse>,
    pub count: usize,
}

/// Natural language query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct NaturalLanguageParams {
    /// The free-text query.
    pub query: String,
}

/// Natural language filter response.
#[derive(Debug, Clone, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StringResponse>,
    pub count: usize,
    /// The interpretation applied, echoed back for the caller.
    pub interpreted_query: InterpretedQuery,
}

/// Stats response.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub string_count: usize,
    pub palindrome_count: usize,
}

/// Error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

fn error_response(
    status: StatusCode,
    error: impl Into<String>,
    code: &str,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.to_string(),
        }),
    )
}

/// Map an interpretation failure to its response.
///
/// `EmptyQuery` and `Unparseable` are bad requests; `ConflictingFilters` is
/// well-formed but semantically invalid, hence 422.
fn query_error_response(err: QueryError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code) = match err {
        QueryError::EmptyQuery => (StatusCode::BAD_REQUEST, "empty_query"),
        QueryError::Unparseable => (StatusCode::BAD_REQUEST, "unparseable_query"),
        QueryError::ConflictingFilters => (StatusCode::UNPROCESSABLE_ENTITY, "conflicting_filters"),
    };
    error_response(status, err.to_string(), code)
}

// ============================================================================
// Handler Functions
// ============================================================================

/// POST /strings - Analyze and store a string.
pub async fn create_string_handler(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<CreateStringRequest>,
) -> impl IntoResponse {
    let value = request.value.trim();
    if value.is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            r#"Invalid request body or missing "value" field"#,
            "empty_value",
        )
        .into_response();
    }

    let record = StringRecord::new(value);
    match state.store.insert(record.clone()).await {
        Ok(()) => {
            tracing::info!("Stored string {}", record.id);
            (StatusCode::CREATED, Json(StringResponse::from(record))).into_response()
        }
        Err(StrandError::Store(StoreError::AlreadyExists(_))) => error_response(
            StatusCode::CONFLICT,
            "String already exists in the system",
            "already_exists",
        )
        .into_response(),
        Err(e) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), "store_failed")
                .into_response()
        }
    }
}

/// GET /strings/:value - Fetch a stored string by its raw value.
pub async fn get_string_handler(
    State(state): State<Arc<ApiState>>,
    Path(value): Path<String>,
) -> impl IntoResponse {
    let hash = sha256_hash(&value);
    match state.store.get(&hash).await {
        Ok(Some(record)) => (StatusCode::OK, Json(StringResponse::from(record))).into_response(),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            "String does not exist in the system",
            "not_found",
        )
        .into_response(),
        Err(e) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), "get_failed")
                .into_response()
        }
    }
}

/// GET /strings - List stored strings matching structured filters.
pub async fn list_strings_handler(
    State(state): State<Arc<ApiState>>,
    Query(filters): Query<StringFilters>,
) -> impl IntoResponse {
    match state.store.list(&filters).await {
        Ok(records) => {
            let data: Vec<StringResponse> = records.into_iter().map(StringResponse::from).collect();
            let count = data.len();
            (StatusCode::OK, Json(ListStringsResponse { data, count })).into_response()
        }
        Err(e) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), "list_failed")
                .into_response()
        }
    }
}

/// GET /strings/filter-by-natural-language - Interpret a free-text query and
/// list matching strings.
pub async fn natural_language_handler(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<NaturalLanguageParams>,
) -> impl IntoResponse {
    match state.executor.execute(&params.query).await {
        Ok(result) => {
            let data: Vec<StringResponse> = result
                .records
                .into_iter()
                .map(StringResponse::from)
                .collect();
            let count = data.len();
            (
                StatusCode::OK,
                Json(NaturalLanguageResponse {
                    data,
                    count,
                    interpreted_query: result.interpreted_query,
                }),
            )
                .into_response()
        }
        Err(StrandError::Query(err)) => query_error_response(err).into_response(),
        Err(e) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), "query_failed")
                .into_response()
        }
    }
}

/// DELETE /strings/:value - Remove a stored string by its raw value.
pub async fn delete_string_handler(
    State(state): State<Arc<ApiState>>,
    Path(value): Path<String>,
) -> impl IntoResponse {
    let hash = sha256_hash(&value);
    match state.store.remove(&hash).await {
        Ok(Some(record)) => {
            tracing::info!("Removed string {}", record.id);
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            "String does not exist in the system",
            "not_found",
        )
        .into_response(),
        Err(e) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), "remove_failed")
                .into_response()
        }
    }
}

/// GET /stats - Get store statistics.
pub async fn stats_handler(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    match state.store.stats().await {
        Ok(stats) => (
            StatusCode::OK,
            Json(StatsResponse {
                string_count: stats.string_count,
                palindrome_count: stats.palindrome_count,
            }),
        )
            .into_response(),
        Err(e) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), "stats_failed")
                .into_response()
        }
    }
}
