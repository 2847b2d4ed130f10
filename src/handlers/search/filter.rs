//! POST /search/filter/{table,dashboard}
//!
//! One handler serves both resources; the bound `ResultKind` is the only
//! difference between them. Validation failures short-circuit before the
//! proxy is called, and every proxy failure collapses to the same generic
//! 500 at this boundary.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::handlers::AppState;
use crate::models::{ResultKind, TABLE_INDEX};

const MISSING_SEARCH_REQUEST_MSG: &str =
    "The search request payload is not available in the request";
const INVALID_QUERY_TERM_MSG: &str = "The query term contains an invalid character";

const RECOGNIZED_FIELDS: [&str; 4] = ["index", "page_index", "query_term", "search_request"];

/// A filter request as parsed from the POST body.
#[derive(Debug)]
struct FilterRequest {
    index: String,
    page_index: u64,
    query_term: String,
    search_request: Option<Map<String, Value>>,
}

impl FilterRequest {
    /// Strict parse of the request body. Unrecognized fields and type
    /// mismatches are all collected and reported in one response rather
    /// than failing on the first. A JSON `null` counts as absent.
    fn from_value(value: &Value) -> Result<Self, ApiError> {
        let Some(body) = value.as_object() else {
            return Err(ApiError::invalid_json("request body must be a JSON object"));
        };

        let mut violations: HashMap<String, String> = HashMap::new();

        for field in body.keys() {
            if !RECOGNIZED_FIELDS.contains(&field.as_str()) {
                violations.insert(
                    field.clone(),
                    "is not a recognized filter request field".to_string(),
                );
            }
        }

        let index = match body.get("index") {
            None | Some(Value::Null) => TABLE_INDEX.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                violations.insert("index".to_string(), "must be a string".to_string());
                TABLE_INDEX.to_string()
            }
        };

        let page_index = match body.get("page_index") {
            None | Some(Value::Null) => 0,
            Some(value) => match value.as_u64() {
                Some(n) => n,
                None => {
                    violations.insert(
                        "page_index".to_string(),
                        "must be a non-negative integer".to_string(),
                    );
                    0
                }
            },
        };

        let query_term = match body.get("query_term") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                violations.insert("query_term".to_string(), "must be a string".to_string());
                String::new()
            }
        };

        let search_request = match body.get("search_request") {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map.clone()),
            Some(_) => {
                violations.insert("search_request".to_string(), "must be an object".to_string());
                None
            }
        };

        if !violations.is_empty() {
            return Err(ApiError::validation_error(
                "The request body could not be parsed",
                Some(violations),
            ));
        }

        Ok(Self { index, page_index, query_term, search_request })
    }
}

/// POST /search/filter/table
pub async fn table_filter_post(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<Value>>, ApiError> {
    handle_filter_post(&state, ResultKind::Table, &body).await
}

/// POST /search/filter/dashboard
pub async fn dashboard_filter_post(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<Value>>, ApiError> {
    handle_filter_post(&state, ResultKind::Dashboard, &body).await
}

async fn handle_filter_post(
    state: &AppState,
    kind: ResultKind,
    body: &[u8],
) -> Result<Json<Vec<Value>>, ApiError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::invalid_json(format!("malformed JSON in request body: {}", e)))?;

    let request = FilterRequest::from_value(&value)?;

    let Some(search_request) = request.search_request else {
        return Err(ApiError::bad_request(MISSING_SEARCH_REQUEST_MSG));
    };

    if request.query_term.contains(':') {
        return Err(ApiError::bad_request(INVALID_QUERY_TERM_MSG));
    }

    tracing::debug!(
        kind = kind.name(),
        index = %request.index,
        page_index = request.page_index,
        "dispatching filter search"
    );

    let results = state
        .proxy
        .fetch_search_results_with_filter(
            search_request,
            &request.query_term,
            request.page_index,
            &request.index,
        )
        .await?;

    Ok(Json(kind.dump(results)?))
}
