pub mod http;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

pub use http::HttpSearchProxy;

/// Access layer for the external search backend.
///
/// Handlers receive an implementation behind `Arc<dyn SearchProxy>` at
/// construction time; nothing in this crate reaches for a global client.
/// Implementations hold no per-request mutable state and are safe to share
/// across in-flight requests.
#[async_trait]
pub trait SearchProxy: Send + Sync {
    /// Run a filtered search against `index` and return the raw result
    /// documents. The payload of `search_request` is backend-defined and
    /// passed through opaquely.
    async fn fetch_search_results_with_filter(
        &self,
        search_request: Map<String, Value>,
        query_term: &str,
        page_index: u64,
        index: &str,
    ) -> Result<Vec<Value>, ProxyError>;
}

/// Failures raised by the proxy client. Callers do not branch on the
/// variant; every one of these surfaces to the client as the same generic
/// 500 response.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("invalid search backend URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("search backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("search backend returned HTTP {status}")]
    BackendStatus { status: u16 },

    #[error("unexpected search backend response: {0}")]
    InvalidResponse(String),
}
