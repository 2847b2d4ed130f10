//! HTTP implementation of the search proxy.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use url::Url;

use super::{ProxyError, SearchProxy};

/// Reqwest-backed proxy client for the search backend.
///
/// Built once at startup and shared across requests; the inner
/// `reqwest::Client` pools connections and enforces the configured timeout.
/// No retries happen here, that policy belongs to the backend stack.
#[derive(Debug)]
pub struct HttpSearchProxy {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpSearchProxy {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ProxyError> {
        let base = Url::parse(base_url).map_err(|e| ProxyError::InvalidBaseUrl {
            url: base_url.to_string(),
            source: e,
        })?;
        let endpoint = base.join("search/filter").map_err(|e| ProxyError::InvalidBaseUrl {
            url: base_url.to_string(),
            source: e,
        })?;

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { endpoint, client })
    }

    fn request_body(
        search_request: &Map<String, Value>,
        query_term: &str,
        page_index: u64,
        index: &str,
    ) -> Value {
        json!({
            "index": index,
            "page_index": page_index,
            "query_term": query_term,
            "search_request": search_request,
        })
    }
}

#[async_trait]
impl SearchProxy for HttpSearchProxy {
    async fn fetch_search_results_with_filter(
        &self,
        search_request: Map<String, Value>,
        query_term: &str,
        page_index: u64,
        index: &str,
    ) -> Result<Vec<Value>, ProxyError> {
        let body = Self::request_body(&search_request, query_term, page_index, index);

        let response = self.client.post(self.endpoint.clone()).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProxyError::BackendStatus { status: status.as_u16() });
        }

        let mut payload: Value = response.json().await?;
        match payload.get_mut("results").map(Value::take) {
            Some(Value::Array(results)) => Ok(results),
            _ => Err(ProxyError::InvalidResponse(
                "missing results array in backend payload".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_all_arguments() {
        let mut search_request = Map::new();
        search_request.insert("resource".to_string(), json!("table"));

        let body = HttpSearchProxy::request_body(&search_request, "rides", 3, "table");

        assert_eq!(body["index"], "table");
        assert_eq!(body["page_index"], 3);
        assert_eq!(body["query_term"], "rides");
        assert_eq!(body["search_request"]["resource"], "table");
    }

    #[test]
    fn new_rejects_unparseable_base_url() {
        let err = HttpSearchProxy::new("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, ProxyError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn new_joins_filter_endpoint_onto_base() {
        let proxy = HttpSearchProxy::new("http://search-backend:9200/", Duration::from_secs(1))
            .unwrap();
        assert_eq!(proxy.endpoint.as_str(), "http://search-backend:9200/search/filter");
    }
}
