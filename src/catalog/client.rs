//! HTTP access to the volumes endpoint.
//!
//! Uses `ureq` for synchronous requests with a configured timeout.
//! Exactly one query type exists: `q` + `startIndex` + `maxResults`
//! against one fixed endpoint shape. Percent-encoding of parameter
//! values is delegated to ureq.

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::model::{normalize_response, ResultPage};
use crate::config::AppConfig;
use crate::query::Query;

/// The seam between search state and the network.
///
/// The controller and TUI are driven through this trait so tests can
/// substitute a canned source for the live endpoint.
pub trait VolumeSource: Send + Sync {
    /// Fetch one result window: `page_size` volumes starting at `offset`.
    fn fetch(&self, query: &Query, offset: u64, page_size: u64) -> CatalogResult<ResultPage>;
}

/// Live catalog client backed by a `ureq` agent.
pub struct VolumesClient {
    agent: ureq::Agent,
    endpoint: String,
}

impl VolumesClient {
    pub fn new(config: &AppConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build();
        Self {
            agent,
            endpoint: config.endpoint.clone(),
        }
    }
}

impl VolumeSource for VolumesClient {
    fn fetch(&self, query: &Query, offset: u64, page_size: u64) -> CatalogResult<ResultPage> {
        tracing::debug!(
            query = %query,
            offset,
            page_size,
            endpoint = %self.endpoint,
            "fetching volumes page"
        );

        let mut request = self.agent.get(&self.endpoint);
        for (name, value) in query_pairs(query, offset, page_size) {
            request = request.query(name, &value);
        }

        let response = request.call().map_err(|e| match e {
            ureq::Error::Status(status, _) => {
                tracing::warn!(status, "catalog request rejected");
                CatalogError::RequestFailed { status }
            }
            ureq::Error::Transport(transport) => {
                tracing::warn!(error = %transport, "catalog transport failure");
                CatalogError::transport(transport.to_string())
            }
        })?;

        let body = response
            .into_string()
            .map_err(|e| CatalogError::transport(format!("read body: {e}")))?;
        let doc: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| CatalogError::MalformedBody {
                message: e.to_string(),
            })?;

        let page = normalize_response(&doc);
        tracing::debug!(items = page.books.len(), total = page.total, "volumes page fetched");
        Ok(page)
    }
}

/// The three query parameters of a page request, unencoded.
pub fn query_pairs(query: &Query, offset: u64, page_size: u64) -> [(&'static str, String); 3] {
    [
        ("q", query.as_str().to_string()),
        ("startIndex", offset.to_string()),
        ("maxResults", page_size.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryComposer;

    #[test]
    fn page_request_carries_query_offset_and_window() {
        let mut composer = QueryComposer::new();
        composer.replace_text("dune");
        let query = composer.submit().unwrap();

        let pairs = query_pairs(&query, 0, 12);
        assert_eq!(pairs[0], ("q", "intitle:dune".to_string()));
        assert_eq!(pairs[1], ("startIndex", "0".to_string()));
        assert_eq!(pairs[2], ("maxResults", "12".to_string()));
    }

    #[test]
    fn offset_advances_the_start_index() {
        let mut composer = QueryComposer::new();
        composer.replace_text("dune");
        let query = composer.submit().unwrap();

        let pairs = query_pairs(&query, 24, 12);
        assert_eq!(pairs[1], ("startIndex", "24".to_string()));
    }
}
