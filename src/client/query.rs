// file: src/client/query.rs
// description: single-request query execution against the search endpoint
// reference: https://docs.rs/reqwest

use crate::config::ServiceConfig;
use crate::error::{Result, RetrievalError};
use crate::models::{Candidate, Query, SearchResult};
use crate::utils::Validator;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    n_results: Option<usize>,
}

/// Wire shape of the search endpoint: three parallel arrays, positionally
/// aligned, distances non-decreasing.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    documents: Vec<String>,
    ids: Vec<String>,
    distances: Vec<f32>,
}

impl SearchResponse {
    /// Zip the parallel arrays into candidates. The zip is positional, so
    /// any length disagreement is a contract violation and fails whole;
    /// truncating or padding would silently misattribute rankings.
    fn into_result(self) -> Result<SearchResult> {
        if self.documents.len() != self.ids.len() || self.ids.len() != self.distances.len() {
            return Err(RetrievalError::Format(format!(
                "parallel arrays disagree in length: {} documents, {} ids, {} distances",
                self.documents.len(),
                self.ids.len(),
                self.distances.len()
            )));
        }

        {
            let mut seen = HashSet::new();
            for id in &self.ids {
                if !seen.insert(id.as_str()) {
                    return Err(RetrievalError::Format(format!(
                        "duplicate document id in result set: {}",
                        id
                    )));
                }
            }
        }

        if self.distances.windows(2).any(|w| w[1] < w[0]) {
            warn!("Search response distances are not non-decreasing; keeping service order");
        }

        let candidates = self
            .ids
            .into_iter()
            .zip(self.documents)
            .zip(self.distances)
            .map(|((id, content), distance)| Candidate::new(id, content, distance))
            .collect();

        Ok(SearchResult::new(candidates))
    }
}

/// Executes free-text queries against the external search endpoint. Holds
/// no state beyond the HTTP client; concurrent searches are independent.
#[derive(Clone)]
pub struct QueryExecutor {
    client: Client,
    config: ServiceConfig,
}

impl QueryExecutor {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                RetrievalError::Config(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    /// Run one search. Validates the query before any network call, issues
    /// a single request, and returns the candidates in the order the
    /// service ranked them. No retry, no caching.
    pub async fn search(&self, query: &Query) -> Result<SearchResult> {
        Validator::validate_query_text(&query.text)?;
        if let Some(top_k) = query.top_k {
            Validator::validate_top_k(top_k)?;
        }

        let url = self.config.search_url();
        let request = SearchRequest {
            query: &query.text,
            n_results: query.top_k,
        };
        let request_id = Uuid::new_v4();

        debug!(
            "Searching for {} chars of query text (request {})",
            query.text.len(),
            request_id
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("X-Request-Id", request_id.to_string())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                RetrievalError::Transport(format!("Failed to reach search endpoint: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RetrievalError::Transport(format!(
                "Search request failed with status {}: {}",
                status, error_text
            )));
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            RetrievalError::Format(format!("Failed to decode search response: {}", e))
        })?;

        let result = body.into_result()?;
        debug!("Search returned {} candidates", result.len());

        Ok(result)
    }
}
