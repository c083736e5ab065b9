// file: src/client/ingest.rs
// description: single-request document submission to the indexing endpoint
// reference: https://docs.rs/reqwest

use crate::config::ServiceConfig;
use crate::error::{Result, RetrievalError};
use crate::models::{Document, IngestOutcome};
use crate::utils::Validator;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Serialize)]
struct IngestRequest<'a> {
    doc_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct IngestAck {
    #[serde(default)]
    status: Option<String>,
}

impl IngestAck {
    /// The contract requires an explicit success signal. A 2xx response
    /// whose body does not carry `status == "ok"` is ambiguous and must
    /// never be read as acceptance.
    fn into_outcome(self) -> Result<IngestOutcome> {
        match self.status.as_deref() {
            Some("ok") => Ok(IngestOutcome::Accepted),
            Some(other) => Err(RetrievalError::Transport(format!(
                "Indexing endpoint reported status {:?} instead of \"ok\"",
                other
            ))),
            None => Err(RetrievalError::Transport(
                "Indexing endpoint returned no status field".to_string(),
            )),
        }
    }
}

/// Submits documents to the external indexing endpoint. Holds no state
/// beyond the HTTP client; a failed submission leaves no residual record,
/// so re-calling with the same input is safe to attempt.
#[derive(Clone)]
pub struct DocumentIngestor {
    client: Client,
    config: ServiceConfig,
}

impl DocumentIngestor {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                RetrievalError::Config(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    /// Submit one document. Validates id and content before any network
    /// call, issues a single request, and returns `Accepted` only when the
    /// index acknowledged explicitly. Whether the document then becomes
    /// searchable is the index's responsibility and is not awaited here.
    pub async fn ingest(&self, document: &Document) -> Result<IngestOutcome> {
        Validator::validate_document_id(&document.id)?;
        Validator::validate_document_content(&document.content)?;

        let url = self.config.ingest_url();
        let request = IngestRequest {
            doc_id: &document.id,
            text: &document.content,
        };
        let request_id = Uuid::new_v4();

        debug!(
            "Submitting document {} ({} bytes, request {})",
            document.id,
            document.content.len(),
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
                RetrievalError::Transport(format!("Failed to reach indexing endpoint: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RetrievalError::Transport(format!(
                "Indexing request failed with status {}: {}",
                status, error_text
            )));
        }

        let ack: IngestAck = response.json().await.map_err(|e| {
            RetrievalError::Transport(format!("Ambiguous indexing response: {}", e))
        })?;

        let outcome = ack.into_outcome()?;
        debug!("Document {} accepted by the index", document.id);

        Ok(outcome)
    }
}
