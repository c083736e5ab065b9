// file: src/pipeline/batch.rs
// description: coordinates directory scanning and concurrent document submission
// reference: orchestrates asynchronous ingestion workflow

use crate::client::DocumentIngestor;
use crate::config::BatchConfig;
use crate::error::Result;
use crate::models::{Document, IngestOutcome};
use crate::pipeline::progress::{IngestStats, ProgressTracker};
use crate::pipeline::scanner::{FileScanner, ScannedFile};
use crate::utils::Validator;
use futures::stream::{self, StreamExt};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Fans a directory of text files out to the indexing endpoint through a
/// `DocumentIngestor`, with bounded request concurrency. Each submission is
/// still one independent call — a rejection leaves no residual state and
/// does not stop the rest of the batch.
pub struct BatchIngestor {
    ingestor: DocumentIngestor,
    config: BatchConfig,
}

impl BatchIngestor {
    pub fn new(ingestor: DocumentIngestor, config: BatchConfig) -> Self {
        let parallel_requests = config.parallel_requests.max(1);
        Self {
            ingestor,
            config: BatchConfig {
                parallel_requests,
                ..config
            },
        }
    }

    pub async fn ingest_directory(
        &self,
        root: &Path,
        limit: Option<usize>,
    ) -> Result<IngestStats> {
        let scanner = FileScanner::new(self.config.clone());
        let files = scanner.scan_directory(root)?;

        let files: Vec<ScannedFile> = match limit {
            Some(limit) => files.into_iter().take(limit).collect(),
            None => files,
        };

        if files.is_empty() {
            warn!("No files found to submit");
            return Ok(IngestStats::new());
        }

        info!(
            "Submitting {} files with {} concurrent requests",
            files.len(),
            self.config.parallel_requests
        );

        let progress = Arc::new(ProgressTracker::new(files.len()));

        let outcomes = stream::iter(files.into_iter().map(|file| {
            let ingestor = self.ingestor.clone();
            let progress = progress.clone();

            async move {
                progress.set_message(format!("Submitting {}", file.relative_path));
                let outcome = Self::ingest_file(&ingestor, &file).await;

                match &outcome {
                    IngestOutcome::Accepted => {
                        progress.inc_accepted();
                        progress.add_bytes_submitted(file.size);
                    }
                    IngestOutcome::Rejected { reason } => {
                        progress.inc_rejected();
                        warn!("Rejected {}: {}", file.relative_path, reason);
                    }
                }

                (file.relative_path, outcome)
            }
        }))
        .buffer_unordered(self.config.parallel_requests)
        .collect::<Vec<_>>()
        .await;

        for (relative_path, outcome) in &outcomes {
            if outcome.is_accepted() {
                info!("Accepted: {}", relative_path);
            }
        }

        let stats = progress.get_stats();
        progress.finish();
        Ok(stats)
    }

    /// Read one file and submit it. Failures of any kind become a
    /// `Rejected` outcome here, at the reporting boundary; the ingestor
    /// itself only ever returns `Accepted` or an error.
    async fn ingest_file(ingestor: &DocumentIngestor, file: &ScannedFile) -> IngestOutcome {
        let content = match std::fs::read_to_string(&file.path) {
            Ok(content) => content,
            Err(e) => {
                return IngestOutcome::rejected(format!(
                    "Failed to read {}: {}",
                    file.path.display(),
                    e
                ));
            }
        };

        if let Err(e) = Validator::validate_document_content(&content) {
            return IngestOutcome::rejected(e.to_string());
        }

        let document = Document::with_derived_id(content);
        info!("Submitting {} as document {}", file.relative_path, document.id);

        match ingestor.ingest(&document).await {
            Ok(outcome) => outcome,
            Err(e) => IngestOutcome::rejected(e.to_string()),
        }
    }
}
