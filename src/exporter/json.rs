// file: src/exporter/json.rs
// description: json export of search results

use crate::error::{Result, RetrievalError};
use crate::models::{Candidate, Query, SearchResult};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct SearchExport<'a> {
    pub query: &'a str,
    pub exported_at: String,
    pub candidate_count: usize,
    pub candidates: &'a [Candidate],
}

impl JsonExporter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn export(&self, query: &Query, result: &SearchResult, pretty: bool) -> Result<PathBuf> {
        let export = SearchExport {
            query: &query.text,
            exported_at: Utc::now().to_rfc3339(),
            candidate_count: result.len(),
            candidates: result.candidates(),
        };

        let json = if pretty {
            serde_json::to_string_pretty(&export)
        } else {
            serde_json::to_string(&export)
        }
        .map_err(|e| RetrievalError::Serialization(e.to_string()))?;

        if let Some(parent) = self.output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.output_path, json)?;
        info!(
            "Exported {} candidates to {}",
            result.len(),
            self.output_path.display()
        );

        Ok(self.output_path.clone())
    }
}
