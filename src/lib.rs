// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod client;
pub mod config;
pub mod error;
pub mod exporter;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use client::{DocumentIngestor, QueryExecutor};
pub use config::{BatchConfig, Config, SearchConfig, ServiceConfig};
pub use error::{Result, RetrievalError};
pub use exporter::{JsonExporter, SearchExport};
pub use models::{Candidate, Document, IngestOutcome, Query, SearchResult};
pub use pipeline::{BatchIngestor, FileScanner, IngestStats, ProgressTracker, ScannedFile};
pub use utils::{HealthCheck, HealthStatus, OperationTimer, Validator};
