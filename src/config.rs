// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, RetrievalError};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub search: SearchConfig,
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub base_url: String,
    pub search_path: String,
    pub ingest_path: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub default_top_k: usize,
    pub preview_length: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BatchConfig {
    pub parallel_requests: usize,
    pub skip_patterns: Vec<String>,
    pub max_file_size_mb: usize,
}

impl ServiceConfig {
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn search_url(&self) -> String {
        self.endpoint_url(&self.search_path)
    }

    pub fn ingest_url(&self) -> String {
        self.endpoint_url(&self.ingest_path)
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("RAG_CLIENT")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| RetrievalError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| RetrievalError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            service: ServiceConfig {
                base_url: "http://localhost:8000".to_string(),
                search_path: "/search".to_string(),
                ingest_path: "/add-document".to_string(),
                timeout_secs: 30,
            },
            search: SearchConfig {
                default_top_k: 3,
                preview_length: 200,
            },
            batch: BatchConfig {
                parallel_requests: 4,
                skip_patterns: vec![
                    "*.zip".to_string(),
                    "*.pdf".to_string(),
                    ".git/".to_string(),
                ],
                max_file_size_mb: 10,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.service.base_url.starts_with("http://")
            && !self.service.base_url.starts_with("https://")
        {
            return Err(RetrievalError::Config(format!(
                "base_url must be an http(s) URL: {}",
                self.service.base_url
            )));
        }

        if self.service.timeout_secs == 0 {
            return Err(RetrievalError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.search.default_top_k == 0 {
            return Err(RetrievalError::Config(
                "default_top_k must be greater than 0".to_string(),
            ));
        }

        if self.batch.parallel_requests == 0 {
            return Err(RetrievalError::Config(
                "parallel_requests must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
