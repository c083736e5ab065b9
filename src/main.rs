// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rag_client::utils::logging;
use rag_client::{
    BatchIngestor, Config, Document, DocumentIngestor, HealthCheck, IngestOutcome, JsonExporter,
    OperationTimer, Query, QueryExecutor,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "rag_client")]
#[command(version = "0.1.0")]
#[command(about = "Client for a RAG vector-similarity search service", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the index by semantic similarity
    Search {
        /// Search query text
        query: String,

        #[arg(short, long, value_name = "NUM")]
        top_k: Option<usize>,

        /// Write the result set to a JSON file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },

    /// Submit one document to the index
    Ingest {
        /// Document id; derived from the content hash when omitted
        #[arg(long)]
        id: Option<String>,

        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Submit every text file under a directory
    IngestDir {
        path: PathBuf,

        #[arg(long, value_name = "NUM")]
        limit: Option<usize>,
    },

    /// Check whether the search service is reachable
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Search {
            query,
            top_k,
            output,
            pretty,
        } => {
            cmd_search(&config, &query, top_k, output, pretty).await?;
        }
        Commands::Ingest { id, text, file } => {
            cmd_ingest(&config, id, text, file).await?;
        }
        Commands::IngestDir { path, limit } => {
            cmd_ingest_dir(&config, &path, limit).await?;
        }
        Commands::Status => {
            cmd_status(&config).await?;
        }
    }

    Ok(())
}

async fn cmd_search(
    config: &Config,
    query_text: &str,
    top_k: Option<usize>,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    info!("Searching for: {}", query_text);

    let executor =
        QueryExecutor::new(config.service.clone()).context("Failed to create query executor")?;

    let query = Query::new(query_text).with_top_k(top_k.unwrap_or(config.search.default_top_k));

    let timer = OperationTimer::new("search");
    let result = executor.search(&query).await.context("Search failed")?;
    timer.finish_with_count(result.len());

    if result.is_empty() {
        println!("{}", logging::format_info("No matching documents"));
    } else {
        for (rank, candidate) in result.iter().enumerate() {
            println!(
                "{}. {}",
                rank + 1,
                candidate.format_summary(config.search.preview_length)
            );
        }
    }

    if let Some(path) = output {
        let exporter = JsonExporter::new(path);
        let written = exporter
            .export(&query, &result, pretty)
            .context("Failed to export results")?;
        println!(
            "{}",
            logging::format_success(&format!("Results written to {}", written.display()))
        );
    }

    Ok(())
}

async fn cmd_ingest(
    config: &Config,
    id: Option<String>,
    text: Option<String>,
    file: Option<PathBuf>,
) -> Result<()> {
    let content = match (text, file) {
        (Some(text), None) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => anyhow::bail!("Provide exactly one of --text or --file"),
    };

    let document = match id {
        Some(id) => Document::new(id, content),
        None => Document::with_derived_id(content),
    };

    info!(
        "Submitting document {} ({} bytes)",
        document.id,
        document.content.len()
    );

    let ingestor =
        DocumentIngestor::new(config.service.clone()).context("Failed to create ingestor")?;

    let outcome = match ingestor.ingest(&document).await {
        Ok(outcome) => outcome,
        Err(e) => IngestOutcome::rejected(e.to_string()),
    };

    match &outcome {
        IngestOutcome::Accepted => {
            println!(
                "{}",
                logging::format_success(&format!("Document {} accepted by the index", document.id))
            );
        }
        IngestOutcome::Rejected { reason } => {
            println!(
                "{}",
                logging::format_error(&format!("Document {} rejected: {}", document.id, reason))
            );
            anyhow::bail!("Document submission rejected");
        }
    }

    Ok(())
}

async fn cmd_ingest_dir(config: &Config, path: &Path, limit: Option<usize>) -> Result<()> {
    info!("Starting batch ingestion from {}", path.display());

    let ingestor =
        DocumentIngestor::new(config.service.clone()).context("Failed to create ingestor")?;
    let batch = BatchIngestor::new(ingestor, config.batch.clone());

    let stats = batch
        .ingest_directory(path, limit)
        .await
        .context("Batch ingestion failed")?;

    info!("=== Batch Ingestion Summary ===");
    info!("Files scanned: {}", stats.files_scanned);
    info!("Documents accepted: {}", stats.documents_accepted);
    info!("Documents rejected: {}", stats.documents_rejected);
    info!("Success rate: {:.2}%", stats.success_rate());
    info!("Duration: {} seconds", stats.duration_secs);
    info!(
        "Throughput: {:.2} documents/sec",
        stats.documents_per_second()
    );
    info!("===============================");

    if stats.documents_rejected > 0 {
        println!(
            "{}",
            logging::format_warning(&format!(
                "{} of {} documents were rejected",
                stats.documents_rejected,
                stats.documents_accepted + stats.documents_rejected
            ))
        );
    } else {
        println!(
            "{}",
            logging::format_success(&format!(
                "All {} documents accepted",
                stats.documents_accepted
            ))
        );
    }

    Ok(())
}

async fn cmd_status(config: &Config) -> Result<()> {
    info!("Probing search service at {}", config.service.base_url);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.service.timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let timer = OperationTimer::new("status probe");

    // Any HTTP response counts as reachable; the root path itself is not
    // part of the service contract.
    let check = match client.get(&config.service.base_url).send().await {
        Ok(_) => HealthCheck::healthy("search-service", timer.elapsed()),
        Err(e) => HealthCheck::unhealthy("search-service", e.to_string(), timer.elapsed()),
    };
    timer.finish();

    if check.is_healthy() {
        println!(
            "{}",
            logging::format_success(&format!(
                "Service reachable in {} ms",
                check.response_time_ms
            ))
        );
    } else {
        error!(
            "Service unreachable: {}",
            check.message.as_deref().unwrap_or("unknown error")
        );
        println!("{}", logging::format_error("Service unreachable"));
        anyhow::bail!("Search service is not reachable");
    }

    Ok(())
}
