//! The scan run: connect, clear, initialize, ingest, query, upsert.

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{error, info};

use codescan_core::{prompts, ScanConfig};
use codescan_graph::{self as graph, FindingStore, UpsertReport};
use codescan_rag::{self as rag, GraphRagEngine, IngestReport};

/// What happened during one run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub connected: bool,
    pub cleared: bool,
    pub initialized: bool,
    pub ingest: IngestReport,
    /// Why no usable answer was obtained, if it wasn't.
    pub query_error: Option<String>,
    pub upsert: UpsertReport,
}

/// Run one scan end to end.
///
/// Database steps are best-effort and never stop the run. Only an engine
/// insert failure during ingestion aborts it.
pub async fn run_scan<S, E>(store: &S, engine: &E, config: &ScanConfig) -> Result<RunSummary>
where
    S: FindingStore + ?Sized,
    E: GraphRagEngine + ?Sized,
{
    let started_at = Utc::now();
    info!(dir = %config.directory_path.display(), "Starting scan");

    let connected = graph::check_connectivity(store).await;
    let cleared = graph::clear_database(store).await;
    let initialized = graph::initialize_database(store).await;

    let ingest = rag::ingest_directory(engine, &config.directory_path).await?;

    let (data, query_error) =
        match rag::query_until_json(engine, prompts::FINDINGS_QUERY, config.max_query_attempts).await {
            Ok(value) => (Some(value), None),
            Err(e) => {
                error!("{}", e);
                (None, Some(e.to_string()))
            }
        };

    let upsert = graph::upsert_findings(store, data.as_ref(), config.id_strategy).await;

    Ok(RunSummary {
        started_at,
        finished_at: Utc::now(),
        connected,
        cleared,
        initialized,
        ingest,
        query_error,
        upsert,
    })
}
