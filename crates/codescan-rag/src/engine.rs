//! Graph-RAG engine client.
//!
//! The engine is an HTTP service that owns extraction, graph construction
//! and querying. This crate only needs two operations from it:
//!
//! - `POST /insert` with `{"content": ...}` to add a document
//! - `POST /query` with `{"query": ...}`, answered by `{"response": ...}`
//!
//! `POST /init` is sent once on connect with the working directory, domain
//! description, example queries and entity types.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use codescan_core::{EngineConfig, ScanError, ScanResult};

/// The two operations the scan needs from a graph-RAG engine.
#[async_trait]
pub trait GraphRagEngine: Send + Sync {
    /// Add one document to the engine's knowledge graph.
    async fn insert(&self, content: &str) -> Result<()>;

    /// Ask a natural-language question against the graph.
    async fn query(&self, query: &str) -> Result<QueryResponse>;
}

/// Answer to a query.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub response: String,
}

#[derive(Serialize)]
struct InitRequest<'a> {
    working_dir: String,
    domain: &'a str,
    example_queries: &'a [String],
    entity_types: &'a [String],
}

#[derive(Serialize)]
struct InsertRequest<'a> {
    content: &'a str,
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

/// HTTP client for a graph-RAG service.
#[derive(Clone)]
pub struct HttpGraphRag {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGraphRag {
    /// Build the client and initialize the engine.
    ///
    /// Fails when the service rejects or cannot receive the init request.
    pub async fn connect(config: &EngineConfig) -> ScanResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();

        let engine = Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        };

        let request = InitRequest {
            working_dir: config.working_dir.display().to_string(),
            domain: &config.domain,
            example_queries: &config.example_queries,
            entity_types: &config.entity_types,
        };

        engine
            .post("init", &request)
            .await
            .map_err(|e| ScanError::engine(format!("{:#}", e)))?;

        info!(url = %engine.base_url, working_dir = %request.working_dir, "Graph-RAG engine initialized");
        Ok(engine)
    }

    /// Release the HTTP client.
    pub fn close(self) {
        debug!(url = %self.base_url, "Closing graph-RAG engine client");
    }

    async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<reqwest::Response> {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to reach graph-RAG engine at {}", self.base_url))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Graph-RAG /{} error ({}): {}", path, status, body);
        }

        Ok(response)
    }
}

#[async_trait]
impl GraphRagEngine for HttpGraphRag {
    async fn insert(&self, content: &str) -> Result<()> {
        self.post("insert", &InsertRequest { content }).await?;
        debug!(bytes = content.len(), "Inserted document");
        Ok(())
    }

    async fn query(&self, query: &str) -> Result<QueryResponse> {
        let response = self.post("query", &QueryRequest { query }).await?;
        response
            .json()
            .await
            .context("Failed to parse graph-RAG query response")
    }
}
