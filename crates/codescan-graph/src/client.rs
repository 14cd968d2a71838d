//! Neo4j connection client.

use anyhow::{Context, Result};
use neo4rs::{ConfigBuilder, Graph, Query};
use tracing::debug;

use codescan_core::GraphConfig;

/// Client for Neo4j operations.
///
/// Wraps a neo4rs connection pool. Each statement checks a connection out
/// of the pool and returns it when the statement finishes.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Create a new GraphClient from config.
    ///
    /// neo4rs builds its pool lazily, so this does not touch the network.
    /// Reachability is checked separately by the connectivity probe.
    pub async fn connect(config: &GraphConfig) -> Result<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db(config.database.as_str())
            .max_connections(2)
            .fetch_size(20)
            .build()
            .context("Failed to build Neo4j config")?;

        let graph = Graph::connect(neo4j_config)
            .await
            .context("Failed to create Neo4j connection pool")?;

        debug!(uri = %config.uri, database = %config.database, "Neo4j pool created");
        Ok(Self { graph })
    }

    /// Execute a Cypher statement that returns no results.
    pub async fn execute(&self, query: Query) -> Result<()> {
        self.graph.run(query).await.context("Neo4j query execution failed")?;
        Ok(())
    }

    /// Release the connection pool.
    pub fn close(self) {
        debug!("Closing Neo4j connection pool");
        drop(self.graph);
    }
}
