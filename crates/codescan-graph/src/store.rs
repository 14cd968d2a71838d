//! The write surface the scan pipeline needs from a graph store.

use anyhow::Result;
use async_trait::async_trait;
use neo4rs::Query;

use codescan_core::Finding;

use crate::schema;
use crate::GraphClient;

/// The four statement shapes issued during a scan.
#[async_trait]
pub trait FindingStore: Send + Sync {
    /// Run a trivial query to prove the store answers.
    async fn ping(&self) -> Result<()>;

    /// Delete every node and relationship.
    async fn clear_all(&self) -> Result<()>;

    /// Create the entity identifier uniqueness constraint if missing.
    async fn ensure_constraint(&self) -> Result<()>;

    /// Merge one finding under the given identifier.
    async fn merge_finding(&self, id: &str, finding: &Finding) -> Result<()>;
}

#[async_trait]
impl FindingStore for GraphClient {
    async fn ping(&self) -> Result<()> {
        self.execute(Query::new(schema::PROBE.to_string())).await
    }

    async fn clear_all(&self) -> Result<()> {
        self.execute(Query::new(schema::CLEAR_ALL.to_string())).await
    }

    async fn ensure_constraint(&self) -> Result<()> {
        self.execute(Query::new(schema::ENTITY_ID_CONSTRAINT.to_string())).await
    }

    async fn merge_finding(&self, id: &str, finding: &Finding) -> Result<()> {
        self.execute(schema::merge_finding_query(id, finding)).await
    }
}
