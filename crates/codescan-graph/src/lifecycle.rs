//! Database steps run before ingestion.
//!
//! Each step is best-effort: failures are logged at error level and
//! reported as `false`, never returned as errors, so a failed step does not
//! stop the steps after it.

use tracing::{error, info};

use crate::FindingStore;

/// Verify that the graph store answers a trivial query.
pub async fn check_connectivity<S: FindingStore + ?Sized>(store: &S) -> bool {
    match store.ping().await {
        Ok(()) => {
            info!("Connected to Neo4j");
            true
        }
        Err(e) => {
            error!("Neo4j connectivity check failed: {:#}", e);
            false
        }
    }
}

/// Delete all nodes and relationships.
pub async fn clear_database<S: FindingStore + ?Sized>(store: &S) -> bool {
    match store.clear_all().await {
        Ok(()) => {
            info!("Cleared existing graph data");
            true
        }
        Err(e) => {
            error!("Failed to clear the database: {:#}", e);
            false
        }
    }
}

/// Ensure the entity identifier constraint exists.
pub async fn initialize_database<S: FindingStore + ?Sized>(store: &S) -> bool {
    match store.ensure_constraint().await {
        Ok(()) => {
            info!("Entity id constraint in place");
            true
        }
        Err(e) => {
            error!("Failed to initialize the database: {:#}", e);
            false
        }
    }
}
