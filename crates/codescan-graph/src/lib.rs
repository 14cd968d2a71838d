//! # codescan-graph
//!
//! Neo4j persistence for scan findings.
//!
//! Provides the bolt client, the database lifecycle steps run before each
//! scan, and the merge of parsed findings into `(:Entity)` nodes.

pub mod client;
pub mod lifecycle;
pub mod memory;
pub mod schema;
pub mod store;
pub mod upsert;

pub use client::GraphClient;
pub use lifecycle::{check_connectivity, clear_database, initialize_database};
pub use memory::{MemoryStore, Statement};
pub use store::FindingStore;
pub use upsert::{normalize_records, upsert_findings, UpsertReport};
