//! # codescan-rag
//!
//! Client for the graph-RAG engine, plus the two steps that drive it:
//! feeding a source tree into the engine and asking it for findings until
//! it answers with valid JSON.

pub mod engine;
pub mod ingest;
pub mod query;

pub use engine::{GraphRagEngine, HttpGraphRag, QueryResponse};
pub use ingest::{ingest_directory, IngestReport};
pub use query::{parse_response, query_until_json};

#[cfg(test)]
pub(crate) mod testing;
