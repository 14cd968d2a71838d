//! aigraphcodescan core library
//!
//! Findings, configuration and the fixed prompts shared by the graph and
//! graph-RAG crates.

pub mod config;
pub mod error;
pub mod finding;
pub mod prompts;

pub use config::{EngineConfig, GraphConfig, IdStrategy, ScanConfig};
pub use error::{ScanError, ScanResult};
pub use finding::{Finding, UNKNOWN};
