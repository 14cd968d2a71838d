//! Environment-driven configuration.
//!
//! Every setting is optional. Unset values take the defaults below and
//! unparsable numbers fall back to their default with a warning, so loading
//! never fails.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use crate::error::ScanError;
use crate::prompts;

pub const DEFAULT_NEO4J_URI: &str = "bolt://localhost:7687";
pub const DEFAULT_NEO4J_USER: &str = "neo4j";
pub const DEFAULT_NEO4J_PASSWORD: &str = "password";
pub const DEFAULT_NEO4J_DATABASE: &str = "neo4j";
pub const DEFAULT_DIRECTORY_PATH: &str = "./code";
pub const DEFAULT_WORKING_DIR: &str = "./.codescan";
pub const DEFAULT_GRAPHRAG_URL: &str = "http://localhost:8020";
pub const DEFAULT_GRAPHRAG_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_QUERY_MAX_ATTEMPTS: u32 = 10;

/// Configuration for connecting to Neo4j.
#[derive(Clone)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_NEO4J_URI.to_string(),
            user: DEFAULT_NEO4J_USER.to_string(),
            password: DEFAULT_NEO4J_PASSWORD.to_string(),
            database: DEFAULT_NEO4J_DATABASE.to_string(),
        }
    }
}

impl fmt::Debug for GraphConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphConfig")
            .field("uri", &self.uri)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .finish()
    }
}

/// Configuration for the graph-RAG engine service.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub base_url: String,
    pub working_dir: PathBuf,
    pub domain: String,
    pub entity_types: Vec<String>,
    pub example_queries: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GRAPHRAG_URL.to_string(),
            working_dir: PathBuf::from(DEFAULT_WORKING_DIR),
            domain: prompts::DEFAULT_DOMAIN.to_string(),
            entity_types: prompts::entity_types(),
            example_queries: prompts::example_queries(),
            timeout_secs: DEFAULT_GRAPHRAG_TIMEOUT_SECS,
        }
    }
}

/// How finding node identifiers are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// Fresh v4 UUID per write; reruns create duplicate nodes.
    #[default]
    Random,
    /// v5 UUID of (filename, vulnerability, linenumber); reruns merge.
    Deterministic,
}

impl IdStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Deterministic => "deterministic",
        }
    }
}

impl FromStr for IdStrategy {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "deterministic" => Ok(Self::Deterministic),
            other => Err(ScanError::config(format!(
                "Invalid finding id strategy: '{}'. Use: random, deterministic",
                other
            ))),
        }
    }
}

/// Complete configuration for one scan run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub graph: GraphConfig,
    pub engine: EngineConfig,
    pub directory_path: PathBuf,
    pub max_query_attempts: u32,
    pub id_strategy: IdStrategy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ScanConfig {
    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let graph = GraphConfig {
            uri: text("NEO4J_URI", DEFAULT_NEO4J_URI),
            user: text("NEO4J_USER", DEFAULT_NEO4J_USER),
            password: text("NEO4J_PASSWORD", DEFAULT_NEO4J_PASSWORD),
            database: text("NEO4J_DATABASE", DEFAULT_NEO4J_DATABASE),
        };

        let engine = EngineConfig {
            base_url: text("GRAPHRAG_URL", DEFAULT_GRAPHRAG_URL),
            working_dir: PathBuf::from(text("WORKING_DIR", DEFAULT_WORKING_DIR)),
            domain: text("DOMAIN", prompts::DEFAULT_DOMAIN),
            entity_types: prompts::entity_types(),
            example_queries: prompts::example_queries(),
            timeout_secs: number(&lookup, "GRAPHRAG_TIMEOUT_SECS", DEFAULT_GRAPHRAG_TIMEOUT_SECS),
        };

        let id_strategy = match lookup("FINDING_ID_STRATEGY") {
            None => IdStrategy::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e: ScanError| {
                warn!(error = %e, "Falling back to random finding ids");
                IdStrategy::default()
            }),
        };

        Self {
            graph,
            engine,
            directory_path: PathBuf::from(text("DIRECTORY_PATH", DEFAULT_DIRECTORY_PATH)),
            max_query_attempts: number(&lookup, "QUERY_MAX_ATTEMPTS", DEFAULT_QUERY_MAX_ATTEMPTS),
            id_strategy,
        }
    }
}

fn number<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, default = %default, "Ignoring unparsable setting");
            default
        }),
    }
}
