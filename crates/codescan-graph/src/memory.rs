//! In-memory [`FindingStore`] that records every statement it receives.
//!
//! Used to exercise the pipeline without a running Neo4j. Individual
//! statement kinds can be made to fail to simulate a faulting driver.

use std::collections::HashSet;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use codescan_core::Finding;

use crate::FindingStore;

/// A statement received by [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Ping,
    ClearAll,
    EnsureConstraint,
    MergeFinding { id: String, finding: Finding },
}

impl Statement {
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Ping => "ping",
            Statement::ClearAll => "clear_all",
            Statement::EnsureConstraint => "ensure_constraint",
            Statement::MergeFinding { .. } => "merge_finding",
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    statements: Mutex<Vec<Statement>>,
    failing: HashSet<&'static str>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every statement of `kind` fail after being recorded.
    pub fn failing(mut self, kind: &'static str) -> Self {
        self.failing.insert(kind);
        self
    }

    /// Statements received so far, in order.
    pub fn statements(&self) -> Vec<Statement> {
        self.statements.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Findings merged so far with their identifiers.
    pub fn merged(&self) -> Vec<(String, Finding)> {
        self.statements()
            .into_iter()
            .filter_map(|s| match s {
                Statement::MergeFinding { id, finding } => Some((id, finding)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, statement: Statement) -> Result<()> {
        let kind = statement.kind();
        if let Ok(mut statements) = self.statements.lock() {
            statements.push(statement);
        }
        if self.failing.contains(kind) {
            anyhow::bail!("simulated failure for {}", kind);
        }
        Ok(())
    }
}

#[async_trait]
impl FindingStore for MemoryStore {
    async fn ping(&self) -> Result<()> {
        self.record(Statement::Ping)
    }

    async fn clear_all(&self) -> Result<()> {
        self.record(Statement::ClearAll)
    }

    async fn ensure_constraint(&self) -> Result<()> {
        self.record(Statement::EnsureConstraint)
    }

    async fn merge_finding(&self, id: &str, finding: &Finding) -> Result<()> {
        self.record(Statement::MergeFinding {
            id: id.to_string(),
            finding: finding.clone(),
        })
    }
}
