//! Merge parsed findings into the graph store.

use serde_json::Value;
use tracing::{debug, error, info, warn};

use codescan_core::{Finding, IdStrategy};

use crate::FindingStore;

/// Counts from one upsert pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpsertReport {
    pub merged: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Set when there was nothing to upsert; this is logged as an error.
    pub empty_input: bool,
}

/// Flatten the engine's answer into a list of records.
///
/// A single object becomes a one-element list. `null`, an empty object and
/// scalars yield no records.
pub fn normalize_records(data: &Value) -> Vec<&Value> {
    match data {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) if !map.is_empty() => vec![data],
        _ => Vec::new(),
    }
}

/// Merge every record of `data` as an `(:Entity)` node.
///
/// `None` means no answer was obtained. Empty input is logged as an error
/// and nothing is written. A failed merge is logged and counted; the
/// remaining records are still written.
pub async fn upsert_findings<S: FindingStore + ?Sized>(
    store: &S,
    data: Option<&Value>,
    strategy: IdStrategy,
) -> UpsertReport {
    let mut report = UpsertReport::default();

    let records = data.map(normalize_records).unwrap_or_default();
    if records.is_empty() {
        error!("No findings to upsert: the parsed response is empty or missing");
        report.empty_input = true;
        return report;
    }

    for record in records {
        let Some(finding) = Finding::from_record(record) else {
            warn!(record = %record, "Skipping record that is not a JSON object");
            report.skipped += 1;
            continue;
        };

        let id = finding.node_id(strategy);
        match store.merge_finding(&id, &finding).await {
            Ok(()) => {
                debug!(id = %id, filename = %finding.filename, line = %finding.linenumber, "Merged finding");
                report.merged += 1;
            }
            Err(e) => {
                error!(id = %id, "Failed to merge finding: {:#}", e);
                report.failed += 1;
            }
        }
    }

    info!(merged = report.merged, skipped = report.skipped, failed = report.failed, "Upsert complete");
    report
}
