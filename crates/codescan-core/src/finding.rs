//! The `Finding` entity extracted from the graph-RAG engine's answer.

use serde_json::Value;
use uuid::Uuid;

use crate::config::IdStrategy;

/// Placeholder stored for any field the engine did not provide.
pub const UNKNOWN: &str = "Unknown";

/// A (filename, vulnerability, linenumber) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub filename: String,
    pub vulnerability: String,
    pub linenumber: String,
}

impl Finding {
    pub fn new(
        filename: impl Into<String>,
        vulnerability: impl Into<String>,
        linenumber: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            vulnerability: vulnerability.into(),
            linenumber: linenumber.into(),
        }
    }

    /// Build a finding from one JSON record.
    ///
    /// Returns `None` when the record is not an object. Missing or null keys
    /// become [`UNKNOWN`]; numbers and booleans keep their JSON text.
    pub fn from_record(record: &Value) -> Option<Self> {
        let map = record.as_object()?;
        Some(Self {
            filename: field_text(map.get("filename")),
            vulnerability: field_text(map.get("vulnerability")),
            linenumber: field_text(map.get("linenumber")),
        })
    }

    /// Node identifier for this finding under the given strategy.
    ///
    /// `Random` yields a fresh v4 UUID on every call. `Deterministic` hashes
    /// the triple into a v5 UUID so equal findings share one node.
    pub fn node_id(&self, strategy: IdStrategy) -> String {
        match strategy {
            IdStrategy::Random => Uuid::new_v4().to_string(),
            IdStrategy::Deterministic => {
                let name = format!(
                    "{}\u{1f}{}\u{1f}{}",
                    self.filename, self.vulnerability, self.linenumber
                );
                Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).to_string()
            }
        }
    }
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => UNKNOWN.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record() {
        let record = json!({"filename": "a.py", "vulnerability": "SQLi", "linenumber": "10"});
        let finding = Finding::from_record(&record).unwrap();
        assert_eq!(finding, Finding::new("a.py", "SQLi", "10"));
    }

    #[test]
    fn test_missing_fields_default_to_unknown() {
        let finding = Finding::from_record(&json!({"filename": "b.py"})).unwrap();
        assert_eq!(finding.filename, "b.py");
        assert_eq!(finding.vulnerability, UNKNOWN);
        assert_eq!(finding.linenumber, UNKNOWN);
    }

    #[test]
    fn test_null_and_numeric_fields() {
        let record = json!({"filename": null, "vulnerability": "XSS", "linenumber": 42});
        let finding = Finding::from_record(&record).unwrap();
        assert_eq!(finding.filename, UNKNOWN);
        assert_eq!(finding.linenumber, "42");
    }

    #[test]
    fn test_non_object_record() {
        assert!(Finding::from_record(&json!("a.py")).is_none());
        assert!(Finding::from_record(&json!([1, 2])).is_none());
    }

    #[test]
    fn test_random_ids_differ() {
        let finding = Finding::new("a.py", "SQLi", "10");
        let a = finding.node_id(IdStrategy::Random);
        let b = finding.node_id(IdStrategy::Random);
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn test_deterministic_ids_follow_the_triple() {
        let finding = Finding::new("a.py", "SQLi", "10");
        let same = Finding::new("a.py", "SQLi", "10");
        let other = Finding::new("a.py", "SQLi", "11");
        assert_eq!(
            finding.node_id(IdStrategy::Deterministic),
            same.node_id(IdStrategy::Deterministic)
        );
        assert_ne!(
            finding.node_id(IdStrategy::Deterministic),
            other.node_id(IdStrategy::Deterministic)
        );
    }
}
