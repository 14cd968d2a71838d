//! The Cypher statements issued against the graph store.

use neo4rs::Query;

use codescan_core::Finding;

/// Node label for persisted findings.
pub const ENTITY_LABEL: &str = "Entity";

/// Trivial round trip used as the connectivity probe.
pub const PROBE: &str = "RETURN 1";

/// Remove every node, detaching relationships first.
pub const CLEAR_ALL: &str = "MATCH (n) DETACH DELETE n";

/// Uniqueness of entity identifiers. Safe to run repeatedly.
pub const ENTITY_ID_CONSTRAINT: &str =
    "CREATE CONSTRAINT entity_id IF NOT EXISTS FOR (e:Entity) REQUIRE e.id IS UNIQUE";

/// Merge one finding keyed on its identifier and the three fields.
pub const MERGE_FINDING: &str = "MERGE (e:Entity {id: $id, filename: $filename, \
vulnerability: $vulnerability, linenumber: $linenumber})";

/// Build the parameterized merge for one finding.
pub fn merge_finding_query(id: &str, finding: &Finding) -> Query {
    Query::new(MERGE_FINDING.to_string())
        .param("id", id)
        .param("filename", finding.filename.as_str())
        .param("vulnerability", finding.vulnerability.as_str())
        .param("linenumber", finding.linenumber.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements_target_entity_label() {
        assert!(ENTITY_ID_CONSTRAINT.contains(ENTITY_LABEL));
        assert!(ENTITY_ID_CONSTRAINT.contains("IF NOT EXISTS"));
        assert!(MERGE_FINDING.starts_with("MERGE (e:Entity"));
        for param in ["$id", "$filename", "$vulnerability", "$linenumber"] {
            assert!(MERGE_FINDING.contains(param), "missing {}", param);
        }
    }
}
