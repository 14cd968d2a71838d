//! Ask the engine for findings until it answers with JSON.

use serde_json::Value;
use tracing::{debug, info, warn};

use codescan_core::{ScanError, ScanResult};

use crate::GraphRagEngine;

/// Parse an engine answer as JSON.
pub fn parse_response(text: &str) -> ScanResult<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Re-issue `query` until the answer parses as JSON.
///
/// Malformed answers and failed requests are both retried immediately.
/// Gives up after `max_attempts` (at least one) with
/// [`ScanError::RetriesExhausted`].
pub async fn query_until_json<E: GraphRagEngine + ?Sized>(
    engine: &E,
    query: &str,
    max_attempts: u32,
) -> ScanResult<Value> {
    let max_attempts = max_attempts.max(1);
    let mut last_error = String::new();

    for attempt in 1..=max_attempts {
        match engine.query(query).await {
            Ok(answer) => match parse_response(&answer.response) {
                Ok(value) => {
                    info!(attempt, "Graph-RAG engine answered with valid JSON");
                    return Ok(value);
                }
                Err(e) => {
                    warn!(attempt, max_attempts, "Answer is not valid JSON: {}", e);
                    debug!(response = %answer.response, "Rejected answer");
                    last_error = e.to_string();
                }
            },
            Err(e) => {
                warn!(attempt, max_attempts, "Graph-RAG query failed: {:#}", e);
                last_error = format!("{:#}", e);
            }
        }
    }

    Err(ScanError::RetriesExhausted {
        attempts: max_attempts,
        last_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedEngine;
    use serde_json::json;

    #[tokio::test]
    async fn test_valid_on_first_attempt() {
        let engine = ScriptedEngine::new(vec![Ok(r#"[{"filename": "a.py"}]"#)]);

        let value = query_until_json(&engine, "q", 5).await.unwrap();

        assert_eq!(value, json!([{"filename": "a.py"}]));
        assert_eq!(engine.query_calls(), 1);
    }

    #[tokio::test]
    async fn test_retries_until_valid() {
        let engine = ScriptedEngine::new(vec![
            Ok("Here are the findings:"),
            Ok("```json\n[]\n```"),
            Ok("{\"filename\": "),
            Ok(r#"{"filename": "a.py", "vulnerability": "SQLi", "linenumber": "10"}"#),
        ]);

        let value = query_until_json(&engine, "q", 10).await.unwrap();

        assert_eq!(value["vulnerability"], "SQLi");
        assert_eq!(engine.query_calls(), 4);
    }

    #[tokio::test]
    async fn test_transport_errors_are_retried() {
        let engine = ScriptedEngine::new(vec![Err("connection reset"), Ok("[]")]);

        let value = query_until_json(&engine, "q", 3).await.unwrap();

        assert_eq!(value, json!([]));
        assert_eq!(engine.query_calls(), 2);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let engine = ScriptedEngine::new(vec![]);

        let err = query_until_json(&engine, "q", 3).await.unwrap_err();

        assert!(matches!(err, ScanError::RetriesExhausted { attempts: 3, .. }));
        assert_eq!(engine.query_calls(), 3);
    }

    #[tokio::test]
    async fn test_zero_attempts_still_queries_once() {
        let engine = ScriptedEngine::new(vec![Ok("null")]);

        let value = query_until_json(&engine, "q", 0).await.unwrap();

        assert!(value.is_null());
        assert_eq!(engine.query_calls(), 1);
    }
}
