//! Engine double for unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use crate::{GraphRagEngine, QueryResponse};

/// Replays canned query answers and records inserted documents.
///
/// `Err` entries in the script become transport failures. Once the script
/// runs out every query answers with non-JSON text.
#[derive(Default)]
pub struct ScriptedEngine {
    answers: Mutex<VecDeque<Result<String, String>>>,
    inserted: Mutex<Vec<String>>,
    queries: AtomicUsize,
}

impl ScriptedEngine {
    pub fn new(answers: Vec<Result<&str, &str>>) -> Self {
        let answers = answers
            .into_iter()
            .map(|a| a.map(str::to_string).map_err(str::to_string))
            .collect();
        Self {
            answers: Mutex::new(answers),
            ..Self::default()
        }
    }

    pub fn query_calls(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn inserted(&self) -> Vec<String> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl GraphRagEngine for ScriptedEngine {
    async fn insert(&self, content: &str) -> Result<()> {
        self.inserted.lock().unwrap().push(content.to_string());
        Ok(())
    }

    async fn query(&self, _query: &str) -> Result<QueryResponse> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let next = self.answers.lock().unwrap().pop_front();
        match next {
            Some(Ok(response)) => Ok(QueryResponse { response }),
            Some(Err(message)) => anyhow::bail!(message),
            None => Ok(QueryResponse {
                response: "I could not find anything.".to_string(),
            }),
        }
    }
}
