//! Fixed prompts handed to the graph-RAG engine.

/// Domain description used when `DOMAIN` is not set.
pub const DEFAULT_DOMAIN: &str = "Analyze this source code for security vulnerabilities. \
Identify functions, classes, user inputs, data flows and dangerous sinks, and record \
which file and line each vulnerability occurs on.";

/// Entity labels the engine extracts while building its graph.
pub const ENTITY_TYPES: &[&str] = &[
    "Function",
    "Class",
    "Variable",
    "Input",
    "Sink",
    "Vulnerability",
    "File",
    "LineNumber",
];

/// Example questions that steer the engine's extraction.
pub const EXAMPLE_QUERIES: &[&str] = &[
    "Which functions pass user input to a database query without sanitization?",
    "Where is untrusted data written to the filesystem or a shell command?",
    "Which files contain hardcoded credentials or secrets?",
];

/// The one question asked after ingestion. Answers are expected as JSON.
pub const FINDINGS_QUERY: &str = "List every security vulnerability found in the code. \
Respond ONLY with a JSON array of objects, each with the keys \"filename\", \
\"vulnerability\" and \"linenumber\" (all strings). Do not add any text outside the JSON.";

/// Owned copies of [`ENTITY_TYPES`].
pub fn entity_types() -> Vec<String> {
    ENTITY_TYPES.iter().map(|s| s.to_string()).collect()
}

/// Owned copies of [`EXAMPLE_QUERIES`].
pub fn example_queries() -> Vec<String> {
    EXAMPLE_QUERIES.iter().map(|s| s.to_string()).collect()
}
