//! aigraphcodescan - graph-RAG security scan of a source tree
//!
//! Feeds every file of a directory into a graph-RAG engine, asks it for
//! vulnerabilities as JSON and stores the answer in Neo4j.

use anyhow::Result;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod output;
mod pipeline;

use cli::Cli;
use codescan_core::ScanConfig;
use codescan_graph::GraphClient;
use codescan_rag::HttpGraphRag;

/// Initialize tracing on stderr.
///
/// Without `--debug` only errors are shown unless `RUST_LOG` says otherwise.
/// `--debug` turns on debug output for this workspace and warnings for
/// dependencies.
fn init_tracing(debug: bool) {
    let env_filter = if debug {
        tracing_subscriber::EnvFilter::new(
            "warn,aigraphcodescan=debug,codescan_core=debug,codescan_graph=debug,codescan_rag=debug",
        )
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "error".into())
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_lenient();
    init_tracing(cli.debug);

    println!("{}", "Running graph extraction...".bold());

    let config = ScanConfig::from_env();
    debug!(?config, "Loaded configuration");

    let graph = GraphClient::connect(&config.graph).await?;
    let engine = HttpGraphRag::connect(&config.engine).await?;

    let result = pipeline::run_scan(&graph, &engine, &config).await;

    engine.close();
    graph.close();

    let summary = result?;
    output::print_summary(&summary);
    Ok(())
}
