//! Terminal output formatting.

use colored::{ColoredString, Colorize};

use crate::pipeline::RunSummary;

fn status(ok: bool) -> ColoredString {
    if ok {
        "ok".green()
    } else {
        "failed".red()
    }
}

/// Print the end-of-run summary.
pub fn print_summary(summary: &RunSummary) {
    let elapsed = summary.finished_at - summary.started_at;

    println!("\n{}", "Scan summary".bold());
    println!("{}", "─".repeat(40));
    println!("  Connectivity:   {}", status(summary.connected));
    println!("  Clear:          {}", status(summary.cleared));
    println!("  Constraint:     {}", status(summary.initialized));
    println!(
        "  Files ingested: {} ({} skipped)",
        summary.ingest.inserted.to_string().cyan(),
        summary.ingest.skipped
    );

    match &summary.query_error {
        None => println!("  Query:          {}", "valid JSON".green()),
        Some(reason) => println!("  Query:          {}", reason.yellow()),
    }

    if summary.upsert.empty_input {
        println!("  Findings:       {}", "none returned".yellow());
    } else {
        println!("  Findings:       {}", summary.upsert.merged.to_string().cyan());
    }
    if summary.upsert.skipped > 0 {
        println!("  Skipped:        {}", summary.upsert.skipped.to_string().yellow());
    }
    if summary.upsert.failed > 0 {
        println!("  Failed writes:  {}", summary.upsert.failed.to_string().red());
    }

    println!("  Duration:       {:.1}s", elapsed.num_milliseconds() as f64 / 1000.0);
    println!("{}", "─".repeat(40));
}
