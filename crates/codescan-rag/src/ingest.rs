//! Corpus ingestion.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::GraphRagEngine;

/// Counts from one ingestion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub inserted: usize,
    pub skipped: usize,
}

/// Feed every UTF-8 file under `dir` into the engine, one at a time.
///
/// Files are visited depth-first in file-name order. Symlinked files are
/// read but symlinked directories are not entered. Files that are not
/// valid UTF-8 or cannot be read are skipped. A missing directory ingests
/// nothing. An engine insert failure aborts the pass.
pub async fn ingest_directory<E: GraphRagEngine + ?Sized>(engine: &E, dir: &Path) -> Result<IngestReport> {
    let mut report = IngestReport::default();

    if !dir.is_dir() {
        warn!(dir = %dir.display(), "Input directory does not exist, nothing to ingest");
        return Ok(report);
    }

    info!(dir = %dir.display(), "Ingesting source files");

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable path: {}", e);
                continue;
            }
        };

        let path = entry.path();
        let is_file = entry.file_type().is_file() || (entry.path_is_symlink() && path.is_file());
        if !is_file {
            continue;
        }

        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(path = %path.display(), "Skipping unreadable file: {}", e);
                report.skipped += 1;
                continue;
            }
        };

        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(_) => {
                debug!(path = %path.display(), "Skipping file that is not valid UTF-8");
                report.skipped += 1;
                continue;
            }
        };

        engine
            .insert(&content)
            .await
            .with_context(|| format!("Failed to insert {} into the graph-RAG engine", path.display()))?;
        debug!(path = %path.display(), "Ingested file");
        report.inserted += 1;
    }

    info!(inserted = report.inserted, skipped = report.skipped, "Ingestion complete");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedEngine;
    use std::fs;

    #[tokio::test]
    async fn test_ingests_nested_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("pkg")).unwrap();
        fs::write(dir.path().join("b.py"), "import os").unwrap();
        fs::write(dir.path().join("a.py"), "print(1)").unwrap();
        fs::write(dir.path().join("pkg").join("c.py"), "x = 2").unwrap();

        let engine = ScriptedEngine::default();
        let report = ingest_directory(&engine, dir.path()).await.unwrap();

        assert_eq!(report, IngestReport { inserted: 3, skipped: 0 });
        assert_eq!(engine.inserted(), vec!["print(1)", "import os", "x = 2"]);
    }

    #[tokio::test]
    async fn test_only_non_utf8_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("blob.bin"), [0xff, 0xfe, 0x00, 0x81]).unwrap();
        fs::write(dir.path().join("image.png"), [0x89, 0x50, 0x4e, 0x47, 0xc3]).unwrap();

        let engine = ScriptedEngine::default();
        let report = ingest_directory(&engine, dir.path()).await.unwrap();

        assert_eq!(report, IngestReport { inserted: 0, skipped: 2 });
        assert!(engine.inserted().is_empty());
    }

    #[tokio::test]
    async fn test_mixed_files_skip_binary() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.py"), "def f(): pass").unwrap();
        fs::write(dir.path().join("data.bin"), [0xc3, 0x28]).unwrap();

        let engine = ScriptedEngine::default();
        let report = ingest_directory(&engine, dir.path()).await.unwrap();

        assert_eq!(report.inserted, 1);
        assert_eq!(report.skipped, 1);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlinked_directories_are_not_entered() {
        let outside = tempfile::tempdir().unwrap();
        fs::write(outside.path().join("vendored.py"), "eval(x)").unwrap();

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.py"), "run()").unwrap();
        std::os::unix::fs::symlink(outside.path(), dir.path().join("vendor")).unwrap();
        std::os::unix::fs::symlink(outside.path().join("vendored.py"), dir.path().join("linked.py")).unwrap();

        let engine = ScriptedEngine::default();
        let report = ingest_directory(&engine, dir.path()).await.unwrap();

        assert_eq!(report.inserted, 2);
        assert_eq!(engine.inserted(), vec!["run()", "eval(x)"]);
    }

    #[tokio::test]
    async fn test_missing_directory_ingests_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let engine = ScriptedEngine::default();

        let report = ingest_directory(&engine, &dir.path().join("absent")).await.unwrap();

        assert_eq!(report, IngestReport::default());
    }
}
