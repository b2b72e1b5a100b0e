use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use tracing::debug;

use super::generate::ResourceArtifacts;

/// How [`write_artifacts`] treats the output directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Overwrite files that already exist
    pub force: bool,
    /// Report what would be written without touching the filesystem
    pub dry_run: bool,
}

/// What a write pass did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WriteSummary {
    /// Files written (or that would be written, on a dry run)
    pub written: Vec<PathBuf>,
    /// Existing files left untouched
    pub skipped: Vec<PathBuf>,
}

/// Persist an artifact set under `out_dir`.
///
/// Parent directories are created as needed. Existing files are skipped
/// unless `force` is set; content is never merged.
///
/// # Errors
///
/// Returns an error naming the path if a directory or file cannot be
/// written.
pub fn write_artifacts(
    out_dir: &Path,
    artifacts: &ResourceArtifacts,
    options: WriteOptions,
) -> anyhow::Result<WriteSummary> {
    let mut summary = WriteSummary::default();

    for artifact in &artifacts.artifacts {
        let path = artifact
            .path
            .split('/')
            .fold(out_dir.to_path_buf(), |acc, segment| acc.join(segment));

        if path.exists() && !options.force {
            println!("⚠️  Skipping existing file: {path:?}");
            summary.skipped.push(path);
            continue;
        }

        if options.dry_run {
            println!("📝 Would write {path:?} ({} bytes)", artifact.content.len());
            summary.written.push(path);
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {parent:?}"))?;
        }
        fs::write(&path, &artifact.content)
            .with_context(|| format!("Failed to write {path:?}"))?;
        debug!(path = %path.display(), bytes = artifact.content.len(), "Wrote artifact");
        println!("✅ Generated {:?}: {path:?}", artifact.kind);
        summary.written.push(path);
    }

    Ok(summary)
}
