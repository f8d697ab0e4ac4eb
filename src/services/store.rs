use crate::domain::artifact::{artifact_name, is_artifact_name};
use anyhow::Context;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// Bounded store of generated QR artifacts: a directory plus the pruning
/// policy that keeps only the `keep` most recently modified files matching
/// the artifact naming convention.
#[derive(Clone)]
pub struct RetentionStore {
    dir: PathBuf,
    keep: usize,
}

impl RetentionStore {
    pub fn new(dir: impl Into<PathBuf>, keep: usize) -> Self {
        Self { dir: dir.into(), keep }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes a new artifact named from the current epoch millisecond and
    /// returns its bare file name. A same-millisecond neighbor is silently
    /// overwritten.
    pub async fn write_artifact(&self, bytes: &[u8]) -> anyhow::Result<String> {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock before epoch")?
            .as_millis();
        let name = artifact_name(millis);
        tokio::fs::write(self.dir.join(&name), bytes)
            .await
            .with_context(|| format!("write artifact {name}"))?;
        Ok(name)
    }

    /// Deletes every artifact past the `keep` newest, ordered by file
    /// modification time. Individual delete failures are logged and skipped;
    /// a concurrent prune deleting the same file is not an error.
    pub async fn prune(&self) -> anyhow::Result<()> {
        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .with_context(|| format!("list artifact dir {}", self.dir.display()))?;

        let mut artifacts = Vec::new();
        while let Some(entry) = entries.next_entry().await.context("read artifact dir")? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if !is_artifact_name(name) {
                continue;
            }
            let Ok(meta) = entry.metadata().await else { continue };
            let modified = meta.modified().unwrap_or(UNIX_EPOCH);
            artifacts.push((entry.path(), modified));
        }

        if artifacts.len() <= self.keep {
            return Ok(());
        }

        artifacts.sort_by(|a, b| b.1.cmp(&a.1));
        let stale = artifacts.split_off(self.keep);
        let mut removed = 0usize;
        for (path, _) in stale {
            match tokio::fs::remove_file(&path).await {
                Ok(()) => removed += 1,
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(err) => warn!(path = %path.display(), %err, "failed to delete old artifact"),
            }
        }
        info!(removed, remaining = self.keep, "pruned old artifacts");
        Ok(())
    }
}
