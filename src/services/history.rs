use anyhow::Context;
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tokio::io::AsyncWriteExt;

/// Unbounded append-only audit log of accepted URLs, one line per request:
/// `<RFC 3339 timestamp> - <url>`. Decoupled from artifact lifetime; pruning
/// never rewrites it, so entries may outlive the files they describe.
#[derive(Clone)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn append(&self, url: &str) -> anyhow::Result<()> {
        let stamp = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .context("format history timestamp")?;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("open history log {}", self.path.display()))?;
        file.write_all(format!("{stamp} - {url}\n").as_bytes())
            .await
            .context("append history entry")?;
        Ok(())
    }
}
