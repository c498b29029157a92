use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};

use crate::foundation::error::{ShotframeError, ShotframeResult};

/// File name for an artifact produced at `at`: `app_screen_<unix-millis>.png`.
pub fn artifact_file_name(at: DateTime<Utc>) -> String {
    format!("app_screen_{}.png", at.timestamp_millis())
}

/// One encoded export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedArtifact {
    /// Suggested file name.
    pub file_name: String,
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
    /// PNG bytes.
    pub png: Vec<u8>,
}

/// Receives finished artifacts. Each export calls `emit` exactly once.
pub trait ExportSink {
    fn emit(&mut self, artifact: &ExportedArtifact) -> ShotframeResult<()>;
}

/// Writes artifacts into a directory, creating it on first use.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in emit order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ExportSink for DirectorySink {
    fn emit(&mut self, artifact: &ExportedArtifact) -> ShotframeResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create export dir '{}'", self.dir.display()))
            .map_err(|e| ShotframeError::encode(format!("{e:#}")))?;
        let path = self.dir.join(&artifact.file_name);
        std::fs::write(&path, &artifact.png)
            .with_context(|| format!("write '{}'", path.display()))
            .map_err(|e| ShotframeError::encode(format!("{e:#}")))?;
        tracing::info!(path = %path.display(), bytes = artifact.png.len(), "artifact written");
        self.written.push(path);
        Ok(())
    }
}

/// In-memory sink for tests and embedding hosts.
#[derive(Debug, Default)]
pub struct InMemorySink {
    artifacts: Vec<ExportedArtifact>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Artifacts in emit order.
    pub fn artifacts(&self) -> &[ExportedArtifact] {
        &self.artifacts
    }
}

impl ExportSink for InMemorySink {
    fn emit(&mut self, artifact: &ExportedArtifact) -> ShotframeResult<()> {
        self.artifacts.push(artifact.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
