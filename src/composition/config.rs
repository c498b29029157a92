use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use crate::{
    composition::constants::{FrameStyle, LayoutConstants},
    foundation::error::{ShotframeError, ShotframeResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Deployment configuration for the export pipeline.
///
/// Everything the compositor needs besides the per-export settings lives here, so the export math
/// never depends on how a preview happens to be styled.
pub struct ExportConfig {
    /// Layout constants shared by every export.
    pub layout: LayoutConstants,
    /// Frame rendering strategy.
    pub frame: FrameStyle,
    /// Font used for the title caption, relative to `assets_root` unless absolute.
    pub title_font: Option<PathBuf>,
    /// Base directory for relative asset paths.
    pub assets_root: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConstants::default(),
            frame: FrameStyle::default(),
            title_font: None,
            assets_root: PathBuf::from("."),
        }
    }
}

impl ExportConfig {
    /// Parse and validate configuration JSON from a reader.
    pub fn from_reader(r: impl Read) -> ShotframeResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ShotframeError::validation(format!("parse export config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate configuration JSON from a string.
    pub fn from_json_str(s: &str) -> ShotframeResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Load configuration from a JSON file.
    ///
    /// A relative `assets_root` is resolved against the file's directory.
    pub fn from_path(path: impl AsRef<Path>) -> ShotframeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ShotframeError::validation(format!("open export config '{}': {e}", path.display()))
        })?;
        let mut cfg = Self::from_reader(BufReader::new(f))?;
        if cfg.assets_root.is_relative() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            cfg.assets_root = base.join(&cfg.assets_root);
        }
        Ok(cfg)
    }

    /// Validate layout and frame constants.
    pub fn validate(&self) -> ShotframeResult<()> {
        self.layout.validate()?;
        self.frame.validate()?;
        if let Some(font) = &self.title_font {
            if font.as_os_str().is_empty() {
                return Err(ShotframeError::validation(
                    "title_font must be non-empty when set",
                ));
            }
        }
        Ok(())
    }

    /// Resolve a configured asset path against `assets_root`.
    pub fn resolve(&self, rel: &Path) -> PathBuf {
        if rel.is_absolute() {
            rel.to_path_buf()
        } else {
            self.assets_root.join(rel)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/config.rs"]
mod tests;
