use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::{
    assets::{
        decode::{PreparedImage, decode_data_url, decode_image},
        font::PreparedFont,
    },
    foundation::error::{ShotframeError, ShotframeResult},
};

#[derive(Clone, Debug)]
/// Where an asset's encoded bytes come from.
pub enum AssetSource {
    /// File on disk.
    Path(PathBuf),
    /// Encoded file contents already in memory.
    Bytes(Arc<Vec<u8>>),
    /// A `data:` URL, as produced by a browser file reader.
    DataUrl(String),
}

impl AssetSource {
    /// Source for an in-memory buffer.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(Arc::new(bytes.into()))
    }

    /// Source for a file path.
    pub fn path(path: impl AsRef<Path>) -> Self {
        Self::Path(path.as_ref().to_path_buf())
    }

    /// Read the encoded bytes behind this source.
    pub fn read_bytes(&self) -> ShotframeResult<Vec<u8>> {
        match self {
            AssetSource::Path(p) => std::fs::read(p)
                .with_context(|| format!("read asset bytes from '{}'", p.display()))
                .map_err(|e| ShotframeError::asset(format!("{e:#}"))),
            AssetSource::Bytes(b) => Ok(b.as_ref().clone()),
            AssetSource::DataUrl(url) => decode_data_url(url),
        }
    }
}

#[derive(Clone, Debug)]
/// Every asset one export needs, fully decoded.
pub struct LoadedAssets {
    /// The user's photo.
    pub user_image: PreparedImage,
    /// Frame artwork, when the asset frame strategy is configured.
    pub frame_image: Option<PreparedImage>,
    /// Title font, when a title is requested.
    pub title_font: Option<PreparedFont>,
}

/// Decode one image source.
pub fn load_image(source: &AssetSource) -> ShotframeResult<PreparedImage> {
    decode_image(&source.read_bytes()?)
}

/// Read one font source.
pub fn load_font(source: &AssetSource) -> ShotframeResult<PreparedFont> {
    PreparedFont::from_bytes(source.read_bytes()?)
}

/// Load the user image together with the optional frame and font, waiting for all of them.
///
/// Loads run concurrently; the first failure (in user, frame, font order) is returned and nothing
/// partially loaded escapes.
#[tracing::instrument(skip_all, fields(frame = frame.is_some(), font = font.is_some()))]
pub fn load_assets(
    user: &AssetSource,
    frame: Option<&AssetSource>,
    font: Option<&AssetSource>,
) -> ShotframeResult<LoadedAssets> {
    let (user_image, (frame_image, title_font)) = rayon::join(
        || load_image(user).map_err(|e| labelled("user image", e)),
        || {
            rayon::join(
                || {
                    frame
                        .map(load_image)
                        .transpose()
                        .map_err(|e| labelled("frame image", e))
                },
                || {
                    font.map(load_font)
                        .transpose()
                        .map_err(|e| labelled("title font", e))
                },
            )
        },
    );

    let assets = LoadedAssets {
        user_image: user_image?,
        frame_image: frame_image?,
        title_font: title_font?,
    };
    tracing::debug!(
        user_w = assets.user_image.width,
        user_h = assets.user_image.height,
        "assets loaded"
    );
    Ok(assets)
}

fn labelled(what: &str, err: ShotframeError) -> ShotframeError {
    match err {
        ShotframeError::Asset(msg) => ShotframeError::asset(format!("{what}: {msg}")),
        other => other,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
