use crate::{
    assets::{decode::PreparedImage, font::PreparedFont},
    composition::constants::ensure_positive,
    foundation::{
        core::Rgb8,
        error::{ShotframeError, ShotframeResult},
    },
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Per-export settings as collected by the preview UI.
pub struct ExportSettings {
    /// Canvas fill when the background is opaque.
    pub background_color: Rgb8,
    /// Leave the canvas transparent instead of filling it.
    pub transparent_background: bool,
    /// Caption above the frame; empty means no title.
    pub title_text: String,
    /// Caption color.
    pub title_color: Rgb8,
    /// Caption size in preview units (rescaled to export pixels).
    pub title_size: f64,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            background_color: Rgb8::new(0x0a, 0x0a, 0x0f),
            transparent_background: false,
            title_text: String::new(),
            title_color: Rgb8::BLACK,
            title_size: 40.0,
        }
    }
}

impl ExportSettings {
    /// Parse settings from JSON, filling unspecified fields with defaults.
    pub fn from_json_str(s: &str) -> ShotframeResult<Self> {
        let settings: Self = serde_json::from_str(s)
            .map_err(|e| ShotframeError::validation(format!("parse export settings JSON: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate numeric fields.
    pub fn validate(&self) -> ShotframeResult<()> {
        ensure_positive("title_size", self.title_size)
    }

    /// Whether these settings render a title block.
    pub fn has_title(&self) -> bool {
        !self.title_text.trim().is_empty()
    }

    /// Combine settings with decoded assets into a compositor request.
    pub fn into_request(
        self,
        user_image: PreparedImage,
        frame_image: Option<PreparedImage>,
        title_font: Option<PreparedFont>,
    ) -> CompositionRequest {
        CompositionRequest {
            user_image,
            frame_image,
            background: self.background_color,
            transparent_background: self.transparent_background,
            title_text: self.title_text,
            title_color: self.title_color,
            title_font_size: self.title_size,
            title_font,
        }
    }
}

#[derive(Clone, Debug)]
/// Everything one composition call draws, already decoded.
pub struct CompositionRequest {
    /// The user's photo.
    pub user_image: PreparedImage,
    /// Frame artwork; required by the asset frame strategy only.
    pub frame_image: Option<PreparedImage>,
    /// Canvas fill when the background is opaque.
    pub background: Rgb8,
    /// Leave the canvas transparent instead of filling it.
    pub transparent_background: bool,
    /// Caption text; may be empty.
    pub title_text: String,
    /// Caption color.
    pub title_color: Rgb8,
    /// Caption size in preview units.
    pub title_font_size: f64,
    /// Caption font; required when `title_text` is not empty.
    pub title_font: Option<PreparedFont>,
}

impl CompositionRequest {
    /// Request with default settings for `user_image` and no frame asset or title.
    pub fn new(user_image: PreparedImage) -> Self {
        ExportSettings::default().into_request(user_image, None, None)
    }

    /// Whether the title stage runs.
    pub fn has_title(&self) -> bool {
        !self.title_text.trim().is_empty()
    }

    /// Check request invariants before any drawing happens.
    pub fn validate(&self) -> ShotframeResult<()> {
        if self.user_image.width == 0 || self.user_image.height == 0 {
            return Err(ShotframeError::validation(
                "user image must have non-zero dimensions",
            ));
        }
        ensure_positive("title_font_size", self.title_font_size)?;
        if self.has_title() && self.title_font.is_none() {
            return Err(ShotframeError::validation(
                "a title font is required when title text is set",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/request.rs"]
mod tests;
