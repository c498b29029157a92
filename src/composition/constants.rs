use std::path::PathBuf;

use crate::foundation::{
    core::Rgb8,
    error::{ShotframeError, ShotframeResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Layout constants calibrated against the on-screen preview.
///
/// Values that describe the preview (`reference_preview_*`) are rescaled to export pixels by
/// `canvas_width / reference_preview_width`; margins are already in export pixels.
pub struct LayoutConstants {
    /// Pixel width of the preview container the title size was picked against.
    pub reference_preview_width: f64,
    /// Total horizontal padding (left + right) of the preview container.
    pub reference_preview_padding: f64,
    /// Distance from the canvas top to the first title line, in export pixels.
    pub title_top_margin: f64,
    /// Line height as a multiple of the scaled font size.
    pub title_line_height: f64,
    /// Gap between the title block and the frame, in export pixels.
    pub phone_margin_top: f64,
    /// What happens when the title pushes the frame past the canvas bottom.
    pub overflow: FrameOverflow,
    /// Island overlay proportions.
    pub island: IslandConstants,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            reference_preview_width: 330.0,
            reference_preview_padding: 64.0,
            title_top_margin: 80.0,
            title_line_height: 1.2,
            phone_margin_top: 40.0,
            overflow: FrameOverflow::Crop,
            island: IslandConstants::default(),
        }
    }
}

impl LayoutConstants {
    /// Validate that every constant is finite and in range.
    pub fn validate(&self) -> ShotframeResult<()> {
        ensure_positive("reference_preview_width", self.reference_preview_width)?;
        ensure_non_negative("reference_preview_padding", self.reference_preview_padding)?;
        if self.reference_preview_padding >= self.reference_preview_width {
            return Err(ShotframeError::validation(
                "reference_preview_padding must be smaller than reference_preview_width",
            ));
        }
        ensure_non_negative("title_top_margin", self.title_top_margin)?;
        ensure_positive("title_line_height", self.title_line_height)?;
        ensure_non_negative("phone_margin_top", self.phone_margin_top)?;
        if let FrameOverflow::Clamp { bottom_margin } = self.overflow {
            ensure_non_negative("overflow.bottom_margin", bottom_margin)?;
        }
        self.island.validate()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
/// Placement policy for a frame that no longer fits below the title.
pub enum FrameOverflow {
    /// Keep the computed position; the canvas crops the frame.
    #[default]
    Crop,
    /// Pull the frame up so its bottom edge stays `bottom_margin` above the canvas bottom.
    Clamp {
        /// Minimum distance between frame bottom and canvas bottom.
        bottom_margin: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Proportions of the "island" pill drawn over the top of the screen.
pub struct IslandConstants {
    /// Island width as a fraction of frame width.
    pub width_fraction: f64,
    /// Island height as a fraction of island width.
    pub aspect: f64,
    /// Offset below the screen top as a fraction of screen height.
    pub top_fraction: f64,
}

impl Default for IslandConstants {
    fn default() -> Self {
        Self {
            width_fraction: 0.28,
            aspect: 0.28,
            top_fraction: 0.015,
        }
    }
}

impl IslandConstants {
    fn validate(&self) -> ShotframeResult<()> {
        ensure_fraction("island.width_fraction", self.width_fraction)?;
        ensure_fraction("island.aspect", self.aspect)?;
        if !self.top_fraction.is_finite() || !(0.0..1.0).contains(&self.top_fraction) {
            return Err(ShotframeError::validation(
                "island.top_fraction must be finite and in [0, 1)",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Frame rendering strategy, picked once per deployment.
pub enum FrameStyle {
    /// Draw a pre-rendered frame image (with optional drop shadow).
    Asset(AssetFrameConstants),
    /// Draw the frame body procedurally.
    Drawn(DrawnFrameConstants),
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self::Asset(AssetFrameConstants::default())
    }
}

impl FrameStyle {
    /// Validate the constants of the selected strategy.
    pub fn validate(&self) -> ShotframeResult<()> {
        match self {
            FrameStyle::Asset(a) => a.validate(),
            FrameStyle::Drawn(d) => d.validate(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Geometry of the pre-rendered frame asset and of the screen cut-out inside it.
pub struct AssetFrameConstants {
    /// Frame image location, relative to the assets root.
    pub source: PathBuf,
    /// Frame width as a fraction of canvas width.
    pub width_fraction: f64,
    /// Screen left inset as a fraction of frame width.
    pub screen_left: f64,
    /// Screen top inset as a fraction of frame height.
    pub screen_top: f64,
    /// Screen width as a fraction of frame width.
    pub screen_width: f64,
    /// Screen height as a fraction of frame height.
    pub screen_height: f64,
    /// Screen corner radius as a fraction of screen width.
    pub screen_radius: f64,
    /// Soft shadow drawn beneath the frame; `None` disables it.
    pub shadow: Option<ShadowConstants>,
}

impl Default for AssetFrameConstants {
    fn default() -> Self {
        Self {
            source: PathBuf::from("phone-frame.png"),
            width_fraction: 0.9,
            screen_left: 0.04,
            screen_top: 0.018,
            screen_width: 0.92,
            screen_height: 0.965,
            screen_radius: 0.12,
            shadow: Some(ShadowConstants::default()),
        }
    }
}

impl AssetFrameConstants {
    fn validate(&self) -> ShotframeResult<()> {
        if self.source.as_os_str().is_empty() {
            return Err(ShotframeError::validation(
                "asset frame source must be non-empty",
            ));
        }
        ensure_fraction("frame.width_fraction", self.width_fraction)?;
        ensure_non_negative("frame.screen_left", self.screen_left)?;
        ensure_non_negative("frame.screen_top", self.screen_top)?;
        ensure_fraction("frame.screen_width", self.screen_width)?;
        ensure_fraction("frame.screen_height", self.screen_height)?;
        if self.screen_left + self.screen_width > 1.0 || self.screen_top + self.screen_height > 1.0
        {
            return Err(ShotframeError::validation(
                "frame screen rectangle must lie inside the frame",
            ));
        }
        ensure_non_negative("frame.screen_radius", self.screen_radius)?;
        if let Some(shadow) = &self.shadow {
            shadow.validate()?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Drop shadow parameters (canvas `shadowBlur` semantics: sigma is half the blur).
pub struct ShadowConstants {
    /// Shadow opacity applied to the frame silhouette.
    pub opacity: f32,
    /// Blur length in export pixels.
    pub blur_px: f64,
    /// Downward offset in export pixels.
    pub offset_y_px: f64,
    /// The blur runs on a grid this many times coarser than the canvas.
    pub downsample: u32,
}

impl Default for ShadowConstants {
    fn default() -> Self {
        Self {
            opacity: 0.4,
            blur_px: 50.0,
            offset_y_px: 30.0,
            downsample: 4,
        }
    }
}

impl ShadowConstants {
    fn validate(&self) -> ShotframeResult<()> {
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ShotframeError::validation(
                "shadow.opacity must be finite and in [0, 1]",
            ));
        }
        ensure_non_negative("shadow.blur_px", self.blur_px)?;
        if !self.offset_y_px.is_finite() {
            return Err(ShotframeError::validation("shadow.offset_y_px must be finite"));
        }
        if self.downsample == 0 {
            return Err(ShotframeError::validation("shadow.downsample must be > 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Geometry and palette of the procedurally drawn frame.
pub struct DrawnFrameConstants {
    /// Frame width as a fraction of canvas width.
    pub width_fraction: f64,
    /// Frame height as a fraction of canvas height.
    pub height_fraction: f64,
    /// Corner radius of the frame body, in export pixels.
    pub body_radius: f64,
    /// Inset between frame edge and screen on every side, in export pixels.
    pub screen_inset: f64,
    /// Corner radius of the screen, in export pixels.
    pub screen_radius: f64,
    /// Gradient color at the top of the body.
    pub gradient_top: Rgb8,
    /// Gradient color at the bottom of the body.
    pub gradient_bottom: Rgb8,
    /// Stroke color around the body.
    pub stroke_color: Rgb8,
    /// Stroke opacity.
    pub stroke_alpha: f32,
    /// Stroke width in export pixels.
    pub stroke_width: f64,
    /// Fill color of the side buttons.
    pub button_color: Rgb8,
    /// Side buttons, drawn behind the body so only their outer edge shows.
    pub buttons: Vec<SideButton>,
}

impl Default for DrawnFrameConstants {
    fn default() -> Self {
        Self {
            width_fraction: 0.85,
            height_fraction: 0.83,
            body_radius: 150.0,
            screen_inset: 30.0,
            screen_radius: 120.0,
            gradient_top: Rgb8::new(0x2a, 0x2a, 0x2e),
            gradient_bottom: Rgb8::new(0x0f, 0x0f, 0x12),
            stroke_color: Rgb8::WHITE,
            stroke_alpha: 0.12,
            stroke_width: 4.0,
            button_color: Rgb8::new(0x1c, 0x1c, 0x20),
            buttons: vec![
                SideButton::new(ButtonSide::Left, 330.0, 60.0),
                SideButton::new(ButtonSide::Left, 460.0, 150.0),
                SideButton::new(ButtonSide::Left, 640.0, 150.0),
                SideButton::new(ButtonSide::Right, 520.0, 230.0),
            ],
        }
    }
}

impl DrawnFrameConstants {
    fn validate(&self) -> ShotframeResult<()> {
        ensure_fraction("frame.width_fraction", self.width_fraction)?;
        ensure_fraction("frame.height_fraction", self.height_fraction)?;
        ensure_non_negative("frame.body_radius", self.body_radius)?;
        ensure_non_negative("frame.screen_inset", self.screen_inset)?;
        ensure_non_negative("frame.screen_radius", self.screen_radius)?;
        if !self.stroke_alpha.is_finite() || !(0.0..=1.0).contains(&self.stroke_alpha) {
            return Err(ShotframeError::validation(
                "frame.stroke_alpha must be finite and in [0, 1]",
            ));
        }
        ensure_non_negative("frame.stroke_width", self.stroke_width)?;
        for b in &self.buttons {
            ensure_non_negative("button.offset_y", b.offset_y)?;
            ensure_positive("button.length", b.length)?;
            ensure_positive("button.thickness", b.thickness)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Frame edge a side button is attached to.
pub enum ButtonSide {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Rectangular button accent on the frame edge.
pub struct SideButton {
    /// Edge the button sits on.
    pub side: ButtonSide,
    /// Distance from the frame top, in export pixels.
    pub offset_y: f64,
    /// Button length along the edge.
    pub length: f64,
    /// How far the button sticks out of the body.
    #[serde(default = "default_button_thickness")]
    pub thickness: f64,
}

fn default_button_thickness() -> f64 {
    8.0
}

impl SideButton {
    /// Button with the default thickness.
    pub fn new(side: ButtonSide, offset_y: f64, length: f64) -> Self {
        Self {
            side,
            offset_y,
            length,
            thickness: default_button_thickness(),
        }
    }
}

pub(crate) fn ensure_positive(name: &str, v: f64) -> ShotframeResult<()> {
    if !v.is_finite() || v <= 0.0 {
        return Err(ShotframeError::validation(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

pub(crate) fn ensure_non_negative(name: &str, v: f64) -> ShotframeResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(ShotframeError::validation(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

fn ensure_fraction(name: &str, v: f64) -> ShotframeResult<()> {
    if !v.is_finite() || v <= 0.0 || v > 1.0 {
        return Err(ShotframeError::validation(format!(
            "{name} must be finite and in (0, 1]"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/composition/constants.rs"]
mod tests;
