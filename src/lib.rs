//! Shotframe composes app-store screenshots.
//!
//! A user photo is placed inside a device frame on a fixed 1242x2688 canvas, with an optional
//! caption above it, and exported as PNG. Layout constants are calibrated against a small
//! on-screen preview and rescaled to export pixels, so what the preview shows is what the export
//! contains.
//!
//! - [`Compositor`] paints already-decoded inputs onto an [`OutputSurface`].
//! - [`ExportPipeline`] loads assets, composes, encodes and hands the PNG to an [`ExportSink`].
#![forbid(unsafe_code)]

mod assets;
mod composition;
mod encode;
mod foundation;
mod layout;
mod pipeline;
mod render;

pub use crate::assets::decode::{PreparedImage, decode_data_url, decode_image};
pub use crate::assets::font::{PreparedFont, TextLayoutEngine};
pub use crate::assets::loader::{AssetSource, LoadedAssets, load_assets, load_font, load_image};
pub use crate::composition::config::ExportConfig;
pub use crate::composition::constants::{
    AssetFrameConstants, ButtonSide, DrawnFrameConstants, FrameOverflow, FrameStyle,
    IslandConstants, LayoutConstants, ShadowConstants, SideButton,
};
pub use crate::composition::request::{CompositionRequest, ExportSettings};
pub use crate::encode::png::encode_png;
pub use crate::encode::sink::{
    DirectorySink, ExportSink, ExportedArtifact, InMemorySink, artifact_file_name,
};
pub use crate::foundation::core::{Canvas, Point, Rect, Rgb8, Size};
pub use crate::foundation::error::{ShotframeError, ShotframeResult};
pub use crate::layout::fit::cover_fit;
pub use crate::layout::frame::{LayoutResult, ScreenGeometry, island_rect, place_frame};
pub use crate::layout::title::{
    TextMeasure, TitleBlock, layout_title, max_line_width, scale_factor, wrap_words,
};
pub use crate::pipeline::ExportPipeline;
pub use crate::render::compositor::{Composed, Compositor};
pub use crate::render::frame::{AssetFrame, DrawnFrame, FrameRenderer, frame_renderer};
pub use crate::render::surface::OutputSurface;
