use std::io::Cursor;

use anyhow::Context;

use crate::{
    foundation::error::{ShotframeError, ShotframeResult},
    render::surface::OutputSurface,
};

/// Encode the surface as an RGBA8 PNG with straight alpha.
pub fn encode_png(surface: &OutputSurface) -> ShotframeResult<Vec<u8>> {
    let (w, h) = (surface.width(), surface.height());
    let img = image::RgbaImage::from_raw(w, h, surface.to_straight_rgba8())
        .ok_or_else(|| ShotframeError::encode("surface byte length does not match its size"))?;

    let mut png = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .with_context(|| format!("encode {w}x{h} png"))
        .map_err(|e| ShotframeError::encode(format!("{e:#}")))?;
    Ok(png)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
