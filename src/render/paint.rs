use std::sync::Arc;

use crate::{
    assets::decode::PreparedImage,
    foundation::{
        core::{Rect, Rgb8, Size},
        error::{ShotframeError, ShotframeResult},
    },
};

/// Largest side a raster paint can have.
const MAX_PAINT_SIDE: u32 = u16::MAX as u32;

#[derive(Clone, Debug)]
/// A raster paint together with its pixel size.
pub struct ImagePaint {
    /// Paint sampled in its own pixel space.
    pub paint: vello_cpu::Image,
    /// Pixel size of the paint; may be smaller than the source image.
    pub size: Size,
}

/// Image paint for a decoded raster, in its own pixel space.
///
/// Images with a side longer than `u16::MAX` are downscaled to fit, keeping the aspect ratio.
pub fn image_paint(image: &PreparedImage) -> ShotframeResult<ImagePaint> {
    let (width, height) = paint_dimensions(image.width, image.height);
    let pixmap = if (width, height) == (image.width, image.height) {
        premul_bytes_to_pixmap(&image.rgba8_premul, width, height)?
    } else {
        tracing::debug!(
            from_w = image.width,
            from_h = image.height,
            to_w = width,
            to_h = height,
            "downscaling oversized image"
        );
        let source =
            image::RgbaImage::from_raw(image.width, image.height, image.rgba8_premul.to_vec())
                .ok_or_else(|| ShotframeError::asset("prepared image byte length mismatch"))?;
        // Filtering premultiplied samples keeps them premultiplied.
        let scaled = image::imageops::resize(
            &source,
            width,
            height,
            image::imageops::FilterType::Triangle,
        );
        premul_bytes_to_pixmap(scaled.as_raw(), width, height)?
    };
    Ok(pixmap_paint(pixmap, width, height))
}

/// Size an image paint gets for a `width` x `height` source.
pub(crate) fn paint_dimensions(width: u32, height: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= MAX_PAINT_SIDE {
        return (width, height);
    }
    let scale = f64::from(MAX_PAINT_SIDE) / f64::from(longest);
    let fit = |v: u32| ((f64::from(v) * scale).round() as u32).clamp(1, MAX_PAINT_SIDE);
    (fit(width), fit(height))
}

/// One pixel wide, `height` tall opaque vertical gradient from `top` to `bottom`.
pub fn vertical_gradient_paint(
    top: Rgb8,
    bottom: Rgb8,
    height: u32,
) -> ShotframeResult<ImagePaint> {
    let height = height.clamp(2, MAX_PAINT_SIDE);
    let last = f64::from(height - 1);
    let lerp =
        |a: u8, b: u8, t: f64| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    let mut bytes = Vec::with_capacity(height as usize * 4);
    for y in 0..height {
        let t = f64::from(y) / last;
        bytes.extend_from_slice(&[
            lerp(top.r, bottom.r, t),
            lerp(top.g, bottom.g, t),
            lerp(top.b, bottom.b, t),
            255,
        ]);
    }
    let pixmap = premul_bytes_to_pixmap(&bytes, 1, height)?;
    Ok(pixmap_paint(pixmap, 1, height))
}

fn pixmap_paint(pixmap: vello_cpu::Pixmap, width: u32, height: u32) -> ImagePaint {
    ImagePaint {
        paint: vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        },
        size: Size::new(f64::from(width), f64::from(height)),
    }
}

/// Stretch `paint` over `dest`.
pub fn fill_image_into(ctx: &mut vello_cpu::RenderContext, paint: &ImagePaint, dest: Rect) {
    let (paint_w, paint_h) = (paint.size.width, paint.size.height);
    let sx = dest.width() / paint_w;
    let sy = dest.height() / paint_h;
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_transform(
        vello_cpu::kurbo::Affine::translate((dest.x0, dest.y0))
            * vello_cpu::kurbo::Affine::scale_non_uniform(sx, sy),
    );
    ctx.set_paint(paint.paint.clone());
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, paint_w, paint_h));
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
}

/// Fill a rounded rectangle with a solid color.
pub fn fill_rounded(ctx: &mut vello_cpu::RenderContext, rect: Rect, radius: f64, color: [u8; 4]) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color[0], color[1], color[2], color[3],
    ));
    ctx.fill_path(&rounded_rect_path(rect, radius));
}

/// Render-side path for a rounded rectangle.
pub fn rounded_rect_path(rect: Rect, radius: f64) -> vello_cpu::kurbo::BezPath {
    let radius = radius.min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0);
    let rr = kurbo::RoundedRect::from_rect(rect, radius);
    let mut p = vello_cpu::kurbo::BezPath::new();
    for el in kurbo::Shape::path_elements(&rr, 0.1) {
        p.push(path_el_to_cpu(el));
    }
    p
}

fn path_el_to_cpu(el: kurbo::PathEl) -> vello_cpu::kurbo::PathEl {
    use kurbo::PathEl;
    use vello_cpu::kurbo::{PathEl as CpuEl, Point as CpuPoint};

    let pt = |p: kurbo::Point| CpuPoint::new(p.x, p.y);
    match el {
        PathEl::MoveTo(p) => CpuEl::MoveTo(pt(p)),
        PathEl::LineTo(p) => CpuEl::LineTo(pt(p)),
        PathEl::QuadTo(p1, p2) => CpuEl::QuadTo(pt(p1), pt(p2)),
        PathEl::CurveTo(p1, p2, p3) => CpuEl::CurveTo(pt(p1), pt(p2), pt(p3)),
        PathEl::ClosePath => CpuEl::ClosePath,
    }
}

fn premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> ShotframeResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| ShotframeError::asset("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| ShotframeError::asset("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(ShotframeError::asset("prepared image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let pixels: Vec<_> = rgba8_premul
        .chunks_exact(4)
        .map(|px| {
            may_have_opacities |= px[3] != 255;
            vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
        })
        .collect();

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/paint.rs"]
mod tests;
