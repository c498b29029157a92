use crate::{
    assets::decode::PreparedImage,
    composition::constants::{AssetFrameConstants, ButtonSide, DrawnFrameConstants, FrameStyle},
    foundation::{
        core::{Canvas, Rect, Rgb8, Size},
        error::{ShotframeError, ShotframeResult},
    },
    layout::frame::{ScreenGeometry, asset_frame_size, asset_screen, drawn_frame_size, drawn_screen},
    render::{
        paint::{
            ImagePaint, fill_image_into, fill_rounded, image_paint, rounded_rect_path,
            vertical_gradient_paint,
        },
        shadow::drop_shadow,
        surface::OutputSurface,
    },
};

/// A way of drawing the device frame.
///
/// The compositor asks for the frame size, places the frame itself, then asks for the screen
/// cut-out and the frame pixels. Implementations never see the title or the user photo.
pub trait FrameRenderer: Send + Sync {
    /// Frame size on `canvas`.
    fn frame_size(&self, canvas: Canvas) -> Size;
    /// Screen cut-out inside a frame placed at `frame`.
    fn screen(&self, frame: Rect) -> ScreenGeometry;
    /// Draw the frame body at `frame`.
    fn draw(&self, surface: &mut OutputSurface, frame: Rect) -> ShotframeResult<()>;
}

/// Build the renderer selected by `style`.
///
/// The asset strategy needs the decoded frame image; the drawn strategy ignores it.
pub fn frame_renderer(
    style: &FrameStyle,
    frame_image: Option<&PreparedImage>,
) -> ShotframeResult<Box<dyn FrameRenderer>> {
    match style {
        FrameStyle::Asset(c) => {
            let image = frame_image.ok_or_else(|| {
                ShotframeError::asset("asset frame strategy requires a decoded frame image")
            })?;
            Ok(Box::new(AssetFrame::new(c.clone(), image)?))
        }
        FrameStyle::Drawn(c) => Ok(Box::new(DrawnFrame::new(c.clone()))),
    }
}

/// Pre-rendered frame artwork with an optional drop shadow.
pub struct AssetFrame {
    constants: AssetFrameConstants,
    paint: ImagePaint,
    image_size: Size,
}

impl AssetFrame {
    pub fn new(constants: AssetFrameConstants, image: &PreparedImage) -> ShotframeResult<Self> {
        if image.width == 0 || image.height == 0 {
            return Err(ShotframeError::asset("frame image has zero size"));
        }
        Ok(Self {
            constants,
            paint: image_paint(image)?,
            image_size: Size::new(f64::from(image.width), f64::from(image.height)),
        })
    }
}

impl FrameRenderer for AssetFrame {
    fn frame_size(&self, canvas: Canvas) -> Size {
        asset_frame_size(
            canvas,
            &self.constants,
            self.image_size.width / self.image_size.height,
        )
    }

    fn screen(&self, frame: Rect) -> ScreenGeometry {
        asset_screen(frame, &self.constants)
    }

    fn draw(&self, surface: &mut OutputSurface, frame: Rect) -> ShotframeResult<()> {
        let layer = surface.render_layer(|ctx| {
            fill_image_into(ctx, &self.paint, frame);
            Ok(())
        })?;

        if let Some(shadow) = &self.constants.shadow {
            let shadow_layer = drop_shadow(
                layer.data_as_u8_slice(),
                surface.width(),
                surface.height(),
                shadow,
            )?;
            surface.composite(&shadow_layer, shadow.opacity)?;
        }
        surface.composite(layer.data_as_u8_slice(), 1.0)
    }
}

/// Procedural frame: gradient body, hairline stroke, side buttons.
pub struct DrawnFrame {
    constants: DrawnFrameConstants,
}

impl DrawnFrame {
    pub fn new(constants: DrawnFrameConstants) -> Self {
        Self { constants }
    }

    fn button_rects(&self, frame: Rect) -> impl Iterator<Item = Rect> + '_ {
        self.constants.buttons.iter().map(move |b| {
            let y0 = frame.y0 + b.offset_y;
            // Buttons tuck under the body by one thickness.
            let (x0, x1) = match b.side {
                ButtonSide::Left => (frame.x0 - b.thickness, frame.x0 + b.thickness),
                ButtonSide::Right => (frame.x1 - b.thickness, frame.x1 + b.thickness),
            };
            Rect::new(x0, y0, x1, y0 + b.length)
        })
    }
}

impl FrameRenderer for DrawnFrame {
    fn frame_size(&self, canvas: Canvas) -> Size {
        drawn_frame_size(canvas, &self.constants)
    }

    fn screen(&self, frame: Rect) -> ScreenGeometry {
        drawn_screen(frame, &self.constants)
    }

    fn draw(&self, surface: &mut OutputSurface, frame: Rect) -> ShotframeResult<()> {
        let c = &self.constants;

        let button = c.button_color.rgba(255);
        surface.paint(|ctx| {
            for rect in self.button_rects(frame) {
                let radius = rect.width().min(rect.height()) / 4.0;
                fill_rounded(ctx, rect, radius, button);
            }
            Ok(())
        })?;

        let body = surface.render_layer(|ctx| {
            fill_rounded(ctx, frame, c.body_radius, Rgb8::WHITE.rgba(255));
            Ok(())
        })?;
        let gradient_h = frame.height().ceil() as u32;
        let gradient = vertical_gradient_paint(c.gradient_top, c.gradient_bottom, gradient_h)?;
        surface.paint_masked(&body, |ctx| {
            fill_image_into(ctx, &gradient, frame);
            Ok(())
        })?;

        if c.stroke_width > 0.0 && c.stroke_alpha > 0.0 {
            let alpha = (c.stroke_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
            let [r, g, b, a] = c.stroke_color.rgba(alpha);
            let outline = rounded_rect_path(frame, c.body_radius);
            surface.paint(|ctx| {
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(c.stroke_width));
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
                ctx.stroke_path(&outline);
                Ok(())
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
