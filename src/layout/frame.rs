use crate::{
    composition::constants::{
        AssetFrameConstants, DrawnFrameConstants, FrameOverflow, IslandConstants, LayoutConstants,
    },
    foundation::core::{Canvas, Rect, Size},
    layout::title::TitleBlock,
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Rounded screen cut-out the user photo is clipped to.
pub struct ScreenGeometry {
    pub rect: Rect,
    /// Corner radius in export pixels.
    pub radius: f64,
}

#[derive(Clone, Debug, PartialEq)]
/// Everything the draw stages need to know about where things go.
pub struct LayoutResult {
    pub frame: Rect,
    pub screen: ScreenGeometry,
    pub island: Rect,
    pub title: TitleBlock,
}

impl LayoutResult {
    /// Whether the frame extends below the canvas bottom edge.
    pub fn frame_overflows(&self, canvas: Canvas) -> bool {
        self.frame.y1 > canvas.height_f64()
    }
}

/// Frame size for a pre-rendered asset with `asset_aspect` (width / height).
pub fn asset_frame_size(canvas: Canvas, c: &AssetFrameConstants, asset_aspect: f64) -> Size {
    let width = canvas.width_f64() * c.width_fraction;
    Size::new(width, width / asset_aspect)
}

/// Screen cut-out of a pre-rendered asset: fractional insets of the frame.
pub fn asset_screen(frame: Rect, c: &AssetFrameConstants) -> ScreenGeometry {
    let (fw, fh) = (frame.width(), frame.height());
    let x0 = frame.x0 + fw * c.screen_left;
    let y0 = frame.y0 + fh * c.screen_top;
    let w = fw * c.screen_width;
    let h = fh * c.screen_height;
    ScreenGeometry {
        rect: Rect::new(x0, y0, x0 + w, y0 + h),
        radius: w * c.screen_radius,
    }
}

/// Frame size of the procedurally drawn body: fixed fractions of the canvas.
pub fn drawn_frame_size(canvas: Canvas, c: &DrawnFrameConstants) -> Size {
    Size::new(
        canvas.width_f64() * c.width_fraction,
        canvas.height_f64() * c.height_fraction,
    )
}

/// Screen cut-out of the drawn body: a fixed pixel inset.
pub fn drawn_screen(frame: Rect, c: &DrawnFrameConstants) -> ScreenGeometry {
    ScreenGeometry {
        rect: frame.inset(-c.screen_inset),
        radius: c.screen_radius,
    }
}

/// Position a frame of `size` on the canvas.
///
/// The frame is always centered horizontally. Without a title it is centered vertically; with one
/// it sits `phone_margin_top` below the title block, and the overflow policy decides what happens
/// when that pushes it past the canvas bottom.
pub fn place_frame(
    canvas: Canvas,
    size: Size,
    title: &TitleBlock,
    constants: &LayoutConstants,
) -> Rect {
    let x = (canvas.width_f64() - size.width) / 2.0;
    let mut y = (canvas.height_f64() - size.height) / 2.0;

    if !title.is_empty() {
        y = constants.title_top_margin + title.height + constants.phone_margin_top;
        match constants.overflow {
            FrameOverflow::Crop => {
                if y + size.height > canvas.height_f64() {
                    tracing::warn!(
                        frame_y = y,
                        frame_h = size.height,
                        canvas_h = canvas.height,
                        "title pushes frame past the canvas bottom; frame will be cropped"
                    );
                }
            }
            FrameOverflow::Clamp { bottom_margin } => {
                let limit = canvas.height_f64() - size.height - bottom_margin;
                if y > limit {
                    y = limit;
                }
            }
        }
    }

    Rect::new(x, y, x + size.width, y + size.height)
}

/// Island pill centered in the frame, just below the screen top.
pub fn island_rect(frame: Rect, screen: Rect, c: &IslandConstants) -> Rect {
    let w = frame.width() * c.width_fraction;
    let h = w * c.aspect;
    let x0 = frame.x0 + (frame.width() - w) / 2.0;
    let y0 = screen.y0 + screen.height() * c.top_fraction;
    Rect::new(x0, y0, x0 + w, y0 + h)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/frame.rs"]
mod tests;
