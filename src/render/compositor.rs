use tracing::debug;

use crate::{
    assets::font::TextLayoutEngine,
    composition::{
        config::ExportConfig,
        constants::{FrameStyle, LayoutConstants},
        request::CompositionRequest,
    },
    foundation::{
        core::{Canvas, Rgb8, Size},
        error::{ShotframeError, ShotframeResult},
    },
    layout::{
        fit::cover_fit,
        frame::{LayoutResult, island_rect, place_frame},
        title::{TitleBlock, layout_title},
    },
    render::{
        frame::{FrameRenderer, frame_renderer},
        paint::{fill_image_into, fill_rounded, image_paint},
        surface::OutputSurface,
        text::draw_title,
    },
};

/// A finished composition: the painted surface and the layout it was painted with.
#[derive(Debug)]
pub struct Composed {
    pub surface: OutputSurface,
    pub layout: LayoutResult,
}

/// Turns a [`CompositionRequest`] into pixels on the fixed export canvas.
///
/// Stages run in a fixed order over one surface: background, title, frame, photo, island. No stage
/// reads anything a later stage produces.
#[derive(Clone, Debug)]
pub struct Compositor {
    canvas: Canvas,
    layout: LayoutConstants,
    frame: FrameStyle,
}

struct Prepared {
    renderer: Box<dyn FrameRenderer>,
    text: Option<TextLayoutEngine>,
    layout: LayoutResult,
}

impl Compositor {
    pub fn new(layout: LayoutConstants, frame: FrameStyle) -> Self {
        Self {
            canvas: Canvas::EXPORT,
            layout,
            frame,
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(config.layout.clone(), config.frame.clone())
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn frame_style(&self) -> &FrameStyle {
        &self.frame
    }

    /// Compute where everything goes without painting anything.
    pub fn plan(&self, request: &CompositionRequest) -> ShotframeResult<LayoutResult> {
        Ok(self.prepare(request)?.layout)
    }

    /// Paint `request` onto a fresh export canvas.
    #[tracing::instrument(
        skip_all,
        fields(
            user_w = request.user_image.width,
            user_h = request.user_image.height,
            transparent = request.transparent_background,
            title = request.has_title(),
        )
    )]
    pub fn compose(&self, request: &CompositionRequest) -> ShotframeResult<Composed> {
        let Prepared {
            renderer,
            text,
            layout,
        } = self.prepare(request)?;
        let user_paint = image_paint(&request.user_image)?;
        let mut surface = OutputSurface::new(self.canvas)?;

        if !request.transparent_background {
            surface.fill(request.background);
        }

        if let Some(mut engine) = text {
            let canvas = self.canvas;
            surface.paint(|ctx| {
                draw_title(ctx, &mut engine, &layout.title, request.title_color, canvas)
            })?;
        }

        renderer.draw(&mut surface, layout.frame)?;

        let screen = layout.screen;
        let clip = surface.render_layer(|ctx| {
            fill_rounded(ctx, screen.rect, screen.radius, Rgb8::WHITE.rgba(255));
            Ok(())
        })?;
        let image_size = Size::new(
            f64::from(request.user_image.width),
            f64::from(request.user_image.height),
        );
        let dest = cover_fit(image_size, screen.rect);
        surface.paint_masked(&clip, |ctx| {
            fill_rounded(ctx, screen.rect, 0.0, Rgb8::BLACK.rgba(255));
            fill_image_into(ctx, &user_paint, dest);
            Ok(())
        })?;

        let island = layout.island;
        surface.paint(|ctx| {
            fill_rounded(ctx, island, island.height() / 2.0, Rgb8::BLACK.rgba(255));
            Ok(())
        })?;

        debug!(
            frame = ?layout.frame,
            screen = ?layout.screen.rect,
            photo = ?dest,
            "composition painted"
        );
        Ok(Composed { surface, layout })
    }

    fn prepare(&self, request: &CompositionRequest) -> ShotframeResult<Prepared> {
        request.validate()?;
        self.layout.validate()?;
        self.frame.validate()?;

        let renderer = frame_renderer(&self.frame, request.frame_image.as_ref())?;

        let (text, title) = if request.has_title() {
            let font = request.title_font.as_ref().ok_or_else(|| {
                ShotframeError::validation("a title font is required when title text is set")
            })?;
            let mut engine = TextLayoutEngine::new(font)?;
            let block = layout_title(
                &request.title_text,
                request.title_font_size,
                &self.layout,
                self.canvas,
                &mut engine,
            )?;
            (Some(engine), block)
        } else {
            (None, TitleBlock::none(&self.layout))
        };

        let frame = place_frame(
            self.canvas,
            renderer.frame_size(self.canvas),
            &title,
            &self.layout,
        );
        let screen = renderer.screen(frame);
        let island = island_rect(frame, screen.rect, &self.layout.island);
        let layout = LayoutResult {
            frame,
            screen,
            island,
            title,
        };
        debug!(
            frame_y = layout.frame.y0,
            frame_h = layout.frame.height(),
            title_lines = layout.title.lines.len(),
            title_h = layout.title.height,
            overflow = layout.frame_overflows(self.canvas),
            "layout computed"
        );
        Ok(Prepared {
            renderer,
            text,
            layout,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
