use crate::{
    foundation::{
        core::{Canvas, Rgb8},
        error::{ShotframeError, ShotframeResult},
        math::unpremultiply_rgba8_in_place,
    },
    render::composite::{mask_alpha_in_place, over_in_place},
};

/// The one canvas a composition call paints into.
///
/// Pixels are premultiplied RGBA8 and start out transparent black. Each draw stage renders into a
/// scratch layer of the same size that is then composited over the surface, so stages accumulate
/// in call order.
pub struct OutputSurface {
    canvas: Canvas,
    pixmap: vello_cpu::Pixmap,
}

impl OutputSurface {
    /// Allocate a transparent surface for `canvas`.
    pub fn new(canvas: Canvas) -> ShotframeResult<Self> {
        let (w, h) = canvas_dims_u16(canvas)?;
        Ok(Self {
            canvas,
            pixmap: vello_cpu::Pixmap::new(w, h),
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    /// Premultiplied RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Premultiplied pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let idx = (y as usize * self.canvas.width as usize + x as usize) * 4;
        let d = self.data();
        Some([d[idx], d[idx + 1], d[idx + 2], d[idx + 3]])
    }

    /// Overwrite every pixel with an opaque color.
    pub fn fill(&mut self, color: Rgb8) {
        let px = [color.r, color.g, color.b, 255];
        for dst in self.pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
            dst.copy_from_slice(&px);
        }
    }

    /// Render `draw` into a fresh transparent layer the size of the surface.
    pub(crate) fn render_layer(
        &self,
        draw: impl FnOnce(&mut vello_cpu::RenderContext) -> ShotframeResult<()>,
    ) -> ShotframeResult<vello_cpu::Pixmap> {
        let (w, h) = canvas_dims_u16(self.canvas)?;
        let mut ctx = vello_cpu::RenderContext::new(w, h);
        draw(&mut ctx)?;
        ctx.flush();
        let mut layer = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut layer);
        Ok(layer)
    }

    /// Render `draw` into a layer and composite it over the surface.
    pub(crate) fn paint(
        &mut self,
        draw: impl FnOnce(&mut vello_cpu::RenderContext) -> ShotframeResult<()>,
    ) -> ShotframeResult<()> {
        let layer = self.render_layer(draw)?;
        self.composite(layer.data_as_u8_slice(), 1.0)
    }

    /// Render `draw` into a layer, keep only what lies inside `mask`, and composite the rest.
    pub(crate) fn paint_masked(
        &mut self,
        mask: &vello_cpu::Pixmap,
        draw: impl FnOnce(&mut vello_cpu::RenderContext) -> ShotframeResult<()>,
    ) -> ShotframeResult<()> {
        let mut layer = self.render_layer(draw)?;
        mask_alpha_in_place(layer.data_as_u8_slice_mut(), mask.data_as_u8_slice())?;
        self.composite(layer.data_as_u8_slice(), 1.0)
    }

    /// Composite premultiplied RGBA8 bytes covering the whole surface.
    pub(crate) fn composite(&mut self, layer: &[u8], opacity: f32) -> ShotframeResult<()> {
        over_in_place(self.pixmap.data_as_u8_slice_mut(), layer, opacity)
    }

    /// Straight-alpha RGBA8 copy of the surface, ready for encoding.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data().to_vec();
        unpremultiply_rgba8_in_place(&mut out);
        out
    }
}

impl std::fmt::Debug for OutputSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputSurface")
            .field("width", &self.canvas.width)
            .field("height", &self.canvas.height)
            .finish()
    }
}

fn canvas_dims_u16(canvas: Canvas) -> ShotframeResult<(u16, u16)> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(ShotframeError::surface(format!(
            "cannot allocate a {}x{} surface",
            canvas.width, canvas.height
        )));
    }
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| ShotframeError::surface("surface width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| ShotframeError::surface("surface height exceeds u16"))?;
    Ok((w, h))
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
