use crate::{
    assets::font::{TextBrushRgba8, TextLayoutEngine},
    foundation::{
        core::{Canvas, Rgb8},
        error::ShotframeResult,
    },
    layout::title::TitleBlock,
};

/// Draw each title line centered on the canvas midpoint, top-anchored at its line slot.
pub fn draw_title(
    ctx: &mut vello_cpu::RenderContext,
    engine: &mut TextLayoutEngine,
    block: &TitleBlock,
    color: Rgb8,
    canvas: Canvas,
) -> ShotframeResult<()> {
    let brush = TextBrushRgba8 {
        r: color.r,
        g: color.g,
        b: color.b,
        a: 255,
    };
    let mid_x = canvas.width_f64() / 2.0;
    let font = engine.font_data().clone();

    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    for (i, line) in block.lines.iter().enumerate() {
        let layout = engine.layout_line(line, block.font_size as f32, brush)?;
        let x = mid_x - f64::from(layout.width()) / 2.0;
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((x, block.line_top(i))));

        for layout_line in layout.lines() {
            for item in layout_line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let b = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(b.r, b.g, b.b, b.a));
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    Ok(())
}
