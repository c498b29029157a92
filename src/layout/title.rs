use crate::{
    assets::font::TextLayoutEngine,
    composition::constants::LayoutConstants,
    foundation::{
        core::Canvas,
        error::{ShotframeError, ShotframeResult},
    },
};

/// Measures the advance width of a single line of text.
pub trait TextMeasure {
    /// Width of `text` in pixels when set at `size_px`.
    fn measure(&mut self, text: &str, size_px: f64) -> ShotframeResult<f64>;
}

impl TextMeasure for TextLayoutEngine {
    fn measure(&mut self, text: &str, size_px: f64) -> ShotframeResult<f64> {
        TextLayoutEngine::measure(self, text, size_px as f32)
    }
}

/// Ratio between export canvas width and the preview width sizes were picked against.
pub fn scale_factor(canvas: Canvas, constants: &LayoutConstants) -> f64 {
    canvas.width_f64() / constants.reference_preview_width
}

/// Widest line the title may occupy, in export pixels.
pub fn max_line_width(canvas: Canvas, constants: &LayoutConstants) -> f64 {
    canvas.width_f64() - constants.reference_preview_padding * scale_factor(canvas, constants)
}

/// Greedy word wrap.
///
/// Words are separated by whitespace. A word that would push the current line past `max_width`
/// starts a new line; a single word wider than `max_width` gets a line of its own. Blank input
/// yields no lines.
pub fn wrap_words<M: TextMeasure + ?Sized>(
    text: &str,
    max_width: f64,
    size_px: f64,
    measure: &mut M,
) -> ShotframeResult<Vec<String>> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{line} {word}");
        if measure.measure(&candidate, size_px)? > max_width {
            lines.push(std::mem::replace(&mut line, word.to_owned()));
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    Ok(lines)
}

#[derive(Clone, Debug, PartialEq)]
/// Wrapped caption and the vertical space it takes.
pub struct TitleBlock {
    /// Lines in top-down order; empty when there is no title.
    pub lines: Vec<String>,
    /// Font size in export pixels.
    pub font_size: f64,
    /// Distance between consecutive line tops.
    pub line_height: f64,
    /// Top of the first line.
    pub top: f64,
    /// `lines.len() * line_height`.
    pub height: f64,
}

impl TitleBlock {
    /// A block with no lines and zero height.
    pub fn none(constants: &LayoutConstants) -> Self {
        Self {
            lines: Vec::new(),
            font_size: 0.0,
            line_height: 0.0,
            top: constants.title_top_margin,
            height: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Top edge of line `index`.
    pub fn line_top(&self, index: usize) -> f64 {
        self.top + index as f64 * self.line_height
    }
}

/// Scale, wrap and stack the caption.
///
/// `size_ref` is in preview units and is rescaled by [`scale_factor`] before measuring.
pub fn layout_title<M: TextMeasure + ?Sized>(
    text: &str,
    size_ref: f64,
    constants: &LayoutConstants,
    canvas: Canvas,
    measure: &mut M,
) -> ShotframeResult<TitleBlock> {
    if !size_ref.is_finite() || size_ref <= 0.0 {
        return Err(ShotframeError::validation(
            "title font size must be finite and > 0",
        ));
    }
    if text.trim().is_empty() {
        return Ok(TitleBlock::none(constants));
    }

    let font_size = size_ref * scale_factor(canvas, constants);
    let max_width = max_line_width(canvas, constants);
    let lines = wrap_words(text, max_width, font_size, measure)?;
    let line_height = font_size * constants.title_line_height;
    let height = lines.len() as f64 * line_height;

    tracing::debug!(
        lines = lines.len(),
        font_size,
        max_width,
        height,
        "title laid out"
    );
    Ok(TitleBlock {
        lines,
        font_size,
        line_height,
        top: constants.title_top_margin,
        height,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/title.rs"]
mod tests;
