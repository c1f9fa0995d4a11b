//! Caption layout calculation.
//!
//! Computes the padded background rectangle that will contain a formatted
//! multi-line caption, and the offset that centers the text within it.
//! Font measurement sits behind the [`GlyphMetrics`] trait so layout logic
//! stays testable without a font file on disk.

use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use imageproc::drawing::text_size;

use crate::core::errors::{LabelError, LabelResult};
use crate::processors::text_format::format_label;

/// Horizontal padding factor applied to the raw text width.
pub const RECT_WIDTH_MARGIN: f32 = 1.1;

/// Vertical padding factor for standalone caption sizing.
pub const RECT_HEIGHT_MARGIN: f32 = 1.3;

/// Vertical padding factor used when sizing the live render rectangle.
/// Slightly taller than [`RECT_HEIGHT_MARGIN`] to leave breathing room
/// around descenders once the caption is actually drawn.
pub const RECT_HEIGHT_MARGIN_RENDER: f32 = 1.4;

/// Provider of pixel measurements for multi-line text.
pub trait GlyphMetrics {
    /// Returns the (width, height) in pixels of the given multi-line text:
    /// the widest line and the summed line advances.
    fn multiline_size(&self, text: &str) -> (f32, f32);
}

/// A loaded font paired with its pixel scale.
///
/// Loaded once (from a file or raw bytes) and cached by the pipeline for
/// the lifetime of the process; measurement and drawing share the same
/// handle, so layout and render agree on glyph geometry.
#[derive(Debug)]
pub struct LabelFont {
    font: FontVec,
    scale: PxScale,
}

impl LabelFont {
    /// Loads a font from raw TTF/OTF bytes at the given pixel size.
    pub fn from_bytes(data: Vec<u8>, pixel_size: f32) -> LabelResult<Self> {
        let font = FontVec::try_from_vec(data)
            .map_err(|e| LabelError::invalid_font(format!("unparseable font data: {e}")))?;
        Ok(Self {
            font,
            scale: PxScale::from(pixel_size),
        })
    }

    /// Loads a font from a file path at the given pixel size.
    pub fn from_file(path: impl AsRef<Path>, pixel_size: f32) -> LabelResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| {
            LabelError::invalid_font(format!("cannot read font '{}': {e}", path.display()))
        })?;
        Self::from_bytes(data, pixel_size)
    }

    /// The underlying font, for drawing.
    pub fn font(&self) -> &FontVec {
        &self.font
    }

    /// The pixel scale, for drawing.
    pub fn scale(&self) -> PxScale {
        self.scale
    }

    /// Vertical advance between stacked caption lines.
    pub fn line_advance(&self) -> f32 {
        self.scale.y
    }
}

impl GlyphMetrics for LabelFont {
    fn multiline_size(&self, text: &str) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        let mut width = 0.0f32;
        let mut lines = 0u32;
        for line in text.lines() {
            let (w, _) = text_size(self.scale, &self.font, line);
            width = width.max(w as f32);
            lines += 1;
        }
        (width, lines as f32 * self.line_advance())
    }
}

/// A formatted, sized, and positioned caption ready for compositing.
///
/// Derived per render call and dropped after compositing; never persisted.
#[derive(Debug, Clone)]
pub struct Caption {
    /// The label text before formatting.
    pub raw_text: String,
    /// The wrapped text actually drawn.
    pub text: String,
    /// Top-left corner of the background rectangle, in pixels.
    pub origin: (i32, i32),
    /// Size of the padded background rectangle, in pixels.
    pub rect_size: (f32, f32),
    /// Offset of the text within the rectangle, in pixels.
    pub text_offset: (f32, f32),
}

/// Computes the padded background rectangle for the given text.
///
/// The rectangle is the raw measured size widened by [`RECT_WIDTH_MARGIN`]
/// and heightened by `height_margin` (one of [`RECT_HEIGHT_MARGIN`] or
/// [`RECT_HEIGHT_MARGIN_RENDER`]).
pub fn measure(text: &str, metrics: &dyn GlyphMetrics, height_margin: f32) -> (f32, f32) {
    let (raw_w, raw_h) = metrics.multiline_size(text);
    (raw_w * RECT_WIDTH_MARGIN, raw_h * height_margin)
}

/// Returns the offset that centers a text box of `text_size` within a
/// rectangle of `rect_size`, applied independently per axis.
pub fn center(rect_size: (f32, f32), text_size: (f32, f32)) -> (f32, f32) {
    (
        (rect_size.0 - text_size.0) / 2.0,
        (rect_size.1 - text_size.1) / 2.0,
    )
}

/// Formats `raw_text` to `columns` and lays it out at `origin`, producing a
/// caption sized with the live render margin.
pub fn build_caption(
    raw_text: &str,
    columns: usize,
    metrics: &dyn GlyphMetrics,
    origin: (i32, i32),
) -> LabelResult<Caption> {
    let text = format_label(raw_text, columns)?;
    let raw_size = metrics.multiline_size(&text);
    let rect_size = measure(&text, metrics, RECT_HEIGHT_MARGIN_RENDER);
    let text_offset = center(rect_size, raw_size);

    Ok(Caption {
        raw_text: raw_text.to_string(),
        text,
        origin,
        rect_size,
        text_offset,
    })
}
