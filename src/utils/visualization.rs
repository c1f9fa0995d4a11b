//! Annotation compositing.
//!
//! Renders the caption rectangle, the centered caption text, and (for a
//! found match) a hollow bounding marker onto a transparent layer sized to
//! the base image, then alpha-composites that layer onto an RGBA copy of
//! the base. The base image is never mutated; every call allocates its own
//! layer.

use image::{Rgba, RgbImage, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

use crate::processors::layout::{Caption, LabelFont};
use crate::processors::matcher::MatchResult;
use crate::processors::types::BoundingBox;

/// Colors used when drawing an annotation.
///
/// Callers supply the palette; the `found`/`not_found` constructors are the
/// conventional green/red tints, not policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    /// Caption text color.
    pub text_color: Rgba<u8>,
    /// Caption background fill (normally semi-transparent).
    pub background: Rgba<u8>,
    /// Bounding marker outline color.
    pub outline: Rgba<u8>,
}

impl OverlayStyle {
    /// Green-tinted background, the conventional "object found" palette.
    pub fn found() -> Self {
        Self {
            text_color: Rgba([255, 255, 255, 255]),
            background: Rgba([0, 255, 0, 128]),
            outline: Rgba([0, 255, 0, 255]),
        }
    }

    /// Red-tinted background, the conventional "not found" palette.
    pub fn not_found() -> Self {
        Self {
            text_color: Rgba([255, 255, 255, 255]),
            background: Rgba([255, 0, 0, 128]),
            outline: Rgba([255, 0, 0, 255]),
        }
    }
}

/// Draws the caption's filled background rectangle onto `layer`.
pub fn draw_caption_box(layer: &mut RgbaImage, caption: &Caption, background: Rgba<u8>) {
    let width = (caption.rect_size.0.round() as u32).max(1);
    let height = (caption.rect_size.1.round() as u32).max(1);
    let rect = Rect::at(caption.origin.0, caption.origin.1).of_size(width, height);
    draw_filled_rect_mut(layer, rect, background);
}

/// Draws a hollow rectangle marking a detected region onto `layer`.
///
/// The bounding box is converted from normalized coordinates to pixels
/// using the layer dimensions.
pub fn draw_bounding_marker(layer: &mut RgbaImage, bounding_box: &BoundingBox, outline: Rgba<u8>) {
    let (width, height) = layer.dimensions();
    let rect = bounding_box.to_pixel_rect(width, height);
    let marker = Rect::at(rect.x, rect.y).of_size(rect.width, rect.height);
    draw_hollow_rect_mut(layer, marker, outline);
}

/// Alpha-composites `layer` onto an RGBA copy of `base`.
///
/// Copy-on-write: `base` is left untouched and a new image is returned.
pub fn composite(base: &RgbImage, layer: &RgbaImage) -> RgbaImage {
    let mut out = image::DynamicImage::ImageRgb8(base.clone()).into_rgba8();
    image::imageops::overlay(&mut out, layer, 0, 0);
    out
}

/// Renders the full annotation: caption box, centered caption text, and
/// (for a found match) the bounding marker, composited over `base`.
pub fn render(
    base: &RgbImage,
    caption: &Caption,
    match_result: &MatchResult,
    font: &LabelFont,
    style: &OverlayStyle,
) -> RgbaImage {
    let (width, height) = base.dimensions();
    let mut layer = RgbaImage::new(width, height);

    draw_caption_box(&mut layer, caption, style.background);

    if !caption.text.is_empty() {
        let text_x = caption.origin.0 + caption.text_offset.0.round() as i32;
        let text_y = caption.origin.1 + caption.text_offset.1.round() as i32;
        let advance = font.line_advance().round() as i32;
        for (index, line) in caption.text.lines().enumerate() {
            draw_text_mut(
                &mut layer,
                style.text_color,
                text_x,
                text_y + index as i32 * advance,
                font.scale(),
                font.font(),
                line,
            );
        }
    }

    // The marker comes from the matched bounding box only; a miss draws no
    // secondary rectangle.
    if let MatchResult::Found { bounding_box } = match_result {
        draw_bounding_marker(&mut layer, bounding_box, style.outline);
    }

    composite(base, &layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn caption_at(origin: (i32, i32), rect: (f32, f32)) -> Caption {
        Caption {
            raw_text: String::new(),
            text: String::new(),
            origin,
            rect_size: rect,
            text_offset: (0.0, 0.0),
        }
    }

    #[test]
    fn test_composite_is_non_destructive() {
        let base = RgbImage::from_pixel(20, 10, Rgb([7, 8, 9]));
        let snapshot = base.clone();
        let mut layer = RgbaImage::new(20, 10);
        draw_caption_box(
            &mut layer,
            &caption_at((0, 0), (10.0, 5.0)),
            Rgba([0, 255, 0, 128]),
        );

        let first = composite(&base, &layer);
        let second = composite(&base, &layer);

        assert_eq!(base, snapshot);
        assert_eq!(first.dimensions(), (20, 10));
        assert_eq!(first, second);
    }

    #[test]
    fn test_caption_box_blends_over_base() {
        let base = RgbImage::from_pixel(20, 10, Rgb([0, 0, 0]));
        let mut layer = RgbaImage::new(20, 10);
        draw_caption_box(
            &mut layer,
            &caption_at((0, 0), (10.0, 5.0)),
            Rgba([0, 255, 0, 128]),
        );
        let out = composite(&base, &layer);

        // Inside the caption box the green channel rises; outside it stays black.
        assert!(out.get_pixel(2, 2)[1] > 100);
        assert_eq!(out.get_pixel(15, 8), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_bounding_marker_lands_at_pixel_coordinates() {
        let mut layer = RgbaImage::new(100, 100);
        let bbox = BoundingBox::new(0.1, 0.1, 0.3, 0.3);
        draw_bounding_marker(&mut layer, &bbox, Rgba([0, 255, 0, 255]));

        // Outline runs along x in [10, 40), y in [10, 40).
        assert_eq!(layer.get_pixel(10, 10), &Rgba([0, 255, 0, 255]));
        assert_eq!(layer.get_pixel(39, 10), &Rgba([0, 255, 0, 255]));
        assert_eq!(layer.get_pixel(10, 39), &Rgba([0, 255, 0, 255]));
        // Interior stays transparent: the marker is hollow.
        assert_eq!(layer.get_pixel(25, 25), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_styles_are_distinct() {
        assert_ne!(OverlayStyle::found(), OverlayStyle::not_found());
    }
}
