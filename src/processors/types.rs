//! Types used by the label-overlay processors.
//!
//! This module defines the normalized bounding box geometry shared between
//! the recognition backend contract, the label matcher, and the compositor.

use serde::{Deserialize, Serialize};

/// A bounding box in normalized image coordinates.
///
/// All four values are fractions of the image dimensions in [0, 1]:
/// `left`/`top` locate the top-left corner, `width`/`height` the extent.
/// This is the wire shape returned by the recognition backend (PascalCase
/// field names).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoundingBox {
    /// Left edge as a fraction of the image width.
    pub left: f32,
    /// Top edge as a fraction of the image height.
    pub top: f32,
    /// Width as a fraction of the image width.
    pub width: f32,
    /// Height as a fraction of the image height.
    pub height: f32,
}

/// An axis-aligned rectangle in absolute pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// X coordinate of the top-left corner.
    pub x: i32,
    /// Y coordinate of the top-left corner.
    pub y: i32,
    /// Width in pixels (at least 1).
    pub width: u32,
    /// Height in pixels (at least 1).
    pub height: u32,
}

impl BoundingBox {
    /// Creates a new bounding box from normalized components.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Returns true if all four components lie within [0, 1].
    pub fn is_normalized(&self) -> bool {
        let in_unit = |v: f32| (0.0..=1.0).contains(&v);
        in_unit(self.left) && in_unit(self.top) && in_unit(self.width) && in_unit(self.height)
    }

    /// Returns true if the box is normalized and has positive extent.
    pub fn is_valid(&self) -> bool {
        self.is_normalized() && self.width > 0.0 && self.height > 0.0
    }

    /// Converts the normalized box to absolute pixel coordinates for an
    /// image of the given dimensions, clamping to the image bounds.
    ///
    /// Degenerate extents are clamped up to a single pixel so the result is
    /// always drawable.
    pub fn to_pixel_rect(&self, image_width: u32, image_height: u32) -> PixelRect {
        let w = image_width as f32;
        let h = image_height as f32;

        let x = (self.left * w).round().clamp(0.0, w.max(1.0) - 1.0) as i32;
        let y = (self.top * h).round().clamp(0.0, h.max(1.0) - 1.0) as i32;
        let max_w = image_width.saturating_sub(x as u32).max(1);
        let max_h = image_height.saturating_sub(y as u32).max(1);
        let width = ((self.width * w).round() as u32).clamp(1, max_w);
        let height = ((self.height * h).round() as u32).clamp(1, max_h);

        PixelRect {
            x,
            y,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_validity() {
        assert!(BoundingBox::new(0.1, 0.1, 0.3, 0.3).is_valid());
        assert!(!BoundingBox::new(0.1, 0.1, 0.0, 0.3).is_valid());
        assert!(!BoundingBox::new(-0.1, 0.1, 0.3, 0.3).is_valid());
        assert!(!BoundingBox::new(0.1, 0.1, 1.5, 0.3).is_valid());
    }

    #[test]
    fn test_to_pixel_rect_scales_by_image_dimensions() {
        let bbox = BoundingBox::new(0.1, 0.1, 0.3, 0.3);
        let rect = bbox.to_pixel_rect(800, 600);
        assert_eq!(rect.x, 80);
        assert_eq!(rect.y, 60);
        assert_eq!(rect.width, 240);
        assert_eq!(rect.height, 180);
    }

    #[test]
    fn test_to_pixel_rect_clamps_to_image_bounds() {
        let bbox = BoundingBox::new(0.9, 0.9, 0.5, 0.5);
        let rect = bbox.to_pixel_rect(100, 100);
        assert!(rect.x + rect.width as i32 <= 100);
        assert!(rect.y + rect.height as i32 <= 100);
    }

    #[test]
    fn test_bounding_box_wire_format() {
        let json = r#"{"Left":0.1,"Top":0.2,"Width":0.3,"Height":0.4}"#;
        let bbox: BoundingBox = serde_json::from_str(json).unwrap();
        assert_eq!(bbox, BoundingBox::new(0.1, 0.2, 0.3, 0.4));
    }
}
