//! Leaf processors of the label-overlay pipeline.
//!
//! Each processor here is a pure function (or a small state-free type):
//! caption text formatting, caption layout calculation, and label matching.
//! The pipeline controller in [`crate::seelabel`] wires them together.

pub mod layout;
pub mod matcher;
pub mod text_format;
pub mod types;

pub use layout::{
    Caption, GlyphMetrics, LabelFont, RECT_HEIGHT_MARGIN, RECT_HEIGHT_MARGIN_RENDER,
    RECT_WIDTH_MARGIN, build_caption, center, measure,
};
pub use matcher::{MatchResult, match_label};
pub use text_format::format_label;
pub use types::{BoundingBox, PixelRect};
