//! Utility functions for the label-overlay pipeline.
//!
//! This module provides image fetching and decoding helpers, the annotation
//! compositor, and logging setup.

pub mod image;
pub mod logging;
pub mod visualization;

pub use image::{ImageSource, decode_image, fetch_bytes};
pub use logging::init_tracing;
pub use visualization::{
    OverlayStyle, composite, draw_bounding_marker, draw_caption_box, render,
};
