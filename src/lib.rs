//! # SeeLabel
//!
//! Overlays a visual label onto a photograph based on object-detection
//! results from a third-party recognition service: given an image source and
//! a target object name, SeeLabel draws a readable caption and, when the
//! object is found, an outline marking the detected region, returning the
//! composited RGBA image.
//!
//! The recognition service itself is a collaborator behind the
//! [`recognition::RecognitionBackend`] trait; this crate owns the
//! label-overlay rendering: caption formatting, layout, matching, and
//! compositing.
//!
//! ## Example
//!
//! ```no_run
//! use seelabel::recognition::HttpRecognitionBackend;
//! use seelabel::seelabel::SeeLabelBuilder;
//!
//! let backend = HttpRecognitionBackend::new("http://localhost:9000/detect-labels")?;
//! let pipeline = SeeLabelBuilder::new(Box::new(backend))
//!     .font_path("fonts/ariblk.ttf")
//!     .build()?;
//!
//! let outcome = pipeline.label_image("https://example.com/lunch.jpg", "hot dog")?;
//! println!("{outcome}");
//! outcome.image.save("labeled.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod processors;
pub mod recognition;
pub mod seelabel;
pub mod utils;

pub use crate::core::errors::{LabelError, LabelResult};
pub use processors::{BoundingBox, Caption, MatchResult};
pub use seelabel::{LabelOutcome, SeeLabel, SeeLabelBuilder};
