//! The label-overlay pipeline namespace.
//!
//! This module contains the pipeline controller ([`SeeLabel`]) and its
//! result type ([`LabelOutcome`]).

pub mod pipeline;
pub mod result;

pub use pipeline::{
    DEFAULT_COLUMNS, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_FONT_SIZE, SeeLabel, SeeLabelBuilder,
};
pub use result::LabelOutcome;
