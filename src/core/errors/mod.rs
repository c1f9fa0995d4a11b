//! Error handling for the label-overlay pipeline.

pub mod types;

pub use types::{LabelError, LabelResult};
