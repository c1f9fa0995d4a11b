//! The core module of the label-overlay pipeline.
//!
//! This module contains the fundamental components shared across the
//! pipeline:
//! - Error handling
//!
//! It also provides re-exports of commonly used types for convenience.

pub mod errors;

pub use errors::{LabelError, LabelResult};
