//! High-level label-overlay pipeline.
//!
//! This module provides `SeeLabelBuilder` for constructing the pipeline with
//! a fluent API, and `SeeLabel`, whose `label_image` runs the end-to-end
//! flow: fetch bytes, decode, one recognition call, match, caption layout,
//! and compositing. Execution is synchronous and blocking; every call owns
//! its own buffers, so parallel callers need no coordination.

use crate::core::errors::{LabelError, LabelResult};
use crate::processors::layout::{LabelFont, build_caption};
use crate::processors::matcher::{MatchResult, match_label};
use crate::recognition::{DetectedObject, RecognitionBackend};
use crate::seelabel::result::LabelOutcome;
use crate::utils::image::{ImageSource, decode_image, fetch_bytes};
use crate::utils::visualization::{OverlayStyle, render};

/// Default caption column width.
pub const DEFAULT_COLUMNS: usize = 60;

/// Default object-level confidence threshold.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 50.0;

/// Default caption font pixel size.
pub const DEFAULT_FONT_SIZE: f32 = 22.0;

/// Caption text rendered when the query does not match any detection.
const NOT_FOUND_TEXT: &str = "not found";

/// Builder for constructing the label-overlay pipeline.
///
/// # Example
///
/// ```no_run
/// use seelabel::recognition::HttpRecognitionBackend;
/// use seelabel::seelabel::SeeLabelBuilder;
///
/// let backend = HttpRecognitionBackend::new("http://localhost:9000/detect-labels")
///     .expect("backend client");
/// let pipeline = SeeLabelBuilder::new(Box::new(backend))
///     .font_path("fonts/ariblk.ttf")
///     .confidence_threshold(50.0)
///     .build()
///     .expect("pipeline");
/// let outcome = pipeline.label_image("photos/lunch.jpg", "hot dog").expect("label");
/// outcome.image.save("labeled.png").expect("save");
/// ```
pub struct SeeLabelBuilder {
    backend: Box<dyn RecognitionBackend>,
    font_path: Option<std::path::PathBuf>,
    font_bytes: Option<Vec<u8>>,
    font_size: f32,
    columns: usize,
    confidence_threshold: f32,
    caption_origin: (i32, i32),
    found_style: OverlayStyle,
    not_found_style: OverlayStyle,
}

impl SeeLabelBuilder {
    /// Creates a builder around the given recognition backend.
    pub fn new(backend: Box<dyn RecognitionBackend>) -> Self {
        Self {
            backend,
            font_path: None,
            font_bytes: None,
            font_size: DEFAULT_FONT_SIZE,
            columns: DEFAULT_COLUMNS,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            caption_origin: (0, 0),
            found_style: OverlayStyle::found(),
            not_found_style: OverlayStyle::not_found(),
        }
    }

    /// Sets the caption font by file path.
    pub fn font_path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    /// Sets the caption font from raw TTF/OTF bytes.
    pub fn font_bytes(mut self, bytes: Vec<u8>) -> Self {
        self.font_bytes = Some(bytes);
        self
    }

    /// Sets the caption font pixel size (default 22).
    pub fn font_size(mut self, pixel_size: f32) -> Self {
        self.font_size = pixel_size;
        self
    }

    /// Sets the caption column width (default 60).
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the object-level confidence threshold (default 50).
    ///
    /// Detections below the threshold are removed before matching.
    pub fn confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    /// Sets the caption rectangle's top-left corner (default (0, 0)).
    pub fn caption_origin(mut self, origin: (i32, i32)) -> Self {
        self.caption_origin = origin;
        self
    }

    /// Overrides the palette used when the object is found.
    pub fn found_style(mut self, style: OverlayStyle) -> Self {
        self.found_style = style;
        self
    }

    /// Overrides the palette used when the object is not found.
    pub fn not_found_style(mut self, style: OverlayStyle) -> Self {
        self.not_found_style = style;
        self
    }

    /// Builds the pipeline, loading the caption font once.
    ///
    /// The font handle is cached for the lifetime of the pipeline; calls to
    /// `label_image` never re-acquire it.
    pub fn build(self) -> LabelResult<SeeLabel> {
        let font = match (self.font_bytes, self.font_path) {
            (Some(bytes), _) => LabelFont::from_bytes(bytes, self.font_size)?,
            (None, Some(path)) => LabelFont::from_file(path, self.font_size)?,
            (None, None) => {
                return Err(LabelError::invalid_input(
                    "a caption font is required: set font_path or font_bytes",
                ));
            }
        };

        if self.columns == 0 {
            return Err(LabelError::invalid_input("columns must be positive"));
        }

        Ok(SeeLabel {
            backend: self.backend,
            font,
            columns: self.columns,
            confidence_threshold: self.confidence_threshold,
            caption_origin: self.caption_origin,
            found_style: self.found_style,
            not_found_style: self.not_found_style,
        })
    }
}

/// The label-overlay pipeline.
#[derive(Debug)]
pub struct SeeLabel {
    backend: Box<dyn RecognitionBackend>,
    font: LabelFont,
    columns: usize,
    confidence_threshold: f32,
    caption_origin: (i32, i32),
    found_style: OverlayStyle,
    not_found_style: OverlayStyle,
}

impl SeeLabel {
    /// Labels an image for a target object.
    ///
    /// Fetches `source` (URL or local path), decodes it, runs the
    /// recognition backend once over the raw bytes, pre-filters detections
    /// by object-level confidence, matches `query` case-insensitively, and
    /// composites the annotation. A miss is a success outcome: the returned
    /// image carries the "not found" banner and no bounding marker.
    pub fn label_image(&self, source: &str, query: &str) -> LabelResult<LabelOutcome> {
        let image_source = ImageSource::parse(source);
        tracing::debug!(source = %image_source, query, "fetching image");
        let bytes = fetch_bytes(&image_source)?;

        let base = decode_image(&bytes)?;
        tracing::debug!(
            width = base.width(),
            height = base.height(),
            "decoded image"
        );

        let detections = self.backend.detect_labels(&bytes)?;
        let considered = filter_by_confidence(detections, self.confidence_threshold);

        let match_result = match_label(&considered, query);
        tracing::info!(query, found = match_result.is_found(), "label match");

        let (raw_text, style) = match match_result {
            MatchResult::Found { .. } => (query, &self.found_style),
            MatchResult::NotFound => (NOT_FOUND_TEXT, &self.not_found_style),
        };

        let caption = build_caption(raw_text, self.columns, &self.font, self.caption_origin)?;
        let image = render(&base, &caption, &match_result, &self.font, style);

        Ok(LabelOutcome {
            source: source.to_string(),
            query: query.to_string(),
            match_result,
            caption,
            image,
        })
    }
}

/// Removes detections whose object-level confidence is below `threshold`.
///
/// Policy decision: the threshold applies to the object-level score only;
/// instance-level confidences are not consulted. Applied as a pre-filter so
/// the matcher never interprets the threshold itself.
fn filter_by_confidence(detections: Vec<DetectedObject>, threshold: f32) -> Vec<DetectedObject> {
    detections
        .into_iter()
        .filter(|d| d.confidence >= threshold)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::types::BoundingBox;
    use crate::recognition::Instance;

    fn detection(name: &str, confidence: f32) -> DetectedObject {
        DetectedObject {
            name: name.to_string(),
            confidence,
            instances: vec![Instance {
                bounding_box: BoundingBox::new(0.1, 0.1, 0.3, 0.3),
                confidence,
            }],
        }
    }

    #[test]
    fn test_filter_by_confidence_drops_low_scores() {
        let detections = vec![detection("Hot Dog", 98.0), detection("Pizza", 12.0)];
        let kept = filter_by_confidence(detections, 50.0);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Hot Dog");
    }

    #[test]
    fn test_filter_by_confidence_threshold_is_inclusive() {
        let kept = filter_by_confidence(vec![detection("Hot Dog", 50.0)], 50.0);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_filtered_out_detection_is_not_matchable() {
        let kept = filter_by_confidence(vec![detection("Hot Dog", 30.0)], 50.0);
        assert_eq!(match_label(&kept, "hot dog"), MatchResult::NotFound);
    }

    #[test]
    fn test_builder_requires_a_font() {
        #[derive(Debug)]
        struct NullBackend;
        impl RecognitionBackend for NullBackend {
            fn detect_labels(&self, _: &[u8]) -> LabelResult<Vec<DetectedObject>> {
                Ok(Vec::new())
            }
        }

        let err = SeeLabelBuilder::new(Box::new(NullBackend)).build().unwrap_err();
        assert!(matches!(err, LabelError::InvalidInput { .. }));
    }
}
