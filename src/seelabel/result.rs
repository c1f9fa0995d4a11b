//! Result types for the label-overlay pipeline.

use std::fmt;

use image::RgbaImage;

use crate::processors::layout::Caption;
use crate::processors::matcher::MatchResult;

/// Result of one `label_image` invocation.
///
/// The caller owns the composited image after return; the pipeline holds no
/// reference to it.
#[derive(Debug, Clone)]
pub struct LabelOutcome {
    /// The image source string the pipeline was given.
    pub source: String,
    /// The query the caption and match were produced for.
    pub query: String,
    /// Whether (and where) the query matched a detection.
    pub match_result: MatchResult,
    /// The caption that was rendered.
    pub caption: Caption,
    /// The final composited image.
    pub image: RgbaImage,
}

impl LabelOutcome {
    /// Returns true if the query matched a detected object.
    pub fn is_found(&self) -> bool {
        self.match_result.is_found()
    }
}

impl fmt::Display for LabelOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Source: {}", self.source)?;
        writeln!(f, "Query: {}", self.query)?;
        writeln!(
            f,
            "Image dimensions: [{}, {}]",
            self.image.width(),
            self.image.height()
        )?;
        match &self.match_result {
            MatchResult::Found { bounding_box } => {
                writeln!(
                    f,
                    "Match: found at [left {:.3}, top {:.3}, width {:.3}, height {:.3}]",
                    bounding_box.left, bounding_box.top, bounding_box.width, bounding_box.height
                )?;
            }
            MatchResult::NotFound => {
                writeln!(f, "Match: not found")?;
            }
        }
        write!(f, "Caption: {:?}", self.caption.text)
    }
}
