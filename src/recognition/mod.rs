//! Recognition backend contract.
//!
//! The recognition service is a black box to this crate: it receives raw
//! image bytes and returns an ordered list of detected objects, each with a
//! name, a confidence score in [0, 100], and zero or more localized
//! instances. This module defines that wire contract and the trait the
//! pipeline calls through; [`http`] provides a blocking HTTP implementation.

pub mod http;

use serde::{Deserialize, Serialize};

use crate::core::errors::LabelResult;
use crate::processors::types::BoundingBox;

pub use http::HttpRecognitionBackend;

/// A single localized occurrence of a detected object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Instance {
    /// Normalized bounding box locating this occurrence in the image.
    pub bounding_box: BoundingBox,
    /// Confidence score for this occurrence, in [0, 100].
    pub confidence: f32,
}

/// One object class reported by the recognition backend for an image.
///
/// Read-only to this crate; produced once per invocation and never
/// persisted. Objects without instances are detected but not localizable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectedObject {
    /// Object class name (e.g., "Hot Dog").
    pub name: String,
    /// Confidence score for the class, in [0, 100].
    pub confidence: f32,
    /// Localized occurrences of this object, in backend order.
    #[serde(default)]
    pub instances: Vec<Instance>,
}

/// Top-level response envelope returned by the recognition service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectLabelsResponse {
    /// Detected objects, in backend order.
    #[serde(default)]
    pub labels: Vec<DetectedObject>,
}

/// Interface to the recognition service.
///
/// One invocation is one request; implementations own any connection state.
/// Failures (network, non-success status, malformed body) surface as
/// `LabelError::Backend`.
pub trait RecognitionBackend: std::fmt::Debug + Send + Sync {
    /// Runs object detection over raw image bytes.
    fn detect_labels(&self, image_bytes: &[u8]) -> LabelResult<Vec<DetectedObject>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_labels_response_wire_format() {
        let json = r#"{
            "Labels": [
                {
                    "Name": "Hot Dog",
                    "Confidence": 98.0,
                    "Instances": [
                        {
                            "BoundingBox": {"Left": 0.1, "Top": 0.1, "Width": 0.3, "Height": 0.3},
                            "Confidence": 98.0
                        }
                    ]
                },
                {
                    "Name": "Food",
                    "Confidence": 99.2
                }
            ]
        }"#;

        let response: DetectLabelsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.labels.len(), 2);
        assert_eq!(response.labels[0].name, "Hot Dog");
        assert_eq!(response.labels[0].instances.len(), 1);
        assert_eq!(
            response.labels[0].instances[0].bounding_box,
            BoundingBox::new(0.1, 0.1, 0.3, 0.3)
        );
        // Instances default to empty when the backend omits them.
        assert!(response.labels[1].instances.is_empty());
    }

    #[test]
    fn test_empty_response() {
        let response: DetectLabelsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.labels.is_empty());
    }
}
