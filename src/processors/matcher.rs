//! Label matching over recognition backend results.
//!
//! Walks the detection list in backend order and selects the first detected
//! object whose name matches the query, extracting the bounding box of its
//! first localized instance. The tagged [`MatchResult`] makes the "no
//! bounding box" state explicit instead of a boolean plus an empty map.

use crate::processors::types::BoundingBox;
use crate::recognition::DetectedObject;

/// Outcome of matching a query against a detection list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchResult {
    /// The query matched a detected object with at least one instance.
    Found {
        /// Bounding box of the first instance of the matched object.
        bounding_box: BoundingBox,
    },
    /// No detected object matched the query.
    NotFound,
}

impl MatchResult {
    /// Returns true for the `Found` variant.
    pub fn is_found(&self) -> bool {
        matches!(self, MatchResult::Found { .. })
    }

    /// Returns the matched bounding box, if any.
    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        match self {
            MatchResult::Found { bounding_box } => Some(bounding_box),
            MatchResult::NotFound => None,
        }
    }
}

/// Matches `query` against `detections` in backend order.
///
/// Objects with zero instances are skipped (nothing to localize). Names are
/// compared case-insensitively and must match exactly, not as substrings.
/// First match wins; no attempt is made to pick the highest-confidence
/// duplicate. Pure function, no I/O.
pub fn match_label(detections: &[DetectedObject], query: &str) -> MatchResult {
    let query = query.to_lowercase();
    for detection in detections {
        let Some(first) = detection.instances.first() else {
            continue;
        };
        if detection.name.to_lowercase() == query {
            return MatchResult::Found {
                bounding_box: first.bounding_box,
            };
        }
    }
    MatchResult::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognition::Instance;

    fn hot_dog() -> DetectedObject {
        DetectedObject {
            name: "Hot Dog".to_string(),
            confidence: 98.0,
            instances: vec![Instance {
                bounding_box: BoundingBox::new(0.1, 0.1, 0.3, 0.3),
                confidence: 98.0,
            }],
        }
    }

    #[test]
    fn test_match_label_case_insensitive_exact() {
        let detections = vec![hot_dog()];
        let result = match_label(&detections, "hot dog");
        assert_eq!(
            result,
            MatchResult::Found {
                bounding_box: BoundingBox::new(0.1, 0.1, 0.3, 0.3)
            }
        );
    }

    #[test]
    fn test_match_label_rejects_substring_matches() {
        let detections = vec![hot_dog()];
        assert_eq!(match_label(&detections, "dog"), MatchResult::NotFound);
        assert_eq!(match_label(&detections, "hot"), MatchResult::NotFound);
    }

    #[test]
    fn test_match_label_empty_detections() {
        assert_eq!(match_label(&[], "pizza"), MatchResult::NotFound);
    }

    #[test]
    fn test_match_label_skips_zero_instance_objects() {
        let detections = vec![DetectedObject {
            name: "Hot Dog".to_string(),
            confidence: 98.0,
            instances: vec![],
        }];
        assert_eq!(match_label(&detections, "hot dog"), MatchResult::NotFound);
    }

    #[test]
    fn test_match_label_first_match_wins() {
        let mut second = hot_dog();
        second.confidence = 99.9;
        second.instances[0].bounding_box = BoundingBox::new(0.5, 0.5, 0.2, 0.2);
        let detections = vec![hot_dog(), second];

        let result = match_label(&detections, "HOT DOG");
        assert_eq!(
            result.bounding_box(),
            Some(&BoundingBox::new(0.1, 0.1, 0.3, 0.3))
        );
    }

    #[test]
    fn test_match_label_takes_first_instance_of_match() {
        let mut detection = hot_dog();
        detection.instances.push(Instance {
            bounding_box: BoundingBox::new(0.6, 0.6, 0.1, 0.1),
            confidence: 99.0,
        });
        let result = match_label(&[detection], "hot dog");
        assert_eq!(
            result.bounding_box(),
            Some(&BoundingBox::new(0.1, 0.1, 0.3, 0.3))
        );
    }
}
