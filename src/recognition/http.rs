//! Blocking HTTP client for the recognition service.

use std::time::Duration;

use crate::core::errors::{LabelError, LabelResult};
use crate::recognition::{DetectLabelsResponse, DetectedObject, RecognitionBackend};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Recognition backend that POSTs raw image bytes to an HTTP endpoint and
/// decodes the JSON `DetectLabels` response.
#[derive(Debug)]
pub struct HttpRecognitionBackend {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpRecognitionBackend {
    /// Creates a backend client for the given detect-labels endpoint.
    pub fn new(endpoint: impl Into<String>) -> LabelResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| LabelError::backend("failed to build HTTP client", e))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RecognitionBackend for HttpRecognitionBackend {
    fn detect_labels(&self, image_bytes: &[u8]) -> LabelResult<Vec<DetectedObject>> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(image_bytes.to_vec())
            .send()
            .map_err(|e| LabelError::backend("detect-labels request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LabelError::backend_context(format!(
                "detect-labels returned HTTP {status}"
            )));
        }

        let parsed: DetectLabelsResponse = response
            .json()
            .map_err(|e| LabelError::backend("malformed detect-labels response", e))?;

        tracing::debug!(
            labels = parsed.labels.len(),
            "recognition backend returned detections"
        );

        Ok(parsed.labels)
    }
}
