//! HTTP OCR engine client

use crate::error::OcrError;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use vitalis_domain::traits::{OcrEngine, OcrOutput};

/// Default timeout for OCR requests (30 seconds)
pub const DEFAULT_OCR_TIMEOUT_SECS: u64 = 30;

/// OCR engine reached over HTTP
///
/// Posts the raw image bytes to the endpoint and expects
/// `{"text": "...", "confidence": 0.0..1.0}` back.
#[derive(Debug, Clone)]
pub struct HttpOcrEngine {
    endpoint: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct OcrResponse {
    text: String,
    confidence: f64,
}

impl HttpOcrEngine {
    /// Create a client for an OCR endpoint
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, OcrError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OcrError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// Endpoint the image is posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl OcrEngine for HttpOcrEngine {
    type Error = OcrError;

    async fn recognize(&self, image: &[u8]) -> Result<OcrOutput, Self::Error> {
        debug!("Posting {} byte image to {}", image.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(image.to_vec())
            .send()
            .await?
            .error_for_status()?;

        let body: OcrResponse = response.json().await?;
        if !body.confidence.is_finite() || !(0.0..=1.0).contains(&body.confidence) {
            return Err(OcrError::InvalidResponse(format!(
                "confidence {} is outside [0, 1]",
                body.confidence
            )));
        }

        Ok(OcrOutput {
            text: body.text,
            confidence: body.confidence,
        })
    }
}
