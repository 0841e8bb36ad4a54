//! Request surface

use crate::error::PipelineError;
use serde::Deserialize;
use serde_json::Value;

/// Raw request as handed over by a transport layer
///
/// Exactly one of the three inputs must be set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SurveyRequest {
    /// Free text answers
    #[serde(default)]
    pub text: Option<String>,

    /// Structured answer record
    #[serde(default)]
    pub data: Option<Value>,

    /// Image bytes to recognize
    #[serde(skip)]
    pub image: Option<Vec<u8>>,
}

impl SurveyRequest {
    /// Request carrying free text
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Request carrying a structured record
    pub fn data(data: Value) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    /// Request carrying image bytes
    pub fn image(image: Vec<u8>) -> Self {
        Self {
            image: Some(image),
            ..Self::default()
        }
    }
}

/// Validated single input
#[derive(Debug, Clone, PartialEq)]
pub enum SurveyInput {
    /// Free text answers
    Text(String),
    /// Structured answer record
    Structured(Value),
    /// Image bytes to recognize
    Image(Vec<u8>),
}

impl TryFrom<SurveyRequest> for SurveyInput {
    type Error = PipelineError;

    fn try_from(request: SurveyRequest) -> Result<Self, Self::Error> {
        match (request.text, request.data, request.image) {
            (Some(text), None, None) => {
                if text.trim().is_empty() {
                    return Err(PipelineError::InvalidInput("text is empty".to_string()));
                }
                Ok(SurveyInput::Text(text))
            }
            (None, Some(data), None) => Ok(SurveyInput::Structured(data)),
            (None, None, Some(image)) => {
                if image.is_empty() {
                    return Err(PipelineError::InvalidInput("image is empty".to_string()));
                }
                Ok(SurveyInput::Image(image))
            }
            (None, None, None) => Err(PipelineError::InvalidInput(
                "one of text, data, or image is required".to_string(),
            )),
            _ => Err(PipelineError::InvalidInput(
                "only one of text, data, or image may be supplied".to_string(),
            )),
        }
    }
}
