// ABOUTME: Error types for the slidegen application
// ABOUTME: Separates input errors (exit 2) from generation and assembly failures (exit 1)

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlideError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Request to image API failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse image API response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to decode image data: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Invalid API endpoint: {0}")]
    Url(#[from] url::ParseError),

    #[error("PPTX generation error: {0}")]
    PptxError(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("Unknown style: {name}. Available: {}", .available.join(", "))]
    UnknownStyle {
        name: String,
        available: Vec<&'static str>,
    },

    #[error("GEMINI_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("Gemini API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Gemini did not return an image. Response text: {0}")]
    NoImageReturned(String),

    #[error("No image files found in {}", .0.display())]
    NoImagesFound(PathBuf),
}

impl SlideError {
    /// Whether the error stems from bad user input rather than a failed operation.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SlideError::ValidationError(_) | SlideError::UnknownStyle { .. }
        )
    }
}

impl From<zip::result::ZipError> for SlideError {
    fn from(err: zip::result::ZipError) -> Self {
        SlideError::PptxError(format!("ZIP operation failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, SlideError>;
