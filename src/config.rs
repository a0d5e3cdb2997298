// ABOUTME: Configuration module for the slidegen application
// ABOUTME: Provides defaults and environment variable handling for the image API

use crate::errors::{Result, SlideError};
use std::env;

/// Default Gemini model used for slide generation
pub const DEFAULT_MODEL: &str = "gemini-3-pro-image-preview";

/// Default Gemini REST endpoint
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default output directory for generated slides
pub const DEFAULT_SLIDES_DIR: &str = "./slides";

/// Default output path for assembled decks
pub const DEFAULT_DECK_PATH: &str = "./deck.pptx";

const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Global configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    api_key: Option<String>,
    pub api_base: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        let api_base = env::var("GEMINI_API_BASE")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let timeout_secs = env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_key,
            api_base,
            timeout_secs,
        }
    }

    /// Replace the API credential
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The API credential, or a generation failure when it was never set
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(SlideError::MissingApiKey)
    }
}
