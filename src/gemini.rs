// ABOUTME: Image generation client for the slidegen application
// ABOUTME: Calls the Gemini generateContent endpoint and extracts inline image data

use crate::config::Config;
use crate::errors::{Result, SlideError};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{debug, info};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// MIME type assumed when the API omits one
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Raw image returned by an [`ImageGenerator`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub data: Vec<u8>,
    pub mime_type: String,
    pub text: Option<String>,
}

/// Something that turns a prompt into image bytes.
///
/// Slide generation only depends on this trait, so tests can swap in a fake.
pub trait ImageGenerator {
    fn generate(&self, prompt: &str, model: &str) -> Result<GeneratedImage>;
}

/// Blocking Gemini REST client
pub struct GeminiClient {
    config: Config,
}

impl GeminiClient {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn endpoint(&self, model: &str) -> Result<Url> {
        let base = format!("{}/", self.config.api_base.trim_end_matches('/'));
        let url = Url::parse(&base)?.join(&format!("models/{}:generateContent", model))?;
        Ok(url)
    }
}

impl ImageGenerator for GeminiClient {
    fn generate(&self, prompt: &str, model: &str) -> Result<GeneratedImage> {
        let api_key = self.config.api_key()?;
        let url = self.endpoint(model)?;
        info!("Requesting image from {} (model {})", url, model);

        let client = Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .build()?;

        let response = client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest::new(prompt))
            .send()?;

        let status = response.status();
        let body = response.text()?;
        debug!("Gemini responded with {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(SlideError::ApiError {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        parse_generate_response(&body)
    }
}

/// Extract the image (and any accompanying text) from a generateContent response body
pub fn parse_generate_response(body: &str) -> Result<GeneratedImage> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;

    let parts = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts)
        .unwrap_or_default();

    let mut image: Option<(Vec<u8>, String)> = None;
    let mut text = None;

    for part in parts {
        if let Some(inline) = part.inline_data {
            let data = STANDARD.decode(inline.data.as_bytes())?;
            let mime = inline
                .mime_type
                .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string());
            image = Some((data, mime));
        }
        if let Some(t) = part.text.filter(|t| !t.is_empty()) {
            text = Some(t);
        }
    }

    match image {
        Some((data, mime_type)) => Ok(GeneratedImage {
            data,
            mime_type,
            text,
        }),
        None => Err(SlideError::NoImageReturned(
            text.unwrap_or_else(|| "(none)".to_string()),
        )),
    }
}

/// Pull `error.message` out of an error body, falling back to the raw body
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE", "TEXT"],
                image_config: ImageConfig {
                    aspect_ratio: "16:9",
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<&'static str>,
    image_config: ImageConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: Option<String>,
    data: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[cfg(test)]
pub(crate) fn request_json(prompt: &str) -> serde_json::Value {
    serde_json::to_value(GenerateContentRequest::new(prompt)).expect("request serializes")
}
