// ABOUTME: Slide generation module for the slidegen application
// ABOUTME: Styles a prompt, requests an image and writes it to the next numbered file

use crate::config::DEFAULT_MODEL;
use crate::errors::{Result, SlideError};
use crate::gemini::ImageGenerator;
use crate::logger::OutputFormat;
use crate::naming::next_slide_name;
use crate::styles::{get_style, style_names};
use crate::utils::ensure_directory_exists;
use log::info;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Options for a single slide generation
#[derive(Debug, Clone)]
pub struct SlideOptions {
    pub prompt: String,
    pub dir: PathBuf,
    pub name: Option<String>,
    pub model: String,
    pub style: Option<String>,
    pub format: OutputFormat,
}

impl SlideOptions {
    pub fn new(prompt: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            prompt: prompt.into(),
            dir: dir.into(),
            name: None,
            model: DEFAULT_MODEL.to_string(),
            style: None,
            format: OutputFormat::Text,
        }
    }
}

/// Outcome of a successful slide generation
#[derive(Debug, Clone)]
pub struct SlideResult {
    pub path: PathBuf,
    pub elapsed: Duration,
}

/// Map an image MIME type to the file extension used on disk
pub fn mime_to_extension(mime_type: &str) -> &'static str {
    match mime_type {
        "image/png" => ".png",
        "image/jpeg" => ".jpg",
        "image/webp" => ".webp",
        _ => ".png",
    }
}

/// Validate the prompt and apply the requested style prefix.
///
/// Errors from here are input errors and happen before any I/O.
pub fn prepare_prompt(prompt: &str, style: Option<&str>) -> Result<String> {
    if prompt.trim().is_empty() {
        return Err(SlideError::ValidationError(
            "No prompt provided".to_string(),
        ));
    }

    match style {
        None => Ok(prompt.to_string()),
        Some(key) => {
            let style = get_style(key).ok_or_else(|| SlideError::UnknownStyle {
                name: key.to_string(),
                available: style_names(),
            })?;
            info!("Applying style {} ({})", style.name, style.description);
            Ok(style.apply(prompt))
        }
    }
}

/// Generate one slide image and write it into `opts.dir`
pub fn generate_slide(opts: &SlideOptions, generator: &dyn ImageGenerator) -> Result<SlideResult> {
    let prompt = prepare_prompt(&opts.prompt, opts.style.as_deref())?;
    let start = Instant::now();

    ensure_directory_exists(&opts.dir)?;

    let name = match &opts.name {
        Some(name) => name.clone(),
        None => next_slide_name(&opts.dir),
    };

    info!("Generating slide {:?} with model {}", name, opts.model);
    let image = generator.generate(&prompt, &opts.model)?;

    let path = opts
        .dir
        .join(format!("{}{}", name, mime_to_extension(&image.mime_type)));
    fs::write(&path, &image.data)?;
    info!("Wrote {} bytes to {:?}", image.data.len(), path);

    Ok(SlideResult {
        path,
        elapsed: start.elapsed(),
    })
}
