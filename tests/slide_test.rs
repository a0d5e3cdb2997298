use slidegen::{
    generate_slide, run_slide, GeneratedImage, ImageGenerator, OutputFormat, Result, SlideError,
    SlideOptions, EXIT_GENERATION_FAIL, EXIT_INPUT_ERROR, EXIT_SUCCESS,
};
use std::cell::RefCell;
use std::fs;
use tempfile::TempDir;

/// Returns a fixed image and records every prompt it receives
struct FakeGenerator {
    mime_type: &'static str,
    prompts: RefCell<Vec<(String, String)>>,
}

impl FakeGenerator {
    fn new(mime_type: &'static str) -> Self {
        Self {
            mime_type,
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl ImageGenerator for FakeGenerator {
    fn generate(&self, prompt: &str, model: &str) -> Result<GeneratedImage> {
        self.prompts
            .borrow_mut()
            .push((prompt.to_string(), model.to_string()));
        Ok(GeneratedImage {
            data: b"fake image".to_vec(),
            mime_type: self.mime_type.to_string(),
            text: None,
        })
    }
}

/// Always answers with text only
struct TextOnlyGenerator;

impl ImageGenerator for TextOnlyGenerator {
    fn generate(&self, _prompt: &str, _model: &str) -> Result<GeneratedImage> {
        Err(SlideError::NoImageReturned("I can only describe it".to_string()))
    }
}

#[test]
fn test_generates_numbered_slides() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().join("nested").join("slides");
    let generator = FakeGenerator::new("image/png");

    let first = generate_slide(&SlideOptions::new("Title slide", &dir), &generator)
        .expect("First slide failed");
    let second = generate_slide(&SlideOptions::new("Agenda", &dir), &generator)
        .expect("Second slide failed");

    assert_eq!(first.path, dir.join("01.png"));
    assert_eq!(second.path, dir.join("02.png"));
    assert_eq!(fs::read(&second.path).unwrap(), b"fake image");
}

#[test]
fn test_explicit_name_and_mime_extension() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let generator = FakeGenerator::new("image/jpeg");
    let mut opts = SlideOptions::new("Roadmap", temp_dir.path());
    opts.name = Some("roadmap".to_string());
    opts.model = "custom-model".to_string();

    let result = generate_slide(&opts, &generator).expect("Slide failed");

    assert_eq!(result.path, temp_dir.path().join("roadmap.jpg"));
    assert_eq!(
        generator.prompts.borrow().as_slice(),
        &[("Roadmap".to_string(), "custom-model".to_string())]
    );
}

#[test]
fn test_style_prefix_reaches_generator() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let generator = FakeGenerator::new("image/webp");
    let mut opts = SlideOptions::new("Launch metrics", temp_dir.path());
    opts.style = Some("Vercel".to_string());

    let result = generate_slide(&opts, &generator).expect("Slide failed");

    assert_eq!(result.path, temp_dir.path().join("01.webp"));
    let prompts = generator.prompts.borrow();
    assert!(prompts[0].0.starts_with("A slide designed in Vercel's Geist"));
    assert!(prompts[0].0.ends_with("Launch metrics"));
}

#[test]
fn test_unknown_style_is_input_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().join("slides");
    let generator = FakeGenerator::new("image/png");
    let mut opts = SlideOptions::new("Hello", &dir);
    opts.style = Some("retro".to_string());

    let err = generate_slide(&opts, &generator).unwrap_err();
    let message = err.to_string();
    for name in ["engineer", "apple", "vercel"] {
        assert!(message.contains(name), "{} missing from {}", name, message);
    }

    assert_eq!(run_slide(&opts, &generator), EXIT_INPUT_ERROR);
    assert!(generator.prompts.borrow().is_empty());
    assert!(!dir.exists());
}

#[test]
fn test_blank_prompt_is_input_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let generator = FakeGenerator::new("image/png");
    let mut opts = SlideOptions::new("  \t ", temp_dir.path());
    opts.format = OutputFormat::Json;

    assert_eq!(run_slide(&opts, &generator), EXIT_INPUT_ERROR);
    assert!(generator.prompts.borrow().is_empty());
}

#[test]
fn test_missing_image_is_generation_failure() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let opts = SlideOptions::new("Draw a chart", temp_dir.path());

    let err = generate_slide(&opts, &TextOnlyGenerator).unwrap_err();
    assert!(err.to_string().contains("I can only describe it"));
    assert_eq!(run_slide(&opts, &TextOnlyGenerator), EXIT_GENERATION_FAIL);
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_run_slide_success_exit_code() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let generator = FakeGenerator::new("image/png");
    let opts = SlideOptions::new("Summary", temp_dir.path());

    assert_eq!(run_slide(&opts, &generator), EXIT_SUCCESS);
    assert!(temp_dir.path().join("01.png").exists());
}
