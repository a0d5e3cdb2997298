// ABOUTME: Library module for the slidegen program.
// ABOUTME: Contains slide image generation and PPTX deck assembly.

pub mod commands;
pub mod config;
pub mod errors;
pub mod gemini;
pub mod logger;
pub mod naming;
pub mod pptx;
pub mod slide;
pub mod styles;
pub mod utils;

pub use commands::{run_assemble, run_slide, EXIT_GENERATION_FAIL, EXIT_INPUT_ERROR, EXIT_SUCCESS};
pub use config::Config;
pub use errors::{Result, SlideError};
pub use gemini::{GeminiClient, GeneratedImage, ImageGenerator};
pub use logger::OutputFormat;
pub use naming::next_slide_name;
pub use pptx::{assemble_slides, find_slide_images, AssembleOptions, AssembleResult};
pub use slide::{generate_slide, SlideOptions, SlideResult};
pub use styles::{get_style, style_names, Style, STYLES};
pub use utils::ImageAsset;
