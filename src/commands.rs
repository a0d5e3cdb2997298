// ABOUTME: Command handlers for the slidegen application
// ABOUTME: Run a command, report its outcome and translate it into a process exit code

use crate::errors::SlideError;
use crate::gemini::ImageGenerator;
use crate::logger::{log_assemble_done, log_assemble_fail, log_slide_done, log_slide_fail};
use crate::pptx::{assemble_slides, AssembleOptions};
use crate::slide::{generate_slide, SlideOptions};
use std::time::Instant;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_GENERATION_FAIL: i32 = 1;
pub const EXIT_INPUT_ERROR: i32 = 2;

/// Exit code for a failed command
pub fn exit_code_for(err: &SlideError) -> i32 {
    if err.is_input_error() {
        EXIT_INPUT_ERROR
    } else {
        EXIT_GENERATION_FAIL
    }
}

/// Generate a slide and report it
pub fn run_slide(opts: &SlideOptions, generator: &dyn ImageGenerator) -> i32 {
    let start = Instant::now();

    match generate_slide(opts, generator) {
        Ok(result) => {
            log_slide_done(
                opts.format,
                &result.path.to_string_lossy(),
                result.elapsed.as_millis() as u64,
            );
            EXIT_SUCCESS
        }
        Err(e) => {
            // Input errors are raised before the clock matters
            let elapsed_ms = if e.is_input_error() {
                0
            } else {
                start.elapsed().as_millis() as u64
            };
            log_slide_fail(opts.format, &e.to_string(), elapsed_ms);
            exit_code_for(&e)
        }
    }
}

/// Assemble a deck and report it
pub fn run_assemble(opts: &AssembleOptions) -> i32 {
    if opts.images_dir.as_os_str().is_empty() {
        log_assemble_fail(opts.format, "No images directory provided");
        return EXIT_INPUT_ERROR;
    }

    match assemble_slides(&opts.images_dir, &opts.output) {
        Ok(result) => {
            log_assemble_done(
                opts.format,
                &opts.output.to_string_lossy(),
                result.slide_count,
                result.bytes,
            );
            EXIT_SUCCESS
        }
        Err(e) => {
            log_assemble_fail(opts.format, &e.to_string());
            EXIT_GENERATION_FAIL
        }
    }
}
