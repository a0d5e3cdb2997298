// ABOUTME: Result reporting for the slidegen application
// ABOUTME: Renders command outcomes as one-line text or JSON on stdout and stderr

use clap::ValueEnum;
use serde::Serialize;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct SlideDone<'a> {
    status: &'static str,
    image: &'a str,
    ms: u64,
}

#[derive(Serialize)]
struct SlideFail<'a> {
    status: &'static str,
    error: &'a str,
    ms: u64,
}

#[derive(Serialize)]
struct AssembleDone<'a> {
    status: &'static str,
    output: &'a str,
    slides: usize,
    bytes: u64,
}

#[derive(Serialize)]
struct AssembleFail<'a> {
    status: &'static str,
    error: &'a str,
}

fn to_json<T: Serialize>(event: &T) -> String {
    // Plain structs of strings and integers always serialize
    serde_json::to_string(event).unwrap_or_default()
}

pub fn format_slide_done(format: OutputFormat, image_path: &str, elapsed_ms: u64) -> String {
    match format {
        OutputFormat::Json => to_json(&SlideDone {
            status: "done",
            image: image_path,
            ms: elapsed_ms,
        }),
        OutputFormat::Text => {
            format!("done: {} ({:.1}s)", image_path, elapsed_ms as f64 / 1000.0)
        }
    }
}

pub fn format_slide_fail(format: OutputFormat, message: &str, elapsed_ms: u64) -> String {
    match format {
        OutputFormat::Json => to_json(&SlideFail {
            status: "fail",
            error: message,
            ms: elapsed_ms,
        }),
        OutputFormat::Text => format!("fail: {}", message),
    }
}

pub fn format_assemble_done(
    format: OutputFormat,
    output_path: &str,
    slide_count: usize,
    bytes: u64,
) -> String {
    match format {
        OutputFormat::Json => to_json(&AssembleDone {
            status: "done",
            output: output_path,
            slides: slide_count,
            bytes,
        }),
        OutputFormat::Text => {
            let mb = bytes as f64 / 1_000_000.0;
            let plural = if slide_count == 1 { "" } else { "s" };
            format!(
                "done: {} ({} slide{}, {:.1} MB)",
                output_path, slide_count, plural, mb
            )
        }
    }
}

pub fn format_assemble_fail(format: OutputFormat, message: &str) -> String {
    match format {
        OutputFormat::Json => to_json(&AssembleFail {
            status: "fail",
            error: message,
        }),
        OutputFormat::Text => format!("fail: {}", message),
    }
}

pub fn log_slide_done(format: OutputFormat, image_path: &str, elapsed_ms: u64) {
    println!("{}", format_slide_done(format, image_path, elapsed_ms));
}

pub fn log_slide_fail(format: OutputFormat, message: &str, elapsed_ms: u64) {
    eprintln!("{}", format_slide_fail(format, message, elapsed_ms));
}

pub fn log_assemble_done(format: OutputFormat, output_path: &str, slide_count: usize, bytes: u64) {
    println!(
        "{}",
        format_assemble_done(format, output_path, slide_count, bytes)
    );
}

pub fn log_assemble_fail(format: OutputFormat, message: &str) {
    eprintln!("{}", format_assemble_fail(format, message));
}
