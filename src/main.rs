// ABOUTME: Main entry point for the slidegen program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use anyhow::Context;
use clap::{Args, CommandFactory, Parser, Subcommand};
use log::warn;
use slidegen::config::{DEFAULT_DECK_PATH, DEFAULT_MODEL, DEFAULT_SLIDES_DIR};
use slidegen::{
    AssembleOptions, Config, GeminiClient, OutputFormat, SlideOptions, EXIT_INPUT_ERROR,
    EXIT_SUCCESS,
};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

const AFTER_HELP: &str = "Workflow:
  slidegen slide \"Your prompt here\"     Generate a slide image
  slidegen assemble ./slides            Assemble images into a .pptx

Environment:
  GEMINI_API_KEY   Google Gemini API key (required for slide command)

Exit codes:
  0  Success
  1  Generation / assembly failure
  2  Input error (missing prompt, bad arguments)";

/// slidegen: generate slide images and assemble PowerPoint decks
#[derive(Parser)]
#[command(author, version, about, long_about = None, after_help = AFTER_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a single slide image from a text prompt
    Slide(SlideArgs),

    /// Combine a directory of images into a PowerPoint file
    Assemble(AssembleArgs),
}

#[derive(Args)]
#[command(after_help = "The prompt may also be piped via stdin: echo \"prompt\" | slidegen slide")]
struct SlideArgs {
    /// Prompt text; read from stdin when omitted
    prompt: Vec<String>,

    /// Output directory
    #[arg(short, long, default_value = DEFAULT_SLIDES_DIR)]
    dir: PathBuf,

    /// File name without extension (default: auto-increment)
    #[arg(short, long)]
    name: Option<String>,

    /// Gemini model to use
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Style preset: engineer, apple or vercel
    #[arg(short, long)]
    style: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args)]
struct AssembleArgs {
    /// Directory containing slide images
    images_dir: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = DEFAULT_DECK_PATH)]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read prompt from stdin")?;
    Ok(buf.trim().to_string())
}

fn run_slide_command(args: SlideArgs) -> i32 {
    let mut prompt = args.prompt.join(" ");
    if prompt.is_empty() && !io::stdin().is_terminal() {
        prompt = match read_stdin() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                return EXIT_INPUT_ERROR;
            }
        };
    }

    if prompt.is_empty() {
        eprintln!("Error: No prompt provided. Pass as argument or pipe via stdin.");
        eprintln!("Usage: slidegen slide \"Your prompt here\"");
        return EXIT_INPUT_ERROR;
    }

    let opts = SlideOptions {
        prompt,
        dir: args.dir,
        name: args.name,
        model: args.model,
        style: args.style,
        format: args.format,
    };
    let client = GeminiClient::new(Config::from_env());
    slidegen::run_slide(&opts, &client)
}

fn run_assemble_command(args: AssembleArgs) -> i32 {
    let Some(images_dir) = args.images_dir else {
        eprintln!("Error: No images directory provided.");
        eprintln!("Usage: slidegen assemble <images_dir>");
        return EXIT_INPUT_ERROR;
    };

    let opts = AssembleOptions {
        images_dir,
        output: args.output,
        format: args.format,
    };
    slidegen::run_assemble(&opts)
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if let Err(err) = e.print() {
                warn!("Failed to print usage: {}", err);
            }
            return if e.use_stderr() {
                EXIT_INPUT_ERROR
            } else {
                EXIT_SUCCESS
            };
        }
    };

    match cli.command {
        Some(Commands::Slide(args)) => run_slide_command(args),
        Some(Commands::Assemble(args)) => run_assemble_command(args),
        None => {
            if let Err(err) = Cli::command().print_help() {
                warn!("Failed to print help: {}", err);
            }
            println!();
            EXIT_SUCCESS
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    std::process::exit(run());
}
