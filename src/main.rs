use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imgtext::{ImageProcessor, OcrConfig, OcrError};

#[derive(Parser)]
#[command(name = "imgtext")]
#[command(about = "Extract text from an image using Tesseract OCR")]
struct Args {
    /// Path to the input image
    image_path: PathBuf,

    /// Path to the output file (defaults to recognized.txt, or output.pdf with --pdf)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Convert the image to a searchable PDF instead of extracting text
    #[arg(long)]
    pdf: bool,

    /// Override the configured OCR languages (e.g. "eng+deu")
    #[arg(short, long)]
    lang: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imgtext=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = OcrConfig::from_env();
    if let Some(lang) = args.lang {
        config.languages = lang;
    }

    let processor = ImageProcessor::new(&config);
    match processor.process(&args.image_path, args.output, args.pdf) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // One log line per failure, naming the category. InputNotFound and
            // EngineUnavailable carry their category in their Display form.
            match &e {
                OcrError::InputNotFound(_) | OcrError::EngineUnavailable(_) => {
                    tracing::error!("{e}");
                }
                _ => tracing::error!("An unexpected error occurred: {e}"),
            }
            ExitCode::FAILURE
        }
    }
}
