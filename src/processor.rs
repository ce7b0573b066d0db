use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::OcrConfig;
use crate::error::{OcrError, Result};
use crate::ocr::TesseractEngine;

const DEFAULT_TEXT_OUTPUT: &str = "recognized.txt";
const DEFAULT_PDF_OUTPUT: &str = "output.pdf";

/// The single public operation: image in, text file or PDF out.
pub struct ImageProcessor {
    engine: TesseractEngine,
}

impl ImageProcessor {
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            engine: TesseractEngine::new(config),
        }
    }

    /// Process the image: either extract text or convert to a searchable PDF.
    ///
    /// Writes exactly one output artifact on success (overwriting any existing
    /// file) and returns the path it was written to. The write is only reached
    /// after successful recognition, so a detected failure leaves no partial
    /// file behind.
    pub fn process(
        &self,
        image_path: &Path,
        output_path: Option<PathBuf>,
        to_pdf: bool,
    ) -> Result<PathBuf> {
        if !image_path.exists() {
            return Err(OcrError::InputNotFound(image_path.to_path_buf()));
        }

        // Decode up front so an unreadable input is rejected before the
        // engine is ever started. The image is dropped when this frame ends.
        let img = image::open(image_path)?;

        if to_pdf {
            let pdf = self.engine.recognize_pdf(&img)?;
            let out = output_path.unwrap_or_else(|| default_output_path(true));
            fs::write(&out, pdf)?;
            info!("PDF created successfully: {}", out.display());
            Ok(out)
        } else {
            let text = self.engine.recognize_text(&img)?;
            let out = output_path.unwrap_or_else(|| default_output_path(false));
            fs::write(&out, text)?;
            info!("Text extracted and saved to: {}", out.display());
            Ok(out)
        }
    }
}

fn default_output_path(to_pdf: bool) -> PathBuf {
    if to_pdf {
        PathBuf::from(DEFAULT_PDF_OUTPUT)
    } else {
        PathBuf::from(DEFAULT_TEXT_OUTPUT)
    }
}
