//! imgtext: extract text or a searchable PDF from an image via Tesseract OCR.

pub mod config;
pub mod error;
pub mod ocr;
pub mod processor;

pub use config::OcrConfig;
pub use error::{OcrError, Result};
pub use processor::ImageProcessor;
