use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("Image file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Tesseract OCR not found: {0}")]
    EngineUnavailable(String),

    #[error("OCR engine error: {0}")]
    Engine(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OcrError>;
