//! OCR (Optical Character Recognition) Module
//!
//! Thin wrapper around the external Tesseract executable. The engine is an
//! opaque collaborator: this module only encodes the input image, drives the
//! process over pipes, and translates engine failures into crate errors.
//!
//! # Configuration
//!
//! Engine behavior is controlled via `OcrConfig` (see `config.rs`):
//! - `tesseract_cmd`: executable path or name (env `TESSERACT_CMD`)
//! - `languages`: ISO 639-2 codes passed via `-l` (env `OCR_LANGUAGES`)
//! - `dpi`: optional resolution hint (env `OCR_DPI`)

mod engine;

pub use engine::TesseractEngine;
