//! End-to-end tests for the image processing operation.
//!
//! Engine-dependent paths run against a stub executable standing in for
//! Tesseract, so the suite does not require a Tesseract installation.

#![cfg(unix)]

use std::path::{Path, PathBuf};

use imgtext::{ImageProcessor, OcrConfig, OcrError};
use pretty_assertions::assert_eq;

fn write_stub_engine(dir: &Path, payload: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-tesseract");
    let script = format!("#!/bin/sh\ncat >/dev/null\nprintf '%s' '{}'\n", payload);
    std::fs::write(&path, script).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

fn write_test_image(dir: &Path) -> PathBuf {
    let path = dir.join("input.png");
    image::DynamicImage::new_rgb8(120, 80).save(&path).unwrap();
    path
}

fn stub_config(engine: &Path) -> OcrConfig {
    OcrConfig {
        tesseract_cmd: engine.to_str().unwrap().to_string(),
        languages: "eng".to_string(),
        dpi: None,
    }
}

#[test]
fn text_mode_writes_utf8_output() {
    let dir = tempfile::tempdir().unwrap();
    let engine = write_stub_engine(dir.path(), "hello world");
    let input = write_test_image(dir.path());
    let output = dir.path().join("result.txt");

    let processor = ImageProcessor::new(&stub_config(&engine));
    let written = processor
        .process(&input, Some(output.clone()), false)
        .unwrap();

    assert_eq!(written, output);
    let contents = std::fs::read_to_string(&output).unwrap();
    assert_eq!(contents, "hello world");
}

#[test]
fn pdf_mode_output_starts_with_pdf_magic() {
    let dir = tempfile::tempdir().unwrap();
    let engine = write_stub_engine(dir.path(), "%PDF-1.5 fake document body");
    let input = write_test_image(dir.path());
    let output = dir.path().join("result.pdf");

    let processor = ImageProcessor::new(&stub_config(&engine));
    processor.process(&input, Some(output.clone()), true).unwrap();

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[..4], b"%PDF");
}

#[test]
fn explicit_output_path_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let engine = write_stub_engine(dir.path(), "fresh text");
    let input = write_test_image(dir.path());
    let output = dir.path().join("existing.txt");
    std::fs::write(&output, "stale contents from an earlier run").unwrap();

    let processor = ImageProcessor::new(&stub_config(&engine));
    processor.process(&input, Some(output.clone()), false).unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "fresh text");
}

#[test]
fn repeated_runs_produce_identical_output() {
    let dir = tempfile::tempdir().unwrap();
    let engine = write_stub_engine(dir.path(), "deterministic result");
    let input = write_test_image(dir.path());
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");

    let processor = ImageProcessor::new(&stub_config(&engine));
    processor.process(&input, Some(first.clone()), false).unwrap();
    processor.process(&input, Some(second.clone()), false).unwrap();

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn missing_input_leaves_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let engine = write_stub_engine(dir.path(), "should never appear");
    let output = dir.path().join("never-written.txt");

    let processor = ImageProcessor::new(&stub_config(&engine));
    let err = processor
        .process(&dir.path().join("missing.png"), Some(output.clone()), false)
        .unwrap_err();

    assert!(matches!(err, OcrError::InputNotFound(_)));
    assert!(!output.exists());
}

#[test]
fn unavailable_engine_leaves_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_test_image(dir.path());
    let output = dir.path().join("never-written.pdf");

    let config = OcrConfig {
        tesseract_cmd: "/nonexistent/tesseract".to_string(),
        languages: "eng".to_string(),
        dpi: None,
    };
    let processor = ImageProcessor::new(&config);
    let err = processor
        .process(&input, Some(output.clone()), true)
        .unwrap_err();

    assert!(matches!(err, OcrError::EngineUnavailable(_)));
    assert!(!output.exists());
}
