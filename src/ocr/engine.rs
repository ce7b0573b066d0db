use std::io::Write;
use std::process::{Command, Stdio};

use image::DynamicImage;
use tracing::debug;

use crate::config::OcrConfig;
use crate::error::{OcrError, Result};

/// Wrapper around the external Tesseract executable.
///
/// The engine is driven entirely over pipes: the input image is encoded as an
/// in-memory PNG and written to the child's stdin, and the recognition result
/// is read back from stdout. No temporary files are created.
pub struct TesseractEngine {
    config: OcrConfig,
}

impl TesseractEngine {
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Extract plain text from the image.
    pub fn recognize_text(&self, image: &DynamicImage) -> Result<String> {
        let output = self.run(image, None)?;
        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    /// Render the recognition result as a searchable PDF document.
    ///
    /// The returned bytes are the engine's PDF output, passed through verbatim.
    pub fn recognize_pdf(&self, image: &DynamicImage) -> Result<Vec<u8>> {
        self.run(image, Some("pdf"))
    }

    fn run(&self, image: &DynamicImage, output_config: Option<&str>) -> Result<Vec<u8>> {
        let png = encode_png(image)?;

        let mut cmd = Command::new(&self.config.tesseract_cmd);
        cmd.arg("stdin")
            .arg("stdout")
            .arg("-l")
            .arg(&self.config.languages);
        if let Some(dpi) = self.config.dpi {
            cmd.arg("--dpi").arg(dpi.to_string());
        }
        if let Some(config_name) = output_config {
            cmd.arg(config_name);
        }

        debug!(
            cmd = %self.config.tesseract_cmd,
            languages = %self.config.languages,
            "Invoking OCR engine"
        );

        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                    OcrError::EngineUnavailable(format!(
                        "'{}' could not be started ({e}). Install Tesseract or set TESSERACT_CMD.",
                        self.config.tesseract_cmd
                    ))
                }
                _ => OcrError::Io(e),
            })?;

        // stdin is piped above, so take() always yields a handle; the handle
        // must be dropped before wait so the child sees EOF.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(&png)?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(OcrError::Engine(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        Ok(output.stdout)
    }
}

fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    image.write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)?;
    Ok(buf)
}
