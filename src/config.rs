use serde::Deserialize;
use std::env;

fn parse_env_opt<T: std::str::FromStr>(var: &str) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Ignoring.", val, var, e);
                None
            }
        },
        Err(_) => None,
    }
}

/// OCR engine configuration, read from the environment.
///
/// The Tesseract executable location is injectable via `TESSERACT_CMD` so the
/// same binary works across platforms and package layouts (`/usr/bin/tesseract`,
/// `C:\Program Files\Tesseract-OCR\tesseract.exe`, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    pub tesseract_cmd: String,
    pub languages: String,
    pub dpi: Option<u32>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract_cmd: env::var("TESSERACT_CMD").unwrap_or_else(|_| "tesseract".to_string()),
            languages: env::var("OCR_LANGUAGES").unwrap_or_else(|_| "eng".to_string()),
            dpi: parse_env_opt("OCR_DPI"),
        }
    }
}

impl OcrConfig {
    pub fn from_env() -> Self {
        Self::default()
    }
}
