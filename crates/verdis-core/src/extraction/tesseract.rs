use crate::error::VerdisError;
use crate::extraction::TextExtractor;
use std::io::Write;
use std::process::Command;

/// Image OCR backend using the tesseract CLI.
pub struct TesseractExtractor;

impl TesseractExtractor {
    pub fn new() -> Self {
        TesseractExtractor
    }

    /// Check if tesseract is available on the system.
    pub fn is_available() -> bool {
        Command::new("tesseract")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl Default for TesseractExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for TesseractExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, VerdisError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| VerdisError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(bytes)
            .map_err(|e| VerdisError::Extraction(e.to_string()))?;

        // tesseract detects the image format from content, not extension
        let output = Command::new("tesseract")
            .arg(tmpfile.path())
            .arg("stdout")
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    VerdisError::TesseractNotFound
                } else {
                    VerdisError::Extraction(format!("tesseract failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(VerdisError::TesseractFailed { code, stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn backend_name(&self) -> &str {
        "tesseract"
    }
}
