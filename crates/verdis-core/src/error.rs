use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum VerdisError {
    #[error("text extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("tesseract not found. Install tesseract: brew install tesseract (macOS) or apt install tesseract-ocr (Linux)")]
    TesseractNotFound,

    #[error("tesseract failed with exit code {code}: {stderr}")]
    TesseractFailed { code: i32, stderr: String },

    #[error("failed to load factor table from {path}: {reason}")]
    FactorTableLoad { path: PathBuf, reason: String },

    #[error("invalid factor table: {0}")]
    FactorTableInvalid(String),

    #[error("failed to import transactions: {0}")]
    BatchImport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
