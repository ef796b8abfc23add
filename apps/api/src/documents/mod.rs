//! Document reader — turns an uploaded file into plain text.
//!
//! The file kind is resolved once from the file name and every kind is handled
//! explicitly. Failures are returned as `DocumentError`; an empty document is not
//! an error and yields an empty string.

pub mod docx;
pub mod handlers;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
    Unsupported(String),
}

impl DocumentKind {
    /// Resolves the kind from the extension after the last `.`, ignoring case.
    pub fn from_file_name(file_name: &str) -> Self {
        let extension = match file_name.rsplit_once('.') {
            Some((_, ext)) => ext.to_lowercase(),
            None => return DocumentKind::Unsupported(String::new()),
        };
        match extension.as_str() {
            "pdf" => DocumentKind::Pdf,
            "docx" | "doc" => DocumentKind::Docx,
            "txt" => DocumentKind::Txt,
            _ => DocumentKind::Unsupported(extension),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
            DocumentKind::Txt => "txt",
            DocumentKind::Unsupported(ext) => ext,
        }
    }
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("unsupported document format: '{0}' (expected pdf, docx, doc or txt)")]
    UnsupportedFormat(String),

    #[error("failed to extract text from {kind} document: {reason}")]
    ExtractionFailed { kind: String, reason: String },
}

impl DocumentError {
    fn extraction(kind: &DocumentKind, reason: impl ToString) -> Self {
        DocumentError::ExtractionFailed {
            kind: kind.label().to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Extracts plain text from `bytes`, dispatching on the kind implied by `file_name`.
///
/// Decoding is CPU-bound and the PDF decoder may panic on malformed input, so the
/// work runs on the blocking pool and a panic is reported as `ExtractionFailed`.
pub async fn read_document(file_name: &str, bytes: bytes::Bytes) -> Result<String, DocumentError> {
    let kind = DocumentKind::from_file_name(file_name);
    if let DocumentKind::Unsupported(ext) = &kind {
        warn!("Rejected upload '{file_name}' with unsupported extension '{ext}'");
        return Err(DocumentError::UnsupportedFormat(ext.clone()));
    }

    let task_kind = kind.clone();
    let text = tokio::task::spawn_blocking(move || decode(&task_kind, &bytes))
        .await
        .map_err(|e| DocumentError::extraction(&kind, format!("decoder aborted: {e}")))??;

    debug!(
        "Extracted {} chars from '{}' ({})",
        text.len(),
        file_name,
        kind.label()
    );
    Ok(text)
}

/// Synchronous decoding for a resolved kind.
pub fn decode(kind: &DocumentKind, bytes: &[u8]) -> Result<String, DocumentError> {
    match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| DocumentError::extraction(kind, e)),
        DocumentKind::Docx => {
            docx::extract_text(bytes).map_err(|e| DocumentError::extraction(kind, e))
        }
        DocumentKind::Txt => String::from_utf8(bytes.to_vec())
            .map_err(|e| DocumentError::extraction(kind, format!("invalid UTF-8: {e}"))),
        DocumentKind::Unsupported(ext) => Err(DocumentError::UnsupportedFormat(ext.clone())),
    }
}
