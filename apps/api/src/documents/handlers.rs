//! Axum route handlers for document extraction.

use std::collections::HashMap;

use axum::extract::Multipart;
use axum::Json;
use serde::Serialize;

use crate::documents::{read_document, DocumentKind};
use crate::errors::AppError;
use crate::matching::text::summarize;

/// One file taken from a multipart body.
#[derive(Debug)]
pub struct Upload {
    pub file_name: String,
    pub bytes: bytes::Bytes,
}

#[derive(Debug, Serialize)]
pub struct ExtractDocumentResponse {
    pub file_name: String,
    pub kind: DocumentKind,
    pub text: String,
    pub summary: String,
}

/// Reads every file part of a multipart body, keyed by field name.
/// Parts without a file name are rejected; a repeated field keeps the last file.
pub async fn collect_uploads(mut multipart: Multipart) -> Result<HashMap<String, Upload>, AppError> {
    let mut uploads = HashMap::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation(format!("field '{name}' must be a file upload")))?;
        let bytes = field.bytes().await?;
        uploads.insert(name, Upload { file_name, bytes });
    }

    Ok(uploads)
}

/// Removes a required file from `uploads`.
pub fn take_upload(uploads: &mut HashMap<String, Upload>, field: &str) -> Result<Upload, AppError> {
    uploads
        .remove(field)
        .ok_or_else(|| AppError::Validation(format!("missing file field '{field}'")))
}

/// POST /api/v1/documents/extract
///
/// Multipart field `file`. Returns the extracted text and a short summary.
pub async fn handle_extract_document(
    multipart: Multipart,
) -> Result<Json<ExtractDocumentResponse>, AppError> {
    let mut uploads = collect_uploads(multipart).await?;
    let upload = take_upload(&mut uploads, "file")?;

    let kind = DocumentKind::from_file_name(&upload.file_name);
    let text = read_document(&upload.file_name, upload.bytes).await?;
    let summary = summarize(&text);

    Ok(Json(ExtractDocumentResponse {
        file_name: upload.file_name,
        kind,
        text,
        summary,
    }))
}
