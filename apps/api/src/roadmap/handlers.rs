//! Axum route handler for roadmap generation.
//!
//! Accepts a multipart form with either one `file` field (txt/pdf/doc/docx)
//! or a `content` text field. An uploaded file is written under the uploads
//! directory, its text extracted, and the transient file removed again on
//! every path (including extraction failure) before the response is built.

use std::path::Path;

use anyhow::Context;
use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde_json::{json, Value};
use tokio::fs;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::roadmap::extract::{extract_text, is_allowed_file};
use crate::roadmap::generator::generate_roadmap;
use crate::state::AppState;

/// POST /generate-roadmap
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let llm = state.llm.as_ref().ok_or(AppError::Configuration)?;

    let mut upload: Option<(String, Bytes)> = None;
    let mut pasted: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                if upload.is_none() && !filename.is_empty() {
                    upload = Some((filename, field.bytes().await?));
                }
            }
            "content" => pasted = Some(field.text().await?),
            _ => {}
        }
    }

    // A file with a non-empty filename takes precedence and suppresses the
    // pasted content entirely, even when it contributes no text.
    let content = match &upload {
        Some((filename, bytes)) => {
            save_extract_remove(&state.config.upload_dir, filename, bytes).await?
        }
        None => pasted.filter(|text| !text.is_empty()),
    };

    let content = content
        .filter(|text| !text.trim().is_empty())
        .ok_or(AppError::NoContent)?;

    info!("Generating roadmap from {} chars of content", content.len());
    let roadmap = generate_roadmap(llm, &content).await?;

    Ok(Json(json!({ "success": true, "roadmap": roadmap })))
}

/// Writes the upload to a transient file, attempts extraction, and removes
/// the file before returning. Files failing the acceptance filter are never
/// written and contribute no content.
async fn save_extract_remove(
    upload_dir: &Path,
    filename: &str,
    bytes: &[u8],
) -> Result<Option<String>, AppError> {
    if !is_allowed_file(filename) {
        return Ok(None);
    }

    let safe = sanitize_filename(filename);
    if safe.is_empty() {
        return Ok(None);
    }

    let path = upload_dir.join(&safe);
    fs::write(&path, bytes)
        .await
        .context("failed to save upload")?;

    let text = extract_text(&path, &safe);

    if let Err(e) = fs::remove_file(&path).await {
        warn!("Failed to remove transient upload {}: {e}", path.display());
    }

    Ok(text)
}

/// Reduces a client-supplied filename to a safe single path component:
/// the last path segment, whitespace collapsed to underscores, anything
/// outside `[A-Za-z0-9._-]` dropped, leading/trailing dots and underscores
/// stripped. Sanitized names are NOT uniquified per request, so concurrent
/// uploads of identically-named files race (last writer wins).
fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let kept: String = base
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    kept.trim_matches(['.', '_']).to_string()
}
