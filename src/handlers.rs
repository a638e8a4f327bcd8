use crate::constants::SERVICE_NAME;
use crate::error::{AppError, Result};
use crate::models::{HealthResponse, UploadResponse, UploadedFile};
use axum::{extract::Multipart, Json};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(health, upload),
    components(schemas(HealthResponse, UploadResponse)),
    tags(
        (name = "memeforge", description = "Intentionally vulnerable upload demo")
    ),
    info(
        title = "MemeForge API",
        version = "0.1.0",
        description = "Meme generator demo app for web-security training.\n\n\
                      ## Intentional vulnerabilities\n\
                      - Hardcoded fallback secret key\n\
                      - Unrestricted file upload (no extension or MIME validation)\n\
                      - Verbose error disclosure on upload failures\n\
                      - Debug mode toggled by environment\n\n\
                      Do NOT deploy this service anywhere reachable. Students \
                      are expected to add the missing controls themselves.",
        license(name = "MIT"),
    )
)]
pub struct ApiDoc;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "memeforge",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

/// Receive a meme image upload
///
/// Accepts any file without extension validation, MIME verification, or
/// content scanning, and reports the client-supplied metadata back. The
/// payload is read into memory and discarded; nothing is saved.
#[utoipa::path(
    post,
    path = "/upload",
    tag = "memeforge",
    request_body(content = inline(Vec<u8>), description = "Multipart form with a `file` part", content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File received", body = UploadResponse),
        (status = 400, description = "No file provided, or empty filename"),
        (status = 500, description = "Upload failed (raw error detail in body)")
    )
)]
pub async fn upload(mut multipart: Multipart) -> Result<Json<UploadResponse>> {
    let mut file: Option<UploadedFile> = None;

    // Take the first part named "file"; everything else is ignored.
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::UploadFailed(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_string();
        if filename.is_empty() {
            return Err(AppError::BadRequest("No file selected".to_string()));
        }

        let content_type = field.content_type().map(str::to_string);

        // Read the payload fully into memory. Bounded only by the global
        // body limit installed on the router, not by this handler.
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::UploadFailed(e.to_string()))?;

        file = Some(UploadedFile::new(filename, content_type, data));
        break;
    }

    let file = file.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;

    tracing::debug!(
        filename = %file.filename,
        size_bytes = file.size_bytes(),
        "received upload (not validated or saved)"
    );

    Ok(Json(UploadResponse {
        success: true,
        filename: file.filename.clone(),
        content_type: file.content_type_or_unknown(),
        extension: file.extension(),
        size_bytes: file.size_bytes(),
        message: "File received (not validated or saved)".to_string(),
    }))
}
