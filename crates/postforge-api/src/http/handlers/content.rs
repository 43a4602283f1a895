//! Generate and download handlers.

use std::time::Instant;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use postforge_core::format::{brief_metadata, build_filename, wrap_content_for_download};
use postforge_types::brief::ContentBrief;
use postforge_types::llm::Usage;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Response payload for a successful generate action.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub content: String,
    pub model: String,
    pub usage: Usage,
    /// Suggested download filename for this result.
    pub filename: String,
}

/// POST /api/v1/generate - Generate content for a brief.
pub async fn generate(
    State(state): State<AppState>,
    Json(brief): Json<ContentBrief>,
) -> Result<Json<ApiResponse<GenerateResponse>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let generated = state.generator.generate(&brief).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    let filename = build_filename(
        &brief.business_type,
        brief.platform.label(),
        brief.content_type.label(),
    );

    let resp = ApiResponse::success(
        GenerateResponse {
            content: generated.content,
            model: generated.model,
            usage: generated.usage,
            filename,
        },
        request_id,
        elapsed,
    )
    .with_link("self", "/api/v1/generate")
    .with_link("download", "/api/v1/download");

    Ok(Json(resp))
}

/// Body for the download endpoint: the generated content plus the brief
/// it was generated from (for the metadata header and filename).
#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    pub content: String,
    #[serde(flatten)]
    pub brief: ContentBrief,
}

/// POST /api/v1/download - Wrap content as a plain-text attachment.
pub async fn download(Json(body): Json<DownloadRequest>) -> Response {
    let document = wrap_content_for_download(&body.content, &brief_metadata(&body.brief));
    let filename = build_filename(
        &body.brief.business_type,
        body.brief.platform.label(),
        body.brief.content_type.label(),
    );

    (
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        document,
    )
        .into_response()
}
