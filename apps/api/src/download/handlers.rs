use std::fmt::Write as _;

use anyhow::anyhow;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::download::archive::{build_site_archive, SiteBundle};
use crate::download::readme::generate_readme;
use crate::download::upload::read_download_form;
use crate::errors::AppError;
use crate::models::{PortfolioData, ResumeRef};
use crate::portfolio::missing_download_fields;
use crate::render::Theme;
use crate::state::AppState;

const ARCHIVE_SUFFIX: &str = "_Portfolio.zip";

/// POST /api/download
pub async fn handle_download(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, AppError> {
    let download_id = Uuid::new_v4();
    let form = read_download_form(multipart?, state.config.resume_max_bytes).await?;

    let raw = form
        .portfolio_data
        .ok_or_else(|| AppError::BadRequest("Missing portfolioData field".to_string()))?;
    if raw.len() > state.config.json_max_bytes {
        return Err(AppError::PayloadTooLarge(
            "portfolioData is too large".to_string(),
        ));
    }
    let mut data: PortfolioData = serde_json::from_str(&raw)
        .map_err(|e| AppError::BadRequest(format!("Invalid portfolioData: {e}")))?;

    if !missing_download_fields(&data).is_empty() {
        return Err(AppError::Validation(
            "Name and email are required".to_string(),
        ));
    }

    let template = form.template.as_deref().unwrap_or_default();
    let theme = Theme::from_id(template);

    // index.html links ./resume.pdf only when the archive will contain it.
    data.resume = form.resume.map(|upload| ResumeRef {
        file_name: upload.file_name,
        bytes: upload.bytes,
    });

    let index_html = state.renderer.render_id(&data, template);
    let bundle = SiteBundle {
        index_html,
        resume: data.resume.as_ref().map(|r| r.bytes.clone()),
        readme: generate_readme(&data, theme, Utc::now()),
    };
    let resume_bytes = bundle.resume.as_ref().map_or(0, |b| b.len());

    let archive = tokio::task::spawn_blocking(move || build_site_archive(&bundle))
        .await
        .map_err(|e| AppError::Internal(anyhow!("spawn_blocking failed building archive: {e}")))??;

    info!(
        %download_id,
        template = theme.id(),
        resume_bytes,
        archive_bytes = archive.len(),
        "Built portfolio archive"
    );

    let disposition = content_disposition(&archive_file_name(&data.personal.name));
    let disposition = HeaderValue::from_str(&disposition)
        .map_err(|e| AppError::Internal(anyhow!("invalid Content-Disposition header: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/zip")),
            (header::CONTENT_DISPOSITION, disposition),
            (header::CACHE_CONTROL, HeaderValue::from_static("no-cache")),
        ],
        archive,
    )
        .into_response())
}

/// `Ada Lovelace` → `Ada_Lovelace_Portfolio.zip`. Whitespace runs collapse to one `_`.
pub fn archive_file_name(owner: &str) -> String {
    let stem = owner.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{stem}{ARCHIVE_SUFFIX}")
}

/// `attachment` disposition with an ASCII `filename` and an RFC 5987 `filename*`.
pub fn content_disposition(file_name: &str) -> String {
    let ascii: String = file_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect();

    let mut encoded = String::with_capacity(file_name.len());
    for byte in file_name.bytes() {
        if byte.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&byte) {
            encoded.push(char::from(byte));
        } else {
            let _ = write!(encoded, "%{byte:02X}");
        }
    }

    format!("attachment; filename=\"{ascii}\"; filename*=UTF-8''{encoded}")
}
