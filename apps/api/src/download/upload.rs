use axum::extract::multipart::{Field, Multipart};
use bytes::{Bytes, BytesMut};

use crate::errors::AppError;

pub const PORTFOLIO_FIELD: &str = "portfolioData";
pub const TEMPLATE_FIELD: &str = "template";
pub const RESUME_FIELD: &str = "resume";

const PDF_MIME: &str = "application/pdf";

/// Text fields and the optional resume from a download request.
#[derive(Debug, Default)]
pub struct DownloadForm {
    pub portfolio_data: Option<String>,
    pub template: Option<String>,
    pub resume: Option<UploadedResume>,
}

#[derive(Debug, Clone)]
pub struct UploadedResume {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

/// Reads the whole form. The resume is checked for type before any of it is read
/// and for size chunk by chunk, so an oversized upload is never fully buffered.
pub async fn read_download_form(
    mut multipart: Multipart,
    resume_max_bytes: usize,
) -> Result<DownloadForm, AppError> {
    let mut form = DownloadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        match name.as_str() {
            PORTFOLIO_FIELD => form.portfolio_data = Some(field.text().await?),
            TEMPLATE_FIELD => form.template = Some(field.text().await?),
            RESUME_FIELD => {
                // Browsers send an empty part when no file was picked.
                if field.file_name().is_some_and(str::is_empty) {
                    continue;
                }
                if form.resume.is_some() {
                    return Err(AppError::BadRequest(
                        "Only one resume file is allowed".to_string(),
                    ));
                }
                check_resume_type(field.content_type())?;
                form.resume = Some(read_resume(field, resume_max_bytes).await?);
            }
            _ => {}
        }
    }

    Ok(form)
}

async fn read_resume(mut field: Field<'_>, max_bytes: usize) -> Result<UploadedResume, AppError> {
    let file_name = field.file_name().map(str::to_owned);
    let mut buf = BytesMut::new();
    while let Some(chunk) = field.chunk().await? {
        append_within_limit(&mut buf, &chunk, max_bytes)?;
    }
    Ok(UploadedResume {
        file_name,
        bytes: buf.freeze(),
    })
}

/// Only PDF uploads are accepted; parameters such as `; name=...` are ignored.
pub fn check_resume_type(content_type: Option<&str>) -> Result<(), AppError> {
    let essence = content_type
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
        .unwrap_or_default();
    if essence.eq_ignore_ascii_case(PDF_MIME) {
        Ok(())
    } else {
        Err(AppError::UnsupportedMediaType(
            "Only PDF files are allowed".to_string(),
        ))
    }
}

pub fn append_within_limit(buf: &mut BytesMut, chunk: &[u8], max_bytes: usize) -> Result<(), AppError> {
    if buf.len().saturating_add(chunk.len()) > max_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "Resume must be at most {}",
            human_size(max_bytes)
        )));
    }
    buf.extend_from_slice(chunk);
    Ok(())
}

fn human_size(bytes: usize) -> String {
    const MIB: usize = 1024 * 1024;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{} MB", bytes / MIB)
    } else {
        format!("{bytes} bytes")
    }
}
