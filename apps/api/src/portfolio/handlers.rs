use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::PortfolioData;
use crate::portfolio::completeness::{compute_completeness_report, CompletenessReport};
use crate::portfolio::validation::{validate_portfolio, ValidationIssue};
use crate::render::Theme;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    #[serde(default)]
    pub portfolio_data: Option<PortfolioData>,
    #[serde(default)]
    pub template: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub html: String,
    /// The theme actually used, after the unknown-id fallback.
    pub template: Theme,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    #[serde(default)]
    pub portfolio_data: Option<PortfolioData>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub passed: bool,
    pub issues: Vec<ValidationIssue>,
    pub completeness: CompletenessReport,
}

/// POST /api/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Result<Json<PreviewResponse>, AppError> {
    let Json(req) = payload?;
    let data = req.portfolio_data.unwrap_or_default();
    let template = req.template.as_deref().unwrap_or_default();
    let theme = Theme::from_id(template);

    let html = state.renderer.render_id(&data, template);
    info!(
        template = theme.id(),
        html_bytes = html.len(),
        "Rendered portfolio preview"
    );

    Ok(Json(PreviewResponse {
        html,
        template: theme,
    }))
}

/// POST /api/validate
pub async fn handle_validate(
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidateResponse>, AppError> {
    let Json(req) = payload?;
    let data = req.portfolio_data.unwrap_or_default();

    let issues = validate_portfolio(&data);
    Ok(Json(ValidateResponse {
        passed: issues.is_empty(),
        issues,
        completeness: compute_completeness_report(&data),
    }))
}
