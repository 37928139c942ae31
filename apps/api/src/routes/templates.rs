use axum::Json;
use serde::Serialize;

use crate::render::Theme;

#[derive(Debug, Serialize)]
pub struct TemplateInfo {
    pub id: Theme,
    pub name: &'static str,
    pub description: &'static str,
}

/// GET /api/templates
/// Theme catalog in display order.
pub async fn list_templates() -> Json<Vec<TemplateInfo>> {
    Json(
        Theme::ALL
            .into_iter()
            .map(|theme| TemplateInfo {
                id: theme,
                name: theme.label(),
                description: theme.description(),
            })
            .collect(),
    )
}
