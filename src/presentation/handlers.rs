// HTTP request handlers
use crate::presentation::app_state::AppState;
use crate::presentation::dashboard_page::render_dashboard;
use crate::presentation::error::ApiError;
use axum::extract::{Query, State};
use axum::response::Html;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    #[serde(rename = "teamId", default, deserialize_with = "empty_as_none")]
    pub team_id: Option<i64>,
}

// The "All teams" selector option submits `teamId=`
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Dashboard page, optionally narrowed to one team
pub async fn show_dashboard(
    Query(query): Query<DashboardQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ApiError> {
    let view = match query.team_id {
        Some(team_id) => state.dashboard_service.build_dashboard_for_team(team_id).await?,
        None => state.dashboard_service.build_dashboard().await?,
    };

    Ok(Html(render_dashboard(&view)))
}
