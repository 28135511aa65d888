// Dashboard view model
use super::application::Application;
use super::metric::{AppMetrics, MetricsByApp};
use super::team::Team;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

static NO_METRICS: LazyLock<AppMetrics> = LazyLock::new(AppMetrics::new);

/// Everything one page render needs. Built fresh for every request.
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    pub teams: Vec<Team>,
    pub applications_by_team: HashMap<i64, Vec<Application>>,
    pub metrics_by_app: MetricsByApp,
    pub selected_team_id: Option<i64>,
}

impl DashboardView {
    pub fn new(
        teams: Vec<Team>,
        applications_by_team: HashMap<i64, Vec<Application>>,
        metrics_by_app: MetricsByApp,
    ) -> Self {
        Self {
            teams,
            applications_by_team,
            metrics_by_app,
            selected_team_id: None,
        }
    }

    pub fn with_selected_team(mut self, team_id: i64) -> Self {
        self.selected_team_id = Some(team_id);
        self
    }

    pub fn metrics_for_app(&self, app_code: &str) -> &AppMetrics {
        self.metrics_by_app.get(app_code).unwrap_or(&NO_METRICS)
    }

    pub fn applications_for_team(&self, team_id: i64) -> &[Application] {
        self.applications_by_team
            .get(&team_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Teams that have an application entry, in team order.
    pub fn visible_teams(&self) -> impl Iterator<Item = &Team> {
        self.teams
            .iter()
            .filter(|team| self.applications_by_team.contains_key(&team.id))
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DashboardView{{teams={}, applicationsByTeam={}, metricsByApp={}}}",
            self.teams.len(),
            self.applications_by_team.len(),
            self.metrics_by_app.len()
        )
    }
}
