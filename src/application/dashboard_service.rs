// Dashboard service - Use case for assembling the dashboard view
use crate::application::repositories::{ApplicationRepository, MetricRepository, TeamRepository};
use crate::domain::dashboard::DashboardView;
use crate::domain::metric::{group_metrics_by_application, MetricsByApp};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    teams: Arc<dyn TeamRepository>,
    applications: Arc<dyn ApplicationRepository>,
    metrics: Arc<dyn MetricRepository>,
}

impl DashboardService {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        applications: Arc<dyn ApplicationRepository>,
        metrics: Arc<dyn MetricRepository>,
    ) -> Self {
        Self {
            teams,
            applications,
            metrics,
        }
    }

    /// View over every enabled team and its applications.
    pub async fn build_dashboard(&self) -> anyhow::Result<DashboardView> {
        let teams = self.teams.list_enabled_teams().await?;

        // One query per team, in team order
        let mut applications_by_team = HashMap::with_capacity(teams.len());
        for team in &teams {
            let apps = self.applications.list_applications_for_team(team.id).await?;
            applications_by_team.insert(team.id, apps);
        }

        let metrics_by_app = self.fetch_metrics().await;

        let view = DashboardView::new(teams, applications_by_team, metrics_by_app);
        tracing::debug!("Built dashboard {}", view);
        Ok(view)
    }

    /// View restricted to one team's applications. All teams are still
    /// loaded for the selector, and metrics are not filtered.
    pub async fn build_dashboard_for_team(&self, team_id: i64) -> anyhow::Result<DashboardView> {
        let teams = self.teams.list_enabled_teams().await?;

        let apps = self.applications.list_applications_for_team(team_id).await?;
        let mut applications_by_team = HashMap::with_capacity(1);
        applications_by_team.insert(team_id, apps);

        let metrics_by_app = self.fetch_metrics().await;

        let view = DashboardView::new(teams, applications_by_team, metrics_by_app)
            .with_selected_team(team_id);
        tracing::debug!("Built dashboard for team {}: {}", team_id, view);
        Ok(view)
    }

    async fn fetch_metrics(&self) -> MetricsByApp {
        let metrics = self.metrics.list_current_metrics().await;
        group_metrics_by_application(metrics)
    }
}
