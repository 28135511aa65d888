// Repository traits for dashboard data access
use crate::domain::application::Application;
use crate::domain::metric::Metric;
use crate::domain::team::Team;
use async_trait::async_trait;

#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// All enabled teams, ordered by name
    async fn list_enabled_teams(&self) -> anyhow::Result<Vec<Team>>;
}

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// All enabled applications, ordered by name
    async fn list_enabled_applications(&self) -> anyhow::Result<Vec<Application>>;

    /// Enabled applications associated with a team, ordered by name
    async fn list_applications_for_team(&self, team_id: i64) -> anyhow::Result<Vec<Application>>;
}

#[async_trait]
pub trait MetricRepository: Send + Sync {
    /// Current metrics ordered by app code then metric code.
    ///
    /// Never fails: a store outage yields an empty list so the dashboard
    /// degrades to "no data".
    async fn list_current_metrics(&self) -> Vec<Metric>;
}
