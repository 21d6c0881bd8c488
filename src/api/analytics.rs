//! Analytics routes. The service computes these aggregates server-side;
//! the client only decodes and displays them.

use crate::errors::ServiceError;
use crate::models::{AchievementBreakdown, AnalyticsSummary, GoalProgressPoint};

use super::ApiClient;

const RESOURCE: &str = "analytics";

impl ApiClient {
    /// Headline numbers for the insights view.
    pub async fn analytics_summary(&self) -> Result<AnalyticsSummary, ServiceError> {
        self.get_json("/analytics", RESOURCE).await
    }

    /// Per-goal progress points, one per goal, named by goal title.
    pub async fn goal_progress(&self) -> Result<Vec<GoalProgressPoint>, ServiceError> {
        self.get_json("/analytics/goal-progress", RESOURCE).await
    }

    /// Achievement totals broken down by category.
    pub async fn achievement_breakdown(&self) -> Result<AchievementBreakdown, ServiceError> {
        self.get_json("/analytics/achievements", RESOURCE).await
    }
}
