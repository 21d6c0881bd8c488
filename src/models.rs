//! Domain records exchanged with the Stride service.
//!
//! The server owns every record; the client holds read-through copies that
//! are replaced wholesale on each fetch. Wire format is JSON with camelCase
//! field names and kebab-case enum tags.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl GoalStatus {
    pub const ALL: [GoalStatus; 3] = [Self::NotStarted, Self::InProgress, Self::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Human label as shown in list headers ("Planning" for not-started,
    /// mirroring the web UI's wording).
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "Planning",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not-started" => Ok(Self::NotStarted),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(format!(
                "Invalid goal status '{}'. Valid values: not-started, in-progress, completed",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Personal,
    Professional,
    Health,
    Learning,
}

impl AchievementCategory {
    pub const ALL: [AchievementCategory; 4] = [
        Self::Personal,
        Self::Professional,
        Self::Health,
        Self::Learning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Professional => "professional",
            Self::Health => "health",
            Self::Learning => "learning",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Professional => "Professional",
            Self::Health => "Health",
            Self::Learning => "Learning",
        }
    }
}

impl std::fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AchievementCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personal" => Ok(Self::Personal),
            "professional" => Ok(Self::Professional),
            "health" => Ok(Self::Health),
            "learning" => Ok(Self::Learning),
            _ => Err(format!(
                "Invalid achievement category '{}'. Valid values: personal, professional, health, learning",
                s
            )),
        }
    }
}

/// A user-defined target with numeric progress toward `target` and a deadline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub current: f64,
    /// May legitimately be zero; progress reads as 0% in that case.
    pub target: f64,
    pub status: GoalStatus,
    pub priority: u8,
    /// Date string as sent by the server (RFC 3339 or `YYYY-MM-DD`).
    pub deadline: String,
    pub created_at: String,
}

/// Fields the client sends when creating or updating a goal; the server
/// assigns `id` and `createdAt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDraft {
    pub title: String,
    pub description: String,
    pub current: f64,
    pub target: f64,
    pub status: GoalStatus,
    pub priority: u8,
    pub deadline: String,
}

/// A logged accomplishment with a category and significance rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: AchievementCategory,
    pub significance: u8,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDraft {
    pub title: String,
    pub description: String,
    pub category: AchievementCategory,
    pub significance: u8,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: String,
}

// Server-computed analytics. These figures are authoritative where they
// exist; the client never recomputes them from raw lists (see DESIGN.md).

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_goals: u32,
    pub completed_goals: u32,
    pub total_achievements: u32,
    pub avg_completion_rate: f64,
}

/// One bar of the progress chart: a goal name and its percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgressPoint {
    pub name: String,
    pub progress: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AchievementBreakdown {
    pub total: u32,
    #[serde(default)]
    pub categories: BTreeMap<AchievementCategory, u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_status_roundtrip() {
        for s in &["not-started", "in-progress", "completed"] {
            let parsed: GoalStatus = s.parse().unwrap();
            assert_eq!(parsed.as_str(), *s);
        }
        assert!("paused".parse::<GoalStatus>().is_err());
    }

    #[test]
    fn test_achievement_category_roundtrip() {
        for s in &["personal", "professional", "health", "learning"] {
            let parsed: AchievementCategory = s.parse().unwrap();
            assert_eq!(parsed.as_str(), *s);
        }
        assert!("fitness".parse::<AchievementCategory>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_tags() {
        assert_eq!(
            serde_json::to_string(&GoalStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::to_string(&GoalStatus::NotStarted).unwrap(),
            "\"not-started\""
        );
        assert_eq!(
            serde_json::to_string(&AchievementCategory::Professional).unwrap(),
            "\"professional\""
        );
        assert_eq!(
            serde_json::from_str::<GoalStatus>("\"completed\"").unwrap(),
            GoalStatus::Completed
        );
    }

    #[test]
    fn test_goal_deserialize_camel_case() {
        let json = r#"{
            "id": "g-1",
            "title": "Run a 5k",
            "description": "Couch to 5k plan",
            "current": 12.0,
            "target": 30.0,
            "status": "in-progress",
            "priority": 4,
            "deadline": "2026-10-01",
            "createdAt": "2026-08-01T09:00:00Z"
        }"#;
        let goal: Goal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.id, "g-1");
        assert_eq!(goal.status, GoalStatus::InProgress);
        assert_eq!(goal.priority, 4);
        assert_eq!(goal.created_at, "2026-08-01T09:00:00Z");
    }

    #[test]
    fn test_goal_serialize_camel_case() {
        let goal = Goal {
            id: "g-2".into(),
            title: "Read 12 books".into(),
            description: "One per month".into(),
            current: 3.0,
            target: 12.0,
            status: GoalStatus::NotStarted,
            priority: 2,
            deadline: "2026-12-31".into(),
            created_at: "2026-01-01T00:00:00Z".into(),
        };
        let json = serde_json::to_value(&goal).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_achievement_deserialize() {
        let json = r#"{
            "id": "a-9",
            "title": "First marathon",
            "description": "Finished in 4:05",
            "category": "health",
            "significance": 5,
            "date": "2026-05-17"
        }"#;
        let a: Achievement = serde_json::from_str(json).unwrap();
        assert_eq!(a.category, AchievementCategory::Health);
        assert_eq!(a.significance, 5);
    }

    #[test]
    fn test_profile_missing_bio_defaults_empty() {
        let json = r#"{"name": "Ada", "email": "ada@example.com"}"#;
        let p: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.bio, "");
    }

    #[test]
    fn test_analytics_summary_deserialize() {
        let json = r#"{
            "totalGoals": 8,
            "completedGoals": 3,
            "totalAchievements": 11,
            "avgCompletionRate": 41.5
        }"#;
        let s: AnalyticsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(s.total_goals, 8);
        assert_eq!(s.completed_goals, 3);
        assert!((s.avg_completion_rate - 41.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_achievement_breakdown_missing_categories() {
        let json = r#"{"total": 0}"#;
        let b: AchievementBreakdown = serde_json::from_str(json).unwrap();
        assert!(b.categories.is_empty());
    }
}
