//! Client-side stat aggregation for the list views.
//!
//! These counters back the header cards of the goals and achievements
//! lists. They are re-derived from the raw list on every call, never
//! incrementally maintained; the lists are user-sized, so O(n) per render
//! is fine. Server analytics endpoints stay authoritative for the insights
//! view (see DESIGN.md).

use crate::models::{Achievement, AchievementCategory, Goal, GoalStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoalStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
}

impl GoalStats {
    pub fn from_goals(goals: &[Goal]) -> Self {
        let mut stats = Self {
            total: goals.len(),
            ..Self::default()
        };
        for goal in goals {
            match goal.status {
                GoalStatus::Completed => stats.completed += 1,
                GoalStatus::InProgress => stats.in_progress += 1,
                GoalStatus::NotStarted => stats.not_started += 1,
            }
        }
        stats
    }

    pub fn count_for(&self, status: GoalStatus) -> usize {
        match status {
            GoalStatus::Completed => self.completed,
            GoalStatus::InProgress => self.in_progress,
            GoalStatus::NotStarted => self.not_started,
        }
    }

    /// Completed goals as a percentage of the total; 0 for an empty list.
    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.completed as f64 / self.total as f64) * 100.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AchievementStats {
    pub total: usize,
    pub personal: usize,
    pub professional: usize,
    pub health: usize,
    pub learning: usize,
}

impl AchievementStats {
    pub fn from_achievements(achievements: &[Achievement]) -> Self {
        let mut stats = Self {
            total: achievements.len(),
            ..Self::default()
        };
        for a in achievements {
            match a.category {
                AchievementCategory::Personal => stats.personal += 1,
                AchievementCategory::Professional => stats.professional += 1,
                AchievementCategory::Health => stats.health += 1,
                AchievementCategory::Learning => stats.learning += 1,
            }
        }
        stats
    }

    pub fn count_for(&self, category: AchievementCategory) -> usize {
        match category {
            AchievementCategory::Personal => self.personal,
            AchievementCategory::Professional => self.professional,
            AchievementCategory::Health => self.health,
            AchievementCategory::Learning => self.learning,
        }
    }
}
