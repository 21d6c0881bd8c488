//! List derivation pipeline: filter → search match → sort.
//!
//! The displayed list is always a pure function of (raw list, filter value,
//! search term, sort mode). Nothing here mutates the raw list; every
//! function returns a fresh `Vec`. Sorts are stable, so ties keep the
//! server's order.
//!
//! Date fields arrive as strings. They are parsed as RFC 3339 or
//! `YYYY-MM-DD`; anything unparseable sorts after every valid date, in both
//! sort directions, rather than raising (see DESIGN.md).

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::models::{Achievement, AchievementCategory, Goal, GoalStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalFilter {
    All,
    Status(GoalStatus),
}

impl FromStr for GoalFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            other => other.parse::<GoalStatus>().map(Self::Status).map_err(|_| {
                format!(
                    "Invalid goal filter '{}'. Valid values: all, not-started, in-progress, completed",
                    other
                )
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalSort {
    /// Most recently created first.
    Newest,
    Oldest,
    /// Highest priority first.
    Priority,
    /// Soonest deadline first.
    Deadline,
    /// Identity order: leave the list as fetched.
    Unsorted,
}

impl FromStr for GoalSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "priority" => Ok(Self::Priority),
            "deadline" => Ok(Self::Deadline),
            "none" => Ok(Self::Unsorted),
            _ => Err(format!(
                "Invalid sort mode '{}'. Valid values: newest, oldest, priority, deadline, none",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementFilter {
    All,
    Category(AchievementCategory),
}

impl FromStr for AchievementFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            other => other
                .parse::<AchievementCategory>()
                .map(Self::Category)
                .map_err(|_| {
                    format!(
                        "Invalid achievement filter '{}'. Valid values: all, personal, professional, health, learning",
                        other
                    )
                }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementSort {
    Newest,
    Oldest,
    /// Highest significance first.
    Significance,
    Unsorted,
}

impl FromStr for AchievementSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "significance" => Ok(Self::Significance),
            "none" => Ok(Self::Unsorted),
            _ => Err(format!(
                "Invalid sort mode '{}'. Valid values: newest, oldest, significance, none",
                s
            )),
        }
    }
}

/// Parse a server date string. Accepts RFC 3339 timestamps and bare dates.
fn parse_when(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Utc.from_utc_datetime(&dt))
}

/// Ascending by date; unparseable dates order last.
fn cmp_when_asc(a: &str, b: &str) -> Ordering {
    match (parse_when(a), parse_when(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Descending by date; unparseable dates still order last.
fn cmp_when_desc(a: &str, b: &str) -> Ordering {
    match (parse_when(a), parse_when(b)) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn matches_search(title: &str, description: &str, needle: &str) -> bool {
    needle.is_empty()
        || title.to_lowercase().contains(needle)
        || description.to_lowercase().contains(needle)
}

/// Derive the display list for the goals view.
pub fn derive_goals(goals: &[Goal], filter: GoalFilter, search: &str, sort: GoalSort) -> Vec<Goal> {
    let needle = search.to_lowercase();
    let mut out: Vec<Goal> = goals
        .iter()
        .filter(|g| {
            let matches_filter = match filter {
                GoalFilter::All => true,
                GoalFilter::Status(status) => g.status == status,
            };
            matches_filter && matches_search(&g.title, &g.description, &needle)
        })
        .cloned()
        .collect();

    match sort {
        GoalSort::Newest => out.sort_by(|a, b| cmp_when_desc(&a.created_at, &b.created_at)),
        GoalSort::Oldest => out.sort_by(|a, b| cmp_when_asc(&a.created_at, &b.created_at)),
        GoalSort::Priority => out.sort_by(|a, b| b.priority.cmp(&a.priority)),
        GoalSort::Deadline => out.sort_by(|a, b| cmp_when_asc(&a.deadline, &b.deadline)),
        GoalSort::Unsorted => {}
    }
    out
}

/// Derive the display list for the achievements view.
pub fn derive_achievements(
    achievements: &[Achievement],
    filter: AchievementFilter,
    search: &str,
    sort: AchievementSort,
) -> Vec<Achievement> {
    let needle = search.to_lowercase();
    let mut out: Vec<Achievement> = achievements
        .iter()
        .filter(|a| {
            let matches_filter = match filter {
                AchievementFilter::All => true,
                AchievementFilter::Category(category) => a.category == category,
            };
            matches_filter && matches_search(&a.title, &a.description, &needle)
        })
        .cloned()
        .collect();

    match sort {
        AchievementSort::Newest => out.sort_by(|a, b| cmp_when_desc(&a.date, &b.date)),
        AchievementSort::Oldest => out.sort_by(|a, b| cmp_when_asc(&a.date, &b.date)),
        AchievementSort::Significance => out.sort_by(|a, b| b.significance.cmp(&a.significance)),
        AchievementSort::Unsorted => {}
    }
    out
}

/// Prune a goal from the locally held raw list after a confirmed server
/// delete. Removing an id that is not present is a no-op.
pub fn remove_goal(goals: &mut Vec<Goal>, id: &str) -> bool {
    let before = goals.len();
    goals.retain(|g| g.id != id);
    goals.len() != before
}

/// Achievement counterpart of [`remove_goal`].
pub fn remove_achievement(achievements: &mut Vec<Achievement>, id: &str) -> bool {
    let before = achievements.len();
    achievements.retain(|a| a.id != id);
    achievements.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(id: &str, title: &str, status: GoalStatus, priority: u8, created: &str) -> Goal {
        Goal {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            current: 0.0,
            target: 10.0,
            status,
            priority,
            deadline: "2026-12-31".to_string(),
            created_at: created.to_string(),
        }
    }

    fn achievement(id: &str, category: AchievementCategory, sig: u8, date: &str) -> Achievement {
        Achievement {
            id: id.to_string(),
            title: format!("achievement {}", id),
            description: String::new(),
            category,
            significance: sig,
            date: date.to_string(),
        }
    }

    #[test]
    fn test_all_filter_empty_search_keeps_everything() {
        let goals = vec![
            goal("a", "one", GoalStatus::Completed, 1, "2026-01-02"),
            goal("b", "two", GoalStatus::NotStarted, 2, "2026-01-01"),
        ];
        let out = derive_goals(&goals, GoalFilter::All, "", GoalSort::Unsorted);
        assert_eq!(out.len(), 2);
        // Identity sort preserves input order
        assert_eq!(out[0].id, "a");
        assert_eq!(out[1].id, "b");
    }

    #[test]
    fn test_status_filter_is_exact() {
        let goals = vec![
            goal("a", "one", GoalStatus::Completed, 1, "2026-01-02"),
            goal("b", "two", GoalStatus::InProgress, 2, "2026-01-01"),
            goal("c", "three", GoalStatus::Completed, 3, "2026-01-03"),
        ];
        let out = derive_goals(
            &goals,
            GoalFilter::Status(GoalStatus::Completed),
            "",
            GoalSort::Unsorted,
        );
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|g| g.status == GoalStatus::Completed));
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_or_description() {
        let mut g1 = goal("a", "Run 5k", GoalStatus::InProgress, 1, "2026-01-01");
        g1.description = "weekly training".to_string();
        let mut g2 = goal("b", "Save money", GoalStatus::InProgress, 1, "2026-01-01");
        g2.description = "Stop impulse RUNs to the store".to_string();
        let g3 = goal("c", "Learn piano", GoalStatus::InProgress, 1, "2026-01-01");

        let out = derive_goals(&[g1, g2, g3], GoalFilter::All, "RUN", GoalSort::Unsorted);
        let ids: Vec<_> = out.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_filter_and_search_combine_with_and() {
        let goals = vec![
            goal("a", "Run 5k", GoalStatus::Completed, 1, "2026-01-01"),
            goal("b", "Run 10k", GoalStatus::InProgress, 1, "2026-01-01"),
        ];
        let out = derive_goals(
            &goals,
            GoalFilter::Status(GoalStatus::Completed),
            "run",
            GoalSort::Unsorted,
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "a");
    }

    #[test]
    fn test_priority_sort_descending() {
        let goals = vec![
            goal("a", "x", GoalStatus::InProgress, 1, "2026-01-01"),
            goal("b", "y", GoalStatus::InProgress, 5, "2026-01-01"),
            goal("c", "z", GoalStatus::InProgress, 3, "2026-01-01"),
        ];
        let out = derive_goals(&goals, GoalFilter::All, "", GoalSort::Priority);
        let priorities: Vec<_> = out.iter().map(|g| g.priority).collect();
        assert_eq!(priorities, vec![5, 3, 1]);
    }

    #[test]
    fn test_newest_and_oldest_by_created_at() {
        let goals = vec![
            goal("mid", "x", GoalStatus::InProgress, 1, "2026-02-01T00:00:00Z"),
            goal("new", "y", GoalStatus::InProgress, 1, "2026-03-01T00:00:00Z"),
            goal("old", "z", GoalStatus::InProgress, 1, "2026-01-01T00:00:00Z"),
        ];
        let newest = derive_goals(&goals, GoalFilter::All, "", GoalSort::Newest);
        let ids: Vec<_> = newest.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);

        let oldest = derive_goals(&goals, GoalFilter::All, "", GoalSort::Oldest);
        let ids: Vec<_> = oldest.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["old", "mid", "new"]);
    }

    #[test]
    fn test_deadline_sort_ascending() {
        let mut g1 = goal("late", "x", GoalStatus::InProgress, 1, "2026-01-01");
        g1.deadline = "2026-12-01".to_string();
        let mut g2 = goal("soon", "y", GoalStatus::InProgress, 1, "2026-01-01");
        g2.deadline = "2026-09-15".to_string();
        let out = derive_goals(&[g1, g2], GoalFilter::All, "", GoalSort::Deadline);
        assert_eq!(out[0].id, "soon");
        assert_eq!(out[1].id, "late");
    }

    #[test]
    fn test_invalid_dates_sort_last_in_both_directions() {
        let goals = vec![
            goal("bad", "x", GoalStatus::InProgress, 1, "not-a-date"),
            goal("new", "y", GoalStatus::InProgress, 1, "2026-03-01"),
            goal("old", "z", GoalStatus::InProgress, 1, "2026-01-01"),
        ];
        let newest = derive_goals(&goals, GoalFilter::All, "", GoalSort::Newest);
        assert_eq!(newest.last().unwrap().id, "bad");
        let oldest = derive_goals(&goals, GoalFilter::All, "", GoalSort::Oldest);
        assert_eq!(oldest.last().unwrap().id, "bad");
    }

    #[test]
    fn test_invalid_dates_keep_relative_order() {
        // Stable sort: two unparseable dates stay in fetch order.
        let goals = vec![
            goal("bad1", "x", GoalStatus::InProgress, 1, "???"),
            goal("bad2", "y", GoalStatus::InProgress, 1, "also bad"),
            goal("ok", "z", GoalStatus::InProgress, 1, "2026-01-01"),
        ];
        let out = derive_goals(&goals, GoalFilter::All, "", GoalSort::Oldest);
        let ids: Vec<_> = out.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["ok", "bad1", "bad2"]);
    }

    #[test]
    fn test_raw_list_is_not_mutated() {
        let goals = vec![
            goal("a", "x", GoalStatus::InProgress, 1, "2026-02-01"),
            goal("b", "y", GoalStatus::InProgress, 5, "2026-01-01"),
        ];
        let _ = derive_goals(&goals, GoalFilter::All, "", GoalSort::Priority);
        assert_eq!(goals[0].id, "a");
        assert_eq!(goals[1].id, "b");
    }

    #[test]
    fn test_achievement_category_filter_and_significance_sort() {
        let list = vec![
            achievement("a", AchievementCategory::Health, 2, "2026-01-01"),
            achievement("b", AchievementCategory::Learning, 5, "2026-01-02"),
            achievement("c", AchievementCategory::Health, 4, "2026-01-03"),
        ];
        let out = derive_achievements(
            &list,
            AchievementFilter::Category(AchievementCategory::Health),
            "",
            AchievementSort::Significance,
        );
        let ids: Vec<_> = out.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn test_achievement_newest_by_date() {
        let list = vec![
            achievement("old", AchievementCategory::Personal, 1, "2026-01-01"),
            achievement("new", AchievementCategory::Personal, 1, "2026-06-01"),
        ];
        let out = derive_achievements(&list, AchievementFilter::All, "", AchievementSort::Newest);
        assert_eq!(out[0].id, "new");
    }

    #[test]
    fn test_remove_goal_present() {
        let mut goals = vec![
            goal("a", "x", GoalStatus::InProgress, 1, "2026-01-01"),
            goal("b", "y", GoalStatus::InProgress, 1, "2026-01-01"),
        ];
        assert!(remove_goal(&mut goals, "a"));
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].id, "b");
    }

    #[test]
    fn test_remove_goal_absent_is_noop() {
        let mut goals = vec![goal("a", "x", GoalStatus::InProgress, 1, "2026-01-01")];
        assert!(!remove_goal(&mut goals, "zzz"));
        assert_eq!(goals.len(), 1);
    }

    #[test]
    fn test_remove_achievement_absent_is_noop() {
        let mut list = vec![achievement("a", AchievementCategory::Personal, 1, "2026-01-01")];
        assert!(!remove_achievement(&mut list, "missing"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<GoalFilter>().unwrap(), GoalFilter::All);
        assert_eq!(
            "completed".parse::<GoalFilter>().unwrap(),
            GoalFilter::Status(GoalStatus::Completed)
        );
        assert!("finished".parse::<GoalFilter>().is_err());
        assert_eq!(
            "health".parse::<AchievementFilter>().unwrap(),
            AchievementFilter::Category(AchievementCategory::Health)
        );
    }

    #[test]
    fn test_sort_parsing() {
        assert_eq!("deadline".parse::<GoalSort>().unwrap(), GoalSort::Deadline);
        assert_eq!("none".parse::<GoalSort>().unwrap(), GoalSort::Unsorted);
        assert!("significance".parse::<GoalSort>().is_err());
        assert_eq!(
            "significance".parse::<AchievementSort>().unwrap(),
            AchievementSort::Significance
        );
        assert!("priority".parse::<AchievementSort>().is_err());
    }

    #[test]
    fn test_parse_when_formats() {
        assert!(parse_when("2026-08-30T12:00:00Z").is_some());
        assert!(parse_when("2026-08-30T12:00:00+02:00").is_some());
        assert!(parse_when("2026-08-30").is_some());
        assert!(parse_when("soon").is_none());
        assert!(parse_when("").is_none());
    }
}
