//! Combined overview — `stride dashboard`.
//!
//! Fetches goals, achievements, and per-goal progress concurrently. If any
//! of the three requests fails the whole view falls back to an empty state
//! rather than rendering a partial dashboard.

use anyhow::Result;

use stride::api::ApiClient;
use stride::derive::{AchievementFilter, AchievementSort, GoalFilter, GoalSort, derive_achievements, derive_goals};
use stride::stats::{AchievementStats, GoalStats};
use stride::ui::icons::{CHART, TARGET, TROPHY};
use stride::ui::render::{
    print_achievement_list, print_empty, print_goal_list, print_section, print_stat_card,
    progress_bar_text, spinner,
};
use stride::ui::theme::Palette;

const RECENT_LIMIT: usize = 3;

pub async fn cmd_dashboard(client: &ApiClient, palette: &Palette) -> Result<()> {
    let bar = spinner("Loading dashboard...");
    let fetched = tokio::try_join!(
        client.goals(),
        client.achievements(),
        client.goal_progress(),
    );
    bar.finish_and_clear();

    let (goals, achievements, progress) = match fetched {
        Ok(data) => data,
        Err(err) => {
            tracing::error!(error = %err, "failed to load dashboard data");
            print_empty("Dashboard data is unavailable right now.", palette);
            return Ok(());
        }
    };

    let goal_stats = GoalStats::from_goals(&goals);
    let achievement_stats = AchievementStats::from_achievements(&achievements);

    print_stat_card("total goals", &goal_stats.total.to_string(), palette);
    print_stat_card("completed", &goal_stats.completed.to_string(), palette);
    print_stat_card(
        "completion",
        &format!("{:.0}%", goal_stats.completion_rate()),
        palette,
    );
    print_stat_card(
        "achievements",
        &achievement_stats.total.to_string(),
        palette,
    );

    print_section("Recent goals", TARGET, palette);
    if goals.is_empty() {
        print_empty("No goals yet.", palette);
    } else {
        let recent = derive_goals(&goals, GoalFilter::All, "", GoalSort::Newest);
        print_goal_list(&recent[..recent.len().min(RECENT_LIMIT)], palette);
    }

    print_section("Recent achievements", TROPHY, palette);
    if achievements.is_empty() {
        print_empty("No achievements yet.", palette);
    } else {
        let recent = derive_achievements(
            &achievements,
            AchievementFilter::All,
            "",
            AchievementSort::Newest,
        );
        print_achievement_list(&recent[..recent.len().min(RECENT_LIMIT)], palette);
    }

    print_section("Progress", CHART, palette);
    if progress.is_empty() {
        print_empty("No progress to show.", palette);
    } else {
        for point in &progress {
            println!(
                "{:<32} {}",
                console::truncate_str(&point.name, 32, "..."),
                progress_bar_text(point.progress, 20)
            );
        }
    }

    Ok(())
}
