//! Terminal rendering for lists, stat cards, and progress.
//!
//! Everything here writes to stdout. Pure formatting helpers are split
//! out so they can be unit tested without a terminal.

use std::time::Duration;

use console::{Emoji, truncate_str};
use indicatif::{ProgressBar, ProgressStyle};

use crate::models::{Achievement, AchievementCategory, Goal, GoalStatus};
use crate::progress::calculate_progress;
use crate::stats::{AchievementStats, GoalStats};
use crate::ui::icons::{CALENDAR, CHECK, CIRCLE, HOURGLASS, STAR};
use crate::ui::theme::Palette;

const BAR_WIDTH: usize = 20;
const TITLE_WIDTH: usize = 32;

/// Indeterminate spinner for the fetch phase of each command.
/// The caller is responsible for `finish_and_clear`.
pub fn spinner(msg: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .expect("progress bar template is a valid static string"),
    );
    bar.set_message(msg.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Fixed-width text progress bar, e.g. `[██████──────────────]  30%`.
pub fn progress_bar_text(pct: f64, width: usize) -> String {
    let pct = pct.clamp(0.0, 100.0);
    let filled = ((pct / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!(
        "[{}{}] {:>3.0}%",
        "█".repeat(filled),
        "─".repeat(width - filled),
        pct
    )
}

pub fn status_icon(status: GoalStatus) -> Emoji<'static, 'static> {
    match status {
        GoalStatus::NotStarted => CIRCLE,
        GoalStatus::InProgress => HOURGLASS,
        GoalStatus::Completed => CHECK,
    }
}

fn significance_stars(significance: u8) -> String {
    STAR.to_string().repeat(significance.min(5) as usize)
}

pub fn print_empty(message: &str, palette: &Palette) {
    println!("{}", palette.muted.apply_to(message));
}

/// One-line count summary shown above the goal list.
pub fn print_goal_summary(stats: &GoalStats, palette: &Palette) {
    print!("{} total", palette.heading.apply_to(stats.total));
    for status in GoalStatus::ALL {
        let style = match status {
            GoalStatus::Completed => &palette.good,
            GoalStatus::InProgress => &palette.warn,
            GoalStatus::NotStarted => &palette.muted,
        };
        print!(
            " | {}",
            style.apply_to(format!("{} {}", stats.count_for(status), status.label()))
        );
    }
    println!();
}

pub fn print_goal_list(goals: &[Goal], palette: &Palette) {
    for goal in goals {
        let pct = calculate_progress(goal.current, goal.target);
        println!(
            "{}{:<width$} {} {}",
            status_icon(goal.status),
            truncate_str(&goal.title, TITLE_WIDTH, "..."),
            progress_bar_text(pct, BAR_WIDTH),
            palette.muted.apply_to(format!("p{}", goal.priority)),
            width = TITLE_WIDTH,
        );
        if !goal.deadline.is_empty() {
            println!(
                "   {}{}",
                CALENDAR,
                palette.muted.apply_to(format!("due {}", goal.deadline))
            );
        }
    }
}

pub fn print_achievement_summary(stats: &AchievementStats, palette: &Palette) {
    print!("{} total", palette.heading.apply_to(stats.total));
    for category in AchievementCategory::ALL {
        print!(" | {} {}", stats.count_for(category), category.label());
    }
    println!();
}

pub fn print_achievement_list(achievements: &[Achievement], palette: &Palette) {
    for achievement in achievements {
        println!(
            "{:<width$} {:<6} {} {}",
            truncate_str(&achievement.title, TITLE_WIDTH, "..."),
            significance_stars(achievement.significance),
            palette.accent.apply_to(achievement.category.as_str()),
            palette.muted.apply_to(&achievement.date),
            width = TITLE_WIDTH,
        );
    }
}

/// Boxed stat card used by the dashboard and insights views.
pub fn print_stat_card(label: &str, value: &str, palette: &Palette) {
    let inner = label.len().max(value.len()) + 2;
    println!("┌{}┐", "─".repeat(inner));
    println!("│ {:<width$} │", palette.heading.apply_to(value), width = inner - 2);
    println!("│ {:<width$} │", palette.muted.apply_to(label), width = inner - 2);
    println!("└{}┘", "─".repeat(inner));
}

pub fn print_section(title: &str, icon: Emoji<'_, '_>, palette: &Palette) {
    println!();
    println!("{}{}", icon, palette.heading.apply_to(title));
    println!("{}", palette.muted.apply_to("─".repeat(40)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_text_bounds() {
        assert_eq!(progress_bar_text(0.0, 10), "[──────────]   0%");
        assert_eq!(progress_bar_text(100.0, 10), "[██████████] 100%");
    }

    #[test]
    fn test_progress_bar_text_clamps_out_of_range() {
        assert_eq!(progress_bar_text(250.0, 10), progress_bar_text(100.0, 10));
        assert_eq!(progress_bar_text(-5.0, 10), progress_bar_text(0.0, 10));
    }

    #[test]
    fn test_progress_bar_text_half() {
        let bar = progress_bar_text(50.0, 10);
        assert!(bar.starts_with("[█████─────]"));
        assert!(bar.ends_with("50%"));
    }

    #[test]
    fn test_significance_stars_capped_at_five() {
        assert_eq!(significance_stars(3).matches('⭐').count().max(significance_stars(3).matches('*').count()), 3);
        let capped = significance_stars(9);
        assert_eq!(capped.matches('⭐').count().max(capped.matches('*').count()), 5);
    }
}
