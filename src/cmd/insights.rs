//! Server-side analytics view — `stride insights`.
//!
//! All numbers come from the service's analytics routes; nothing here is
//! recomputed client-side.

use anyhow::Result;

use stride::api::ApiClient;
use stride::ui::icons::{CHART, TROPHY};
use stride::ui::render::{print_empty, print_section, print_stat_card, progress_bar_text, spinner};
use stride::ui::theme::Palette;

pub async fn cmd_insights(client: &ApiClient, palette: &Palette) -> Result<()> {
    let bar = spinner("Loading insights...");
    let fetched = tokio::try_join!(
        client.analytics_summary(),
        client.goal_progress(),
        client.achievement_breakdown(),
    );
    bar.finish_and_clear();

    let (summary, progress, breakdown) = match fetched {
        Ok(data) => data,
        Err(err) => {
            tracing::error!(error = %err, "failed to load analytics");
            print_empty("Insights are unavailable right now.", palette);
            return Ok(());
        }
    };

    print_stat_card("total goals", &summary.total_goals.to_string(), palette);
    print_stat_card(
        "completed goals",
        &summary.completed_goals.to_string(),
        palette,
    );
    print_stat_card(
        "achievements",
        &summary.total_achievements.to_string(),
        palette,
    );
    print_stat_card(
        "avg completion",
        &format!("{:.1}%", summary.avg_completion_rate),
        palette,
    );

    print_section("Goal progress", CHART, palette);
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

    print_section("Achievements by category", TROPHY, palette);
    if breakdown.total == 0 {
        print_empty("No achievements yet.", palette);
    } else {
        for (category, count) in &breakdown.categories {
            println!(
                "{:<14} {}",
                palette.accent.apply_to(category.as_str()),
                count
            );
        }
        println!(
            "{:<14} {}",
            palette.heading.apply_to("total"),
            breakdown.total
        );
    }

    Ok(())
}
