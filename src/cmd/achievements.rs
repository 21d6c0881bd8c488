//! Achievement listing and management — `stride achievements`.

use anyhow::Result;
use dialoguer::Confirm;

use stride::api::ApiClient;
use stride::derive::{AchievementFilter, AchievementSort, derive_achievements, remove_achievement};
use stride::errors::ServiceError;
use stride::models::{AchievementCategory, AchievementDraft};
use stride::stats::AchievementStats;
use stride::ui::icons::{CHECK, CROSS, TROPHY};
use stride::ui::render::{
    print_achievement_list, print_achievement_summary, print_empty, print_section, spinner,
};
use stride::ui::theme::Palette;

use super::super::AchievementsCommands;

pub async fn cmd_achievements(
    client: &ApiClient,
    palette: &Palette,
    command: Option<AchievementsCommands>,
    assume_yes: bool,
) -> Result<()> {
    match command.unwrap_or(AchievementsCommands::List {
        filter: "all".to_string(),
        search: String::new(),
        sort: "newest".to_string(),
    }) {
        AchievementsCommands::List {
            filter,
            search,
            sort,
        } => {
            let filter: AchievementFilter = filter.parse().map_err(anyhow::Error::msg)?;
            let sort: AchievementSort = sort.parse().map_err(anyhow::Error::msg)?;
            list_achievements(client, palette, filter, &search, sort).await
        }
        AchievementsCommands::Show { id } => show_achievement(client, palette, &id).await,
        AchievementsCommands::Add {
            title,
            description,
            category,
            significance,
            date,
        } => {
            let category: AchievementCategory = category.parse().map_err(anyhow::Error::msg)?;
            let draft = AchievementDraft {
                title,
                description,
                category,
                significance,
                date: date.unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d").to_string()),
            };
            add_achievement(client, palette, &draft).await
        }
        AchievementsCommands::Update {
            id,
            title,
            description,
            category,
            significance,
            date,
        } => {
            let category = match category {
                Some(raw) => Some(
                    raw.parse::<AchievementCategory>()
                        .map_err(anyhow::Error::msg)?,
                ),
                None => None,
            };
            update_achievement(
                client,
                palette,
                &id,
                title,
                description,
                category,
                significance,
                date,
            )
            .await
        }
        AchievementsCommands::Delete { id, force } => {
            delete_achievement(client, palette, &id, assume_yes || force).await
        }
    }
}

async fn list_achievements(
    client: &ApiClient,
    palette: &Palette,
    filter: AchievementFilter,
    search: &str,
    sort: AchievementSort,
) -> Result<()> {
    let bar = spinner("Fetching achievements...");
    let achievements = match client.achievements().await {
        Ok(achievements) => achievements,
        Err(err) => {
            bar.finish_and_clear();
            tracing::error!(error = %err, "failed to load achievements");
            print_empty("No achievements yet.", palette);
            return Ok(());
        }
    };
    bar.finish_and_clear();

    print_section("Achievements", TROPHY, palette);

    if achievements.is_empty() {
        print_empty("No achievements yet.", palette);
        return Ok(());
    }

    print_achievement_summary(&AchievementStats::from_achievements(&achievements), palette);
    println!();

    let derived = derive_achievements(&achievements, filter, search, sort);
    if derived.is_empty() {
        print_empty("No achievements match the current filter.", palette);
    } else {
        print_achievement_list(&derived, palette);
    }
    Ok(())
}

async fn show_achievement(client: &ApiClient, palette: &Palette, id: &str) -> Result<()> {
    let bar = spinner("Fetching achievement...");
    let achievement = match client.achievement(id).await {
        Ok(achievement) => achievement,
        Err(ServiceError::NotFound { .. }) => {
            bar.finish_and_clear();
            println!("Achievement '{}' not found.", id);
            return Ok(());
        }
        Err(err) => {
            bar.finish_and_clear();
            tracing::error!(error = %err, id, "failed to load achievement");
            println!("{} Achievement '{}' is unavailable.", CROSS, id);
            return Ok(());
        }
    };
    bar.finish_and_clear();

    println!("{}{}", TROPHY, palette.heading.apply_to(&achievement.title));
    if !achievement.description.is_empty() {
        println!("{}", achievement.description);
    }
    println!();
    println!(
        "  Category:     {}",
        palette.accent.apply_to(achievement.category.as_str())
    );
    println!("  Significance: {}/5", achievement.significance);
    println!("  Date:         {}", achievement.date);
    Ok(())
}

async fn add_achievement(
    client: &ApiClient,
    palette: &Palette,
    draft: &AchievementDraft,
) -> Result<()> {
    let bar = spinner("Recording achievement...");
    match client.create_achievement(draft).await {
        Ok(achievement) => {
            bar.finish_and_clear();
            println!(
                "{} Recorded achievement {} ({})",
                CHECK,
                palette.heading.apply_to(&achievement.title),
                palette.muted.apply_to(&achievement.id)
            );
        }
        Err(err) => {
            bar.finish_and_clear();
            tracing::warn!(error = %err, "failed to record achievement");
            println!("{} Could not record achievement: {}", CROSS, err);
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn update_achievement(
    client: &ApiClient,
    palette: &Palette,
    id: &str,
    title: Option<String>,
    description: Option<String>,
    category: Option<AchievementCategory>,
    significance: Option<u8>,
    date: Option<String>,
) -> Result<()> {
    let bar = spinner("Updating achievement...");
    let existing = match client.achievement(id).await {
        Ok(achievement) => achievement,
        Err(err) => {
            bar.finish_and_clear();
            tracing::warn!(error = %err, id, "failed to load achievement for update");
            println!("{} Could not update achievement '{}': {}", CROSS, id, err);
            return Ok(());
        }
    };

    let draft = AchievementDraft {
        title: title.unwrap_or(existing.title),
        description: description.unwrap_or(existing.description),
        category: category.unwrap_or(existing.category),
        significance: significance.unwrap_or(existing.significance),
        date: date.unwrap_or(existing.date),
    };

    match client.update_achievement(id, &draft).await {
        Ok(achievement) => {
            bar.finish_and_clear();
            println!(
                "{} Updated achievement {}",
                CHECK,
                palette.heading.apply_to(&achievement.title)
            );
        }
        Err(err) => {
            bar.finish_and_clear();
            tracing::warn!(error = %err, id, "failed to update achievement");
            println!("{} Could not update achievement '{}': {}", CROSS, id, err);
        }
    }
    Ok(())
}

async fn delete_achievement(
    client: &ApiClient,
    palette: &Palette,
    id: &str,
    skip_confirm: bool,
) -> Result<()> {
    let bar = spinner("Fetching achievements...");
    let mut achievements = match client.achievements().await {
        Ok(achievements) => achievements,
        Err(err) => {
            bar.finish_and_clear();
            tracing::error!(error = %err, "failed to load achievements");
            print_empty("No achievements yet.", palette);
            return Ok(());
        }
    };
    bar.finish_and_clear();

    if !achievements.iter().any(|a| a.id == id) {
        println!("Achievement '{}' not found.", id);
        return Ok(());
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Are you sure you want to delete this achievement?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    match client.delete_achievement(id).await {
        Ok(()) => {
            remove_achievement(&mut achievements, id);
            println!("{} Deleted achievement '{}'.", CHECK, id);
            println!();
            if achievements.is_empty() {
                print_empty("No achievements yet.", palette);
            } else {
                print_achievement_summary(
                    &AchievementStats::from_achievements(&achievements),
                    palette,
                );
                println!();
                print_achievement_list(&achievements, palette);
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, id, "failed to delete achievement");
            println!("{} Could not delete achievement '{}': {}", CROSS, id, err);
        }
    }
    Ok(())
}
