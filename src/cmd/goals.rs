//! Goal listing and management — `stride goals`.

use anyhow::Result;
use dialoguer::Confirm;

use stride::api::ApiClient;
use stride::config::StrideConfig;
use stride::derive::{GoalFilter, GoalSort, derive_goals, remove_goal};
use stride::errors::ServiceError;
use stride::models::{GoalDraft, GoalStatus};
use stride::progress::calculate_progress;
use stride::stats::GoalStats;
use stride::ui::icons::{CHECK, CROSS, TARGET};
use stride::ui::render::{
    print_empty, print_goal_list, print_goal_summary, print_section, progress_bar_text, spinner,
};
use stride::ui::theme::Palette;

use super::super::GoalsCommands;

pub async fn cmd_goals(
    client: &ApiClient,
    palette: &Palette,
    config: &StrideConfig,
    command: Option<GoalsCommands>,
    assume_yes: bool,
) -> Result<()> {
    match command.unwrap_or(GoalsCommands::List {
        filter: "all".to_string(),
        search: String::new(),
        sort: None,
    }) {
        GoalsCommands::List {
            filter,
            search,
            sort,
        } => {
            let filter: GoalFilter = filter.parse().map_err(anyhow::Error::msg)?;
            let sort_raw = sort.unwrap_or_else(|| config.ui.default_sort.clone());
            let sort: GoalSort = sort_raw.parse().map_err(anyhow::Error::msg)?;
            list_goals(client, palette, filter, &search, sort).await
        }
        GoalsCommands::Show { id } => show_goal(client, palette, &id).await,
        GoalsCommands::Add {
            title,
            description,
            current,
            target,
            status,
            priority,
            deadline,
        } => {
            let status: GoalStatus = status.parse().map_err(anyhow::Error::msg)?;
            let draft = GoalDraft {
                title,
                description,
                current,
                target,
                status,
                priority,
                deadline,
            };
            add_goal(client, palette, &draft).await
        }
        GoalsCommands::Update {
            id,
            title,
            description,
            current,
            target,
            status,
            priority,
            deadline,
        } => {
            let status = match status {
                Some(raw) => Some(raw.parse::<GoalStatus>().map_err(anyhow::Error::msg)?),
                None => None,
            };
            update_goal(
                client,
                palette,
                &id,
                title,
                description,
                current,
                target,
                status,
                priority,
                deadline,
            )
            .await
        }
        GoalsCommands::Delete { id, force } => {
            delete_goal(client, palette, &id, assume_yes || force).await
        }
    }
}

async fn list_goals(
    client: &ApiClient,
    palette: &Palette,
    filter: GoalFilter,
    search: &str,
    sort: GoalSort,
) -> Result<()> {
    let bar = spinner("Fetching goals...");
    let goals = match client.goals().await {
        Ok(goals) => goals,
        Err(err) => {
            bar.finish_and_clear();
            tracing::error!(error = %err, "failed to load goals");
            print_empty("No goals yet.", palette);
            return Ok(());
        }
    };
    bar.finish_and_clear();

    print_section("Goals", TARGET, palette);

    if goals.is_empty() {
        print_empty("No goals yet.", palette);
        return Ok(());
    }

    print_goal_summary(&GoalStats::from_goals(&goals), palette);
    println!();

    let derived = derive_goals(&goals, filter, search, sort);
    if derived.is_empty() {
        print_empty("No goals match the current filter.", palette);
    } else {
        print_goal_list(&derived, palette);
    }
    Ok(())
}

async fn show_goal(client: &ApiClient, palette: &Palette, id: &str) -> Result<()> {
    let bar = spinner("Fetching goal...");
    let goal = match client.goal(id).await {
        Ok(goal) => goal,
        Err(ServiceError::NotFound { .. }) => {
            bar.finish_and_clear();
            println!("Goal '{}' not found.", id);
            return Ok(());
        }
        Err(err) => {
            bar.finish_and_clear();
            tracing::error!(error = %err, id, "failed to load goal");
            println!("{} Goal '{}' is unavailable.", CROSS, id);
            return Ok(());
        }
    };
    bar.finish_and_clear();

    let pct = calculate_progress(goal.current, goal.target);
    println!("{}{}", TARGET, palette.heading.apply_to(&goal.title));
    if !goal.description.is_empty() {
        println!("{}", goal.description);
    }
    println!();
    println!("  Status:   {}", palette.accent.apply_to(goal.status.label()));
    println!("  Progress: {} ({}/{})", progress_bar_text(pct, 20), goal.current, goal.target);
    println!("  Priority: {}", goal.priority);
    if !goal.deadline.is_empty() {
        println!("  Deadline: {}", goal.deadline);
    }
    println!("  Created:  {}", palette.muted.apply_to(&goal.created_at));
    Ok(())
}

async fn add_goal(client: &ApiClient, palette: &Palette, draft: &GoalDraft) -> Result<()> {
    let bar = spinner("Creating goal...");
    match client.create_goal(draft).await {
        Ok(goal) => {
            bar.finish_and_clear();
            println!(
                "{} Created goal {} ({})",
                CHECK,
                palette.heading.apply_to(&goal.title),
                palette.muted.apply_to(&goal.id)
            );
        }
        Err(err) => {
            bar.finish_and_clear();
            tracing::warn!(error = %err, "failed to create goal");
            println!("{} Could not create goal: {}", CROSS, err);
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn update_goal(
    client: &ApiClient,
    palette: &Palette,
    id: &str,
    title: Option<String>,
    description: Option<String>,
    current: Option<f64>,
    target: Option<f64>,
    status: Option<GoalStatus>,
    priority: Option<u8>,
    deadline: Option<String>,
) -> Result<()> {
    let bar = spinner("Updating goal...");
    let existing = match client.goal(id).await {
        Ok(goal) => goal,
        Err(err) => {
            bar.finish_and_clear();
            tracing::warn!(error = %err, id, "failed to load goal for update");
            println!("{} Could not update goal '{}': {}", CROSS, id, err);
            return Ok(());
        }
    };

    let draft = GoalDraft {
        title: title.unwrap_or(existing.title),
        description: description.unwrap_or(existing.description),
        current: current.unwrap_or(existing.current),
        target: target.unwrap_or(existing.target),
        status: status.unwrap_or(existing.status),
        priority: priority.unwrap_or(existing.priority),
        deadline: deadline.unwrap_or(existing.deadline),
    };

    match client.update_goal(id, &draft).await {
        Ok(goal) => {
            bar.finish_and_clear();
            println!(
                "{} Updated goal {}",
                CHECK,
                palette.heading.apply_to(&goal.title)
            );
        }
        Err(err) => {
            bar.finish_and_clear();
            tracing::warn!(error = %err, id, "failed to update goal");
            println!("{} Could not update goal '{}': {}", CROSS, id, err);
        }
    }
    Ok(())
}

async fn delete_goal(
    client: &ApiClient,
    palette: &Palette,
    id: &str,
    skip_confirm: bool,
) -> Result<()> {
    let bar = spinner("Fetching goals...");
    let mut goals = match client.goals().await {
        Ok(goals) => goals,
        Err(err) => {
            bar.finish_and_clear();
            tracing::error!(error = %err, "failed to load goals");
            print_empty("No goals yet.", palette);
            return Ok(());
        }
    };
    bar.finish_and_clear();

    if !goals.iter().any(|g| g.id == id) {
        println!("Goal '{}' not found.", id);
        return Ok(());
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Are you sure you want to delete this goal?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    match client.delete_goal(id).await {
        Ok(()) => {
            remove_goal(&mut goals, id);
            println!("{} Deleted goal '{}'.", CHECK, id);
            println!();
            if goals.is_empty() {
                print_empty("No goals yet.", palette);
            } else {
                print_goal_summary(&GoalStats::from_goals(&goals), palette);
                println!();
                print_goal_list(&goals, palette);
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, id, "failed to delete goal");
            println!("{} Could not delete goal '{}': {}", CROSS, id, err);
        }
    }
    Ok(())
}
