//! Profile view and editing — `stride profile`.

use anyhow::Result;
use dialoguer::Confirm;

use stride::api::ApiClient;
use stride::models::UserProfile;
use stride::ui::icons::{CHECK, CROSS, PERSON};
use stride::ui::render::spinner;
use stride::ui::theme::Palette;

use super::super::ProfileCommands;

pub async fn cmd_profile(
    client: &ApiClient,
    palette: &Palette,
    command: Option<ProfileCommands>,
    assume_yes: bool,
) -> Result<()> {
    match command.unwrap_or(ProfileCommands::Show) {
        ProfileCommands::Show => show_profile(client, palette).await,
        ProfileCommands::Update { name, email, bio } => {
            update_profile(client, name, email, bio).await
        }
        ProfileCommands::Delete { force } => {
            delete_account(client, assume_yes || force).await
        }
    }
}

async fn show_profile(client: &ApiClient, palette: &Palette) -> Result<()> {
    let bar = spinner("Fetching profile...");
    let profile = match client.profile().await {
        Ok(profile) => profile,
        Err(err) => {
            bar.finish_and_clear();
            tracing::error!(error = %err, "failed to load profile");
            println!("{} Profile is unavailable right now.", CROSS);
            return Ok(());
        }
    };
    bar.finish_and_clear();

    println!("{}{}", PERSON, palette.heading.apply_to(&profile.name));
    println!("  Email: {}", profile.email);
    if !profile.bio.is_empty() {
        println!("  Bio:   {}", profile.bio);
    }
    Ok(())
}

async fn update_profile(
    client: &ApiClient,
    name: Option<String>,
    email: Option<String>,
    bio: Option<String>,
) -> Result<()> {
    let bar = spinner("Updating profile...");
    let existing = match client.profile().await {
        Ok(profile) => profile,
        Err(err) => {
            bar.finish_and_clear();
            tracing::warn!(error = %err, "failed to load profile for update");
            println!("Error updating profile: {}", err);
            return Ok(());
        }
    };

    let updated = UserProfile {
        name: name.unwrap_or(existing.name),
        email: email.unwrap_or(existing.email),
        bio: bio.unwrap_or(existing.bio),
    };

    match client.update_profile(&updated).await {
        Ok(_) => {
            bar.finish_and_clear();
            println!("Profile updated successfully!");
        }
        Err(err) => {
            bar.finish_and_clear();
            tracing::warn!(error = %err, "failed to update profile");
            println!("Error updating profile: {}", err);
        }
    }
    Ok(())
}

async fn delete_account(client: &ApiClient, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete your account? This cannot be undone.")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    match client.delete_account().await {
        Ok(()) => println!("{} Account deleted.", CHECK),
        Err(err) => {
            tracing::warn!(error = %err, "failed to delete account");
            println!("{} Could not delete account: {}", CROSS, err);
        }
    }
    Ok(())
}
