//! Configuration view and validation commands — `stride config`.

use std::path::Path;

use anyhow::{Context, Result};

use stride::config::StrideConfig;

use super::super::ConfigCommands;

pub fn cmd_config(
    explicit_path: Option<&Path>,
    config: &StrideConfig,
    command: Option<ConfigCommands>,
) -> Result<()> {
    let path = match explicit_path {
        Some(p) => Some(p.to_path_buf()),
        None => StrideConfig::default_path(),
    };

    match command {
        None | Some(ConfigCommands::Show) => {
            println!();
            println!("Stride Configuration");
            println!("====================");
            println!();
            match &path {
                Some(p) if p.exists() => println!("Config file: {}", p.display()),
                Some(p) => println!("No config file at {} (using defaults)", p.display()),
                None => println!("No config directory available (using defaults)"),
            }
            println!();

            // Effective values, after environment overrides
            let mut shown = config.clone();
            if shown.api.token.is_some() {
                shown.api.token = Some("********".to_string());
            }
            print!("{}", shown.to_toml()?);
            println!();
        }
        Some(ConfigCommands::Validate) => {
            println!();
            println!("Validating configuration...");
            println!();

            let warnings = config.warnings();
            if warnings.is_empty() {
                println!("Configuration is valid.");
            } else {
                println!("Configuration warnings:");
                for warning in warnings {
                    println!("  - {}", warning);
                }
            }
            println!();
        }
        Some(ConfigCommands::Init) => {
            let path = path.context("Could not determine a config path")?;
            if StrideConfig::write_default(&path)? {
                println!("Created config at {}", path.display());
                println!();
                println!("You can now customize:");
                println!("  - [api] base_url, token");
                println!("  - [ui] theme, default_sort");
                println!();
            } else {
                println!("Config already exists at {}", path.display());
                println!("Delete it first if you want to recreate it.");
            }
        }
    }

    Ok(())
}
