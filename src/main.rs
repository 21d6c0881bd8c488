use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use stride::api::ApiClient;
use stride::config::StrideConfig;
use stride::session::Session;
use stride::ui::theme::{Palette, Theme};

mod cmd;

#[derive(Parser)]
#[command(name = "stride")]
#[command(version, about = "Terminal client for the Stride goal tracker")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Answer yes to all confirmation prompts
    #[arg(long, global = true)]
    pub yes: bool,

    /// Path to a config file (defaults to ~/.config/stride/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Service base URL, overriding config and environment
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Colour theme: light, dark, auto
    #[arg(long, global = true)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Combined overview of goals, achievements, and progress
    Dashboard,
    /// List and manage goals
    Goals {
        #[command(subcommand)]
        command: Option<GoalsCommands>,
    },
    /// List and manage achievements
    Achievements {
        #[command(subcommand)]
        command: Option<AchievementsCommands>,
    },
    /// Server-side analytics: totals, completion rate, category breakdown
    Insights,
    /// View or update the signed-in user's profile
    Profile {
        #[command(subcommand)]
        command: Option<ProfileCommands>,
    },
    /// View or validate configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
pub enum GoalsCommands {
    /// List goals with optional filter, search, and sort
    List {
        /// all, not-started, in-progress, completed
        #[arg(short, long, default_value = "all")]
        filter: String,

        /// Case-insensitive substring match on title or description
        #[arg(short, long, default_value = "")]
        search: String,

        /// newest, oldest, priority, deadline, none (defaults from config)
        #[arg(long)]
        sort: Option<String>,
    },
    /// Show one goal in detail
    Show { id: String },
    /// Create a goal
    Add {
        title: String,

        #[arg(short, long, default_value = "")]
        description: String,

        #[arg(long, default_value = "0")]
        current: f64,

        #[arg(short, long)]
        target: f64,

        /// not-started, in-progress, completed
        #[arg(long, default_value = "not-started")]
        status: String,

        /// 1 (low) to 5 (urgent)
        #[arg(short, long, default_value = "2")]
        priority: u8,

        /// Due date, e.g. 2026-12-31
        #[arg(long, default_value = "")]
        deadline: String,
    },
    /// Update fields of an existing goal
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        current: Option<f64>,

        #[arg(long)]
        target: Option<f64>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        priority: Option<u8>,

        #[arg(long)]
        deadline: Option<String>,
    },
    /// Delete a goal
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Clone)]
pub enum AchievementsCommands {
    /// List achievements with optional filter, search, and sort
    List {
        /// all, personal, professional, health, learning
        #[arg(short, long, default_value = "all")]
        filter: String,

        #[arg(short, long, default_value = "")]
        search: String,

        /// newest, oldest, significance, none
        #[arg(long, default_value = "newest")]
        sort: String,
    },
    /// Show one achievement in detail
    Show { id: String },
    /// Record an achievement
    Add {
        title: String,

        #[arg(short, long, default_value = "")]
        description: String,

        /// personal, professional, health, learning
        #[arg(short, long, default_value = "personal")]
        category: String,

        /// 1 to 5
        #[arg(long, default_value = "3")]
        significance: u8,

        /// Date achieved, e.g. 2026-03-02 (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Update fields of an existing achievement
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        significance: Option<u8>,

        #[arg(long)]
        date: Option<String>,
    },
    /// Delete an achievement
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Clone)]
pub enum ProfileCommands {
    /// Show the current profile
    Show,
    /// Update profile fields
    Update {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        bio: Option<String>,
    },
    /// Delete the account
    Delete {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Validate configuration and show any warnings
    Validate,
    /// Initialize a default config file
    Init,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "stride=debug" } else { "stride=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // `config init` must work before any config file exists.
    let config = if matches!(
        &cli.command,
        Commands::Config {
            command: Some(ConfigCommands::Init)
        }
    ) {
        StrideConfig::load(cli.config.as_deref()).unwrap_or_default()
    } else {
        StrideConfig::load(cli.config.as_deref())?
    };

    let theme = match &cli.theme {
        Some(raw) => raw.parse::<Theme>().map_err(anyhow::Error::msg)?,
        None => config.ui.theme,
    };
    let palette = Palette::for_theme(theme);

    let base_url = cli
        .api_url
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());
    let session = Session::from_config(&config);
    if !session.is_authenticated() {
        tracing::debug!("no API token configured; requests are sent anonymously");
    }
    let client = ApiClient::new(base_url, session);

    match &cli.command {
        Commands::Dashboard => cmd::cmd_dashboard(&client, &palette).await?,
        Commands::Goals { command } => {
            cmd::cmd_goals(&client, &palette, &config, command.clone(), cli.yes).await?
        }
        Commands::Achievements { command } => {
            cmd::cmd_achievements(&client, &palette, command.clone(), cli.yes).await?
        }
        Commands::Insights => cmd::cmd_insights(&client, &palette).await?,
        Commands::Profile { command } => {
            cmd::cmd_profile(&client, &palette, command.clone(), cli.yes).await?
        }
        Commands::Config { command } => {
            cmd::cmd_config(cli.config.as_deref(), &config, command.clone())?
        }
    }

    Ok(())
}
