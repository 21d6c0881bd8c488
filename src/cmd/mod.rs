//! CLI command implementations.
//!
//! Each submodule owns one `Commands` variant:
//!
//! | Module         | Commands handled |
//! |----------------|------------------|
//! | `dashboard`    | `Dashboard`      |
//! | `goals`        | `Goals`          |
//! | `achievements` | `Achievements`   |
//! | `insights`     | `Insights`       |
//! | `profile`      | `Profile`        |
//! | `config`       | `Config`         |

pub mod achievements;
pub mod config;
pub mod dashboard;
pub mod goals;
pub mod insights;
pub mod profile;

pub use achievements::cmd_achievements;
pub use config::cmd_config;
pub use dashboard::cmd_dashboard;
pub use goals::cmd_goals;
pub use insights::cmd_insights;
pub use profile::cmd_profile;
