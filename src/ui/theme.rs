//! Colour theme selection.
//!
//! The theme comes from config (`[ui] theme`) and may be overridden per
//! invocation with `--theme`. `Auto` defers to the terminal: colours are
//! used when stdout is a tty and disabled otherwise.

use std::fmt;
use std::str::FromStr;

use console::Style;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Auto];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "auto" => Ok(Theme::Auto),
            other => Err(format!(
                "unknown theme '{other}' (valid: light, dark, auto)"
            )),
        }
    }
}

/// Resolved styles for one theme. Built once at startup and passed to
/// the render functions, never read from a global.
#[derive(Debug, Clone)]
pub struct Palette {
    pub heading: Style,
    pub accent: Style,
    pub good: Style,
    pub warn: Style,
    pub bad: Style,
    pub muted: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                heading: Style::new().blue().bold(),
                accent: Style::new().magenta(),
                good: Style::new().green(),
                warn: Style::new().yellow(),
                bad: Style::new().red(),
                muted: Style::new().dim(),
            },
            Theme::Dark => Self {
                heading: Style::new().cyan().bold(),
                accent: Style::new().cyan(),
                good: Style::new().green().bold(),
                warn: Style::new().yellow().bold(),
                bad: Style::new().red().bold(),
                muted: Style::new().dim(),
            },
            // `console` drops the escapes itself when stdout is not a tty, so
            // auto only has to pick a readable-on-both scheme.
            Theme::Auto => Self {
                heading: Style::new().cyan().bold(),
                accent: Style::new().cyan(),
                good: Style::new().green(),
                warn: Style::new().yellow(),
                bad: Style::new().red(),
                muted: Style::new().dim(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_roundtrip() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), theme);
        }
    }

    #[test]
    fn test_theme_parse_rejects_unknown() {
        let err = "solarized".parse::<Theme>().unwrap_err();
        assert!(err.contains("solarized"));
        assert!(err.contains("auto"));
    }

    #[test]
    fn test_theme_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }
}
