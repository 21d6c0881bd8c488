//! Explicit auth session.
//!
//! The session is built once in `main` from config/environment and handed
//! to whatever needs it; there is no ambient process-wide auth state.

use crate::config::StrideConfig;

#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn new(token: Option<String>) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());
        Self { token }
    }

    pub fn from_config(config: &StrideConfig) -> Self {
        Self::new(config.api.token.clone())
    }

    /// Token to place in the `Authorization: Bearer` header, if any.
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_counts_as_anonymous() {
        assert!(!Session::new(None).is_authenticated());
        assert!(!Session::new(Some("   ".into())).is_authenticated());
    }

    #[test]
    fn test_bearer_exposes_token() {
        let session = Session::new(Some("t-123".into()));
        assert!(session.is_authenticated());
        assert_eq!(session.bearer(), Some("t-123"));
    }

    #[test]
    fn test_from_config() {
        let mut config = StrideConfig::default();
        config.api.token = Some("abc".into());
        assert!(Session::from_config(&config).is_authenticated());
        assert!(!Session::from_config(&StrideConfig::default()).is_authenticated());
    }
}
