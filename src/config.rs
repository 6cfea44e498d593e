//! Environment-sourced configuration.
//!
//! All four `SINCH_*` variables are required; a missing or blank one is a
//! [`ConfigurationError`] (logged by [`Credentials::new`]) and no client gets built.

use crate::domain::{AppId, ConfigurationError, Credentials, KeyId, KeySecret, ProjectId};

impl Credentials {
    /// Read credentials from `SINCH_API_KEY_ID`, `SINCH_API_KEY_SECRET`,
    /// `SINCH_API_PROJECT_ID` and `SINCH_APP_ID`.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through a custom resolver (tests avoid touching the process env).
    pub fn from_lookup(env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigurationError> {
        let read = |key: &str| env(key).unwrap_or_default();
        Self::new(
            read(KeyId::ENV),
            read(KeySecret::ENV),
            read(ProjectId::ENV),
            read(AppId::ENV),
        )
    }
}
