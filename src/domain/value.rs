use std::fmt;

use base64::Engine;
use serde::Serialize;

use crate::domain::validation::ConfigurationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sinch access key id.
///
/// Invariant: not blank. The value is kept verbatim since it feeds the Basic token.
pub struct KeyId(String);

impl KeyId {
    /// Environment variable holding the key id (`SINCH_API_KEY_ID`).
    pub const ENV: &'static str = "SINCH_API_KEY_ID";

    /// Create a validated [`KeyId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ConfigurationError::Missing { field: Self::ENV });
        }
        Ok(Self(value))
    }

    /// Borrow the key id as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq)]
/// Sinch access key secret.
///
/// Invariant: must not be empty (whitespace is preserved and allowed). `Debug` output is
/// redacted.
pub struct KeySecret(String);

impl KeySecret {
    /// Environment variable holding the key secret (`SINCH_API_KEY_SECRET`).
    pub const ENV: &'static str = "SINCH_API_KEY_SECRET";

    /// Create a validated [`KeySecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ConfigurationError::Missing { field: Self::ENV });
        }
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for KeySecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeySecret(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sinch project id, part of the `messages:send` URL path.
///
/// Invariant: non-empty after trimming.
pub struct ProjectId(String);

impl ProjectId {
    /// Environment variable holding the project id (`SINCH_API_PROJECT_ID`).
    pub const ENV: &'static str = "SINCH_API_PROJECT_ID";

    /// Create a validated [`ProjectId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ConfigurationError::Missing { field: Self::ENV });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated project id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Conversation API application id (`app_id`).
///
/// Invariant: non-empty after trimming.
pub struct AppId(String);

impl AppId {
    /// Environment variable holding the app id (`SINCH_APP_ID`).
    pub const ENV: &'static str = "SINCH_APP_ID";

    /// Create a validated [`AppId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ConfigurationError::Missing { field: Self::ENV });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated app id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Everything the client needs to authenticate and address the gateway.
pub struct Credentials {
    key_id: KeyId,
    key_secret: KeySecret,
    project_id: ProjectId,
    app_id: AppId,
}

impl Credentials {
    /// Validate all four parts. The first missing value (in key id, key secret, project id,
    /// app id order) is logged and reported.
    pub fn new(
        key_id: impl Into<String>,
        key_secret: impl Into<String>,
        project_id: impl Into<String>,
        app_id: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        Self::validate(
            key_id.into(),
            key_secret.into(),
            project_id.into(),
            app_id.into(),
        )
        .inspect_err(|err| tracing::error!(error = %err, "invalid Sinch credentials"))
    }

    fn validate(
        key_id: String,
        key_secret: String,
        project_id: String,
        app_id: String,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            key_id: KeyId::new(key_id)?,
            key_secret: KeySecret::new(key_secret)?,
            project_id: ProjectId::new(project_id)?,
            app_id: AppId::new(app_id)?,
        })
    }

    pub fn key_id(&self) -> &KeyId {
        &self.key_id
    }

    pub fn key_secret(&self) -> &KeySecret {
        &self.key_secret
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn app_id(&self) -> &AppId {
        &self.app_id
    }
}

#[derive(Clone, PartialEq, Eq)]
/// Basic-auth token: standard base64 (padded) of `"<key_id>:<key_secret>"`.
///
/// Both halves are used exactly as configured; surrounding whitespace is not stripped.
///
/// Derived once per client and never logged; `Debug` output is redacted.
pub struct AuthorizationToken(String);

impl AuthorizationToken {
    /// Derive the token from a key pair.
    pub fn derive(key_id: &KeyId, key_secret: &KeySecret) -> Self {
        let pair = format!("{}:{}", key_id.as_str(), key_secret.expose());
        Self(base64::engine::general_purpose::STANDARD.encode(pair.as_bytes()))
    }

    /// The bare base64 token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header (`Basic <token>`).
    pub fn header_value(&self) -> String {
        format!("Basic {}", self.0)
    }
}

impl fmt::Debug for AuthorizationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthorizationToken(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
/// Recipient phone number as sent to the gateway (`identity`).
///
/// Normalized on construction: surrounding whitespace trimmed, internal spaces removed.
/// No other validation happens; the gateway decides what a valid number is.
pub struct RecipientAddress(String);

impl RecipientAddress {
    /// Normalize any displayable value into a recipient address.
    pub fn new(value: impl ToString) -> Self {
        let value = value.to_string();
        Self(value.trim().replace(' ', ""))
    }

    /// Normalized value as sent to the gateway.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipientAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipientAddress {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RecipientAddress {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&String> for RecipientAddress {
    fn from(value: &String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Text of an RCS message.
///
/// Any displayable value is accepted and stored as its string form; the text is sent as is.
pub struct MessageText(String);

impl MessageText {
    pub fn new(value: impl ToString) -> Self {
        Self(value.to_string())
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, used for logging.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Delivery-report preference. Passed through unvalidated.
pub struct DeliveryReport(String);

impl DeliveryReport {
    /// The gateway's default preference.
    pub const NONE: &'static str = "none";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the default `"none"` preference.
    pub fn is_none(&self) -> bool {
        self.0 == Self::NONE
    }
}

impl Default for DeliveryReport {
    fn default() -> Self {
        Self(Self::NONE.to_owned())
    }
}
