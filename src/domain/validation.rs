use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    Missing { field: &'static str },
    InvalidEndpoint { input: String },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{field} must be set and not empty"),
            Self::InvalidEndpoint { input } => {
                write!(f, "invalid gateway endpoint: {input} (expected an absolute http(s) URL)")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}
