/// Configuration and request-parameter errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {reason}")]
    Parse { reason: String },

    #[error("unknown intent `{name}`")]
    UnknownIntent { name: String },

    #[error("unknown preference token `{token}`")]
    UnknownPreference { token: String },

    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
