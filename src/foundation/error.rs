/// Convenience result type used across barrace.
pub type RaceResult<T> = Result<T, RaceError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Missing numeric fields and entities absent from the previous frame are not errors: both are
/// recovered as zero-valued inputs by the layout engine and never surface here.
#[derive(thiserror::Error, Debug)]
pub enum RaceError {
    /// Scale domain or range is not a finite, strictly positive number.
    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    /// Two records in the same frame share a key.
    #[error("duplicate entity key \"{key}\" in {frame}")]
    DuplicateKey {
        /// The repeated entity key.
        key: String,
        /// Human-readable frame identifier (label or position).
        frame: String,
    },

    /// Invalid user-provided configuration or chart data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing chart data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RaceError {
    /// Build a [`RaceError::InvalidDomain`] value.
    pub fn invalid_domain(msg: impl Into<String>) -> Self {
        Self::InvalidDomain(msg.into())
    }

    /// Build a [`RaceError::DuplicateKey`] value.
    pub fn duplicate_key(key: impl Into<String>, frame: impl Into<String>) -> Self {
        Self::DuplicateKey {
            key: key.into(),
            frame: frame.into(),
        }
    }

    /// Build a [`RaceError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<serde_json::Error> for RaceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
