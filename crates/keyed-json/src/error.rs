//! Error types for the mapping engine.

use thiserror::Error;

/// A transform direction rejected its input.
///
/// Carries a rendering of the offending value for diagnostics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("transform rejected value `{value}`: {reason}")]
pub struct TransformError {
    pub value: String,
    pub reason: String,
}

impl TransformError {
    pub fn new(value: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Field-local failure, before the engine attaches the resolved key.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("incompatible wire value: {0}")]
    Mismatch(#[from] serde_json::Error),
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Failure of a whole decode or encode call.
#[derive(Debug, Error)]
pub enum KeyedError {
    /// A required field's key was absent from the decode input.
    #[error("missing required key `{key}`")]
    MissingKey { key: String },
    /// The raw wire value at `key` cannot become the field's wire type.
    #[error("type mismatch at key `{key}`: {source}")]
    TypeMismatch {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// A transform rejected its input at `key`.
    #[error("transform failed at key `{key}`: {source}")]
    Transform {
        key: String,
        #[source]
        source: TransformError,
    },
}

impl KeyedError {
    pub(crate) fn from_field(key: &str, err: FieldError) -> Self {
        let key = key.to_owned();
        match err {
            FieldError::Mismatch(source) => Self::TypeMismatch { key, source },
            FieldError::Transform(source) => Self::Transform { key, source },
        }
    }

    /// The wire key the failure is attached to.
    pub fn key(&self) -> &str {
        match self {
            Self::MissingKey { key } | Self::TypeMismatch { key, .. } | Self::Transform { key, .. } => key,
        }
    }
}
