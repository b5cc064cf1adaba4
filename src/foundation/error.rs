pub type ModelResult<T> = Result<T, ModelError>;

#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("unknown {kind} literal: {value:?}")]
    UnknownLiteral { kind: &'static str, value: String },

    #[error("serialization error: {0}")]
    Serde(String),

    #[error("playlist not found")]
    PlaylistNotFound,

    #[error("failed to generate unique playlist UID")]
    FailedGenerateUniqueUid,

    #[error("command missing required fields")]
    CommandValidationFailed,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ModelError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_literal(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownLiteral {
            kind,
            value: value.into(),
        }
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
