use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Validation,
    Internal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown accent color '{0}'")]
    UnknownAccentColor(String),
    #[error("unknown exhibition kind '{0}'")]
    UnknownKind(String),
    #[error("unknown exhibition status '{0}'")]
    UnknownStatus(String),
    #[error("unknown sort key '{0}'")]
    UnknownSortKey(String),
}

impl From<DomainError> for ApiError {
    fn from(value: DomainError) -> Self {
        Self::new(ErrorCode::Validation, value.to_string())
    }
}
