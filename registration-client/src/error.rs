// src/error.rs

use crate::domain::form_field::FieldErrorMap;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(FieldErrorMap),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from API: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// エラー種別を文字列で取得（ログ用）
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_errors",
            AppError::Http(_) => "http_error",
            AppError::UnexpectedStatus { .. } => "unexpected_status",
            AppError::Serialization(_) => "serialization_error",
            AppError::Config(_) => "config_error",
            AppError::BadRequest(_) => "bad_request",
        }
    }

    /// フィールドエラーを保持している場合は取得
    pub fn field_errors(&self) -> Option<&FieldErrorMap> {
        match self {
            AppError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form_field::FormField;

    #[test]
    fn test_validation_error_display() {
        let mut errors = FieldErrorMap::new();
        errors.insert(FormField::FirstName, "First Name is Required");
        errors.insert(FormField::Email, "Email is Required");

        let err = AppError::Validation(errors);
        assert_eq!(err.to_string(), "Validation failed for 2 field(s)");
        assert_eq!(err.error_type(), "validation_errors");
        assert_eq!(err.field_errors().map(|e| e.len()), Some(2));
    }

    #[test]
    fn test_unexpected_status_display() {
        let err = AppError::UnexpectedStatus {
            status: StatusCode::BAD_GATEWAY,
            body: "upstream down".to_string(),
        };
        assert!(err.to_string().contains("502"));
        assert!(err.field_errors().is_none());
    }
}
