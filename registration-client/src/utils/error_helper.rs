// registration-client/src/utils/error_helper.rs

//! エラーハンドリングの統一化ヘルパー
//!
//! フォーム・一覧・CLIで共通して使用するエラー処理パターンを提供します。

use crate::domain::{FieldErrorMap, FormField};
use crate::error::AppError;
use reqwest::StatusCode;
use tracing::{error, warn};
use validator::ValidationErrors;

// =============================================================================
// バリデーションエラー処理の統一
// =============================================================================

/// validatorのValidationErrorsをフィールドエラーマップに変換する
///
/// # Arguments
/// * `validation_errors` - スキーマ検証の結果
/// * `context` - エラーが発生したコンテキスト（ログ用）
pub fn to_field_error_map(validation_errors: &ValidationErrors, context: &str) -> FieldErrorMap {
    let field_errors = validation_errors.field_errors();
    warn!(
        context = %context,
        error_count = field_errors.len(),
        "Validation failed"
    );

    let mut map = FieldErrorMap::new();
    for (field, errors) in field_errors {
        let Some(form_field) = FormField::from_wire(&field.to_string()) else {
            continue;
        };
        if let Some(first) = errors.first() {
            let message = first
                .message
                .as_ref()
                .map_or_else(|| "Invalid value".to_string(), |cow| cow.to_string());
            map.insert(form_field, message);
        }
    }
    map
}

/// validatorのValidationErrorsをAppErrorに変換する統一処理
pub fn convert_validation_errors(validation_errors: ValidationErrors, context: &str) -> AppError {
    AppError::Validation(to_field_error_map(&validation_errors, context))
}

/// 入力エラーをログ付きで生成
pub fn bad_request_error(message: &str, context: &str) -> AppError {
    warn!(
        context = %context,
        message = %message,
        "Invalid input"
    );
    AppError::BadRequest(message.to_string())
}

/// 想定外のHTTPステータスをログ付きで生成
pub fn unexpected_status_error(status: StatusCode, body: String, context: &str) -> AppError {
    if status.is_server_error() {
        error!(context = %context, status = status.as_u16(), "API returned server error");
    } else {
        warn!(context = %context, status = status.as_u16(), "API returned unexpected status");
    }
    AppError::UnexpectedStatus { status, body }
}

// =============================================================================
// Result型のヘルパートレイト
// =============================================================================

/// Result型にエラー変換ヘルパーメソッドを追加するトレイト
pub trait ErrorHelperExt<T> {
    /// 入力エラーに変換
    fn map_bad_request(self, context: &str) -> Result<T, AppError>
    where
        Self: Sized;
}

impl<T, E> ErrorHelperExt<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn map_bad_request(self, context: &str) -> Result<T, AppError> {
        self.map_err(|e| bad_request_error(&e.to_string(), context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use validator::ValidationError;

    #[test]
    fn test_to_field_error_map_keeps_first_message() {
        let mut errors = ValidationErrors::new();
        let mut first = ValidationError::new("required");
        first.message = Some(Cow::Borrowed("Email is Required"));
        let mut second = ValidationError::new("email");
        second.message = Some(Cow::Borrowed("Invalid email format"));
        errors.add("email", first);
        errors.add("email", second);

        let map = to_field_error_map(&errors, "test");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(FormField::Email), Some("Email is Required"));
    }

    #[test]
    fn test_missing_message_falls_back() {
        let mut errors = ValidationErrors::new();
        errors.add("age", ValidationError::new("numeric"));

        let err = convert_validation_errors(errors, "test");
        let map = err.field_errors().unwrap();
        assert_eq!(map.get(FormField::Age), Some("Invalid value"));
    }

    #[test]
    fn test_map_bad_request() {
        let result: Result<(), String> = Err("Unknown field: 'nickname'".to_string());
        let err = result.map_bad_request("cli").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg.contains("nickname")));
    }
}
