// registration-client/src/utils/validation/common.rs

//! 共通バリデーション定数と判定関数
//!
//! 登録フォームのスキーマはここにある定数・正規表現・判定関数を組み合わせて構成します。

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateEmail;

// =============================================================================
// バリデーション定数
// =============================================================================

/// パスワードの制約
pub mod password {
    pub const MIN_LENGTH: usize = 8;
}

/// 年齢の制約
pub mod age {
    pub const MIN: f64 = 18.0;
    pub const MAX: f64 = 100.0;
}

/// 生年月日の入力形式（date input と同じ）
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// バリデーション正規表現
// =============================================================================

/// 国際電話番号（`+` の後に先頭が0でない ASCII 数字が2〜15桁）
pub static PHONE_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9][0-9]{1,14}$").expect("Invalid phone number regex"));

pub static PASSWORD_SYMBOL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).expect("Invalid password symbol regex"));

// =============================================================================
// 判定関数
// =============================================================================

/// 未入力か（空白のみの値は入力ありとして扱う）
pub fn is_empty_input(value: &str) -> bool {
    value.is_empty()
}

pub fn is_valid_email(value: &str) -> bool {
    value.validate_email()
}

pub fn has_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

pub fn has_uppercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_lowercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
}

/// 年齢の入力値を数値として解釈する
pub fn parse_age(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|age| age.is_finite())
}

/// 生年月日の入力値を暦日として解釈する（存在しない日付は None）
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), BIRTH_DATE_FORMAT).ok()
}

// =============================================================================
// テスト
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_number_validation() {
        let is_valid = |value: &str| PHONE_NUMBER_REGEX.is_match(value);

        // 有効な電話番号
        assert!(is_valid("+11234567890"));
        assert!(is_valid("+12"));
        assert!(is_valid("+123456789012345"));

        // 無効な電話番号
        assert!(!is_valid("1234567890"));
        assert!(!is_valid("+1"));
        assert!(!is_valid("+01234567"));
        assert!(!is_valid("+1234567890123456"));
        assert!(!is_valid("+1 234 567"));
        assert!(!is_valid("+"));

        // ASCII 以外の数字は受け付けない
        assert!(!is_valid("+1\u{0663}\u{0664}\u{0665}\u{0666}"));
        assert!(!is_valid("+\u{0661}2345"));
        assert!(!is_valid("+1\u{FF12}\u{FF13}"));
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email("user @example.com"));
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("45"), Some(45.0));
        assert_eq!(parse_age(" 18 "), Some(18.0));
        assert_eq!(parse_age("20.5"), Some(20.5));
        assert_eq!(parse_age("abc"), None);
        assert_eq!(parse_age("NaN"), None);
        assert_eq!(parse_age(""), None);
    }

    #[test]
    fn test_parse_birth_date() {
        assert_eq!(parse_birth_date("2000-02-29"), NaiveDate::from_ymd_opt(2000, 2, 29));
        assert_eq!(parse_birth_date("1999-02-29"), None);
        assert_eq!(parse_birth_date("31/12/1999"), None);
    }

    #[test]
    fn test_empty_input() {
        assert!(is_empty_input(""));
        assert!(!is_empty_input("   \t"));
        assert!(!is_empty_input(" a "));
    }

    #[test]
    fn test_validation_constants() {
        assert_eq!(password::MIN_LENGTH, 8);
        assert_eq!(age::MIN, 18.0);
        assert_eq!(age::MAX, 100.0);
        for symbol in "!@#$%^&*(),.?\":{}|<>".chars() {
            assert!(PASSWORD_SYMBOL_REGEX.is_match(&symbol.to_string()), "{:?}", symbol);
        }
        assert!(!PASSWORD_SYMBOL_REGEX.is_match("Abc123_-"));
    }
}
