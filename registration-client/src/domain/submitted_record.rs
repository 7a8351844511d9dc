// registration-client/src/domain/submitted_record.rs

use crate::types::{
    deserialize_lenient_number, deserialize_lenient_string_list, deserialize_null_default,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 一覧APIが返す登録済みレコード
///
/// パスワード系のフィールドは持たない。サーバー側の形式揺れを許容するため、
/// 欠けているフィールドは空値になり、未知のフィールドは無視する。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmittedRecord {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub first_name: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub last_name: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub email: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub phone_number: String,
    #[serde(deserialize_with = "deserialize_lenient_number")]
    pub age: Option<f64>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub gender: String,
    #[serde(deserialize_with = "deserialize_lenient_string_list")]
    pub interests: Vec<String>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub birth_date: String,
}

impl SubmittedRecord {
    /// 生年月日を日付として解釈する
    ///
    /// `YYYY-MM-DD` のほか、`1990-01-31T00:00:00.000Z` のような日時文字列の日付部分も受け付ける。
    pub fn birth_date_value(&self) -> Option<NaiveDate> {
        let trimmed = self.birth_date.trim();
        let date_part = trimmed.get(..10).unwrap_or(trimmed);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }

    pub fn interests_text(&self) -> String {
        self.interests.join(", ")
    }

    /// 年齢の表示用文字列（整数値は小数点なし）
    pub fn age_text(&self) -> String {
        match self.age {
            Some(age) if age.fract() == 0.0 => format!("{}", age as i64),
            Some(age) => age.to_string(),
            None => String::new(),
        }
    }
}
