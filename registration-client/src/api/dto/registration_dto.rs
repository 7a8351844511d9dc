// registration-client/src/api/dto/registration_dto.rs

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use validator::Validate;

use crate::domain::{DraftRecord, Gender, Interest};
use crate::error::{AppError, AppResult};
use crate::utils::error_helper::convert_validation_errors;
use crate::utils::validation::{parse_age, parse_birth_date};

// --- リクエストDTO ---

/// 登録APIへ送信するデータ
///
/// 検証を通過したドラフトからのみ生成する。年齢は数値、生年月日はISO形式の日付に正規化する。
/// パスワード欄は従来どおり送信に含める。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(serialize_with = "serialize_age")]
    pub age: f64,
    pub gender: Gender,
    pub interests: Vec<Interest>,
    pub birth_date: NaiveDate,
}

/// 整数の年齢は整数としてシリアライズする
fn serialize_age<S>(age: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if age.fract() == 0.0 {
        serializer.serialize_i64(*age as i64)
    } else {
        serializer.serialize_f64(*age)
    }
}

impl RegistrationPayload {
    /// ドラフトを検証して送信データに変換する
    ///
    /// 検証に失敗した場合は `AppError::Validation` を返す。
    pub fn from_draft(draft: &DraftRecord) -> AppResult<Self> {
        draft
            .validate()
            .map_err(|errors| convert_validation_errors(errors, "registration_payload"))?;

        let (Some(age), Some(gender), Some(birth_date)) = (
            parse_age(&draft.age),
            Gender::from_str(&draft.gender),
            parse_birth_date(&draft.birth_date),
        ) else {
            return Err(AppError::BadRequest(
                "Draft passed validation but could not be normalized".to_string(),
            ));
        };

        Ok(Self {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            phone_number: draft.phone_number.clone(),
            password: draft.password.clone(),
            confirm_password: draft.confirm_password.clone(),
            age,
            gender,
            interests: draft.interests.clone(),
            birth_date,
        })
    }
}
