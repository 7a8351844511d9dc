// registration-client/src/domain/draft_record.rs

use super::form_field::ScalarField;
use super::interest::Interest;
use serde::{Deserialize, Serialize};

/// 入力途中の登録データ
///
/// 各フィールドはユーザーが入力したままの値を保持する。変更系のメソッドは
/// 自身を書き換えずに新しい値を返す。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
    pub age: String,
    pub gender: String,
    pub interests: Vec<Interest>,
    pub birth_date: String,
}

impl DraftRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value_of(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::FirstName => &self.first_name,
            ScalarField::LastName => &self.last_name,
            ScalarField::Email => &self.email,
            ScalarField::PhoneNumber => &self.phone_number,
            ScalarField::Password => &self.password,
            ScalarField::ConfirmPassword => &self.confirm_password,
            ScalarField::Age => &self.age,
            ScalarField::Gender => &self.gender,
            ScalarField::BirthDate => &self.birth_date,
        }
    }

    /// 1フィールドだけ置き換えた新しいドラフトを返す
    pub fn with_field(&self, field: ScalarField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            ScalarField::FirstName => &mut next.first_name,
            ScalarField::LastName => &mut next.last_name,
            ScalarField::Email => &mut next.email,
            ScalarField::PhoneNumber => &mut next.phone_number,
            ScalarField::Password => &mut next.password,
            ScalarField::ConfirmPassword => &mut next.confirm_password,
            ScalarField::Age => &mut next.age,
            ScalarField::Gender => &mut next.gender,
            ScalarField::BirthDate => &mut next.birth_date,
        };
        *slot = value.into();
        next
    }

    /// 電話番号ウィジェットの数字列から `+` 付きの値を組み立てる（形式チェックはしない）
    pub fn with_phone_digits(&self, raw_digits: &str) -> Self {
        self.with_field(ScalarField::PhoneNumber, format!("+{}", raw_digits))
    }

    /// チェック状態に合わせて興味分野を追加・削除する
    ///
    /// 既に状態が一致している場合は何もしない。追加時はチェックした順を保持する。
    pub fn with_interest(&self, interest: Interest, checked: bool) -> Self {
        let mut next = self.clone();
        let present = next.interests.contains(&interest);
        if checked && !present {
            next.interests.push(interest);
        } else if !checked && present {
            next.interests.retain(|i| *i != interest);
        }
        next
    }

    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }

    /// 電話番号ウィジェットに表示する値（先頭の `+` を除いたもの）
    pub fn phone_digits(&self) -> &str {
        self.phone_number
            .strip_prefix('+')
            .unwrap_or(&self.phone_number)
    }
}
