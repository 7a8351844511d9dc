// registration-client/src/domain/form_field.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 登録フォームのフィールド
///
/// 宣言順がフォーム上の表示順であり、エラーマップの並び順にもなる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Password,
    ConfirmPassword,
    Age,
    Gender,
    Interests,
    BirthDate,
}

/// 入力ウィジェットの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Phone,
    Password,
    Number,
    Select,
    Checkboxes,
    Date,
}

impl FormField {
    /// すべてのフィールドを表示順で取得
    pub fn all() -> [Self; 10] {
        [
            Self::FirstName,
            Self::LastName,
            Self::Email,
            Self::PhoneNumber,
            Self::Password,
            Self::ConfirmPassword,
            Self::Age,
            Self::Gender,
            Self::Interests,
            Self::BirthDate,
        ]
    }

    /// JSON上のフィールド名
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Interests => "interests",
            Self::BirthDate => "birthDate",
        }
    }

    /// JSON上のフィールド名から変換
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|field| field.as_str() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name:",
            Self::LastName => "Last Name:",
            Self::Email => "Email:",
            Self::PhoneNumber => "Phone Number:",
            Self::Password => "Password:",
            Self::ConfirmPassword => "Confirm Password:",
            Self::Age => "Age:",
            Self::Gender => "Gender:",
            Self::Interests => "Interests:",
            Self::BirthDate => "Date of Birth:",
        }
    }

    /// プレースホルダー（選択式・チェックボックス・電話番号ウィジェットにはない）
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::FirstName => Some("Enter your first name"),
            Self::LastName => Some("Enter your last name"),
            Self::Email => Some("Enter your email"),
            Self::Password => Some("Enter your password"),
            Self::ConfirmPassword => Some("Confirm your password"),
            Self::Age => Some("Enter your age"),
            Self::BirthDate => Some("Enter your date of birth"),
            Self::PhoneNumber | Self::Gender | Self::Interests => None,
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            Self::FirstName | Self::LastName => InputKind::Text,
            Self::Email => InputKind::Email,
            Self::PhoneNumber => InputKind::Phone,
            Self::Password | Self::ConfirmPassword => InputKind::Password,
            Self::Age => InputKind::Number,
            Self::Gender => InputKind::Select,
            Self::Interests => InputKind::Checkboxes,
            Self::BirthDate => InputKind::Date,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 単一の値で置き換えられるフィールド（interests 以外）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Password,
    ConfirmPassword,
    Age,
    Gender,
    BirthDate,
}

impl ScalarField {
    pub fn all() -> [Self; 9] {
        [
            Self::FirstName,
            Self::LastName,
            Self::Email,
            Self::PhoneNumber,
            Self::Password,
            Self::ConfirmPassword,
            Self::Age,
            Self::Gender,
            Self::BirthDate,
        ]
    }

    pub fn as_form_field(&self) -> FormField {
        match self {
            Self::FirstName => FormField::FirstName,
            Self::LastName => FormField::LastName,
            Self::Email => FormField::Email,
            Self::PhoneNumber => FormField::PhoneNumber,
            Self::Password => FormField::Password,
            Self::ConfirmPassword => FormField::ConfirmPassword,
            Self::Age => FormField::Age,
            Self::Gender => FormField::Gender,
            Self::BirthDate => FormField::BirthDate,
        }
    }
}

impl std::str::FromStr for ScalarField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|field| field.as_form_field().as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Unknown field: '{}'. Valid fields are: {}",
                    s,
                    Self::all()
                        .iter()
                        .map(|f| f.as_form_field().as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

impl From<ScalarField> for FormField {
    fn from(field: ScalarField) -> Self {
        field.as_form_field()
    }
}

/// フィールドごとのエラーメッセージ（1フィールドにつき1件）
///
/// 検証のたびに丸ごと作り直されるスナップショットで、前回の結果とはマージしない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrorMap(BTreeMap<FormField, String>);

impl FieldErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既にエラーがあるフィールドには追加しない（最初の失敗のみ保持）
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) -> bool {
        if self.0.contains_key(&field) {
            return false;
        }
        self.0.insert(field, message.into());
        true
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}
