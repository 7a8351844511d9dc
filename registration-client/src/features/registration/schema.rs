// registration-client/src/features/registration/schema.rs

//! 登録フォームの検証スキーマ
//!
//! スキーマは `(フィールド, 制約, メッセージ)` の静的テーブルとして定義し、
//! [`validate_draft`] が全フィールドをまとめて検証する（最初の失敗で打ち切らない）。
//! 1フィールドにつき保持するのはテーブル順で最初に失敗した制約のメッセージのみ。

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::{DraftRecord, FormField, ScalarField};
use crate::utils::validation::common::{self, age, password};

/// 単一フィールドに対する制約
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    /// 空文字でない（空白のみの値は満たす）
    Required,
    /// メールアドレス形式
    Email,
    /// 正規表現に一致する
    Pattern(&'static Lazy<Regex>),
    /// 最小文字数
    MinChars(usize),
    /// 文字種などの任意判定
    Contains(fn(&str) -> bool),
    /// 別フィールドの現在値と完全一致
    EqualsField(ScalarField),
    /// 数値として解釈できる
    Numeric,
    Min(f64),
    Max(f64),
    /// 固定語彙のいずれか
    OneOf(&'static [&'static str]),
    /// 1件以上選択されている（interests 用）
    NonEmptySelection,
    /// 実在する暦日
    CalendarDate,
}

/// スキーマの1行
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: FormField,
    pub code: &'static str,
    pub constraint: Constraint,
    pub message: &'static str,
}

const fn rule(
    field: FormField,
    code: &'static str,
    constraint: Constraint,
    message: &'static str,
) -> FieldRule {
    FieldRule {
        field,
        code,
        constraint,
        message,
    }
}

pub const GENDER_VALUES: &[&str] = &["male", "female", "other"];

/// 登録フォームの検証スキーマ（フィールドごとに判定順で並ぶ）
pub static REGISTRATION_SCHEMA: &[FieldRule] = &[
    rule(FormField::FirstName, "required", Constraint::Required, "First Name is Required"),
    rule(FormField::LastName, "required", Constraint::Required, "Last Name is Required"),
    rule(FormField::Email, "required", Constraint::Required, "Email is Required"),
    rule(FormField::Email, "email", Constraint::Email, "Invalid email format"),
    rule(FormField::PhoneNumber, "required", Constraint::Required, "Phone Number is required"),
    rule(
        FormField::PhoneNumber,
        "phone_pattern",
        Constraint::Pattern(&common::PHONE_NUMBER_REGEX),
        "Phone number is not valid",
    ),
    rule(FormField::Password, "required", Constraint::Required, "Password is required"),
    rule(
        FormField::Password,
        "length",
        Constraint::MinChars(password::MIN_LENGTH),
        "Password must be at least 8 characters",
    ),
    rule(
        FormField::Password,
        "password_symbol",
        Constraint::Pattern(&common::PASSWORD_SYMBOL_REGEX),
        "Password must contain at least one symbol",
    ),
    rule(
        FormField::Password,
        "password_digit",
        Constraint::Contains(common::has_digit),
        "Password must contain at least one number",
    ),
    rule(
        FormField::Password,
        "password_uppercase",
        Constraint::Contains(common::has_uppercase),
        "Password must contain at least one uppercase letter",
    ),
    rule(
        FormField::Password,
        "password_lowercase",
        Constraint::Contains(common::has_lowercase),
        "Password must contain at least one lowercase letter",
    ),
    rule(
        FormField::ConfirmPassword,
        "required",
        Constraint::Required,
        "Confirm password is required",
    ),
    rule(
        FormField::ConfirmPassword,
        "must_match",
        Constraint::EqualsField(ScalarField::Password),
        "Passwords must match",
    ),
    rule(FormField::Age, "required", Constraint::Required, "Age is required"),
    rule(FormField::Age, "numeric", Constraint::Numeric, "Age must be a number"),
    rule(
        FormField::Age,
        "range_min",
        Constraint::Min(age::MIN),
        "You must be at least 18 years old",
    ),
    rule(
        FormField::Age,
        "range_max",
        Constraint::Max(age::MAX),
        "You cannot be older than 100 years",
    ),
    rule(FormField::Gender, "required", Constraint::Required, "Gender is required"),
    rule(
        FormField::Gender,
        "one_of",
        Constraint::OneOf(GENDER_VALUES),
        "Gender must be male, female or other",
    ),
    rule(
        FormField::Interests,
        "non_empty",
        Constraint::NonEmptySelection,
        "Select at least one interest",
    ),
    rule(FormField::BirthDate, "required", Constraint::Required, "Date of birth is required"),
    rule(
        FormField::BirthDate,
        "date",
        Constraint::CalendarDate,
        "Date of birth must be a valid date",
    ),
];

fn scalar_of(field: FormField) -> Option<ScalarField> {
    ScalarField::all()
        .into_iter()
        .find(|scalar| scalar.as_form_field() == field)
}

impl Constraint {
    /// 制約を満たすか判定する
    ///
    /// 数値系の制約は数値として解釈できない値に対しては判定しない（Numeric が先に失敗する）。
    pub fn is_satisfied(&self, draft: &DraftRecord, field: FormField) -> bool {
        if let Constraint::NonEmptySelection = self {
            return !draft.interests.is_empty();
        }

        let value = match scalar_of(field) {
            Some(scalar) => draft.value_of(scalar),
            None => return true,
        };

        match self {
            Constraint::Required => !common::is_empty_input(value),
            Constraint::Email => common::is_valid_email(value),
            Constraint::Pattern(regex) => regex.is_match(value),
            Constraint::MinChars(min) => value.chars().count() >= *min,
            Constraint::Contains(check) => check(value),
            Constraint::EqualsField(other) => value == draft.value_of(*other),
            Constraint::Numeric => common::parse_age(value).is_some(),
            Constraint::Min(min) => common::parse_age(value).map_or(true, |n| n >= *min),
            Constraint::Max(max) => common::parse_age(value).map_or(true, |n| n <= *max),
            Constraint::OneOf(allowed) => allowed.contains(&value),
            Constraint::CalendarDate => common::parse_birth_date(value).is_some(),
            Constraint::NonEmptySelection => !draft.interests.is_empty(),
        }
    }
}

impl FieldRule {
    fn to_validation_error(self) -> ValidationError {
        let mut error = ValidationError::new(self.code);
        error.message = Some(Cow::Borrowed(self.message));
        match self.constraint {
            Constraint::MinChars(min) => error.add_param(Cow::Borrowed("min"), &min),
            Constraint::Min(min) => error.add_param(Cow::Borrowed("min"), &min),
            Constraint::Max(max) => error.add_param(Cow::Borrowed("max"), &max),
            Constraint::EqualsField(other) => {
                error.add_param(Cow::Borrowed("other"), &other.as_form_field().as_str())
            }
            _ => {}
        }
        error
    }
}

/// スキーマ全体でドラフトを検証する
///
/// すべてのフィールドを独立に検証し、失敗をまとめて返す。
pub fn validate_draft(draft: &DraftRecord) -> Result<(), ValidationErrors> {
    validate_with(REGISTRATION_SCHEMA, draft)
}

/// 任意のスキーマでドラフトを検証する
pub fn validate_with(schema: &[FieldRule], draft: &DraftRecord) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut failed: Vec<FormField> = Vec::new();

    for rule in schema {
        if failed.contains(&rule.field) {
            continue;
        }
        if !rule.constraint.is_satisfied(draft, rule.field) {
            failed.push(rule.field);
            errors.add(rule.field.as_str(), rule.to_validation_error());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

impl Validate for DraftRecord {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_draft(self)
    }
}
