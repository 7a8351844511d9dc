// registration-client/src/features/registration/form.rs

use serde_json::Value;
use tracing::{error, info};

use crate::api::dto::RegistrationPayload;
use crate::api::RegistrationApi;
use crate::app::Route;
use crate::domain::{DraftRecord, FieldErrorMap, FormField, InputKind, Interest, ScalarField};
use crate::error::{AppError, AppResult};

/// フォームの進行状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// 送信成功時の結果
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    /// APIが返した作成済みレコード
    pub created: Value,
    /// 送信後に遷移する画面
    pub redirect_to: Route,
}

/// 描画用のフィールド情報
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub field: FormField,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub kind: InputKind,
    pub value: String,
    pub error: Option<String>,
}

/// 登録フォーム
///
/// ドラフト・エラーマップ・送信状態をひとつの構造体で保持する。ドラフトは変更のたびに
/// 新しい値へ置き換え、エラーマップは送信のたびに作り直す。
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    draft: DraftRecord,
    errors: FieldErrorMap,
    submit_error: Option<String>,
    status: FormStatus,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存のドラフトから開始する
    pub fn with_draft(draft: DraftRecord) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrorMap {
        &self.errors
    }

    /// フィールド横に表示するエラーメッセージ
    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    /// 直近の送信失敗（通信エラー）のメッセージ
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn update_field(&mut self, field: ScalarField, value: impl Into<String>) {
        self.draft = self.draft.with_field(field, value);
    }

    /// 電話番号ウィジェットの入力（国番号込みの数字列）を反映する
    pub fn update_phone(&mut self, raw_digits: &str) {
        self.draft = self.draft.with_phone_digits(raw_digits);
    }

    pub fn toggle_interest(&mut self, interest: Interest, checked: bool) {
        self.draft = self.draft.with_interest(interest, checked);
    }

    /// 電話番号ウィジェットに表示する値
    pub fn phone_digits(&self) -> &str {
        self.draft.phone_digits()
    }

    /// フォームを描画するためのフィールド一覧
    pub fn field_views(&self) -> Vec<FieldView> {
        FormField::all()
            .into_iter()
            .map(|field| FieldView {
                field,
                label: field.label(),
                placeholder: field.placeholder(),
                kind: field.input_kind(),
                value: self.display_value(field),
                error: self.errors.get(field).map(str::to_string),
            })
            .collect()
    }

    fn display_value(&self, field: FormField) -> String {
        match field {
            FormField::Interests => self
                .draft
                .interests
                .iter()
                .map(|i| i.as_str())
                .collect::<Vec<_>>()
                .join(","),
            FormField::PhoneNumber => self.draft.phone_digits().to_string(),
            other => ScalarField::all()
                .into_iter()
                .find(|scalar| scalar.as_form_field() == other)
                .map(|scalar| self.draft.value_of(scalar).to_string())
                .unwrap_or_default(),
        }
    }

    /// ドラフト全体を検証して送信する
    ///
    /// 検証に失敗した場合はエラーマップを今回の結果で置き換え、送信しない。
    /// 送信に失敗した場合はドラフトを保持したまま `submit_error` に記録する（再送はしない）。
    pub async fn submit(&mut self, api: &dyn RegistrationApi) -> AppResult<SubmitOutcome> {
        self.submit_error = None;

        let payload = match RegistrationPayload::from_draft(&self.draft) {
            Ok(payload) => payload,
            Err(AppError::Validation(errors)) => {
                self.errors = errors.clone();
                return Err(AppError::Validation(errors));
            }
            Err(e) => return Err(e),
        };

        self.errors = FieldErrorMap::new();
        self.status = FormStatus::Submitting;

        match api.submit_record(&payload).await {
            Ok(created) => {
                info!(email = %payload.email, "Registration submitted");
                self.status = FormStatus::Submitted;
                Ok(SubmitOutcome {
                    created,
                    redirect_to: Route::Table,
                })
            }
            Err(e) => {
                error!(error = %e, error_type = e.error_type(), "Failed to submit registration");
                self.submit_error = Some(e.to_string());
                self.status = FormStatus::Editing;
                Err(e)
            }
        }
    }
}
