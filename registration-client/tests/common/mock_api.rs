// tests/common/mock_api.rs

use async_trait::async_trait;
use registration_client::api::dto::RegistrationPayload;
use registration_client::api::RegistrationApi;
use registration_client::domain::SubmittedRecord;
use registration_client::error::{AppError, AppResult};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// テスト用のモック登録API
///
/// 送信されたペイロードと一覧取得の回数を記録する。
#[derive(Clone, Default)]
pub struct MockRegistrationApi {
    records: Arc<Mutex<Vec<SubmittedRecord>>>,
    submitted: Arc<Mutex<Vec<RegistrationPayload>>>,
    list_calls: Arc<Mutex<usize>>,
    fail_list: bool,
    fail_submit: bool,
    list_delay: Option<Duration>,
}

impl MockRegistrationApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<SubmittedRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_list: true,
            fail_submit: true,
            ..Self::default()
        }
    }

    /// 一覧取得を遅延させる（取得中の状態を観測するため）
    pub fn with_list_delay(mut self, delay: Duration) -> Self {
        self.list_delay = Some(delay);
        self
    }

    pub fn submitted(&self) -> Vec<RegistrationPayload> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }
}

fn server_error() -> AppError {
    AppError::UnexpectedStatus {
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        body: "mock failure".to_string(),
    }
}

#[async_trait]
impl RegistrationApi for MockRegistrationApi {
    async fn list_records(&self) -> AppResult<Vec<SubmittedRecord>> {
        *self.list_calls.lock().unwrap() += 1;
        if let Some(delay) = self.list_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_list {
            return Err(server_error());
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn submit_record(&self, payload: &RegistrationPayload) -> AppResult<Value> {
        if self.fail_submit {
            return Err(server_error());
        }
        self.submitted.lock().unwrap().push(payload.clone());
        Ok(json!({ "id": self.submitted.lock().unwrap().len(), "email": payload.email }))
    }
}
