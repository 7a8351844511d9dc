// registration-client/src/api/client.rs

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::info;

use crate::api::dto::RegistrationPayload;
use crate::config::ApiConfig;
use crate::domain::SubmittedRecord;
use crate::error::{AppError, AppResult};
use crate::logging::RequestContext;
use crate::utils::error_helper::unexpected_status_error;

/// 登録データの送信・一覧取得を行うエンドポイント
pub const SUBMIT_FORM_PATH: &str = "/api/user/submit-form";

const USER_AGENT: &str = concat!("registration-client/", env!("CARGO_PKG_VERSION"));

/// 登録APIのトレイト定義
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// 登録済みレコードの一覧を取得
    async fn list_records(&self) -> AppResult<Vec<SubmittedRecord>>;

    /// 登録データを送信し、作成されたレコード（レスポンスボディ）を返す
    async fn submit_record(&self, payload: &RegistrationPayload) -> AppResult<Value>;
}

/// HTTP経由の登録APIクライアント
#[derive(Clone, Debug)]
pub struct HttpRegistrationApi {
    client: Client,
    base_url: String,
}

impl HttpRegistrationApi {
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, SUBMIT_FORM_PATH)
    }

    /// 送信結果を検査し、2xx 以外はエラーにする
    async fn check_status(
        context: &RequestContext,
        result: Result<Response, reqwest::Error>,
        operation: &str,
    ) -> AppResult<Response> {
        let response = result.map_err(|e| {
            context.fail(&e);
            AppError::Http(e)
        })?;

        let status = response.status();
        context.complete(status.as_u16());

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(unexpected_status_error(status, body, operation))
        }
    }
}

#[async_trait]
impl RegistrationApi for HttpRegistrationApi {
    async fn list_records(&self) -> AppResult<Vec<SubmittedRecord>> {
        let context = RequestContext::start("GET", SUBMIT_FORM_PATH);
        let result = self.client.get(self.endpoint()).send().await;
        let response = Self::check_status(&context, result, "list_records").await?;

        let records: Vec<SubmittedRecord> = response.json().await.map_err(|e| {
            context.fail(&e);
            AppError::Http(e)
        })?;

        info!(count = records.len(), "Fetched submitted records");
        Ok(records)
    }

    async fn submit_record(&self, payload: &RegistrationPayload) -> AppResult<Value> {
        let context = RequestContext::start("POST", SUBMIT_FORM_PATH);
        let result = self.client.post(self.endpoint()).json(payload).send().await;
        let response = Self::check_status(&context, result, "submit_record").await?;

        // 作成結果はログ出力にのみ使う。JSONでなければ文字列のまま返す
        let body = response.text().await?;
        let created = if body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body).unwrap_or(Value::String(body))
        };

        info!(response = %created, "Form submitted successfully");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_endpoint_joins_base_url() {
        let api = HttpRegistrationApi::new(&ApiConfig {
            base_url: "http://localhost:5000".to_string(),
            timeout: Some(Duration::from_secs(1)),
        })
        .unwrap();

        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(api.endpoint(), "http://localhost:5000/api/user/submit-form");
    }
}
