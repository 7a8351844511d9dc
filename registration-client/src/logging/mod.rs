// src/logging/mod.rs

use std::time::Instant;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

#[macro_export]
macro_rules! log_with_context {
    ($level:expr, $msg:expr $(, $($key:expr => $value:expr),* $(,)?)?) => {
        match $level {
            tracing::Level::ERROR => {
                tracing::error!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::WARN => {
                tracing::warn!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::INFO => {
                tracing::info!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::DEBUG => {
                tracing::debug!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            _ => {}
        }
    };
}

/// トレーシングの初期化（RUST_LOG があればそちらを優先）
///
/// 既に初期化済みの場合は何もしない。
pub fn init_tracing(default_filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer())
        .try_init();
}

// APIリクエストのコンテキスト
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub request_id: String,
    pub method: String,
    pub path: String,
    started_at: Instant,
}

impl RequestContext {
    /// リクエスト開始を記録
    pub fn start(method: &str, path: &str) -> Self {
        let context = Self {
            request_id: Uuid::new_v4().to_string(),
            method: method.to_string(),
            path: path.to_string(),
            started_at: Instant::now(),
        };

        log_with_context!(
            tracing::Level::DEBUG,
            "Request started",
            "request_id" => &context.request_id,
            "method" => &context.method,
            "path" => &context.path,
        );

        context
    }

    /// レスポンス受信を記録（ステータスに応じてレベルを変える）
    pub fn complete(&self, status: u16) {
        log_with_context!(
            if status >= 500 { tracing::Level::ERROR }
            else if status >= 400 { tracing::Level::WARN }
            else { tracing::Level::INFO },
            "Request completed",
            "request_id" => &self.request_id,
            "method" => &self.method,
            "path" => &self.path,
            "status" => status,
            "duration_ms" => self.started_at.elapsed().as_millis(),
        );
    }

    /// 通信失敗を記録
    pub fn fail(&self, error: &dyn std::fmt::Display) {
        log_with_context!(
            tracing::Level::ERROR,
            "Request failed",
            "request_id" => &self.request_id,
            "method" => &self.method,
            "path" => &self.path,
            "error" => error.to_string(),
            "duration_ms" => self.started_at.elapsed().as_millis(),
        );
    }
}
