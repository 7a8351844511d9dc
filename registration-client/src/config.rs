// src/config.rs
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use crate::error::AppError;
use crate::shared::types::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

/// 開発時にプロキシが `/api` を転送していたバックエンドのオリジン
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    /// 未設定の場合はトランスポートの既定動作に任せる
    pub timeout: Option<Duration>,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub api: ApiConfig,
    pub default_page_size: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)

        let timeout = match env::var("API_TIMEOUT_SECS") {
            Ok(value) => Some(Duration::from_secs(value.trim().parse().map_err(|_| {
                AppError::Config(format!("Invalid API_TIMEOUT_SECS value: '{}'", value))
            })?)),
            Err(_) => None,
        };

        let default_page_size = match env::var("DEFAULT_PAGE_SIZE") {
            Ok(value) => parse_page_size(&value)?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            api: ApiConfig {
                base_url: normalize_base_url(
                    &env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
                ),
                timeout,
            },
            default_page_size,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 接続先だけを差し替える（コマンドライン引数による上書き）
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api.base_url = normalize_base_url(base_url);
        self
    }

    /// テスト用の設定を作成
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            environment: "test".to_string(),
            api: ApiConfig {
                base_url: normalize_base_url(base_url),
                timeout: Some(Duration::from_secs(5)),
            },
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// 末尾のスラッシュを取り除く（パス結合時の `//` を防ぐ）
fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_page_size(value: &str) -> Result<usize, AppError> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|size| PAGE_SIZE_OPTIONS.contains(size))
        .ok_or_else(|| {
            AppError::Config(format!(
                "Invalid DEFAULT_PAGE_SIZE value: '{}' (expected one of {:?})",
                value, PAGE_SIZE_OPTIONS
            ))
        })
}
