// registration-client/src/app.rs

use std::fmt;
use std::sync::Arc;

use tracing::info;

use crate::api::RegistrationApi;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::features::record_table::RecordTable;
use crate::features::registration::{RegistrationForm, SubmitOutcome};

/// 画面（静的な2ルート）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// 登録済みレコードの一覧
    #[default]
    Table,
    /// 登録フォーム
    Form,
}

/// ナビゲーションバーの項目（表示名, 遷移先）
pub const NAV_ITEMS: [(&str, Route); 2] = [("Home", Route::Table), ("Form", Route::Form)];

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Table => "/",
            Self::Form => "/FormWithYup",
        }
    }

    /// パスからルートを解決する（前後のスラッシュは無視、未知のパスは None）
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim().trim_matches('/') {
            "" => Some(Self::Table),
            "FormWithYup" => Some(Self::Form),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// アプリケーションシェル
///
/// 現在のルートとAPIハンドルだけを持ち、フォームと一覧の状態は共有しない。
pub struct App {
    api: Arc<dyn RegistrationApi>,
    route: Route,
    page_size: usize,
}

impl App {
    pub fn new(api: Arc<dyn RegistrationApi>, config: &AppConfig) -> Self {
        Self {
            api,
            route: Route::default(),
            page_size: config.default_page_size,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn api(&self) -> Arc<dyn RegistrationApi> {
        self.api.clone()
    }

    pub fn navigate(&mut self, route: Route) {
        if self.route != route {
            info!(from = %self.route, to = %route, "Navigating");
        }
        self.route = route;
    }

    pub fn navigate_path(&mut self, path: &str) -> AppResult<Route> {
        let route = Route::from_path(path)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown route: '{}'", path)))?;
        self.navigate(route);
        Ok(route)
    }

    /// 一覧画面を開き、新しい一覧を有効化して返す（Tokio ランタイム内で呼ぶこと）
    pub fn open_table(&mut self) -> RecordTable {
        self.navigate(Route::Table);
        let mut table = RecordTable::with_page_size(self.page_size);
        table.activate(self.api.clone());
        table
    }

    /// フォーム画面を開く
    pub fn open_form(&mut self) -> RegistrationForm {
        self.navigate(Route::Form);
        RegistrationForm::new()
    }

    /// フォームを送信し、成功したら遷移先へ移動する
    pub async fn submit_form(&mut self, form: &mut RegistrationForm) -> AppResult<SubmitOutcome> {
        let outcome = form.submit(self.api.as_ref()).await?;
        self.navigate(outcome.redirect_to);
        Ok(outcome)
    }
}
