// registration-client/src/features/record_table/table.rs

use std::sync::Arc;

use tracing::{error, info, warn};

use super::columns::{ColumnKey, COLUMNS};
use super::fetch::FetchHandle;
use crate::api::RegistrationApi;
use crate::domain::SubmittedRecord;
use crate::error::AppResult;
use crate::shared::types::{Pagination, PaginationMeta};
use crate::types::SortOrder;

/// 一覧のタイトル
pub const TABLE_TITLE: &str = "User Data";

/// 行がないときの表示
pub const NO_DATA_MESSAGE: &str = "There are no records to display";

/// 取得の状態（Idle -> Loading -> Loaded | Failed の一方向）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// 表の本体
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    /// 取得中のインジケーター
    Progress,
    Rows(Vec<Vec<String>>),
}

/// 描画用の表データ
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub title: &'static str,
    pub headers: Vec<&'static str>,
    pub body: TableBody,
    pub pagination: PaginationMeta,
    pub sort: Option<(ColumnKey, SortOrder)>,
}

type RecordsFetch = FetchHandle<AppResult<Vec<SubmittedRecord>>>;

/// 登録済みレコードの一覧
///
/// 有効化されると一度だけ一覧を取得する。再取得・リトライはしない。
/// 取得中にドロップされた場合はタスクを中断し、結果は反映しない。
#[derive(Debug, Default)]
pub struct RecordTable {
    records: Vec<SubmittedRecord>,
    state: LoadState,
    sort: Option<(ColumnKey, SortOrder)>,
    pagination: Pagination,
    pending: Option<RecordsFetch>,
    last_error: Option<String>,
}

impl RecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期表示件数を指定して作成（選択肢にない値は既定値）
    pub fn with_page_size(per_page: usize) -> Self {
        Self {
            pagination: Pagination::with_page_size(per_page).unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn records(&self) -> &[SubmittedRecord] {
        &self.records
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn sort(&self) -> Option<(ColumnKey, SortOrder)> {
        self.sort
    }

    pub fn pagination(&self) -> PaginationMeta {
        self.pagination.meta(self.records.len())
    }

    /// 一覧の取得を開始する（Tokio ランタイム内で呼ぶこと）
    ///
    /// 2回目以降の呼び出しは無視して false を返す。
    pub fn activate(&mut self, api: Arc<dyn RegistrationApi>) -> bool {
        if self.state != LoadState::Idle {
            return false;
        }

        self.state = LoadState::Loading;
        self.pending = Some(FetchHandle::spawn(async move { api.list_records().await }));
        true
    }

    /// 取得中のタスクを中断する（結果は反映しない）
    ///
    /// 取得中だった場合は Failed に遷移し、進捗表示を終える。
    pub fn deactivate(&mut self) {
        if let Some(mut pending) = self.pending.take() {
            pending.cancel();
            warn!("Record fetch cancelled");
            self.apply_failure("Fetch was cancelled".to_string());
        }
    }

    /// 取得結果を待って反映する
    pub async fn settle(&mut self) -> LoadState {
        if let Some(pending) = self.pending.take() {
            match pending.join().await {
                Some(result) => self.apply_result(result),
                None => self.apply_failure("Fetch task was aborted".to_string()),
            }
        }
        self.state
    }

    /// 取得結果を反映する
    pub fn apply_result(&mut self, result: AppResult<Vec<SubmittedRecord>>) {
        match result {
            Ok(records) => {
                info!(count = records.len(), "Records loaded");
                self.records = records;
                self.state = LoadState::Loaded;
                self.last_error = None;
                self.pagination.go_to(self.pagination.page(), self.records.len());
            }
            Err(e) => {
                error!(error = %e, error_type = e.error_type(), "Error fetching data");
                self.apply_failure(e.to_string());
            }
        }
    }

    fn apply_failure(&mut self, message: String) {
        self.records.clear();
        self.state = LoadState::Failed;
        self.last_error = Some(message);
        self.pagination.first();
    }

    /// 列見出しのクリック。同じ列なら向きを反転し、別の列なら昇順で並べる
    pub fn sort_by(&mut self, column: ColumnKey) {
        let order = match self.sort {
            Some((current, order)) if current == column => order.reversed(),
            _ => SortOrder::Asc,
        };
        self.set_sort(column, order);
    }

    pub fn set_sort(&mut self, column: ColumnKey, order: SortOrder) {
        self.sort = Some((column, order));
        self.pagination.first();
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.pagination.first();
    }

    pub fn next_page(&mut self) {
        self.pagination.next(self.records.len());
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous(self.records.len());
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to(page, self.records.len());
    }

    pub fn first_page(&mut self) {
        self.pagination.first();
    }

    pub fn last_page(&mut self) {
        self.pagination.last(self.records.len());
    }

    /// 表示件数を変更する（10/20/30 以外は拒否して false）
    pub fn set_page_size(&mut self, per_page: usize) -> bool {
        self.pagination.set_page_size(per_page)
    }

    /// 並び替え後の全行（安定ソート）
    pub fn sorted_records(&self) -> Vec<&SubmittedRecord> {
        let mut rows: Vec<&SubmittedRecord> = self.records.iter().collect();
        if let Some((column, order)) = self.sort {
            rows.sort_by(|a, b| match order {
                SortOrder::Asc => column.compare(a, b),
                SortOrder::Desc => column.compare(b, a),
            });
        }
        rows
    }

    /// 現在ページの行
    pub fn page_records(&self) -> Vec<&SubmittedRecord> {
        let range = self.pagination.range(self.records.len());
        self.sorted_records()
            .into_iter()
            .skip(range.start)
            .take(range.len())
            .collect()
    }

    pub fn view(&self) -> TableView {
        let body = if self.is_loading() {
            TableBody::Progress
        } else {
            TableBody::Rows(
                self.page_records()
                    .into_iter()
                    .map(|record| COLUMNS.iter().map(|c| c.key.cell(record)).collect())
                    .collect(),
            )
        };

        TableView {
            title: TABLE_TITLE,
            headers: COLUMNS.iter().map(|c| c.name).collect(),
            body,
            pagination: self.pagination(),
            sort: self.sort,
        }
    }
}

impl TableView {
    /// 端末表示用のテキスト
    pub fn render_text(&self) -> String {
        let rows = match &self.body {
            TableBody::Progress => return format!("{}\n\nLoading...\n", self.title),
            TableBody::Rows(rows) if rows.is_empty() => {
                return format!("{}\n\n{}\n", self.title, NO_DATA_MESSAGE)
            }
            TableBody::Rows(rows) => rows,
        };

        let headers: Vec<String> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, name)| match self.sort {
                Some((key, order)) if key as usize == i => match order {
                    SortOrder::Asc => format!("{} ▲", name),
                    SortOrder::Desc => format!("{} ▼", name),
                },
                _ => name.to_string(),
            })
            .collect();

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                rows.iter()
                    .map(|row| row.get(i).map_or(0, |cell| cell.chars().count()))
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let format_line = |cells: &[String]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        let mut out = format!("{}\n\n", self.title);
        out.push_str(&format_line(&headers));
        out.push('\n');
        out.push_str(
            &widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        out.push('\n');
        for row in rows {
            out.push_str(&format_line(row));
            out.push('\n');
        }

        let meta = &self.pagination;
        let first = (meta.page - 1) * meta.per_page + 1;
        let last = (first + rows.len()).saturating_sub(1);
        out.push_str(&format!(
            "\nRows per page: {}  {}-{} of {}  (page {}/{})\n",
            meta.per_page,
            first,
            last,
            meta.total_count,
            meta.page,
            meta.total_pages.max(1)
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn record(first_name: &str, age: f64) -> SubmittedRecord {
        SubmittedRecord {
            first_name: first_name.to_string(),
            age: Some(age),
            ..Default::default()
        }
    }

    fn loaded(records: Vec<SubmittedRecord>) -> RecordTable {
        let mut table = RecordTable::new();
        table.apply_result(Ok(records));
        table
    }

    fn first_names(table: &RecordTable) -> Vec<String> {
        table
            .page_records()
            .into_iter()
            .map(|r| r.first_name.clone())
            .collect()
    }

    #[test]
    fn test_sort_by_age() {
        let mut table = loaded(vec![record("A", 30.0), record("B", 20.0)]);

        table.set_sort(ColumnKey::Age, SortOrder::Asc);
        assert_eq!(first_names(&table), vec!["B", "A"]);

        table.set_sort(ColumnKey::Age, SortOrder::Desc);
        assert_eq!(first_names(&table), vec!["A", "B"]);

        assert_eq!(table.pagination().per_page, 10);
    }

    #[test]
    fn test_sort_by_toggles_direction() {
        let mut table = loaded(vec![record("b", 1.0), record("a", 2.0), record("c", 3.0)]);

        table.sort_by(ColumnKey::FirstName);
        assert_eq!(table.sort(), Some((ColumnKey::FirstName, SortOrder::Asc)));
        assert_eq!(first_names(&table), vec!["a", "b", "c"]);

        table.sort_by(ColumnKey::FirstName);
        assert_eq!(table.sort(), Some((ColumnKey::FirstName, SortOrder::Desc)));
        assert_eq!(first_names(&table), vec!["c", "b", "a"]);

        table.sort_by(ColumnKey::Age);
        assert_eq!(table.sort(), Some((ColumnKey::Age, SortOrder::Asc)));
    }

    #[test]
    fn test_sort_is_stable() {
        let mut table = loaded(vec![record("x", 40.0), record("y", 30.0), record("z", 40.0)]);
        table.set_sort(ColumnKey::Age, SortOrder::Asc);
        assert_eq!(first_names(&table), vec!["y", "x", "z"]);
    }

    #[test]
    fn test_pagination_over_rows() {
        let records: Vec<_> = (0..25).map(|i| record(&format!("{:02}", i), i as f64)).collect();
        let mut table = loaded(records);

        assert_eq!(table.page_records().len(), 10);
        table.next_page();
        table.next_page();
        assert_eq!(first_names(&table), vec!["20", "21", "22", "23", "24"]);
        assert!(!table.pagination().has_next);

        table.go_to_page(2);
        assert_eq!(table.page_records()[0].first_name, "10");

        assert!(table.set_page_size(20));
        assert_eq!(table.pagination().page, 1);
        assert_eq!(table.pagination().total_pages, 2);
        assert!(!table.set_page_size(50));

        table.last_page();
        assert_eq!(table.page_records().len(), 5);
        table.previous_page();
        assert_eq!(table.pagination().page, 1);
    }

    #[test]
    fn test_sort_resets_to_first_page() {
        let records: Vec<_> = (0..15).map(|i| record(&i.to_string(), i as f64)).collect();
        let mut table = loaded(records);
        table.next_page();
        table.sort_by(ColumnKey::Age);
        assert_eq!(table.pagination().page, 1);
    }

    #[test]
    fn test_failure_leaves_rows_empty() {
        let mut table = RecordTable::new();
        table.apply_result(Err(AppError::BadRequest("boom".to_string())));

        assert_eq!(table.state(), LoadState::Failed);
        assert!(table.records().is_empty());
        assert!(table.last_error().is_some());
        assert_eq!(table.view().body, TableBody::Rows(vec![]));
    }

    #[test]
    fn test_view_renders_cells() {
        let mut rec = record("Ada", 36.0);
        rec.interests = vec!["coding".to_string(), "reading".to_string()];
        rec.birth_date = "1815-12-10".to_string();
        let table = loaded(vec![rec]);

        let view = table.view();
        assert_eq!(view.title, "User Data");
        assert_eq!(view.headers.len(), 8);
        match view.body {
            TableBody::Rows(rows) => {
                assert_eq!(rows[0][0], "Ada");
                assert_eq!(rows[0][4], "36");
                assert_eq!(rows[0][6], "coding, reading");
                assert_eq!(rows[0][7], "1815-12-10");
            }
            TableBody::Progress => panic!("expected rows"),
        }
    }

    #[test]
    fn test_render_text() {
        let mut table = loaded(vec![record("Ada", 36.0), record("Bob", 41.0)]);
        table.set_sort(ColumnKey::Age, SortOrder::Desc);
        let text = table.view().render_text();

        assert!(text.starts_with("User Data"));
        assert!(text.contains("Age ▼"));
        assert!(text.find("Bob").unwrap() < text.find("Ada").unwrap());
        assert!(text.contains("1-2 of 2"));

        let empty = RecordTable::new().view().render_text();
        assert!(empty.contains(NO_DATA_MESSAGE));
    }

    #[tokio::test]
    async fn test_deactivate_ends_loading() {
        use crate::api::dto::RegistrationPayload;
        use crate::api::RegistrationApi;
        use async_trait::async_trait;
        use serde_json::Value;
        use std::time::Duration;

        struct SlowApi;

        #[async_trait]
        impl RegistrationApi for SlowApi {
            async fn list_records(&self) -> AppResult<Vec<SubmittedRecord>> {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(vec![record("Late", 30.0)])
            }

            async fn submit_record(&self, _payload: &RegistrationPayload) -> AppResult<Value> {
                Ok(Value::Null)
            }
        }

        let mut table = RecordTable::new();
        assert!(table.activate(Arc::new(SlowApi)));
        assert_eq!(table.view().body, TableBody::Progress);

        table.deactivate();
        assert_eq!(table.state(), LoadState::Failed);
        assert_eq!(table.view().body, TableBody::Rows(vec![]));
        assert_eq!(table.settle().await, LoadState::Failed);
        assert!(table.records().is_empty());

        // 終了後の再有効化は無視される
        assert!(!table.activate(Arc::new(SlowApi)));

        // 取得していない一覧では何もしない
        let mut idle = RecordTable::new();
        idle.deactivate();
        assert_eq!(idle.state(), LoadState::Idle);
    }

    #[test]
    fn test_with_page_size() {
        assert_eq!(RecordTable::with_page_size(30).pagination().per_page, 30);
        assert_eq!(RecordTable::with_page_size(7).pagination().per_page, 10);
    }
}
