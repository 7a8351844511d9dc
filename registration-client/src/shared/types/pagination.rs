// registration-client/src/shared/types/pagination.rs

use serde::{Deserialize, Serialize};

/// 1ページあたりの表示件数の選択肢
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 20, 30];

/// デフォルトの表示件数
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// ページネーション情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: usize, per_page: usize, total_count: usize) -> Self {
        let total_pages = total_pages(total_count, per_page);

        Self {
            page,
            per_page,
            total_pages,
            total_count,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// 総ページ数（0件なら0ページ）
pub fn total_pages(total_count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total_count.div_ceil(per_page)
}

/// ページ位置の状態
///
/// ページ番号は1始まり。件数が変わっても範囲外にならないよう常に丸める。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// 表示件数を指定して作成（選択肢にない値はNone）
    pub fn with_page_size(per_page: usize) -> Option<Self> {
        PAGE_SIZE_OPTIONS.contains(&per_page).then_some(Self { page: 1, per_page })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    fn last_page(total_count: usize, per_page: usize) -> usize {
        total_pages(total_count, per_page).max(1)
    }

    /// 指定ページへ移動（1..=最終ページに丸める）
    pub fn go_to(&mut self, page: usize, total_count: usize) {
        self.page = page.clamp(1, Self::last_page(total_count, self.per_page));
    }

    pub fn next(&mut self, total_count: usize) {
        self.go_to(self.page.saturating_add(1), total_count);
    }

    pub fn previous(&mut self, total_count: usize) {
        self.go_to(self.page.saturating_sub(1), total_count);
    }

    pub fn first(&mut self) {
        self.page = 1;
    }

    pub fn last(&mut self, total_count: usize) {
        self.page = Self::last_page(total_count, self.per_page);
    }

    /// 表示件数を変更して1ページ目に戻す（選択肢にない値は拒否）
    pub fn set_page_size(&mut self, per_page: usize) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&per_page) {
            return false;
        }
        self.per_page = per_page;
        self.page = 1;
        true
    }

    /// 現在ページに表示する範囲
    pub fn range(&self, total_count: usize) -> std::ops::Range<usize> {
        let start = ((self.page - 1) * self.per_page).min(total_count);
        let end = (start + self.per_page).min(total_count);
        start..end
    }

    pub fn meta(&self, total_count: usize) -> PaginationMeta {
        PaginationMeta::new(self.page, self.per_page, total_count)
    }
}
