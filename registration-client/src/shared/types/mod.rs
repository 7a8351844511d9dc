// registration-client/src/shared/types/mod.rs

pub mod pagination;

// Re-export commonly used types
pub use pagination::{Pagination, PaginationMeta, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
