// registration-client/src/features/record_table/mod.rs

pub mod columns;
pub mod fetch;
pub mod table;

pub use columns::{Column, ColumnKey, SortKind, COLUMNS};
pub use fetch::FetchHandle;
pub use table::{LoadState, RecordTable, TableBody, TableView, NO_DATA_MESSAGE, TABLE_TITLE};
