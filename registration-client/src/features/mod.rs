// registration-client/src/features/mod.rs

pub mod record_table;
pub mod registration;
