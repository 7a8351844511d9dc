// registration-client/src/shared/mod.rs

pub mod types;
