// registration-client/src/utils/validation.rs

pub mod common;

pub use common::{is_empty_input, parse_age, parse_birth_date, PHONE_NUMBER_REGEX};
