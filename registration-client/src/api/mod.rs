// registration-client/src/api/mod.rs

pub mod client;
pub mod dto;

pub use client::{HttpRegistrationApi, RegistrationApi, SUBMIT_FORM_PATH};
