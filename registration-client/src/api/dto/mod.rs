// registration-client/src/api/dto/mod.rs

pub mod registration_dto;

pub use registration_dto::RegistrationPayload;
