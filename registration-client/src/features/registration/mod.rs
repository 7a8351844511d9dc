// registration-client/src/features/registration/mod.rs

pub mod form;
pub mod schema;

pub use form::{FieldView, FormStatus, RegistrationForm, SubmitOutcome};
pub use schema::{validate_draft, Constraint, FieldRule, REGISTRATION_SCHEMA};
