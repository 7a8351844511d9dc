// registration-client/src/domain/mod.rs

pub mod draft_record;
pub mod form_field;
pub mod gender;
pub mod interest;
pub mod submitted_record;

pub use draft_record::DraftRecord;
pub use form_field::{FieldErrorMap, FormField, InputKind, ScalarField};
pub use gender::Gender;
pub use interest::Interest;
pub use submitted_record::SubmittedRecord;
