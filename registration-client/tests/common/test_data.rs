// tests/common/test_data.rs

use registration_client::domain::{Interest, ScalarField, SubmittedRecord};
use registration_client::features::registration::RegistrationForm;

/// すべての検証を通過する入力済みフォーム
pub fn valid_form() -> RegistrationForm {
    let mut form = RegistrationForm::new();
    form.update_field(ScalarField::FirstName, "Ada");
    form.update_field(ScalarField::LastName, "Lovelace");
    form.update_field(ScalarField::Email, "ada@example.com");
    form.update_phone("441234567890");
    form.update_field(ScalarField::Password, "Secret#123");
    form.update_field(ScalarField::ConfirmPassword, "Secret#123");
    form.update_field(ScalarField::Age, "36");
    form.update_field(ScalarField::Gender, "female");
    form.toggle_interest(Interest::Coding, true);
    form.update_field(ScalarField::BirthDate, "1990-12-10");
    form
}

pub fn record(first_name: &str, age: Option<f64>, birth_date: &str) -> SubmittedRecord {
    SubmittedRecord {
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        phone_number: "+15551234567".to_string(),
        age,
        gender: "other".to_string(),
        interests: vec!["coding".to_string(), "reading".to_string()],
        birth_date: birth_date.to_string(),
    }
}

/// 一覧表示用のサンプル
pub fn sample_records() -> Vec<SubmittedRecord> {
    vec![
        record("Carol", Some(30.0), "1994-03-01"),
        record("Alice", Some(25.0), "1999-07-15"),
        record("Bob", None, "1985-11-30"),
        record("Dave", Some(41.0), "1983-01-02"),
    ]
}

/// ページング確認用の連番レコード
pub fn numbered_records(count: usize) -> Vec<SubmittedRecord> {
    (0..count)
        .map(|i| record(&format!("User{:02}", i), Some(18.0 + i as f64), "2000-01-01"))
        .collect()
}
