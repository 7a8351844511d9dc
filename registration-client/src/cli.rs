// src/cli.rs
use clap::{Args, Parser, Subcommand};

use crate::domain::{Interest, ScalarField};
use crate::error::AppResult;
use crate::features::record_table::{ColumnKey, RecordTable};
use crate::features::registration::RegistrationForm;
use crate::types::SortOrder;
use crate::utils::error_helper::{bad_request_error, ErrorHelperExt};

#[derive(Parser, Debug)]
#[command(name = "registration-client", version, about = "User registration form and submitted-record table")]
pub struct Cli {
    /// Backend origin (overrides API_BASE_URL)
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Show submitted records as a table
    List(ListArgs),
    /// Validate and submit a registration
    Submit(SubmitArgs),
    /// Describe the registration form fields
    Fields,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Column to sort by (e.g. age, firstName, "Birth Date")
    #[arg(long)]
    pub sort: Option<String>,
    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,
    /// Rows per page (10, 20 or 30)
    #[arg(long)]
    pub page_size: Option<usize>,
    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Print the current page as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Default)]
pub struct SubmitArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub last_name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    /// Phone number digits including the country code, without the leading '+'
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub password: String,
    #[arg(long, default_value = "")]
    pub confirm_password: String,
    #[arg(long, default_value = "")]
    pub age: String,
    /// male, female or other
    #[arg(long, default_value = "")]
    pub gender: String,
    /// coding, sports or reading (repeatable)
    #[arg(long = "interest")]
    pub interests: Vec<String>,
    /// YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub birth_date: String,
}

impl SubmitArgs {
    /// 引数からフォームを組み立てる（入力順にフォーム操作を再現する）
    pub fn build_form(&self) -> AppResult<RegistrationForm> {
        let mut form = RegistrationForm::new();
        let scalars = [
            (ScalarField::FirstName, &self.first_name),
            (ScalarField::LastName, &self.last_name),
            (ScalarField::Email, &self.email),
            (ScalarField::Password, &self.password),
            (ScalarField::ConfirmPassword, &self.confirm_password),
            (ScalarField::Age, &self.age),
            (ScalarField::Gender, &self.gender),
            (ScalarField::BirthDate, &self.birth_date),
        ];
        for (field, value) in scalars {
            form.update_field(field, value.as_str());
        }

        if !self.phone.is_empty() {
            form.update_phone(self.phone.trim_start_matches('+'));
        }

        for name in &self.interests {
            let interest: Interest = name.parse().map_bad_request("cli_submit")?;
            form.toggle_interest(interest, true);
        }

        Ok(form)
    }
}

impl ListArgs {
    /// 並び替え・表示件数・ページ指定を一覧に反映する
    ///
    /// データ取得後に呼ぶこと（ページ番号は件数に合わせて丸める）。
    pub fn apply(&self, table: &mut RecordTable) -> AppResult<()> {
        if let Some(size) = self.page_size {
            if !table.set_page_size(size) {
                return Err(bad_request_error(
                    &format!("Invalid page size: {} (expected 10, 20 or 30)", size),
                    "cli_list",
                ));
            }
        }

        if let Some(sort) = &self.sort {
            let column: ColumnKey = sort.parse().map_bad_request("cli_list")?;
            let order = if self.desc {
                SortOrder::Desc
            } else {
                SortOrder::Asc
            };
            table.set_sort(column, order);
        }

        table.go_to_page(self.page);
        Ok(())
    }
}
