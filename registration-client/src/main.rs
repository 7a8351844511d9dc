// src/main.rs
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use registration_client::api::HttpRegistrationApi;
use registration_client::cli::{Cli, Cmd, ListArgs, SubmitArgs};
use registration_client::config::AppConfig;
use registration_client::features::record_table::LoadState;
use registration_client::features::registration::RegistrationForm;
use registration_client::logging::init_tracing;
use registration_client::{App, AppError, Route};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // トレーシングの設定
    init_tracing("registration_client=info");

    let cli = Cli::parse();

    // 設定を読み込む
    let mut config = AppConfig::from_env()?;
    if let Some(base_url) = &cli.api_base_url {
        config = config.with_base_url(base_url);
    }
    info!(
        environment = %config.environment,
        base_url = %config.api.base_url,
        "Configuration loaded"
    );

    let api = Arc::new(HttpRegistrationApi::new(&config.api)?);
    let mut app = App::new(api, &config);

    let code = match cli.cmd {
        Cmd::List(args) => run_list(&mut app, &args).await?,
        Cmd::Submit(args) => run_submit(&mut app, &args).await?,
        Cmd::Fields => {
            print_fields(&app.open_form());
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}

async fn run_list(app: &mut App, args: &ListArgs) -> Result<ExitCode, AppError> {
    let mut table = app.open_table();
    println!("{}", table.view().render_text());

    let state = table.settle().await;
    args.apply(&mut table)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&table.page_records())?);
    } else {
        println!("{}", table.view().render_text());
    }

    if state == LoadState::Failed {
        if let Some(message) = table.last_error() {
            eprintln!("Failed to load records: {}", message);
        }
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

async fn run_submit(app: &mut App, args: &SubmitArgs) -> Result<ExitCode, AppError> {
    let mut form = args.build_form()?;
    app.navigate(Route::Form);

    match app.submit_form(&mut form).await {
        Ok(outcome) => {
            println!("Registered:");
            println!("{}", serde_json::to_string_pretty(&outcome.created)?);
            println!("Next: {}", app.route());
            Ok(ExitCode::SUCCESS)
        }
        Err(AppError::Validation(errors)) => {
            eprintln!("The form has {} invalid field(s):", errors.len());
            for (field, message) in errors.iter() {
                eprintln!("  {}: {}", field.as_str(), message);
            }
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            error!(error = %e, "Submission failed");
            eprintln!(
                "Submission failed: {}",
                form.submit_error().unwrap_or("unknown error")
            );
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_fields(form: &RegistrationForm) {
    for view in form.field_views() {
        match view.placeholder {
            Some(placeholder) => println!(
                "{:<28} {:<12} {}",
                view.label,
                format!("{:?}", view.kind),
                placeholder
            ),
            None => println!("{:<28} {:?}", view.label, view.kind),
        }
    }
}
