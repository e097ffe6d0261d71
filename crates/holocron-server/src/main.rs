#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::manual_let_else)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_raw_string_hashes)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::or_fun_call)]
#![allow(clippy::ref_option)]
#![allow(clippy::single_match_else)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::unnecessary_wraps)]

use holocron_server::{bootstrap, cli, http, runtime, settings};

#[tokio::main]
async fn main() {
    let run_mode = cli::parse_args();
    if let cli::RunMode::OpenApi { out } = run_mode.clone() {
        let spec = http::openapi::build_openapi();
        let json = match serde_json::to_string_pretty(&spec) {
            Ok(json) => json,
            Err(err) => {
                eprintln!("failed to render openapi spec: {err}");
                std::process::exit(1);
            }
        };
        if let Some(path) = out {
            if let Err(err) = std::fs::write(&path, json) {
                eprintln!("failed to write openapi spec: {err}");
                std::process::exit(1);
            }
        } else {
            println!("{json}");
        }
        return;
    }

    runtime::init_tracing();
    let settings = settings::Settings::from_env();
    let metrics_config = settings.config.metrics.clone();
    bootstrap::log_startup(&settings);
    bootstrap::init_metrics_registry(&metrics_config);

    let db = match bootstrap::connect_db(&settings).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(event = "db_connect_failed", error = %err);
            std::process::exit(1);
        }
    };
    match run_mode {
        cli::RunMode::Migrate => {
            if let Err(err) = holocron_db::migrate(&db).await {
                tracing::error!(error = %err, "migration failed");
                std::process::exit(1);
            }
            tracing::info!("migrations applied");
            return;
        }
        cli::RunMode::Seed(seed_args) => {
            if let Err(err) = holocron_db::migrate(&db).await {
                tracing::error!(error = %err, "migration failed");
                std::process::exit(1);
            }
            match cli::seed::run(&db, &seed_args).await {
                Ok(output) => match serde_json::to_string_pretty(&output) {
                    Ok(json) => println!("{json}"),
                    Err(err) => eprintln!("{err}"),
                },
                Err(err) => {
                    eprintln!("{err}");
                    std::process::exit(1);
                }
            }
            return;
        }
        cli::RunMode::Server | cli::RunMode::OpenApi { .. } => {}
    }

    if let Err(err) = bootstrap::prepare_db(&settings, &db).await {
        tracing::error!(event = "migrations_failed", error = %err);
        std::process::exit(1);
    }
    let state = bootstrap::build_state(&settings, db.clone());
    let app = bootstrap::build_app(&settings.config, state);
    bootstrap::serve(&settings, bootstrap::build_service(app)).await;
    db.close().await;
}
