//! Headless AQI forecaster
//!
//! Runs the same pipeline as the dashboard from the command line.
//!
//! # Usage
//! ```sh
//! cargo run --bin forecast -- --input "80, 85, 90, 88, 92, 95, 100"
//! cargo run --bin forecast -- --demo --json
//! cat weeks.txt | cargo run --bin forecast
//! ```
//!
//! # Environment Variables
//! - `AQI_MODEL_PATH` / `AQI_SCALER_PATH` - artifact locations
//! - `AQI_LANGUAGE` - `en` (default) or `id`
//! - `OBSERVABILITY_ENABLED` - print a metrics summary on exit (default: true)

use anyhow::{Context, Result};
use aqi_forecaster::application::forecast::{ForecastPipeline, demo};
use aqi_forecaster::application::ml::ForecastResources;
use aqi_forecaster::config::{Config, Language};
use aqi_forecaster::domain::errors::ForecastError;
use aqi_forecaster::domain::forecast::ForecastResult;
use aqi_forecaster::infrastructure::i18n::I18nService;
use aqi_forecaster::interfaces::view_models::ForecastViewModel;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seven comma-separated AQI readings, oldest first
    #[arg(long, conflicts_with = "demo")]
    input: Option<String>,

    /// Forecast a randomly generated demo week
    #[arg(long)]
    demo: bool,

    /// Seed for --demo
    #[arg(long, requires = "demo")]
    seed: Option<u64>,

    /// Emit one JSON object per request instead of text
    #[arg(long)]
    json: bool,

    /// Path to the ONNX model (overrides AQI_MODEL_PATH)
    #[arg(long)]
    model: Option<PathBuf>,

    /// Path to the scaler JSON (overrides AQI_SCALER_PATH)
    #[arg(long)]
    scaler: Option<PathBuf>,

    /// Message language: en or id (overrides AQI_LANGUAGE)
    #[arg(long)]
    language: Option<String>,
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let mut config = Config::from_env()?;
    config.artifacts = config
        .artifacts
        .with_overrides(args.model.clone(), args.scaler.clone());
    if let Some(lang) = &args.language {
        config.language = Language::from_str(lang)?;
    }

    let mut i18n = I18nService::new();
    i18n.set_language(config.language.code());

    let (pipeline, reporter) =
        ForecastPipeline::from_load(ForecastResources::load(&config.artifacts))
            .observed(&config.observability)?;

    if let Err(e) = pipeline.resources() {
        report(&Err(e), &i18n, args.json);
        return Ok(ExitCode::from(2));
    }

    let requests = collect_requests(&args)?;
    info!("Processing {} request(s)", requests.len());

    let mut failures = 0;
    for raw in &requests {
        let outcome = pipeline.submit(raw);
        if outcome.is_err() {
            failures += 1;
        }
        report(&outcome, &i18n, args.json);
    }

    if let Some(reporter) = &reporter
        && !args.json
    {
        reporter.emit();
    }

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn collect_requests(args: &Args) -> Result<Vec<String>> {
    if args.demo {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        return Ok(vec![demo::random_walk_text(&mut rng)]);
    }

    if let Some(input) = &args.input {
        return Ok(vec![input.clone()]);
    }

    let stdin = std::io::stdin();
    let mut requests = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if !line.trim().is_empty() {
            requests.push(line);
        }
    }
    // No lines at all is still one (empty) request, so the user gets told
    if requests.is_empty() {
        requests.push(String::new());
    }
    Ok(requests)
}

fn report(outcome: &Result<ForecastResult, ForecastError>, i18n: &I18nService, json: bool) {
    match (outcome, json) {
        (Ok(result), true) => {
            let vm = ForecastViewModel::from_result(result, i18n);
            let value = serde_json::json!({
                "status": "ok",
                "last_reading": result.last_reading,
                "final_aqi": result.final_aqi,
                "delta": result.delta,
                "band": result.band.to_string(),
                "details": vm.details,
            });
            println!("{}", value);
        }
        (Ok(result), false) => {
            let vm = ForecastViewModel::from_result(result, i18n);
            println!("{}: {}", i18n.t("cli_last"), vm.last_reading);
            println!(
                "{}: {} ({})",
                i18n.t("cli_forecast"),
                vm.forecast,
                i18n.tf("delta_points", &[("delta", &vm.delta)])
            );
            println!("{}", vm.status_label);
        }
        (Err(e), true) => {
            let value = serde_json::json!({
                "status": "error",
                "kind": e.kind(),
                "message": ForecastViewModel::error_message(e, i18n),
            });
            println!("{}", value);
        }
        (Err(e), false) => {
            eprintln!("{}", ForecastViewModel::error_message(e, i18n));
        }
    }
}
