use aqi_forecaster::application::forecast::ForecastPipeline;
use aqi_forecaster::application::ml::ForecastResources;
use aqi_forecaster::config::Config;
use aqi_forecaster::infrastructure::i18n::I18nService;
use aqi_forecaster::interfaces::dashboard::ForecastDashboard;

use tracing::{Level, info, warn};
use tracing_subscriber::prelude::*;

// A writer that sends logs to the UI via a crossbeam channel
struct ChannelWriter {
    sender: crossbeam_channel::Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf).to_string();
        let _ = self.sender.try_send(msg);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// Cloneable wrapper for MakeWriter
#[derive(Clone)]
struct ChannelWriterFactory {
    sender: crossbeam_channel::Sender<String>,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ChannelWriterFactory {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Log channel for the sidebar activity log
    let (log_tx, log_rx) = crossbeam_channel::unbounded();

    // 2. Setup Logging (Stdout + UI)
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .pretty();

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(ChannelWriterFactory { sender: log_tx })
        .with_ansi(false) // No color codes for UI text
        .with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .with(ui_layer)
        .init();

    info!("Starting AQI Forecaster {}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    // 3. Load artifacts once; a failure leaves the dashboard in its blocked state
    let (pipeline, reporter) =
        ForecastPipeline::from_load(ForecastResources::load(&config.artifacts))
            .observed(&config.observability)?;
    if !pipeline.is_ready() {
        warn!(
            "Forecasting disabled: could not load {:?} / {:?}",
            config.artifacts.model_path, config.artifacts.scaler_path
        );
    }

    let mut i18n = I18nService::new();
    if !i18n.set_language(config.language.code()) {
        warn!("No translations for '{}'", config.language.code());
    }

    let dashboard = ForecastDashboard::new(pipeline, i18n).with_log_channel(log_rx);

    // 4. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 820.0])
            .with_title("AQI Forecaster Pro"),
        ..Default::default()
    };

    eframe::run_native(
        "AQI Forecaster Pro",
        native_options,
        Box::new(|_cc| Ok(Box::new(dashboard))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    // Session summary once the window closes
    if let Some(reporter) = reporter {
        reporter.emit();
    }

    Ok(())
}
