use crate::application::forecast::{ChartSeries, ForecastPipeline, chart_series, demo};
use crate::domain::forecast::WINDOW_SIZE;
use crate::infrastructure::i18n::I18nService;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::charts::render_trend_chart;
use crate::interfaces::components::metrics::{render_banner, render_metric_card};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::ForecastViewModel;
use eframe::egui;
use std::collections::VecDeque;
use tracing::info;

const MAX_LOG_LINES: usize = 200;

/// Desktop front end around a [`ForecastPipeline`].
pub struct ForecastDashboard {
    pipeline: ForecastPipeline,
    pub i18n: I18nService,
    /// Survives failed requests so the user can fix it in place
    pub input_text: String,
    /// Outcome of the last analyze click: a full result or one message
    pub outcome: Option<Result<ForecastViewModel, String>>,
    log_rx: Option<crossbeam_channel::Receiver<String>>,
    logs: VecDeque<String>,
}

impl ForecastDashboard {
    pub fn new(pipeline: ForecastPipeline, i18n: I18nService) -> Self {
        Self {
            pipeline,
            i18n,
            input_text: String::new(),
            outcome: None,
            log_rx: None,
            logs: VecDeque::new(),
        }
    }

    /// Mirror tracing output into the sidebar activity log
    pub fn with_log_channel(mut self, log_rx: crossbeam_channel::Receiver<String>) -> Self {
        self.log_rx = Some(log_rx);
        self
    }

    pub fn analyze(&mut self) {
        self.outcome = Some(
            self.pipeline
                .submit(&self.input_text)
                .map(|result| ForecastViewModel::from_result(&result, &self.i18n))
                .map_err(|e| ForecastViewModel::error_message(&e, &self.i18n)),
        );
    }

    pub fn fill_demo(&mut self) {
        self.input_text = demo::random_walk_text(&mut rand::rng());
        self.outcome = None;
        info!("Demo data generated: {}", self.input_text);
    }

    pub fn reset(&mut self) {
        self.input_text.clear();
        self.outcome = None;
    }

    fn drain_logs(&mut self) {
        if let Some(rx) = &self.log_rx {
            while let Ok(line) = rx.try_recv() {
                self.logs.push_back(line.trim_end().to_string());
                if self.logs.len() > MAX_LOG_LINES {
                    self.logs.pop_front();
                }
            }
        }
    }

    fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.heading(format!("🎛 {}", self.i18n.t("control_panel")));
        ui.add_space(DesignSystem::SPACING_SMALL);

        Card::titled(self.i18n.t("model_info"))
            .accent(DesignSystem::ACCENT_PRIMARY)
            .show(ui, |ui| match self.pipeline.resources() {
                Ok(resources) => {
                    ui.label(format!(
                        "{} ({})",
                        resources.predictor().name(),
                        resources.predictor().version()
                    ));
                    ui.label(resources.scaler().name());
                    ui.label(
                        self.i18n
                            .tf("window_size", &[("days", &WINDOW_SIZE.to_string())]),
                    );
                }
                Err(_) => {
                    ui.colored_label(DesignSystem::DANGER, self.i18n.t("model_not_loaded"));
                }
            });

        ui.add_space(DesignSystem::SPACING_MEDIUM);

        let current = self
            .i18n
            .current_language_info()
            .map(|l| format!("{} {}", l.flag, l.native_name))
            .unwrap_or_default();
        let mut selected = self.i18n.current_language_code().to_string();
        egui::ComboBox::from_label(self.i18n.t("language"))
            .selected_text(current)
            .show_ui(ui, |ui| {
                for lang in self.i18n.available_languages() {
                    ui.selectable_value(
                        &mut selected,
                        lang.code.clone(),
                        format!("{} {}", lang.flag, lang.native_name),
                    );
                }
            });
        if selected != self.i18n.current_language_code() {
            self.i18n.set_language(&selected);
            // Messages are rendered in the old language; drop them
            self.outcome = None;
        }

        ui.add_space(DesignSystem::SPACING_MEDIUM);
        if ui.button(format!("🔄 {}", self.i18n.t("reset"))).clicked() {
            self.reset();
        }

        ui.add_space(DesignSystem::SPACING_MEDIUM);
        egui::CollapsingHeader::new(self.i18n.t("activity_log"))
            .default_open(false)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .max_height(240.0)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in &self.logs {
                            let color = if line.contains("ERROR") {
                                DesignSystem::DANGER
                            } else if line.contains("WARN") {
                                DesignSystem::WARNING
                            } else {
                                DesignSystem::TEXT_MUTED
                            };
                            ui.label(egui::RichText::new(line).size(11.0).color(color));
                        }
                    });
            });
    }

    fn render_input_panel(&mut self, ui: &mut egui::Ui) {
        Card::titled(format!("1. {}", self.i18n.t("input_title")))
            .caption(self.i18n.t("input_caption"))
            .min_height(280.0)
            .show(ui, |ui| {
                if ui.button(format!("🎲 {}", self.i18n.t("random_demo"))).clicked() {
                    self.fill_demo();
                }
                ui.add_space(DesignSystem::SPACING_SMALL);

                ui.add(
                    egui::TextEdit::multiline(&mut self.input_text)
                        .hint_text(self.i18n.t("input_placeholder"))
                        .desired_rows(6)
                        .desired_width(f32::INFINITY),
                );
            });
    }

    fn render_chart_panel(&self, ui: &mut egui::Ui) {
        let forecast = match &self.outcome {
            Some(Ok(vm)) => Some(vm.details.final_aqi),
            _ => None,
        };

        Card::titled(format!("2. {}", self.i18n.t("chart_title")))
            .min_height(280.0)
            .show(ui, |ui| match chart_series(&self.input_text) {
                ChartSeries::Points(points) => render_trend_chart(
                    ui,
                    self.i18n.t("chart_series"),
                    self.i18n.t("chart_forecast"),
                    &points,
                    forecast,
                ),
                ChartSeries::Waiting => {
                    ui.colored_label(DesignSystem::WARNING, self.i18n.t("chart_waiting"));
                }
                ChartSeries::Placeholder => {
                    ui.colored_label(DesignSystem::INFO, self.i18n.t("chart_placeholder"));
                }
            });
    }

    fn render_outcome(&self, ui: &mut egui::Ui) {
        match &self.outcome {
            None => {}
            Some(Err(message)) => render_banner(ui, message, DesignSystem::DANGER),
            Some(Ok(vm)) => {
                render_banner(
                    ui,
                    &format!("✅ {}", self.i18n.t("prediction_done")),
                    DesignSystem::SUCCESS,
                );
                ui.add_space(DesignSystem::SPACING_MEDIUM);

                let delta_color = if vm.delta_rising {
                    DesignSystem::SUCCESS
                } else {
                    DesignSystem::DANGER
                };
                let delta_text = self.i18n.tf("delta_points", &[("delta", &vm.delta)]);

                ui.columns(3, |columns| {
                    render_metric_card(
                        &mut columns[0],
                        self.i18n.t("metric_today"),
                        &vm.last_reading,
                        None,
                    );
                    render_metric_card(
                        &mut columns[1],
                        self.i18n.t("metric_tomorrow"),
                        &vm.forecast,
                        Some((delta_text.as_str(), delta_color)),
                    );
                    columns[2].vertical(|ui| {
                        ui.add_space(DesignSystem::SPACING_LARGE);
                        render_banner(
                            ui,
                            &vm.status_label,
                            DesignSystem::emphasis_color(vm.emphasis),
                        );
                    });
                });

                ui.add_space(DesignSystem::SPACING_MEDIUM);
                egui::CollapsingHeader::new(format!("🔍 {}", self.i18n.t("technical_details")))
                    .default_open(false)
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(self.i18n.t("technical_caption"))
                                .color(DesignSystem::TEXT_MUTED),
                        );
                        ui.label(egui::RichText::new(vm.details_json()).monospace());
                    });
            }
        }
    }
}

impl eframe::App for ForecastDashboard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());
        self.drain_logs();

        egui::SidePanel::left("control_panel")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| self.render_sidebar(ui));

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(format!("☁ {}", self.i18n.t("app_title")))
                                .size(30.0)
                                .strong()
                                .color(DesignSystem::ACCENT_SECONDARY),
                        );
                        ui.label(
                            egui::RichText::new(self.i18n.t("app_subtitle"))
                                .color(DesignSystem::TEXT_SECONDARY),
                        );
                    });
                    ui.separator();
                    ui.add_space(DesignSystem::SPACING_MEDIUM);

                    // Without artifacts nothing else is offered
                    if let Err(e) = self.pipeline.resources() {
                        render_banner(
                            ui,
                            &ForecastViewModel::error_message(&e, &self.i18n),
                            DesignSystem::DANGER,
                        );
                        return;
                    }

                    ui.columns(2, |columns| {
                        self.render_input_panel(&mut columns[0]);
                        self.render_chart_panel(&mut columns[1]);
                    });

                    ui.add_space(DesignSystem::SPACING_MEDIUM);
                    let analyze = ui.add_sized(
                        [ui.available_width(), 44.0],
                        egui::Button::new(
                            egui::RichText::new(format!("🚀 {}", self.i18n.t("analyze")))
                                .size(16.0)
                                .strong(),
                        )
                        .fill(DesignSystem::ACCENT_PRIMARY),
                    );
                    if analyze.clicked() {
                        self.analyze();
                    }

                    ui.add_space(DesignSystem::SPACING_MEDIUM);
                    self.render_outcome(ui);
                });
            });

        // Keep the activity log live
        if self.log_rx.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
