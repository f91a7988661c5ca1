use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use egui_plot::{Legend, Line, Plot, Points};

/// Line chart of the entered readings, day 1 first.
///
/// When a forecast is available it is drawn as a dashed segment from the last
/// reading to the predicted next day.
pub fn render_trend_chart(
    ui: &mut egui::Ui,
    series_label: &str,
    forecast_label: &str,
    points: &[[f64; 2]],
    forecast: Option<f64>,
) {
    let height = (ui.available_height() - 20.0).max(220.0);

    Plot::new("aqi_trend_chart")
        .height(height)
        .show_grid([true, true])
        .legend(Legend::default())
        .allow_scroll(false)
        .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(series_label, points.to_vec())
                    .color(DesignSystem::ACCENT_PRIMARY)
                    .width(2.5),
            );
            plot_ui.points(
                Points::new(series_label, points.to_vec())
                    .color(DesignSystem::ACCENT_SECONDARY)
                    .radius(3.5),
            );

            if let (Some(next), Some(last)) = (forecast, points.last()) {
                let segment = vec![*last, [last[0] + 1.0, next]];
                plot_ui.line(
                    Line::new(forecast_label, segment)
                        .color(DesignSystem::WARNING)
                        .style(egui_plot::LineStyle::dashed_loose()),
                );
            }
        });
}
