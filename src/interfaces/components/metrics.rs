use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// A card showing one headline number, optionally with a delta underneath
pub fn render_metric_card(
    ui: &mut egui::Ui,
    title: &str,
    value: &str,
    delta: Option<(&str, egui::Color32)>,
) {
    Card::titled(title).min_height(100.0).show(ui, |ui| {
        ui.label(
            egui::RichText::new(value)
                .size(28.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );

        if let Some((text, color)) = delta {
            render_status_pill(ui, text, color);
        }
    });
}

/// A status pill (e.g. for the forecast delta)
pub fn render_status_pill(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::NONE
        .fill(color.linear_multiply(0.15))
        .corner_radius(12)
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).strong().color(color));
        });
}

/// Full-width coloured message strip
pub fn render_banner(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::NONE
        .fill(color.linear_multiply(0.12))
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(DesignSystem::ROUNDING_MEDIUM)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(text).size(14.0).strong().color(color));
        });
}
