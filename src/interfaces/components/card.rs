use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Titled panel on the dashboard surface.
///
/// An accent colours the outline and puts a marker before the title.
pub struct Card {
    title: String,
    caption: Option<String>,
    accent: Option<egui::Color32>,
    min_height: f32,
}

impl Card {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            caption: None,
            accent: None,
            min_height: 0.0,
        }
    }

    /// Muted line under the title
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn accent(mut self, color: egui::Color32) -> Self {
        self.accent = Some(color);
        self
    }

    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = height;
        self
    }

    fn frame(&self) -> egui::Frame {
        let frame = DesignSystem::card_frame();
        match self.accent {
            Some(color) => frame
                .stroke(egui::Stroke::new(1.5, color))
                .shadow(egui::epaint::Shadow {
                    offset: [0, 2],
                    blur: 10,
                    spread: 0,
                    color: color.linear_multiply(0.1),
                }),
            None => frame,
        }
    }

    fn header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some(color) = self.accent {
                ui.label(egui::RichText::new("●").size(10.0).color(color));
            }
            ui.label(
                egui::RichText::new(&self.title)
                    .size(13.0)
                    .strong()
                    .color(DesignSystem::TEXT_SECONDARY),
            );
        });

        if let Some(caption) = &self.caption {
            ui.label(
                egui::RichText::new(caption)
                    .size(11.0)
                    .color(DesignSystem::TEXT_MUTED),
            );
        }
        ui.add_space(DesignSystem::SPACING_SMALL);
    }

    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        self.frame().show(ui, |ui| {
            ui.set_min_height(self.min_height);
            self.header(ui);
            add_contents(ui)
        })
    }
}
