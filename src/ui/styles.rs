use eframe::egui::{Color32, RichText, Ui};

use crate::models::PriceStatus;
use crate::ui::config::UI_CONFIG;
use crate::ui::utils::status_color;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Small, gray text for captions and helper lines
    fn label_subdued(&mut self, text: impl Into<String>);

    /// "Label: Value" pair; label subdued, value colored.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    fn label_header(&mut self, text: impl Into<String>);

    fn label_error(&mut self, text: impl Into<String>);

    fn label_warning(&mut self, text: impl Into<String>);

    /// Large icon + label badge for the current price status
    fn status_badge(&mut self, status: PriceStatus);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_header(&mut self, text: impl Into<String>) {
        let text = text.into().to_uppercase();
        self.heading(RichText::new(text).color(UI_CONFIG.colors.heading).monospace());
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(Color32::from_rgb(255, 100, 100)));
    }

    fn label_warning(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::from_rgb(255, 215, 0)));
    }

    fn status_badge(&mut self, status: PriceStatus) {
        let text = format!("{} {}", status.icon(), status.label());
        self.label(
            RichText::new(text)
                .size(20.0)
                .strong()
                .color(status_color(status)),
        );
    }
}
