use eframe::egui::{Color32, Context, RichText, Ui, Visuals};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::Side;
use crate::models::PriceStatus;
use crate::ui::config::UI_CONFIG;

/// Creates a colored heading with uppercase text and monospace font
pub fn colored_heading(text: impl Into<String>) -> RichText {
    let uppercase_text = text.into().to_uppercase() + ":";
    RichText::new(uppercase_text)
        .color(UI_CONFIG.colors.heading)
        .monospace()
}

pub fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.side_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.heading(colored_heading(text));
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// POI prices are shown with two decimals throughout
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

pub fn format_signed(value: f64, decimals: usize) -> String {
    if value >= 0.0 {
        format!("+{:.*}", decimals, value)
    } else {
        format!("{:.*}", decimals, value)
    }
}

pub fn status_color(status: PriceStatus) -> Color32 {
    match status {
        PriceStatus::Buy => PLOT_CONFIG.buy_zone_color,
        PriceStatus::Sell => PLOT_CONFIG.sell_zone_color,
        PriceStatus::Conflict => PLOT_CONFIG.conflict_color,
        PriceStatus::Neutral => PLOT_CONFIG.neutral_color,
    }
}

pub fn side_color(side: Side) -> Color32 {
    match side {
        Side::Buy => PLOT_CONFIG.buy_zone_color,
        Side::Sell => PLOT_CONFIG.sell_zone_color,
    }
}

pub fn side_label_color(side: Side) -> Color32 {
    match side {
        Side::Buy => PLOT_CONFIG.buy_label_color,
        Side::Sell => PLOT_CONFIG.sell_label_color,
    }
}
