use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub status_bar: Color32,
    pub price_up: Color32,
    pub price_down: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_width: f32,
    /// Rows shown in the recent-history list
    pub recent_history_rows: usize,
    pub history_plot_height: f32,
    pub poi_list_max_height: f32,
    pub json_editor_rows: usize,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(18, 18, 24),
        side_panel: Color32::from_rgb(25, 25, 25),
        status_bar: Color32::from_rgb(32, 32, 36),
        price_up: Color32::from_rgb(34, 197, 94),
        price_down: Color32::from_rgb(239, 68, 68),
    },
    side_panel_width: 320.0,
    recent_history_rows: 10,
    history_plot_height: 90.0,
    poi_list_max_height: 320.0,
    json_editor_rows: 8,
};
