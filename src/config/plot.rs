//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub buy_zone_color: Color32,
    pub buy_label_color: Color32,
    pub sell_zone_color: Color32,
    pub sell_label_color: Color32,
    pub conflict_color: Color32,
    pub neutral_color: Color32,
    /// Lane backdrop and strength legend
    pub lane_fill_color: Color32,
    pub lane_separator_color: Color32,
    pub strength_marker_color: Color32,
    pub scale_color: Color32,
    pub chart_background: Color32,
    /// Width of an active zone outline
    pub active_zone_stroke_width: f32,
    /// Width of an inactive zone outline
    pub zone_stroke_width: f32,
    /// Width of the live price line
    pub live_price_line_width: f32,
    pub live_price_marker_radius: f32,
    pub zone_corner_radius: f32,
    /// Every other lane gets this backdrop alpha (0.0 = invisible)
    pub lane_fill_opacity: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    buy_zone_color: Color32::from_rgb(34, 197, 94),   // Green
    buy_label_color: Color32::from_rgb(21, 128, 61),
    sell_zone_color: Color32::from_rgb(239, 68, 68),  // Red
    sell_label_color: Color32::from_rgb(185, 28, 28),
    conflict_color: Color32::from_rgb(249, 115, 22),  // Orange
    neutral_color: Color32::from_rgb(220, 220, 220),
    lane_fill_color: Color32::from_rgb(120, 120, 140),
    lane_separator_color: Color32::from_rgb(70, 70, 80),
    strength_marker_color: Color32::from_rgb(99, 102, 241),
    scale_color: Color32::GRAY,
    chart_background: Color32::from_rgb(18, 18, 24),
    active_zone_stroke_width: 3.0,
    zone_stroke_width: 1.0,
    live_price_line_width: 4.0,
    live_price_marker_radius: 8.0,
    zone_corner_radius: 4.0,
    lane_fill_opacity: 0.05,
};
