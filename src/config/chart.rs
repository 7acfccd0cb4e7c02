//! Mirror chart geometry configuration

/// Pixel margins around the plot area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

pub struct ChartConfig {
    /// Logical chart width. The painter scales this to the available space.
    pub width: f64,
    pub height: f64,
    pub margins: ChartMargins,
    /// Price units added above and below the outermost value so nothing sits on the edge
    pub domain_pad: f64,
    /// Number of labelled scale ticks (inclusive of both ends)
    pub scale_ticks: usize,
    /// Zone fill opacity is `strength * zone_fill_alpha_factor`
    pub zone_fill_alpha_factor: f32,
}

pub const CHART: ChartConfig = ChartConfig {
    width: 1200.0,
    height: 600.0,
    margins: ChartMargins {
        top: 40.0,
        right: 120.0,
        bottom: 40.0,
        left: 120.0,
    },
    domain_pad: 8.0,
    scale_ticks: 11,
    zone_fill_alpha_factor: 0.4,
};
