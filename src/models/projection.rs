//! Price → vertical position mapping shared by every timeframe lane.
//!
//! All zones are overlaid on a single price axis. The lanes (one per
//! timeframe) are a labelled backdrop and strength legend only: a zone band
//! spans the full plot width at the height its prices dictate, whatever its
//! timeframe.

use crate::config::CHART;
use crate::config::chart::ChartMargins;
use crate::domain::{Side, Timeframe, Zone};
use crate::models::status::{PriceStatus, price_status};
use crate::utils::maths_utils;

pub type Margins = ChartMargins;

/// Logical drawing surface the projection targets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: CHART.width,
            height: CHART.height,
            margins: CHART.margins,
        }
    }
}

impl Viewport {
    pub fn plot_top(&self) -> f64 {
        self.margins.top
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }

    pub fn plot_left(&self) -> f64 {
        self.margins.left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margins.right
    }

    pub fn plot_width(&self) -> f64 {
        self.plot_right() - self.plot_left()
    }
}

/// The projection's own value range: every zone bound and the live price,
/// padded. Not to be confused with the user-facing `PriceRange`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceDomain {
    pub min: f64,
    pub max: f64,
}

impl PriceDomain {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }
}

/// Horizontal band labelling one timeframe
#[derive(Debug, Clone, PartialEq)]
pub struct LaneBand {
    pub timeframe: Timeframe,
    pub index: usize,
    pub y_top: f64,
    pub height: f64,
    /// Default strength of the timeframe, drawn as the legend marker intensity
    pub strength: f64,
}

impl LaneBand {
    pub fn y_center(&self) -> f64 {
        self.y_top + self.height / 2.0
    }
}

/// Pixel geometry of one zone
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneBand {
    /// Position of the zone in the repository
    pub zone_index: usize,
    pub timeframe: Timeframe,
    pub side: Side,
    /// Lane of the zone's timeframe, `None` if the lane order omits it
    pub lane_index: Option<usize>,
    pub x_left: f64,
    pub x_right: f64,
    /// `price_to_y(end)`
    pub y_top: f64,
    /// `price_to_y(start)`
    pub y_bottom: f64,
    pub strength: f64,
    pub fill_alpha: f32,
    pub active: bool,
    pub label: String,
    pub start: f64,
    pub end: f64,
}

impl ZoneBand {
    pub fn height(&self) -> f64 {
        self.y_bottom - self.y_top
    }

    pub fn y_center(&self) -> f64 {
        self.y_top + self.height() / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTick {
    pub price: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveMarker {
    pub price: f64,
    pub y: f64,
    pub status: PriceStatus,
}

/// Immutable layout for one (zones, live price, viewport) triple
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub viewport: Viewport,
    pub domain: PriceDomain,
    pub lanes: Vec<LaneBand>,
    pub zones: Vec<ZoneBand>,
    pub ticks: Vec<ScaleTick>,
    pub live: LiveMarker,
}

impl Projection {
    /// Higher price → smaller y. A single-point domain maps to mid-plot.
    pub fn price_to_y(&self, price: f64) -> f64 {
        price_to_y(&self.domain, &self.viewport, price)
    }

    pub fn lane_index(&self, timeframe: Timeframe) -> Option<usize> {
        self.lanes
            .iter()
            .find(|lane| lane.timeframe == timeframe)
            .map(|lane| lane.index)
    }
}

fn price_to_y(domain: &PriceDomain, viewport: &Viewport, price: f64) -> f64 {
    let plot_height = viewport.plot_height();
    if domain.is_degenerate() {
        return viewport.plot_top() + plot_height / 2.0;
    }
    viewport.plot_top() + ((domain.max - price) / domain.span()) * plot_height
}

/// Build the full chart layout.
///
/// `timeframe_order` lists the lanes top to bottom (normally
/// `Timeframe::ALL`). `pad` is added below the lowest and above the highest
/// value so no bound ever sits on the plot edge.
pub fn build_projection(
    zones: &[Zone],
    live_price: f64,
    timeframe_order: &[Timeframe],
    viewport: Viewport,
    pad: f64,
) -> Projection {
    // 1. Domain over every bound plus the live price
    let mut values: Vec<f64> = zones.iter().flat_map(|z| [z.start, z.end]).collect();
    values.push(live_price);
    let (lowest, highest) = maths_utils::min_max(&values).unwrap_or((live_price, live_price));
    let domain = PriceDomain {
        min: lowest - pad,
        max: highest + pad,
    };

    // 2. Lanes: equal split of the plot height
    let lane_height = if timeframe_order.is_empty() {
        0.0
    } else {
        viewport.plot_height() / timeframe_order.len() as f64
    };
    let lanes: Vec<LaneBand> = timeframe_order
        .iter()
        .enumerate()
        .map(|(index, &timeframe)| LaneBand {
            timeframe,
            index,
            y_top: viewport.plot_top() + index as f64 * lane_height,
            height: lane_height,
            strength: timeframe.default_strength(),
        })
        .collect();

    // 3. Zone bands: positioned by price, full plot width
    let zone_bands: Vec<ZoneBand> = zones
        .iter()
        .enumerate()
        .map(|(zone_index, zone)| {
            let strength = zone.effective_strength();
            ZoneBand {
                zone_index,
                timeframe: zone.timeframe,
                side: zone.side,
                lane_index: timeframe_order.iter().position(|&tf| tf == zone.timeframe),
                x_left: viewport.plot_left(),
                x_right: viewport.plot_right(),
                y_top: price_to_y(&domain, &viewport, zone.end),
                y_bottom: price_to_y(&domain, &viewport, zone.start),
                strength,
                fill_alpha: strength as f32 * CHART.zone_fill_alpha_factor,
                active: zone.contains(live_price),
                label: zone.label.clone(),
                start: zone.start,
                end: zone.end,
            }
        })
        .collect();

    // 4. Scale ticks, inclusive of both domain ends
    let divisions = CHART.scale_ticks.saturating_sub(1).max(1);
    let step = domain.span() / divisions as f64;
    let ticks: Vec<ScaleTick> = (0..=divisions)
        .map(|i| {
            let price = domain.min + step * i as f64;
            ScaleTick {
                price,
                y: price_to_y(&domain, &viewport, price),
            }
        })
        .collect();

    let live = LiveMarker {
        price: live_price,
        y: price_to_y(&domain, &viewport, live_price),
        status: price_status(zones, live_price),
    };

    Projection {
        viewport,
        domain,
        lanes,
        zones: zone_bands,
        ticks,
        live,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_zones;

    const EPS: f64 = 1e-9;

    fn zone(timeframe: Timeframe, side: Side, start: f64, end: f64) -> Zone {
        Zone {
            timeframe,
            side,
            start,
            end,
            label: "z".to_string(),
            strength: None,
        }
    }

    #[test]
    fn test_domain_is_padded_extremes() {
        let zones = default_zones();
        let projection = build_projection(&zones, 1814.0, &Timeframe::ALL, Viewport::default(), 8.0);
        assert_eq!(projection.domain.min, 1800.0 - 8.0);
        assert_eq!(projection.domain.max, 1825.0 + 8.0);

        // Live price outside every zone widens the domain
        let projection = build_projection(&zones, 1850.0, &Timeframe::ALL, Viewport::default(), 8.0);
        assert_eq!(projection.domain.max, 1858.0);
        assert!(projection.live.y > projection.viewport.plot_top());
    }

    #[test]
    fn test_price_maps_inverted_onto_plot() {
        let zones = vec![zone(Timeframe::Daily, Side::Buy, 100.0, 200.0)];
        let viewport = Viewport::default();
        let projection = build_projection(&zones, 150.0, &Timeframe::ALL, viewport, 0.0);

        assert!((projection.price_to_y(200.0) - viewport.plot_top()).abs() < EPS);
        assert!(
            (projection.price_to_y(100.0) - (viewport.plot_top() + viewport.plot_height())).abs()
                < EPS
        );
        assert!((projection.live.y - 300.0).abs() < EPS);

        let band = &projection.zones[0];
        assert!(band.y_top < band.y_bottom);
        assert!((band.height() - viewport.plot_height()).abs() < EPS);
        assert_eq!(band.x_left, 120.0);
        assert_eq!(band.x_right, 1080.0);
    }

    #[test]
    fn test_degenerate_domain_maps_to_mid_plot() {
        let zones = vec![zone(Timeframe::H1, Side::Sell, 1810.0, 1810.0)];
        let viewport = Viewport::default();
        let projection = build_projection(&zones, 1810.0, &Timeframe::ALL, viewport, 0.0);

        assert!(projection.domain.is_degenerate());
        let mid = viewport.plot_top() + viewport.plot_height() / 2.0;
        assert_eq!(projection.live.y, mid);
        assert_eq!(projection.zones[0].y_top, mid);
        assert!(projection.ticks.iter().all(|t| t.y.is_finite()));
    }

    #[test]
    fn test_lanes_split_plot_in_canonical_order() {
        let projection = build_projection(&[], 1814.0, &Timeframe::ALL, Viewport::default(), 8.0);
        assert_eq!(projection.lanes.len(), 6);
        for (idx, lane) in projection.lanes.iter().enumerate() {
            assert_eq!(lane.timeframe, Timeframe::ALL[idx]);
            assert!((lane.height - 520.0 / 6.0).abs() < EPS);
            assert!((lane.y_top - (40.0 + idx as f64 * 520.0 / 6.0)).abs() < EPS);
        }
        assert_eq!(projection.lane_index(Timeframe::H4), Some(3));
    }

    #[test]
    fn test_zone_position_ignores_lane() {
        let zones = vec![
            zone(Timeframe::Monthly, Side::Buy, 1810.0, 1812.0),
            zone(Timeframe::M15, Side::Buy, 1810.0, 1812.0),
        ];
        let projection = build_projection(&zones, 1811.0, &Timeframe::ALL, Viewport::default(), 8.0);
        assert_eq!(projection.zones[0].y_top, projection.zones[1].y_top);
        assert_eq!(projection.zones[0].lane_index, Some(0));
        assert_eq!(projection.zones[1].lane_index, Some(5));
        assert!(projection.zones.iter().all(|band| band.active));
    }

    #[test]
    fn test_eleven_ticks_span_domain() {
        let zones = default_zones();
        let projection = build_projection(&zones, 1814.0, &Timeframe::ALL, Viewport::default(), 8.0);
        assert_eq!(projection.ticks.len(), 11);
        assert!((projection.ticks[0].price - projection.domain.min).abs() < EPS);
        assert!((projection.ticks[10].price - projection.domain.max).abs() < EPS);
        let step = projection.domain.span() / 10.0;
        assert!((projection.ticks[1].price - projection.ticks[0].price - step).abs() < EPS);
    }

    #[test]
    fn test_fill_alpha_tracks_strength() {
        let mut strong = zone(Timeframe::M15, Side::Sell, 1.0, 2.0);
        strong.strength = Some(1.0);
        let weak = zone(Timeframe::M15, Side::Sell, 1.0, 2.0);
        let projection =
            build_projection(&[strong, weak], 5.0, &Timeframe::ALL, Viewport::default(), 8.0);
        assert!((projection.zones[0].fill_alpha - 0.4).abs() < 1e-6);
        assert!((projection.zones[1].fill_alpha - 0.2).abs() < 1e-6);
        assert!(!projection.zones[0].active);
        assert_eq!(projection.live.status, PriceStatus::Neutral);
    }
}
