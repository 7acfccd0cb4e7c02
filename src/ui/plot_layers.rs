use eframe::egui::emath::RectTransform;
use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, StrokeKind, pos2};

use crate::config::plot::PLOT_CONFIG;
use crate::models::{Projection, ZoneBand};
use crate::ui::config::UI_TEXT;
use crate::ui::utils::{format_price, side_color, side_label_color, status_color};

/// Context passed to every layer during rendering.
/// This prevents argument explosion.
pub struct LayerContext<'a> {
    pub projection: &'a Projection,
    /// Logical chart space (viewport pixels) to screen space
    pub to_screen: RectTransform,
    /// Zone index under the pointer, drawn emphasised
    pub hovered_zone: Option<usize>,
}

impl LayerContext<'_> {
    fn pos(&self, x: f64, y: f64) -> Pos2 {
        self.to_screen.transform_pos(pos2(x as f32, y as f32))
    }

    fn rect(&self, x_left: f64, y_top: f64, x_right: f64, y_bottom: f64) -> Rect {
        Rect::from_min_max(self.pos(x_left, y_top), self.pos(x_right, y_bottom))
    }
}

/// A standardized layer in the chart stack.
pub trait PlotLayer {
    fn render(&self, painter: &Painter, ctx: &LayerContext);
}

// ============================================================================
// 1. LANE LAYER (timeframe backdrop + strength legend)
// ============================================================================
pub struct LaneLayer;

impl PlotLayer for LaneLayer {
    fn render(&self, painter: &Painter, ctx: &LayerContext) {
        let viewport = &ctx.projection.viewport;
        let (left, right) = (viewport.plot_left(), viewport.plot_right());

        for lane in &ctx.projection.lanes {
            let y_bottom = lane.y_top + lane.height;

            if lane.index % 2 == 0 {
                painter.rect_filled(
                    ctx.rect(left, lane.y_top, right, y_bottom),
                    0.0,
                    PLOT_CONFIG
                        .lane_fill_color
                        .linear_multiply(PLOT_CONFIG.lane_fill_opacity),
                );
            }
            painter.line_segment(
                [ctx.pos(left, lane.y_top), ctx.pos(right, lane.y_top)],
                Stroke::new(1.0, PLOT_CONFIG.lane_separator_color),
            );

            // Legend: label plus a dot whose intensity is the lane's default strength
            let label_pos = ctx.pos(left - 24.0, lane.y_center());
            painter.text(
                label_pos,
                Align2::RIGHT_CENTER,
                lane.timeframe.label(),
                FontId::proportional(13.0),
                PLOT_CONFIG.scale_color,
            );
            painter.circle_filled(
                ctx.pos(left - 12.0, lane.y_center()),
                4.0,
                PLOT_CONFIG
                    .strength_marker_color
                    .linear_multiply(lane.strength as f32),
            );
        }
    }
}

// ============================================================================
// 2. ZONE LAYER
// ============================================================================
pub struct ZoneLayer;

impl PlotLayer for ZoneLayer {
    fn render(&self, painter: &Painter, ctx: &LayerContext) {
        for band in &ctx.projection.zones {
            draw_zone_band(painter, ctx, band);
        }
    }
}

// ============================================================================
// 3. SCALE LAYER
// ============================================================================
pub struct ScaleLayer;

impl PlotLayer for ScaleLayer {
    fn render(&self, painter: &Painter, ctx: &LayerContext) {
        let right = ctx.projection.viewport.plot_right();
        let stroke = Stroke::new(1.0, PLOT_CONFIG.scale_color);

        painter.line_segment(
            [
                ctx.pos(right, ctx.projection.viewport.plot_top()),
                ctx.pos(
                    right,
                    ctx.projection.viewport.plot_top() + ctx.projection.viewport.plot_height(),
                ),
            ],
            stroke,
        );

        for tick in &ctx.projection.ticks {
            painter.line_segment([ctx.pos(right, tick.y), ctx.pos(right + 6.0, tick.y)], stroke);
            painter.text(
                ctx.pos(right + 10.0, tick.y),
                Align2::LEFT_CENTER,
                format_price(tick.price),
                FontId::monospace(11.0),
                PLOT_CONFIG.scale_color,
            );
        }
    }
}

// ============================================================================
// 4. PRICE LINE LAYER
// ============================================================================
pub struct PriceLineLayer;

impl PlotLayer for PriceLineLayer {
    fn render(&self, painter: &Painter, ctx: &LayerContext) {
        let viewport = &ctx.projection.viewport;
        let live = &ctx.projection.live;
        let color = status_color(live.status);

        painter.line_segment(
            [
                ctx.pos(viewport.plot_left(), live.y),
                ctx.pos(viewport.plot_right(), live.y),
            ],
            Stroke::new(PLOT_CONFIG.live_price_line_width, color),
        );
        painter.circle_filled(
            ctx.pos(viewport.plot_left(), live.y),
            PLOT_CONFIG.live_price_marker_radius,
            color,
        );

        let text = format!("{} {}", UI_TEXT.chart_live_price, format_price(live.price));
        painter.text(
            ctx.pos(viewport.plot_right() - 6.0, live.y - 6.0),
            Align2::RIGHT_BOTTOM,
            text,
            FontId::proportional(14.0),
            color,
        );
    }
}

// ============================================================================
// HELPER FUNCTIONS (Private to this module)
// ============================================================================

fn draw_zone_band(painter: &Painter, ctx: &LayerContext, band: &ZoneBand) {
    let base = side_color(band.side);
    let rect = ctx.rect(band.x_left, band.y_top, band.x_right, band.y_bottom);
    let hovered = ctx.hovered_zone == Some(band.zone_index);

    let alpha = if hovered {
        (band.fill_alpha * 1.5).min(1.0)
    } else {
        band.fill_alpha
    };
    painter.rect_filled(rect, PLOT_CONFIG.zone_corner_radius, base.linear_multiply(alpha));

    let width = if band.active || hovered {
        PLOT_CONFIG.active_zone_stroke_width
    } else {
        PLOT_CONFIG.zone_stroke_width
    };
    painter.rect_stroke(
        rect,
        PLOT_CONFIG.zone_corner_radius,
        Stroke::new(width, base),
        StrokeKind::Inside,
    );

    let text_color = if band.active {
        Color32::WHITE
    } else {
        side_label_color(band.side)
    };
    painter.text(
        ctx.pos(band.x_left + 8.0, band.y_center()),
        Align2::LEFT_CENTER,
        format!("{} · {}", band.timeframe.label(), band.label),
        FontId::proportional(11.0),
        text_color,
    );
}

/// Topmost zone band under a point in logical chart space
pub fn zone_at(projection: &Projection, x: f64, y: f64) -> Option<&ZoneBand> {
    projection
        .zones
        .iter()
        .rev()
        .find(|band| x >= band.x_left && x <= band.x_right && y >= band.y_top && y <= band.y_bottom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_zones;
    use crate::domain::Timeframe;
    use crate::models::{Viewport, build_projection};

    #[test]
    fn test_zone_at_picks_topmost_band() {
        let zones = default_zones();
        let projection = build_projection(&zones, 1817.0, &Timeframe::ALL, Viewport::default(), 8.0);
        let y = projection.price_to_y(1817.0);
        // daily 1815-1818 (index 2) and 1h 1816-1818 (index 4) overlap; 1h is drawn last
        let band = zone_at(&projection, 600.0, y).unwrap();
        assert_eq!(band.zone_index, 4);

        assert!(zone_at(&projection, 10.0, y).is_none());
        assert!(zone_at(&projection, 600.0, projection.price_to_y(1808.0)).is_none());
    }
}
