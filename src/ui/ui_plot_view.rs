use eframe::egui::emath::RectTransform;
use eframe::egui::{self, Rect, Sense, pos2, vec2};

use crate::config::plot::PLOT_CONFIG;
use crate::engine::PoiState;
use crate::models::Viewport;
use crate::ui::plot_layers::{
    LaneLayer, LayerContext, PlotLayer, PriceLineLayer, ScaleLayer, ZoneLayer, zone_at,
};
use crate::ui::utils::format_price;

/// Events the chart hands back to the app
pub enum ChartEvent {
    /// Zone band clicked: move the live price to its centre
    JumpToZone(usize),
}

/// Draws the multi-timeframe mirror: one logical viewport, scaled to fit.
#[derive(Default)]
pub struct MirrorView {
    viewport: Viewport,
}

impl MirrorView {
    pub fn new() -> Self {
        Self {
            viewport: Viewport::default(),
        }
    }

    pub fn show(&self, ui: &mut egui::Ui, state: &PoiState) -> Vec<ChartEvent> {
        let mut events = Vec::new();
        let projection = state.projection(self.viewport);

        let logical = Rect::from_min_size(
            pos2(0.0, 0.0),
            vec2(self.viewport.width as f32, self.viewport.height as f32),
        );

        // Keep the logical aspect ratio inside whatever space we get
        let available = ui.available_size();
        let scale = (available.x / logical.width())
            .min(available.y / logical.height())
            .max(0.1);
        let (response, painter) =
            ui.allocate_painter(logical.size() * scale, Sense::click());

        painter.rect_filled(response.rect, 4.0, PLOT_CONFIG.chart_background);

        let to_screen = RectTransform::from_to(logical, response.rect);
        let from_screen = to_screen.inverse();

        let hovered = response.hover_pos().and_then(|pointer| {
            let p = from_screen.transform_pos(pointer);
            zone_at(&projection, p.x as f64, p.y as f64)
        });

        let ctx = LayerContext {
            projection: &projection,
            to_screen,
            hovered_zone: hovered.map(|band| band.zone_index),
        };

        let layers: [&dyn PlotLayer; 4] = [&LaneLayer, &ZoneLayer, &ScaleLayer, &PriceLineLayer];
        for layer in layers {
            layer.render(&painter, &ctx);
        }

        if let Some(band) = hovered {
            let text = format!(
                "{}\n{} {} · {} - {}\nStrength {:.2}",
                band.label,
                band.timeframe.label(),
                band.side.label(),
                format_price(band.start),
                format_price(band.end),
                band.strength,
            );
            let zone_index = band.zone_index;
            let response = response.on_hover_text_at_pointer(text);
            if response.clicked() {
                events.push(ChartEvent::JumpToZone(zone_index));
            }
        }

        events
    }
}
