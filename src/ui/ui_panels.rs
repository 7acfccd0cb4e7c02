use eframe::egui::{Button, Color32, ComboBox, DragValue, RichText, ScrollArea, Slider, TextEdit, Ui};
use egui_plot::{HLine, Line, Plot, PlotPoints};
use strum::IntoEnumIterator;

use crate::config::plot::PLOT_CONFIG;
use crate::config::{LIVE, PRICE_PRESETS};
use crate::domain::{Side, Timeframe};
use crate::engine::{PoiState, Trend, UpdateInterval};
use crate::models::{SortKey, ZoneQuery, ZoneSelection};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{
    colored_subsection_heading, format_price, format_signed, section_heading, side_color,
    status_color,
};
use crate::utils::TimeUtils;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

// ============================================================================
// STATUS
// ============================================================================

pub struct StatusPanel<'a> {
    state: &'a PoiState,
}

impl<'a> StatusPanel<'a> {
    pub fn new(state: &'a PoiState) -> Self {
        Self { state }
    }
}

impl Panel for StatusPanel<'_> {
    type Event = ();

    fn render(&mut self, ui: &mut Ui) -> Vec<()> {
        section_heading(ui, UI_TEXT.status_heading);
        let status = self.state.status();
        ui.status_badge(status.status);
        ui.label(
            RichText::new(format_price(self.state.live_price()))
                .size(28.0)
                .monospace()
                .color(status_color(status.status)),
        );

        for zone in status.active_buy.iter().chain(status.active_sell.iter()) {
            ui.label(
                RichText::new(format!("• {} {}", zone.timeframe.label(), zone.label))
                    .small()
                    .color(side_color(zone.side)),
            );
        }
        Vec::new()
    }
}

// ============================================================================
// MANUAL PRICE CONTROL + PRESETS
// ============================================================================

pub enum PriceEvent {
    SetPrice(f64),
    SetRange(f64, f64),
    Preset(usize),
}

pub struct ManualControlPanel<'a> {
    state: &'a PoiState,
}

impl<'a> ManualControlPanel<'a> {
    pub fn new(state: &'a PoiState) -> Self {
        Self { state }
    }
}

impl Panel for ManualControlPanel<'_> {
    type Event = PriceEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<PriceEvent> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.manual_control_heading);

        let range = self.state.price_range();
        let mut price = self.state.live_price();
        ui.label(colored_subsection_heading(UI_TEXT.label_live_price));
        let response = ui.add(
            Slider::new(&mut price, range.min..=range.max)
                .step_by(0.1)
                .fixed_decimals(2)
                .clamping(eframe::egui::SliderClamping::Never),
        );
        if response.changed() {
            events.push(PriceEvent::SetPrice(price));
        }

        let (mut min, mut max) = (range.min, range.max);
        ui.horizontal(|ui| {
            ui.label_subdued(UI_TEXT.label_range_min);
            let min_changed = ui.add(DragValue::new(&mut min).speed(0.5)).changed();
            ui.label_subdued(UI_TEXT.label_range_max);
            let max_changed = ui.add(DragValue::new(&mut max).speed(0.5)).changed();
            if min_changed || max_changed {
                events.push(PriceEvent::SetRange(min, max));
            }
        });

        ui.add_space(5.0);
        ui.label(colored_subsection_heading(UI_TEXT.presets_heading));
        ui.horizontal_wrapped(|ui| {
            for (index, preset) in PRICE_PRESETS.iter().enumerate() {
                let text = format!("{} ({})", preset.label, preset.price);
                if ui.small_button(text).clicked() {
                    events.push(PriceEvent::Preset(index));
                }
            }
        });

        events
    }
}

// ============================================================================
// LIVE TRACKER
// ============================================================================

pub enum LiveEvent {
    Toggle(bool),
    Interval(UpdateInterval),
    Volatility(f64),
    Trend(Trend),
    ClearHistory,
    ExportHistory,
}

pub struct LiveTrackerPanel<'a> {
    state: &'a PoiState,
    now_ms: i64,
}

impl<'a> LiveTrackerPanel<'a> {
    pub fn new(state: &'a PoiState, now_ms: i64) -> Self {
        Self { state, now_ms }
    }

    fn render_controls(&self, ui: &mut Ui, events: &mut Vec<LiveEvent>) {
        let is_live = self.state.is_live();
        ui.horizontal(|ui| {
            let (text, color) = if is_live {
                (UI_TEXT.label_live_on, UI_CONFIG.colors.price_up)
            } else {
                (UI_TEXT.label_live_paused, Color32::GRAY)
            };
            ui.label(RichText::new(text).strong().color(color));

            let button = if is_live {
                UI_TEXT.button_pause_live
            } else {
                UI_TEXT.button_start_live
            };
            if ui.button(button).clicked() {
                events.push(LiveEvent::Toggle(!is_live));
            }
        });

        if let Some(ms) = self.state.feed().ms_until_due(self.now_ms) {
            ui.label_subdued(format!("{} {:.1}s", UI_TEXT.label_next_tick, ms as f64 / 1000.0));
        }

        let mut interval = self.state.feed().interval();
        ui.horizontal(|ui| {
            ui.label_subdued(UI_TEXT.label_interval);
            ComboBox::from_id_salt("live_interval")
                .selected_text(interval.to_string())
                .show_ui(ui, |ui| {
                    for option in UpdateInterval::iter() {
                        ui.selectable_value(&mut interval, option, option.to_string());
                    }
                });
        });
        if interval != self.state.feed().interval() {
            events.push(LiveEvent::Interval(interval));
        }

        let walk = self.state.walk();
        let mut volatility = walk.volatility;
        ui.horizontal(|ui| {
            ui.label_subdued(UI_TEXT.label_volatility);
            let response = ui.add(
                Slider::new(&mut volatility, LIVE.volatility_min..=LIVE.volatility_max)
                    .step_by(0.1),
            );
            if response.changed() {
                events.push(LiveEvent::Volatility(volatility));
            }
        });

        let mut trend = walk.trend;
        ui.horizontal(|ui| {
            ui.label_subdued(UI_TEXT.label_trend);
            for option in Trend::iter() {
                ui.selectable_value(&mut trend, option, option.label());
            }
        });
        if trend != walk.trend {
            events.push(LiveEvent::Trend(trend));
        }
    }

    fn render_stats(&self, ui: &mut Ui) {
        let history = self.state.history();

        if let Some(change) = history.change() {
            let color = if change.is_up() {
                UI_CONFIG.colors.price_up
            } else {
                UI_CONFIG.colors.price_down
            };
            ui.metric(
                UI_TEXT.label_change,
                &format!(
                    "{} ({}%)",
                    format_signed(change.change, 2),
                    format_signed(change.percent, 3)
                ),
                color,
            );
        }

        if let Some(stats) = history.session_stats() {
            ui.metric(
                UI_TEXT.label_session_high,
                &format_price(stats.high),
                UI_CONFIG.colors.price_up,
            );
            ui.metric(
                UI_TEXT.label_session_low,
                &format_price(stats.low),
                UI_CONFIG.colors.price_down,
            );
        }
    }

    fn render_history_plot(&self, ui: &mut Ui) {
        let history = self.state.history();
        if history.len() < 2 {
            return;
        }

        let points: PlotPoints = history
            .entries()
            .enumerate()
            .map(|(i, entry)| [i as f64, entry.price])
            .collect();
        let stats = history.session_stats();

        Plot::new("live_history_plot")
            .height(UI_CONFIG.history_plot_height)
            .show_axes([false, true])
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(UI_TEXT.plot_history_name, points)
                        .color(status_color(self.state.price_status())),
                );
                if let Some(stats) = stats {
                    plot_ui.hline(
                        HLine::new(UI_TEXT.label_session_high, stats.high)
                            .color(PLOT_CONFIG.scale_color),
                    );
                    plot_ui.hline(
                        HLine::new(UI_TEXT.label_session_low, stats.low)
                            .color(PLOT_CONFIG.scale_color),
                    );
                }
            });
    }

    fn render_recent(&self, ui: &mut Ui) {
        let history = self.state.history();
        if history.len() < 2 {
            return;
        }
        ui.label(colored_subsection_heading(UI_TEXT.label_recent_history));
        ScrollArea::vertical()
            .id_salt("recent_history")
            .max_height(140.0)
            .show(ui, |ui| {
                for entry in history.recent(UI_CONFIG.recent_history_rows) {
                    ui.horizontal(|ui| {
                        ui.label_subdued(TimeUtils::format_clock(entry.timestamp));
                        ui.label(RichText::new(format_price(entry.price)).small().monospace());
                        ui.label(
                            RichText::new(entry.status.icon())
                                .small()
                                .color(status_color(entry.status)),
                        );
                    });
                }
            });
    }
}

impl Panel for LiveTrackerPanel<'_> {
    type Event = LiveEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<LiveEvent> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.live_tracker_heading);

        self.render_controls(ui, &mut events);
        ui.add_space(5.0);
        self.render_stats(ui);
        self.render_history_plot(ui);
        self.render_recent(ui);

        ui.horizontal(|ui| {
            if ui.small_button(UI_TEXT.button_clear_history).clicked() {
                events.push(LiveEvent::ClearHistory);
            }
            if ui.small_button(UI_TEXT.button_export_history).clicked() {
                events.push(LiveEvent::ExportHistory);
            }
        });

        events
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

pub enum ActionEvent {
    NewPoi,
    QuickAdd,
    Reset,
}

pub struct ActionsPanel;

impl Panel for ActionsPanel {
    type Event = ActionEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<ActionEvent> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.actions_heading);
        ui.horizontal_wrapped(|ui| {
            if ui.button(UI_TEXT.button_new_poi).clicked() {
                events.push(ActionEvent::NewPoi);
            }
            if ui.button(UI_TEXT.button_quick_add).clicked() {
                events.push(ActionEvent::QuickAdd);
            }
            if ui.button(UI_TEXT.button_reset).clicked() {
                events.push(ActionEvent::Reset);
            }
        });
        events
    }
}

// ============================================================================
// BULK IMPORT / EXPORT
// ============================================================================

pub enum ImportEvent {
    Import,
    LoadCurrent,
    CopyJson,
}

pub struct ImportExportPanel<'a> {
    buffer: &'a mut String,
}

impl<'a> ImportExportPanel<'a> {
    pub fn new(buffer: &'a mut String) -> Self {
        Self { buffer }
    }
}

impl Panel for ImportExportPanel<'_> {
    type Event = ImportEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<ImportEvent> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.import_export_heading);
        ui.label_subdued(UI_TEXT.import_hint);

        ScrollArea::vertical()
            .id_salt("json_editor")
            .max_height(180.0)
            .show(ui, |ui| {
                ui.add(
                    TextEdit::multiline(self.buffer)
                        .code_editor()
                        .desired_rows(UI_CONFIG.json_editor_rows)
                        .desired_width(f32::INFINITY),
                );
            });

        ui.horizontal(|ui| {
            let has_text = !self.buffer.trim().is_empty();
            if ui.add_enabled(has_text, Button::new(UI_TEXT.button_import)).clicked() {
                events.push(ImportEvent::Import);
            }
            if ui.button(UI_TEXT.button_load_current).clicked() {
                events.push(ImportEvent::LoadCurrent);
            }
            if ui.button(UI_TEXT.button_copy_json).clicked() {
                events.push(ImportEvent::CopyJson);
            }
        });
        events
    }
}

// ============================================================================
// POI LIST
// ============================================================================

pub enum ListEvent {
    Edit(usize),
    Remove(usize),
    Jump(usize),
    RemoveSelected,
}

pub struct PoiListPanel<'a> {
    state: &'a PoiState,
    query: &'a mut ZoneQuery,
    selection: &'a mut ZoneSelection,
}

impl<'a> PoiListPanel<'a> {
    pub fn new(
        state: &'a PoiState,
        query: &'a mut ZoneQuery,
        selection: &'a mut ZoneSelection,
    ) -> Self {
        Self {
            state,
            query,
            selection,
        }
    }

    fn render_filters(&mut self, ui: &mut Ui) {
        ui.horizontal_wrapped(|ui| {
            ui.label_subdued(UI_TEXT.label_filter_timeframe);
            let selected = self
                .query
                .timeframe
                .map(|tf| tf.label())
                .unwrap_or(UI_TEXT.word_all);
            ComboBox::from_id_salt("filter_timeframe")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.query.timeframe, None, UI_TEXT.word_all);
                    for tf in Timeframe::iter() {
                        ui.selectable_value(&mut self.query.timeframe, Some(tf), tf.label());
                    }
                });

            ui.label_subdued(UI_TEXT.label_filter_side);
            let selected = self
                .query
                .side
                .map(|side| side.label())
                .unwrap_or(UI_TEXT.word_all);
            ComboBox::from_id_salt("filter_side")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.query.side, None, UI_TEXT.word_all);
                    for side in Side::iter() {
                        ui.selectable_value(&mut self.query.side, Some(side), side.label());
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.label_subdued(UI_TEXT.label_search);
            ui.text_edit_singleline(&mut self.query.search);
        });

        ui.horizontal(|ui| {
            ui.label_subdued(UI_TEXT.label_sort);
            ComboBox::from_id_salt("sort_key")
                .selected_text(self.query.sort.label())
                .show_ui(ui, |ui| {
                    for key in SortKey::iter() {
                        ui.selectable_value(&mut self.query.sort, key, key.label());
                    }
                });
        });
    }
}

impl Panel for PoiListPanel<'_> {
    type Event = ListEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<ListEvent> {
        let mut events = Vec::new();
        section_heading(
            ui,
            format!("{} ({})", UI_TEXT.poi_list_heading, self.state.zones().len()),
        );
        self.render_filters(ui);

        let rows = self.state.view(self.query);

        ui.horizontal(|ui| {
            if ui.small_button(UI_TEXT.button_select_all).clicked() {
                self.selection.toggle_all(&rows);
            }
            let label = format!("{} ({})", UI_TEXT.button_remove_selected, self.selection.len());
            if ui
                .add_enabled(!self.selection.is_empty(), Button::new(label).small())
                .clicked()
            {
                events.push(ListEvent::RemoveSelected);
            }
        });

        if rows.is_empty() {
            ui.label_warning(UI_TEXT.label_no_matches);
            return events;
        }

        let live_price = self.state.live_price();
        ScrollArea::vertical()
            .id_salt("poi_list")
            .max_height(UI_CONFIG.poi_list_max_height)
            .show(ui, |ui| {
                for row in &rows {
                    let zone = row.zone;
                    ui.horizontal(|ui| {
                        let mut checked = self.selection.is_selected(row.index);
                        if ui.checkbox(&mut checked, "").changed() {
                            self.selection.toggle(row.index);
                        }

                        let mut text = RichText::new(format!(
                            "{:<7} {} {}-{}",
                            zone.timeframe.label(),
                            zone.side,
                            format_price(zone.start),
                            format_price(zone.end)
                        ))
                        .small()
                        .monospace()
                        .color(side_color(zone.side));
                        if zone.contains(live_price) {
                            text = text.strong();
                        }
                        ui.label(text).on_hover_text(format!(
                            "{}\nStrength {:.2}",
                            zone.label,
                            zone.effective_strength()
                        ));

                        if ui.small_button(UI_TEXT.button_jump).clicked() {
                            events.push(ListEvent::Jump(row.index));
                        }
                        if ui.small_button(UI_TEXT.button_edit).clicked() {
                            events.push(ListEvent::Edit(row.index));
                        }
                        if ui.small_button(UI_TEXT.button_remove).clicked() {
                            events.push(ListEvent::Remove(row.index));
                        }
                    });
                }
            });

        events
    }
}
