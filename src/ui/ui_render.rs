use eframe::egui::{CentralPanel, Context, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel};

use crate::data::default_history_path;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_forms::{FormAction, FormMode, ZoneForm};
use crate::ui::ui_panels::{
    ActionEvent, ActionsPanel, ImportEvent, ImportExportPanel, LiveEvent, LiveTrackerPanel,
    ListEvent, ManualControlPanel, Panel, PoiListPanel, PriceEvent, StatusPanel,
};
use crate::ui::ui_plot_view::ChartEvent;
use crate::ui::utils::{spaced_separator, status_color};
use crate::utils::TimeUtils;

use super::app::PoiMirrorApp;

impl PoiMirrorApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        SidePanel::left("left_panel")
            .min_width(UI_CONFIG.side_panel_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical().id_salt("side_panel").show(ui, |ui| {
                    StatusPanel::new(&self.state).render(ui);
                    spaced_separator(ui);

                    let price_events = ManualControlPanel::new(&self.state).render(ui);
                    spaced_separator(ui);

                    let now = TimeUtils::now_ms();
                    let live_events = LiveTrackerPanel::new(&self.state, now).render(ui);
                    spaced_separator(ui);

                    let action_events = ActionsPanel.render(ui);
                    spaced_separator(ui);

                    let import_events = ImportExportPanel::new(&mut self.json_buffer).render(ui);
                    spaced_separator(ui);

                    let list_events =
                        PoiListPanel::new(&self.state, &mut self.query, &mut self.selection)
                            .render(ui);

                    self.handle_price_events(price_events);
                    self.handle_live_events(live_events, now);
                    self.handle_action_events(action_events);
                    self.handle_import_events(import_events, ctx);
                    self.handle_list_events(list_events);
                });
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.label_header(UI_TEXT.app_title);
                let events = self.mirror_view.show(ui, &self.state);
                for event in events {
                    match event {
                        ChartEvent::JumpToZone(index) => match self.state.jump_to_zone(index) {
                            Ok(()) => self.report_action(format!("Jumped to POI #{}", index)),
                            Err(e) => self.report_error(e),
                        },
                    }
                }
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let frame = Frame::new().fill(UI_CONFIG.colors.status_bar);
        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let status = self.state.price_status();
                    ui.label(
                        RichText::new(format!("{} {}", status.icon(), status))
                            .small()
                            .color(status_color(status)),
                    );
                    ui.separator();
                    ui.metric(
                        UI_TEXT.label_zone_count,
                        &self.state.zones().len().to_string(),
                        UI_CONFIG.colors.label,
                    );
                    ui.separator();
                    let active = self.state.status().active_count();
                    ui.metric(
                        UI_TEXT.chart_active_zones,
                        &active.to_string(),
                        UI_CONFIG.colors.label,
                    );

                    if let Some(error) = &self.last_error {
                        ui.separator();
                        ui.label_error(format!("{}: {}", UI_TEXT.label_last_error, error));
                    } else if let Some(action) = &self.last_action {
                        ui.separator();
                        ui.label_subdued(format!("{}: {}", UI_TEXT.label_last_action, action));
                    }
                });
            });
    }

    pub(super) fn render_form_window(&mut self, ctx: &Context) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        match form.show(ctx) {
            Some(FormAction::Submit) => self.submit_form(),
            Some(FormAction::Cancel) => self.form = None,
            None => {}
        }
    }

    fn submit_form(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let draft = form.to_draft();
        let mode = form.mode;

        let result = match mode {
            FormMode::Create => self
                .state
                .create_zone(&draft)
                .map(|index| format!("Created POI #{}", index)),
            FormMode::Edit(index) => self
                .state
                .edit_zone(index, &draft)
                .map(|old| format!("Edited POI '{}'", old.label)),
        };

        match result {
            Ok(message) => {
                self.form = None;
                self.selection.clear();
                self.report_action(message);
            }
            Err(e) => {
                // Keep the dialog open with the message
                if let Some(form) = self.form.as_mut() {
                    form.error = Some(e.to_string());
                }
                log::warn!("POI form rejected: {}", e);
            }
        }
    }

    fn handle_price_events(&mut self, events: Vec<PriceEvent>) {
        for event in events {
            match event {
                PriceEvent::SetPrice(price) => self.state.set_live_price(price),
                PriceEvent::SetRange(min, max) => self.state.set_price_range(min, max),
                PriceEvent::Preset(index) => {
                    if let Err(e) = self.state.jump_to_preset(index) {
                        self.report_error(e);
                    }
                }
            }
        }
    }

    fn handle_live_events(&mut self, events: Vec<LiveEvent>, now_ms: i64) {
        for event in events {
            match event {
                LiveEvent::Toggle(enabled) => self.state.set_live_mode(enabled, now_ms),
                LiveEvent::Interval(interval) => self.state.set_update_interval(interval, now_ms),
                LiveEvent::Volatility(volatility) => self.state.set_volatility(volatility),
                LiveEvent::Trend(trend) => self.state.set_trend(trend),
                LiveEvent::ClearHistory => {
                    self.state.clear_history(now_ms);
                    self.report_action("History cleared");
                }
                LiveEvent::ExportHistory => {
                    let path = default_history_path();
                    match self.state.export_history(&path) {
                        Ok(()) => self.report_action(format!("History saved to {}", path.display())),
                        Err(e) => self.report_error(e),
                    }
                }
            }
        }
    }

    fn handle_action_events(&mut self, events: Vec<ActionEvent>) {
        for event in events {
            match event {
                ActionEvent::NewPoi => {
                    self.form = Some(ZoneForm::for_create(self.state.live_price()));
                }
                ActionEvent::QuickAdd => {
                    let index = self.state.quick_add();
                    self.report_action(format!("Quick-added POI #{}", index));
                }
                ActionEvent::Reset => {
                    self.state.reset();
                    self.zones_restructured();
                    self.form = None;
                    self.report_action("Reset to defaults");
                }
            }
        }
    }

    fn handle_import_events(&mut self, events: Vec<ImportEvent>, ctx: &Context) {
        for event in events {
            match event {
                ImportEvent::Import => match self.state.import_json(&self.json_buffer) {
                    Ok(count) => {
                        self.zones_restructured();
                        self.report_action(format!("Imported {} POIs", count));
                    }
                    Err(e) => self.report_error(e),
                },
                ImportEvent::LoadCurrent => match self.state.dump_json() {
                    Ok(text) => self.json_buffer = text,
                    Err(e) => self.report_error(e),
                },
                ImportEvent::CopyJson => match self.state.dump_json() {
                    Ok(text) => {
                        ctx.copy_text(text);
                        self.report_action("POI JSON copied to clipboard");
                    }
                    Err(e) => self.report_error(e),
                },
            }
        }
    }

    fn handle_list_events(&mut self, events: Vec<ListEvent>) {
        for event in events {
            match event {
                ListEvent::Edit(index) => {
                    if let Some(zone) = self.state.repository().get(index) {
                        self.form = Some(ZoneForm::for_edit(index, zone));
                    }
                }
                ListEvent::Remove(index) => match self.state.remove_zone(index) {
                    Ok(zone) => {
                        self.zones_restructured();
                        self.report_action(format!("Removed '{}'", zone.label));
                    }
                    Err(e) => self.report_error(e),
                },
                ListEvent::Jump(index) => {
                    if let Err(e) = self.state.jump_to_zone(index) {
                        self.report_error(e);
                    }
                }
                ListEvent::RemoveSelected => {
                    let indices = self.selection.take_for_removal();
                    match self.state.remove_zones(&indices) {
                        Ok(removed) => {
                            self.zones_restructured();
                            self.report_action(format!("Removed {} POIs", removed.len()));
                        }
                        Err(e) => self.report_error(e),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_editing(index: usize) -> PoiMirrorApp {
        let mut app = PoiMirrorApp::new_with_initial_state();
        let zone = app.state.zones()[index].clone();
        app.form = Some(ZoneForm::for_edit(index, &zone));
        app
    }

    #[test]
    fn test_remove_closes_stale_edit_dialog() {
        let mut app = app_editing(3);
        let before = app.state.zones().to_vec();

        app.handle_list_events(vec![ListEvent::Remove(0)]);
        assert!(app.form.is_none());

        // Nothing left to submit against the shifted row
        app.submit_form();
        assert_eq!(app.state.zones(), &before[1..]);
    }

    #[test]
    fn test_bulk_remove_and_import_close_edit_dialog() {
        let mut app = app_editing(2);
        app.selection.toggle(0);
        app.handle_list_events(vec![ListEvent::RemoveSelected]);
        assert!(app.form.is_none());
        assert!(app.selection.is_empty());

        let mut app = app_editing(1);
        app.json_buffer =
            r#"[{"timeframe":"daily","side":"buy","start":1,"end":2,"label":"x"}]"#.to_string();
        let ctx = Context::default();
        app.handle_import_events(vec![ImportEvent::Import], &ctx);
        assert!(app.form.is_none());
        assert_eq!(app.state.zones().len(), 1);
    }

    #[test]
    fn test_create_dialog_survives_removal() {
        let mut app = PoiMirrorApp::new_with_initial_state();
        app.form = Some(ZoneForm::for_create(app.state.live_price()));
        app.handle_list_events(vec![ListEvent::Remove(0)]);
        assert!(app.form.is_some());
    }

    #[test]
    fn test_quick_add_keeps_edit_index_valid() {
        let mut app = app_editing(3);
        let target = app.state.zones()[3].clone();
        app.handle_action_events(vec![ActionEvent::QuickAdd]);

        let form = app.form.as_mut().unwrap();
        form.label = "4H Buy edited".to_string();
        app.submit_form();

        assert!(app.form.is_none());
        assert_eq!(app.state.zones()[3].label, "4H Buy edited");
        assert_eq!(app.state.zones()[3].start, target.start);
        assert_eq!(app.state.zones().iter().filter(|z| z.label == target.label).count(), 0);
    }
}
