use eframe::egui::{ComboBox, Context, Grid, Slider, Window};
use strum::IntoEnumIterator;

use crate::domain::zone::coerce_price;
use crate::domain::{Side, Timeframe, Zone, ZoneDraft};
use crate::ui::config::UI_TEXT;
use crate::ui::styles::UiStyleExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(usize),
}

pub enum FormAction {
    Submit,
    Cancel,
}

/// Create/edit dialog state. Prices are held as text so a blank field stays
/// blank (and is reported missing) instead of silently becoming zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneForm {
    pub mode: FormMode,
    pub timeframe: Timeframe,
    pub side: Side,
    pub start_text: String,
    pub end_text: String,
    pub label: String,
    pub strength: f64,
    pub use_default_strength: bool,
    pub error: Option<String>,
}

impl ZoneForm {
    pub fn for_create(live_price: f64) -> Self {
        Self::from_draft(FormMode::Create, &ZoneDraft::around(live_price))
    }

    pub fn for_edit(index: usize, zone: &Zone) -> Self {
        Self::from_draft(FormMode::Edit(index), &ZoneDraft::from_zone(zone))
    }

    fn from_draft(mode: FormMode, draft: &ZoneDraft) -> Self {
        let text = |value: Option<f64>| value.map(|v| format!("{:.2}", v)).unwrap_or_default();
        Self {
            mode,
            timeframe: draft.timeframe,
            side: draft.side,
            start_text: text(draft.start),
            end_text: text(draft.end),
            label: draft.label.clone(),
            strength: draft
                .strength
                .unwrap_or_else(|| draft.timeframe.default_strength()),
            use_default_strength: draft.strength.is_none(),
            error: None,
        }
    }

    pub fn to_draft(&self) -> ZoneDraft {
        ZoneDraft {
            timeframe: self.timeframe,
            side: self.side,
            start: coerce_price(&self.start_text),
            end: coerce_price(&self.end_text),
            label: self.label.clone(),
            strength: (!self.use_default_strength).then_some(self.strength),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => UI_TEXT.form_create_title,
            FormMode::Edit(_) => UI_TEXT.form_edit_title,
        }
    }

    pub fn show(&mut self, ctx: &Context) -> Option<FormAction> {
        let mut action = None;

        Window::new(self.title())
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                Grid::new("zone_form_grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(UI_TEXT.form_timeframe);
                        ComboBox::from_id_salt("form_timeframe")
                            .selected_text(self.timeframe.label())
                            .show_ui(ui, |ui| {
                                for tf in Timeframe::iter() {
                                    ui.selectable_value(&mut self.timeframe, tf, tf.label());
                                }
                            });
                        ui.end_row();

                        ui.label(UI_TEXT.form_side);
                        ComboBox::from_id_salt("form_side")
                            .selected_text(self.side.label())
                            .show_ui(ui, |ui| {
                                for side in Side::iter() {
                                    ui.selectable_value(&mut self.side, side, side.label());
                                }
                            });
                        ui.end_row();

                        ui.label(UI_TEXT.form_start);
                        ui.text_edit_singleline(&mut self.start_text);
                        ui.end_row();

                        ui.label(UI_TEXT.form_end);
                        ui.text_edit_singleline(&mut self.end_text);
                        ui.end_row();

                        ui.label(UI_TEXT.form_label);
                        ui.text_edit_singleline(&mut self.label);
                        ui.end_row();

                        ui.label(UI_TEXT.form_strength);
                        ui.vertical(|ui| {
                            ui.checkbox(
                                &mut self.use_default_strength,
                                UI_TEXT.form_use_default_strength,
                            );
                            ui.add_enabled(
                                !self.use_default_strength,
                                Slider::new(&mut self.strength, 0.05..=1.0).step_by(0.05),
                            );
                        });
                        ui.end_row();
                    });

                if let Some(error) = &self.error {
                    ui.label_error(error);
                }

                ui.horizontal(|ui| {
                    if ui.button(UI_TEXT.button_save).clicked() {
                        action = Some(FormAction::Submit);
                    }
                    if ui.button(UI_TEXT.button_cancel).clicked() {
                        action = Some(FormAction::Cancel);
                    }
                });
            });

        action
    }
}
