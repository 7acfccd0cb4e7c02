use eframe::{Frame, egui};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::engine::{PoiState, RandomWalk};
use crate::models::{ZoneQuery, ZoneSelection};
use crate::ui::ui_forms::{FormMode, ZoneForm};
use crate::ui::ui_plot_view::MirrorView;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::TimeUtils;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Startup choices resolved from the command line
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Contents of a `--zones` file, imported once the app is built
    pub zones_json: Option<String>,
    /// Ignore persisted state
    pub fresh: bool,
    /// Deterministic simulator
    pub seed: Option<u64>,
}

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct PoiMirrorApp {
    pub(super) state: PoiState,

    // Runtime-only UI state
    #[serde(skip)]
    pub(super) query: ZoneQuery,
    #[serde(skip)]
    pub(super) selection: ZoneSelection,
    #[serde(skip)]
    pub(super) json_buffer: String,
    #[serde(skip)]
    pub(super) form: Option<ZoneForm>,
    #[serde(skip)]
    pub(super) mirror_view: MirrorView,
    #[serde(skip)]
    pub(super) last_error: Option<String>,
    #[serde(skip)]
    pub(super) last_action: Option<String>,
}

impl Default for PoiMirrorApp {
    fn default() -> Self {
        Self::new_with_initial_state()
    }
}

impl PoiMirrorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, options: StartupOptions) -> Self {
        let mut app = match cc.storage {
            Some(storage) if !options.fresh => {
                match eframe::get_value::<PoiMirrorApp>(storage, eframe::APP_KEY) {
                    Some(value) => {
                        #[cfg(debug_assertions)]
                        if DEBUG_FLAGS.print_state_serde {
                            log::info!("Successfully loaded persisted state");
                        }
                        value
                    }
                    None => {
                        #[cfg(debug_assertions)]
                        if DEBUG_FLAGS.print_state_serde {
                            log::info!("No persisted POI Mirror state. Creating anew.");
                        }
                        Self::new_with_initial_state()
                    }
                }
            }
            _ => Self::new_with_initial_state(),
        };

        app.state
            .set_price_source(Box::new(RandomWalk::new(options.seed)));
        app.state.begin_session(TimeUtils::now_ms());

        if let Some(text) = options.zones_json {
            match app.state.import_json(&text) {
                Ok(count) => app.last_action = Some(format!("Imported {} POIs from file", count)),
                Err(e) => app.report_error(e),
            }
        }

        app
    }

    pub fn new_with_initial_state() -> Self {
        Self {
            state: PoiState::default(),
            query: ZoneQuery::default(),
            selection: ZoneSelection::default(),
            json_buffer: String::new(),
            form: None,
            mirror_view: MirrorView::new(),
            last_error: None,
            last_action: None,
        }
    }

    pub(super) fn report_error(&mut self, error: impl std::fmt::Display) {
        log::error!("{}", error);
        self.last_error = Some(error.to_string());
    }

    pub(super) fn report_action(&mut self, action: impl Into<String>) {
        let action = action.into();
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("{}", action);
        }
        self.last_error = None;
        self.last_action = Some(action);
    }

    /// Row indices held by the UI are stale once zones are removed or
    /// replaced. Drops the selection and any open edit dialog; a create
    /// dialog carries no index and stays open.
    pub(super) fn zones_restructured(&mut self) {
        self.selection.clear();
        if matches!(
            self.form.as_ref().map(|form| form.mode),
            Some(FormMode::Edit(_))
        ) {
            log::warn!("Closing POI edit dialog: zones changed underneath it");
            self.form = None;
        }
    }

    /// Advance live mode and book the next wake-up
    fn poll_live_feed(&mut self, ctx: &egui::Context) {
        let now = TimeUtils::now_ms();
        self.state.poll_live(now);
        if let Some(ms) = self.state.feed().ms_until_due(now) {
            ctx.request_repaint_after(Duration::from_millis(ms.max(0) as u64));
        }
    }
}

impl eframe::App for PoiMirrorApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.poll_live_feed(ctx);

        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
        self.render_form_window(ctx);
    }
}
