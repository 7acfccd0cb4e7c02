pub struct UiText {
    pub app_title: &'static str,

    // Side panel sections
    pub status_heading: &'static str,
    pub manual_control_heading: &'static str,
    pub presets_heading: &'static str,
    pub live_tracker_heading: &'static str,
    pub actions_heading: &'static str,
    pub import_export_heading: &'static str,
    pub poi_list_heading: &'static str,

    // Manual control
    pub label_live_price: &'static str,
    pub label_range_min: &'static str,
    pub label_range_max: &'static str,

    // Live tracker
    pub label_live_on: &'static str,
    pub label_live_paused: &'static str,
    pub label_interval: &'static str,
    pub label_volatility: &'static str,
    pub label_trend: &'static str,
    pub label_change: &'static str,
    pub label_session_high: &'static str,
    pub label_session_low: &'static str,
    pub label_recent_history: &'static str,
    pub label_next_tick: &'static str,
    pub button_start_live: &'static str,
    pub button_pause_live: &'static str,
    pub button_clear_history: &'static str,
    pub button_export_history: &'static str,
    pub plot_history_name: &'static str,

    // Actions
    pub button_new_poi: &'static str,
    pub button_quick_add: &'static str,
    pub button_reset: &'static str,

    // Import / export
    pub button_import: &'static str,
    pub button_load_current: &'static str,
    pub button_copy_json: &'static str,
    pub import_hint: &'static str,

    // POI list
    pub label_filter_timeframe: &'static str,
    pub label_filter_side: &'static str,
    pub label_search: &'static str,
    pub label_sort: &'static str,
    pub word_all: &'static str,
    pub button_select_all: &'static str,
    pub button_remove_selected: &'static str,
    pub button_edit: &'static str,
    pub button_remove: &'static str,
    pub button_jump: &'static str,
    pub label_no_matches: &'static str,

    // Form
    pub form_create_title: &'static str,
    pub form_edit_title: &'static str,
    pub form_timeframe: &'static str,
    pub form_side: &'static str,
    pub form_start: &'static str,
    pub form_end: &'static str,
    pub form_label: &'static str,
    pub form_strength: &'static str,
    pub form_use_default_strength: &'static str,
    pub button_save: &'static str,
    pub button_cancel: &'static str,

    // Chart
    pub chart_live_price: &'static str,
    pub chart_active_zones: &'static str,

    // Status bar
    pub label_zone_count: &'static str,
    pub label_last_error: &'static str,
    pub label_last_action: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "POI Mirror - Multi-Timeframe Zone Monitor",

    status_heading: "Status",
    manual_control_heading: "Manual Price",
    presets_heading: "Presets",
    live_tracker_heading: "Live Tracker",
    actions_heading: "Actions",
    import_export_heading: "Bulk Import / Export",
    poi_list_heading: "POI List",

    label_live_price: "Live price",
    label_range_min: "Range min",
    label_range_max: "Range max",

    label_live_on: "● LIVE",
    label_live_paused: "⏸ Paused",
    label_interval: "Update every",
    label_volatility: "Volatility",
    label_trend: "Trend",
    label_change: "Change",
    label_session_high: "Session High",
    label_session_low: "Session Low",
    label_recent_history: "Recent Price History",
    label_next_tick: "Next tick in",
    button_start_live: "▶ Start Live",
    button_pause_live: "⏸ Pause",
    button_clear_history: "Clear History",
    button_export_history: "Export History",
    plot_history_name: "Price",

    button_new_poi: "➕ New POI",
    button_quick_add: "⚡ Quick Add at Price",
    button_reset: "↺ Reset to Defaults",

    button_import: "Import (replace all)",
    button_load_current: "Load Current",
    button_copy_json: "Copy JSON",
    import_hint: "Paste a JSON array of POIs. Import replaces every zone.",

    label_filter_timeframe: "Timeframe",
    label_filter_side: "Side",
    label_search: "Search",
    label_sort: "Sort by",
    word_all: "All",
    button_select_all: "Select all visible",
    button_remove_selected: "Remove selected",
    button_edit: "✏",
    button_remove: "🗑",
    button_jump: "🎯",
    label_no_matches: "No POIs match the current filters.",

    form_create_title: "Create POI",
    form_edit_title: "Edit POI",
    form_timeframe: "Timeframe",
    form_side: "Side",
    form_start: "Start",
    form_end: "End",
    form_label: "Label",
    form_strength: "Strength",
    form_use_default_strength: "Use timeframe default",
    button_save: "Save",
    button_cancel: "Cancel",

    chart_live_price: "LIVE",
    chart_active_zones: "Active zones",

    label_zone_count: "POIs",
    label_last_error: "Error",
    label_last_action: "Last action",
};
