//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` so
//! debug builds stay readable. All of them are further gated by
//! `cfg(debug_assertions)` at the call site.

pub struct DebugFlags {
    /// Emit UI interaction logs (zone edits, preset jumps, manual actions).
    pub print_ui_interactions: bool,
    /// Emit one line per simulated live tick.
    pub print_live_ticks: bool,
    /// Emit bulk import/dump outcomes.
    pub print_import_events: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_live_ticks: false,
    print_import_events: true,
    print_state_serde: false,
};
