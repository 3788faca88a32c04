use log::Level;

/// localStorage key holding the persisted accessibility preferences.
pub const PREFERENCES_STORAGE_KEY: &str = "acolhemente-accessibility-preferences";

/// How long a live-region announcement stays in the document.
pub const ANNOUNCEMENT_TTL_MS: u32 = 1_000;

/// Delay before auto-focusing the first element of a freshly mounted container.
pub const AUTO_FOCUS_DELAY_MS: u32 = 100;

/// Vertical scroll offset after which the navigation bar switches to its solid style.
pub const SCROLLED_THRESHOLD_PX: f64 = 10.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
