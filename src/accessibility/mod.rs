pub mod announcer;
pub mod context;
pub mod media;
pub mod platform;
pub mod preferences;
pub mod store;

pub use context::{use_accessibility, AccessibilityContext, AccessibilityProvider};
pub use preferences::{AccessibilityPreferences, FontSize};
