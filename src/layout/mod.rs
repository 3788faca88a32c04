pub mod accessibility_controls;
pub mod main_layout;
pub mod navigation;
pub mod scroll_progress;

pub use accessibility_controls::AccessibilityControls;
pub use main_layout::MainLayout;
pub use navigation::Navigation;
pub use scroll_progress::ScrollProgress;
