pub mod dom;
pub mod focus;
pub mod hooks;

pub use focus::KeyboardNavigationOptions;
pub use hooks::{use_focus_trap, use_keyboard_navigation, use_list_navigation, KeyboardNavigation};
