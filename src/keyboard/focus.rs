//! Focus movement inside a container, independent of the DOM.
//!
//! [`FocusHost`] is the only thing that knows about real elements. The
//! navigator computes the focusable set, circular next/previous movement, the
//! Tab wrap used by focus traps, and the key policy shared by every keyboard
//! navigation hook.

use log::debug;
use yew::Callback;

/// Access to one container's elements and the document focus.
pub trait FocusHost {
    type Element: Clone + PartialEq;

    /// Interactive descendants of the container, in document order.
    fn candidates(&self) -> Vec<Self::Element>;
    fn is_visible(&self, element: &Self::Element) -> bool;
    fn active_element(&self) -> Option<Self::Element>;
    fn focus(&self, element: &Self::Element);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    Enter,
    Tab,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

impl NavKey {
    /// Maps a `KeyboardEvent.key` value; keys the navigator does not care about yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            "Escape" => NavKey::Escape,
            "Enter" => NavKey::Enter,
            "Tab" => NavKey::Tab,
            "ArrowUp" => NavKey::ArrowUp,
            "ArrowDown" => NavKey::ArrowDown,
            "ArrowLeft" => NavKey::ArrowLeft,
            "ArrowRight" => NavKey::ArrowRight,
            "Home" => NavKey::Home,
            "End" => NavKey::End,
            _ => return None,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: NavKey,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: NavKey) -> Self {
        Self { key, shift: false }
    }

    pub fn shifted(key: NavKey) -> Self {
        Self { key, shift: true }
    }
}

/// Whether the browser default for a key should be suppressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
}

impl KeyOutcome {
    pub fn is_handled(self) -> bool {
        self == KeyOutcome::Handled
    }
}

#[derive(Clone, Default, PartialEq)]
pub struct KeyboardNavigationOptions {
    pub enable_arrow_keys: bool,
    pub enable_escape: bool,
    pub enable_activation: bool,
    pub trap_focus: bool,
    pub auto_focus: bool,
    pub on_escape: Option<Callback<()>>,
    pub on_enter: Option<Callback<()>>,
    /// Receives the index of the focused element when Enter is pressed.
    pub on_select: Option<Callback<usize>>,
    pub on_arrow_up: Option<Callback<()>>,
    pub on_arrow_down: Option<Callback<()>>,
    pub on_arrow_left: Option<Callback<()>>,
    pub on_arrow_right: Option<Callback<()>>,
}

impl KeyboardNavigationOptions {
    /// Modal-like confinement: Tab wraps, first element is focused on mount,
    /// Escape is forwarded.
    pub fn focus_trap(active: bool) -> Self {
        Self {
            trap_focus: active,
            auto_focus: active,
            enable_escape: true,
            ..Self::default()
        }
    }

    /// Menu-like navigation: arrows move, Enter selects, Escape is forwarded.
    pub fn list_navigation(on_select: Option<Callback<usize>>, on_escape: Option<Callback<()>>) -> Self {
        Self {
            enable_arrow_keys: true,
            enable_escape: true,
            enable_activation: true,
            on_select,
            on_escape,
            ..Self::default()
        }
    }

    pub fn with_escape(mut self, on_escape: Callback<()>) -> Self {
        self.enable_escape = true;
        self.on_escape = Some(on_escape);
        self
    }
}

pub struct FocusNavigator<H> {
    host: H,
}

impl<H: FocusHost> FocusNavigator<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Visible focusable elements in document order. Recomputed on every call.
    pub fn focusable_elements(&self) -> Vec<H::Element> {
        self.host
            .candidates()
            .into_iter()
            .filter(|element| self.host.is_visible(element))
            .collect()
    }

    pub fn active_index(&self) -> Option<usize> {
        let active = self.host.active_element()?;
        self.focusable_elements().iter().position(|element| *element == active)
    }

    pub fn focus_first(&self) {
        if let Some(first) = self.focusable_elements().first() {
            self.host.focus(first);
        }
    }

    pub fn focus_last(&self) {
        if let Some(last) = self.focusable_elements().last() {
            self.host.focus(last);
        }
    }

    pub fn focus_next(&self) {
        let elements = self.focusable_elements();
        match self.position_in(&elements) {
            Some(index) => self.focus_index(&elements, (index + 1) % elements.len()),
            None => self.focus_first(),
        }
    }

    pub fn focus_previous(&self) {
        let elements = self.focusable_elements();
        match self.position_in(&elements) {
            Some(index) => self.focus_index(&elements, (index + elements.len() - 1) % elements.len()),
            None => self.focus_last(),
        }
    }

    pub fn handle_key(&self, options: &KeyboardNavigationOptions, press: KeyPress) -> KeyOutcome {
        match press.key {
            NavKey::Escape => emit_if(options.enable_escape, &options.on_escape),
            NavKey::Enter => self.handle_activation(options),
            NavKey::Tab if options.trap_focus => self.wrap_tab(press.shift),
            NavKey::Tab => KeyOutcome::Ignored,
            NavKey::ArrowUp if options.enable_arrow_keys => {
                match &options.on_arrow_up {
                    Some(callback) => callback.emit(()),
                    None => self.focus_previous(),
                }
                KeyOutcome::Handled
            }
            NavKey::ArrowDown if options.enable_arrow_keys => {
                match &options.on_arrow_down {
                    Some(callback) => callback.emit(()),
                    None => self.focus_next(),
                }
                KeyOutcome::Handled
            }
            NavKey::ArrowLeft => emit_if(options.enable_arrow_keys, &options.on_arrow_left),
            NavKey::ArrowRight => emit_if(options.enable_arrow_keys, &options.on_arrow_right),
            NavKey::Home if options.enable_arrow_keys => {
                self.focus_first();
                KeyOutcome::Handled
            }
            NavKey::End if options.enable_arrow_keys => {
                self.focus_last();
                KeyOutcome::Handled
            }
            NavKey::ArrowUp | NavKey::ArrowDown | NavKey::Home | NavKey::End => KeyOutcome::Ignored,
        }
    }

    fn handle_activation(&self, options: &KeyboardNavigationOptions) -> KeyOutcome {
        if !options.enable_activation || (options.on_enter.is_none() && options.on_select.is_none()) {
            return KeyOutcome::Ignored;
        }
        if let Some(on_enter) = &options.on_enter {
            on_enter.emit(());
        }
        if let Some(on_select) = &options.on_select {
            if let Some(index) = self.active_index() {
                debug!("list selection at index {}", index);
                on_select.emit(index);
            }
        }
        KeyOutcome::Handled
    }

    /// Tab only wraps at the ends of the set; everywhere else the browser moves focus.
    fn wrap_tab(&self, backwards: bool) -> KeyOutcome {
        let elements = self.focusable_elements();
        let (Some(first), Some(last)) = (elements.first(), elements.last()) else {
            return KeyOutcome::Ignored;
        };
        let active = self.host.active_element();

        if backwards && active.as_ref() == Some(first) {
            self.host.focus(last);
            KeyOutcome::Handled
        } else if !backwards && active.as_ref() == Some(last) {
            self.host.focus(first);
            KeyOutcome::Handled
        } else {
            KeyOutcome::Ignored
        }
    }

    fn position_in(&self, elements: &[H::Element]) -> Option<usize> {
        let active = self.host.active_element()?;
        elements.iter().position(|element| *element == active)
    }

    fn focus_index(&self, elements: &[H::Element], index: usize) {
        debug!("moving focus to index {} of {}", index, elements.len());
        self.host.focus(&elements[index]);
    }
}

fn emit_if(enabled: bool, callback: &Option<Callback<()>>) -> KeyOutcome {
    match callback {
        Some(callback) if enabled => {
            callback.emit(());
            KeyOutcome::Handled
        }
        _ => KeyOutcome::Ignored,
    }
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::testing::FakeHost;
    use super::*;

    fn active(nav: &FocusNavigator<FakeHost>) -> Option<&'static str> {
        nav.host.active.get()
    }

    fn counter() -> (Rc<Cell<u32>>, Callback<()>) {
        let count = Rc::new(Cell::new(0));
        let callback = {
            let count = count.clone();
            Callback::from(move |_| count.set(count.get() + 1))
        };
        (count, callback)
    }

    #[test]
    fn previous_then_next_twice() {
        let nav = FocusNavigator::new(FakeHost::new(&["A", "B", "C"]).focused_on("B"));

        nav.focus_previous();
        assert_eq!(active(&nav), Some("A"));
        nav.focus_next();
        nav.focus_next();
        assert_eq!(active(&nav), Some("C"));
    }

    #[test]
    fn next_wraps_around_after_n_steps() {
        let elements = ["A", "B", "C", "D", "E"];
        for start in 0..elements.len() {
            let nav = FocusNavigator::new(FakeHost::new(&elements).focused_on(elements[start]));
            nav.focus_next();
            assert_eq!(active(&nav), Some(elements[(start + 1) % elements.len()]));
            for _ in 1..elements.len() {
                nav.focus_next();
            }
            assert_eq!(active(&nav), Some(elements[start]));
        }
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let nav = FocusNavigator::new(FakeHost::new(&["A", "B", "C"]).focused_on("A"));
        nav.focus_previous();
        assert_eq!(active(&nav), Some("C"));
    }

    #[test]
    fn focus_outside_the_set_falls_back_to_the_ends() {
        let nav = FocusNavigator::new(FakeHost::new(&["A", "B", "C"]).focused_on("elsewhere"));
        nav.focus_next();
        assert_eq!(active(&nav), Some("A"));

        let nav = FocusNavigator::new(FakeHost::new(&["A", "B", "C"]));
        nav.focus_previous();
        assert_eq!(active(&nav), Some("C"));
    }

    #[test]
    fn hidden_elements_are_skipped() {
        let nav = FocusNavigator::new(FakeHost::new(&["A", "B", "C"]).hide("B").focused_on("A"));
        assert_eq!(nav.focusable_elements(), vec!["A", "C"]);
        nav.focus_next();
        assert_eq!(active(&nav), Some("C"));
    }

    #[test]
    fn empty_container_is_a_no_op() {
        let nav = FocusNavigator::new(FakeHost::new(&[]));
        nav.focus_first();
        nav.focus_last();
        nav.focus_next();
        nav.focus_previous();
        assert!(nav.host.focus_calls.borrow().is_empty());

        let options = KeyboardNavigationOptions {
            enable_arrow_keys: true,
            trap_focus: true,
            ..Default::default()
        };
        for key in [NavKey::Tab, NavKey::ArrowDown, NavKey::ArrowUp, NavKey::Home, NavKey::End] {
            nav.handle_key(&options, KeyPress::new(key));
        }
        assert_eq!(nav.handle_key(&options, KeyPress::new(NavKey::Tab)), KeyOutcome::Ignored);
        assert!(nav.host.focus_calls.borrow().is_empty());
    }

    #[test]
    fn trap_wraps_tab_at_both_ends_only() {
        let options = KeyboardNavigationOptions::focus_trap(true);

        let nav = FocusNavigator::new(FakeHost::new(&["A", "B", "C"]).focused_on("C"));
        assert_eq!(nav.handle_key(&options, KeyPress::new(NavKey::Tab)), KeyOutcome::Handled);
        assert_eq!(active(&nav), Some("A"));

        assert_eq!(nav.handle_key(&options, KeyPress::shifted(NavKey::Tab)), KeyOutcome::Handled);
        assert_eq!(active(&nav), Some("C"));

        let nav = FocusNavigator::new(FakeHost::new(&["A", "B", "C"]).focused_on("B"));
        assert_eq!(nav.handle_key(&options, KeyPress::new(NavKey::Tab)), KeyOutcome::Ignored);
        assert_eq!(nav.handle_key(&options, KeyPress::shifted(NavKey::Tab)), KeyOutcome::Ignored);
        assert_eq!(active(&nav), Some("B"));
    }

    #[test]
    fn tab_passes_through_without_trap() {
        let nav = FocusNavigator::new(FakeHost::new(&["A", "B"]).focused_on("B"));
        let outcome = nav.handle_key(&KeyboardNavigationOptions::default(), KeyPress::new(NavKey::Tab));
        assert_eq!(outcome, KeyOutcome::Ignored);
        assert_eq!(active(&nav), Some("B"));
    }

    #[test]
    fn arrows_move_focus_or_defer_to_overrides() {
        let nav = FocusNavigator::new(FakeHost::new(&["A", "B", "C"]).focused_on("A"));
        let mut options = KeyboardNavigationOptions { enable_arrow_keys: true, ..Default::default() };

        assert!(nav.handle_key(&options, KeyPress::new(NavKey::ArrowDown)).is_handled());
        assert_eq!(active(&nav), Some("B"));
        assert!(nav.handle_key(&options, KeyPress::new(NavKey::End)).is_handled());
        assert_eq!(active(&nav), Some("C"));
        assert!(nav.handle_key(&options, KeyPress::new(NavKey::Home)).is_handled());
        assert_eq!(active(&nav), Some("A"));

        // Left/right have no default movement.
        assert_eq!(nav.handle_key(&options, KeyPress::new(NavKey::ArrowRight)), KeyOutcome::Ignored);

        let (ups, on_up) = counter();
        let (rights, on_right) = counter();
        options.on_arrow_up = Some(on_up);
        options.on_arrow_right = Some(on_right);
        assert!(nav.handle_key(&options, KeyPress::new(NavKey::ArrowUp)).is_handled());
        assert!(nav.handle_key(&options, KeyPress::new(NavKey::ArrowRight)).is_handled());
        assert_eq!((ups.get(), rights.get()), (1, 1));
        assert_eq!(active(&nav), Some("A"), "override replaces default movement");
    }

    #[test]
    fn disabled_arrows_are_ignored() {
        let nav = FocusNavigator::new(FakeHost::new(&["A", "B"]).focused_on("A"));
        let options = KeyboardNavigationOptions::default();
        for key in [NavKey::ArrowUp, NavKey::ArrowDown, NavKey::Home, NavKey::End] {
            assert_eq!(nav.handle_key(&options, KeyPress::new(key)), KeyOutcome::Ignored);
        }
        assert_eq!(active(&nav), Some("A"));
    }

    #[test]
    fn escape_and_enter_need_both_flag_and_callback() {
        let nav = FocusNavigator::new(FakeHost::new(&["A"]));
        let (escapes, on_escape) = counter();
        let (enters, on_enter) = counter();

        let disabled = KeyboardNavigationOptions {
            on_escape: Some(on_escape.clone()),
            on_enter: Some(on_enter.clone()),
            ..Default::default()
        };
        assert_eq!(nav.handle_key(&disabled, KeyPress::new(NavKey::Escape)), KeyOutcome::Ignored);
        assert_eq!(nav.handle_key(&disabled, KeyPress::new(NavKey::Enter)), KeyOutcome::Ignored);

        let enabled = KeyboardNavigationOptions {
            enable_escape: true,
            enable_activation: true,
            ..disabled
        };
        assert!(nav.handle_key(&enabled, KeyPress::new(NavKey::Escape)).is_handled());
        assert!(nav.handle_key(&enabled, KeyPress::new(NavKey::Enter)).is_handled());
        assert_eq!((escapes.get(), enters.get()), (1, 1));

        let no_callbacks = KeyboardNavigationOptions {
            enable_escape: true,
            enable_activation: true,
            ..Default::default()
        };
        assert_eq!(nav.handle_key(&no_callbacks, KeyPress::new(NavKey::Escape)), KeyOutcome::Ignored);
    }

    #[test]
    fn list_navigation_selects_focused_index() {
        let selected = Rc::new(Cell::new(None));
        let on_select = {
            let selected = selected.clone();
            Callback::from(move |index: usize| selected.set(Some(index)))
        };
        let options = KeyboardNavigationOptions::list_navigation(Some(on_select), None);

        let nav = FocusNavigator::new(FakeHost::new(&["A", "B", "C"]).hide("A").focused_on("C"));
        assert!(nav.handle_key(&options, KeyPress::new(NavKey::Enter)).is_handled());
        assert_eq!(selected.get(), Some(1));

        selected.set(None);
        let nav = FocusNavigator::new(FakeHost::new(&["A", "B"]));
        assert!(nav.handle_key(&options, KeyPress::new(NavKey::Enter)).is_handled());
        assert_eq!(selected.get(), None, "nothing focused, nothing selected");
    }

    #[test]
    fn focus_trap_preset() {
        let active_trap = KeyboardNavigationOptions::focus_trap(true);
        assert!(active_trap.trap_focus && active_trap.auto_focus && active_trap.enable_escape);
        let idle = KeyboardNavigationOptions::focus_trap(false);
        assert!(!idle.trap_focus && !idle.auto_focus && idle.enable_escape);
    }

    #[test]
    fn key_names() {
        assert_eq!(NavKey::from_key("ArrowDown"), Some(NavKey::ArrowDown));
        assert_eq!(NavKey::from_key("Tab"), Some(NavKey::Tab));
        assert_eq!(NavKey::from_key("a"), None);
        assert_eq!(NavKey::from_key(" "), None);
    }
}
