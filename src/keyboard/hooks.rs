use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};
use yew::prelude::*;

use crate::config;
use crate::keyboard::dom::DomFocusHost;
use crate::keyboard::focus::{FocusNavigator, KeyPress, KeyboardNavigationOptions, NavKey};
use crate::scheduler::{BrowserScheduler, Scheduler};

/// Handle returned by the keyboard navigation hooks. Attach `container_ref`
/// to the element whose descendants should be navigable.
///
/// The focus operations do nothing while the ref is not bound to an element.
#[derive(Clone, PartialEq)]
pub struct KeyboardNavigation {
    pub container_ref: NodeRef,
}

impl KeyboardNavigation {
    fn navigator(&self) -> Option<FocusNavigator<DomFocusHost>> {
        self.container_ref
            .cast::<Element>()
            .map(|container| FocusNavigator::new(DomFocusHost::new(container)))
    }

    pub fn focusable_elements(&self) -> Vec<HtmlElement> {
        self.navigator()
            .map(|navigator| navigator.focusable_elements())
            .unwrap_or_default()
    }

    pub fn focus_first(&self) {
        if let Some(navigator) = self.navigator() {
            navigator.focus_first();
        }
    }

    pub fn focus_last(&self) {
        if let Some(navigator) = self.navigator() {
            navigator.focus_last();
        }
    }

    pub fn focus_next(&self) {
        if let Some(navigator) = self.navigator() {
            navigator.focus_next();
        }
    }

    pub fn focus_previous(&self) {
        if let Some(navigator) = self.navigator() {
            navigator.focus_previous();
        }
    }
}

/// A listener that can be detached exactly once.
pub trait KeydownBinding {
    fn unbind(self);
}

struct ContainerKeydown {
    container: Element,
    listener: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeydownBinding for ContainerKeydown {
    fn unbind(self) {
        if let Err(e) = self
            .container
            .remove_event_listener_with_callback("keydown", self.listener.as_ref().unchecked_ref())
        {
            warn!("failed to detach keyboard navigation: {:?}", e);
        }
    }
}

/// What one run of the navigation effect leaves behind.
///
/// Teardown cancels the pending auto-focus before the listener is detached.
pub struct NavigationSession<S: Scheduler, B: KeydownBinding> {
    pending_focus: Option<S::Handle>,
    binding: Option<B>,
}

impl<S: Scheduler, B: KeydownBinding> NavigationSession<S, B> {
    pub fn start(scheduler: &S, binding: Option<B>, auto_focus: Option<impl FnOnce() + 'static>) -> Self {
        let pending_focus = auto_focus.map(|focus| scheduler.schedule(config::AUTO_FOCUS_DELAY_MS, focus));
        Self { pending_focus, binding }
    }

    pub fn teardown(self) {
        drop(self.pending_focus);
        if let Some(binding) = self.binding {
            binding.unbind();
        }
    }
}

fn bind_keydown(container: &Element, latest: Rc<RefCell<KeyboardNavigationOptions>>) -> ContainerKeydown {
    let target = container.clone();
    let listener = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let Some(key) = NavKey::from_key(&event.key()) else {
            return;
        };
        let press = KeyPress { key, shift: event.shift_key() };
        // Clone out so callbacks that re-render can update `latest`.
        let options = latest.borrow().clone();
        let navigator = FocusNavigator::new(DomFocusHost::new(target.clone()));
        if navigator.handle_key(&options, press).is_handled() {
            event.prevent_default();
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);

    if let Err(e) = container.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref()) {
        warn!("failed to attach keyboard navigation: {:?}", e);
    }
    ContainerKeydown { container: container.clone(), listener }
}

/// Registers a keydown listener on the container for as long as the calling
/// component is mounted. The listener always sees the options passed on the
/// latest render. With `auto_focus` the first focusable element receives
/// focus after a short delay; the pending focus is cancelled on unmount.
#[hook]
pub fn use_keyboard_navigation(options: KeyboardNavigationOptions) -> KeyboardNavigation {
    let container_ref = use_node_ref();
    let latest = use_mut_ref(KeyboardNavigationOptions::default);
    let auto_focus = options.auto_focus;
    *latest.borrow_mut() = options;

    {
        let container_ref = container_ref.clone();
        let latest = latest.clone();
        use_effect_with_deps(
            move |auto_focus: &bool| {
                let container = container_ref.cast::<Element>();
                let binding = container.as_ref().map(|container| bind_keydown(container, latest));
                let focus_first = container.filter(|_| *auto_focus).map(|container| {
                    move || FocusNavigator::new(DomFocusHost::new(container)).focus_first()
                });

                let session = NavigationSession::start(&BrowserScheduler, binding, focus_first);
                move || session.teardown()
            },
            auto_focus,
        );
    }

    KeyboardNavigation { container_ref }
}

/// Confines Tab to the container while `active`, focusing its first element
/// when it becomes active.
#[hook]
pub fn use_focus_trap(active: bool, on_escape: Option<Callback<()>>) -> KeyboardNavigation {
    let mut options = KeyboardNavigationOptions::focus_trap(active);
    options.on_escape = on_escape;
    use_keyboard_navigation(options)
}

/// Arrow keys move between items, Enter reports the focused item's index.
#[hook]
pub fn use_list_navigation(on_select: Option<Callback<usize>>, on_escape: Option<Callback<()>>) -> KeyboardNavigation {
    use_keyboard_navigation(KeyboardNavigationOptions::list_navigation(on_select, on_escape))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::scheduler::testing::ManualScheduler;

    /// Records how many auto-focus callbacks were still queued when unbound.
    struct FakeBinding {
        scheduler: ManualScheduler,
        pending_at_unbind: Rc<Cell<Option<usize>>>,
    }

    impl KeydownBinding for FakeBinding {
        fn unbind(self) {
            self.pending_at_unbind.set(Some(self.scheduler.pending()));
        }
    }

    fn start(
        scheduler: &ManualScheduler,
        auto_focus: bool,
    ) -> (NavigationSession<ManualScheduler, FakeBinding>, Rc<RefCell<Vec<&'static str>>>, Rc<Cell<Option<usize>>>) {
        let focused = Rc::new(RefCell::new(Vec::new()));
        let pending_at_unbind = Rc::new(Cell::new(None));
        let binding = FakeBinding { scheduler: scheduler.clone(), pending_at_unbind: pending_at_unbind.clone() };
        let focus = {
            let focused = focused.clone();
            move || focused.borrow_mut().push("first")
        };
        let session = NavigationSession::start(scheduler, Some(binding), auto_focus.then_some(focus));
        (session, focused, pending_at_unbind)
    }

    #[test]
    fn auto_focus_runs_after_the_delay() {
        let scheduler = ManualScheduler::default();
        let (_session, focused, _) = start(&scheduler, true);

        assert_eq!(scheduler.delays(), vec![config::AUTO_FOCUS_DELAY_MS]);
        assert!(focused.borrow().is_empty());

        scheduler.fire_all();
        assert_eq!(*focused.borrow(), vec!["first"]);
    }

    #[test]
    fn teardown_before_delay_cancels_focus() {
        let scheduler = ManualScheduler::default();
        let (session, focused, _) = start(&scheduler, true);

        session.teardown();
        scheduler.fire_all();

        assert!(focused.borrow().is_empty());
        assert_eq!(scheduler.cancelled(), 1);
    }

    #[test]
    fn teardown_cancels_timer_before_removing_listener() {
        let scheduler = ManualScheduler::default();
        let (session, _, pending_at_unbind) = start(&scheduler, true);

        session.teardown();
        assert_eq!(pending_at_unbind.get(), Some(0));
    }

    #[test]
    fn without_auto_focus_nothing_is_scheduled() {
        let scheduler = ManualScheduler::default();
        let (session, _, pending_at_unbind) = start(&scheduler, false);

        assert_eq!(scheduler.pending(), 0);
        session.teardown();
        assert_eq!(pending_at_unbind.get(), Some(0));
    }

    #[test]
    fn unbound_handle_is_inert() {
        let navigation = KeyboardNavigation { container_ref: NodeRef::default() };

        assert!(navigation.focusable_elements().is_empty());
        navigation.focus_first();
        navigation.focus_last();
        navigation.focus_next();
        navigation.focus_previous();
    }
}
