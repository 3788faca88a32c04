use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::accessibility::media::MediaQueryWatcher;
use crate::accessibility::preferences::{AccessibilityPreferences, FontSize, SystemPreference};
use crate::accessibility::store::{PreferenceAction, PreferenceListener, PreferenceStore};

/// What components see of the preference store.
#[derive(Clone, PartialEq)]
pub struct AccessibilityContext {
    pub preferences: AccessibilityPreferences,
    pub dispatch: Callback<PreferenceAction>,
    pub announce: Callback<String>,
}

impl AccessibilityContext {
    /// Context used when no provider is mounted: defaults, and every action is dropped.
    fn detached() -> Self {
        Self {
            preferences: AccessibilityPreferences::default(),
            dispatch: Callback::from(|_| ()),
            announce: Callback::from(|_| ()),
        }
    }

    pub fn toggle_reduced_motion(&self) {
        self.dispatch.emit(PreferenceAction::ToggleReducedMotion);
    }

    pub fn toggle_high_contrast(&self) {
        self.dispatch.emit(PreferenceAction::ToggleHighContrast);
    }

    pub fn set_font_size(&self, size: FontSize) {
        self.dispatch.emit(PreferenceAction::SetFontSize(size));
    }

    pub fn reset_preferences(&self) {
        self.dispatch.emit(PreferenceAction::Reset);
    }

    pub fn announce_to_screen_reader(&self, message: impl Into<String>) {
        self.announce.emit(message.into());
    }
}

#[derive(Properties, PartialEq)]
pub struct AccessibilityProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the [`PreferenceStore`] for the lifetime of the page.
///
/// On mount it subscribes to the store, initializes it and starts watching
/// the OS motion/contrast media queries. All of it is undone on unmount.
#[function_component(AccessibilityProvider)]
pub fn accessibility_provider(props: &AccessibilityProviderProps) -> Html {
    let store = use_mut_ref(PreferenceStore::browser);
    let preferences = use_state(AccessibilityPreferences::default);

    {
        let store = store.clone();
        let setter = preferences.setter();
        use_effect_with_deps(
            move |_| {
                let listener: PreferenceListener = Rc::new(move |prefs: &AccessibilityPreferences| setter.set(*prefs));
                let subscription = store.borrow_mut().subscribe(listener);
                store.borrow_mut().initialize();

                let watchers: Vec<MediaQueryWatcher> = SystemPreference::ALL
                    .into_iter()
                    .filter_map(|preference| {
                        let store = store.clone();
                        MediaQueryWatcher::watch(preference.media_query(), move |matches| {
                            store
                                .borrow_mut()
                                .dispatch(PreferenceAction::SystemChanged(preference, matches));
                        })
                    })
                    .collect();

                move || {
                    drop(watchers);
                    store.borrow_mut().unsubscribe(subscription);
                }
            },
            (),
        );
    }

    let dispatch = {
        let store = store.clone();
        Callback::from(move |action: PreferenceAction| store.borrow_mut().dispatch(action))
    };

    let announce = {
        let store = store.clone();
        Callback::from(move |message: String| store.borrow().announce(&message))
    };

    let context = AccessibilityContext {
        preferences: *preferences,
        dispatch,
        announce,
    };

    html! {
        <ContextProvider<AccessibilityContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<AccessibilityContext>>
    }
}

#[hook]
pub fn use_accessibility() -> AccessibilityContext {
    match use_context::<AccessibilityContext>() {
        Some(context) => context,
        None => {
            warn!("use_accessibility called outside AccessibilityProvider, preferences are inert");
            AccessibilityContext::detached()
        }
    }
}
