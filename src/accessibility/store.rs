use std::rc::Rc;

use log::{debug, info, warn};

use crate::accessibility::announcer::LiveRegionAnnouncer;
use crate::accessibility::platform::{
    Announcer, BrowserProbe, DocumentRoot, LocalPreferenceStorage, ModeClassTarget, PreferenceStorage, SystemProbe,
};
use crate::accessibility::preferences::{AccessibilityPreferences, FontSize, SavedPreferences, SystemPreference};
use crate::config;
use crate::error::PreferenceError;

pub type PreferenceListener = Rc<dyn Fn(&AccessibilityPreferences)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// Everything the UI can ask the store to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferenceAction {
    ToggleReducedMotion,
    ToggleHighContrast,
    SetFontSize(FontSize),
    Reset,
    SystemChanged(SystemPreference, bool),
}

/// Owner of the page's accessibility preferences.
///
/// Every mutation applies the mode classes and persists the snapshot before
/// returning, then notifies subscribers.
pub struct PreferenceStore {
    preferences: AccessibilityPreferences,
    storage: Box<dyn PreferenceStorage>,
    root: Box<dyn ModeClassTarget>,
    probe: Box<dyn SystemProbe>,
    announcer: Box<dyn Announcer>,
    listeners: Vec<(SubscriptionId, PreferenceListener)>,
    next_subscription: usize,
}

impl PreferenceStore {
    pub fn new(
        storage: Box<dyn PreferenceStorage>,
        root: Box<dyn ModeClassTarget>,
        probe: Box<dyn SystemProbe>,
        announcer: Box<dyn Announcer>,
    ) -> Self {
        Self {
            preferences: AccessibilityPreferences::default(),
            storage,
            root,
            probe,
            announcer,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Store wired to localStorage, `<html>` and the live-region announcer.
    pub fn browser() -> Self {
        Self::new(
            Box::new(LocalPreferenceStorage::new(config::PREFERENCES_STORAGE_KEY)),
            Box::new(DocumentRoot),
            Box::new(BrowserProbe),
            Box::new(LiveRegionAnnouncer::new()),
        )
    }

    pub fn preferences(&self) -> AccessibilityPreferences {
        self.preferences
    }

    pub fn initialize(&mut self) {
        let saved = match self.load_saved() {
            Ok(saved) => saved,
            Err(e) => {
                warn!("Failed to initialize accessibility preferences: {}", e);
                None
            }
        };
        let system = self.probe.signals();

        self.preferences = AccessibilityPreferences::resolve(saved, system);
        info!("accessibility preferences initialized: {:?}", self.preferences);
        self.apply();
        self.notify();
    }

    pub fn toggle_reduced_motion(&mut self) {
        self.preferences.reduced_motion = !self.preferences.reduced_motion;
        self.commit();
    }

    pub fn toggle_high_contrast(&mut self) {
        self.preferences.high_contrast = !self.preferences.high_contrast;
        self.commit();
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        self.preferences.font_size = size;
        self.commit();
    }

    /// Untyped entry point; anything but `small`, `medium` or `large` is
    /// rejected and leaves the preferences untouched.
    pub fn set_font_size_named(&mut self, name: &str) -> Result<(), PreferenceError> {
        let size = name.parse::<FontSize>()?;
        self.set_font_size(size);
        Ok(())
    }

    pub fn reset_preferences(&mut self) {
        self.preferences = AccessibilityPreferences {
            screen_reader_detected: self.preferences.screen_reader_detected,
            ..AccessibilityPreferences::default()
        };
        self.apply();
        if let Err(e) = self.storage.clear() {
            warn!("Failed to reset accessibility preferences: {}", e);
        }
        debug!("accessibility preferences reset");
        self.notify();
    }

    /// OS level change. Applied right away but not persisted, so the saved
    /// entry only ever reflects explicit choices.
    pub fn on_system_change(&mut self, preference: SystemPreference, matches: bool) {
        match preference {
            SystemPreference::ReducedMotion => self.preferences.reduced_motion = matches,
            SystemPreference::HighContrast => self.preferences.high_contrast = matches,
        }
        debug!("system preference {:?} changed to {}", preference, matches);
        self.apply();
        self.notify();
    }

    pub fn dispatch(&mut self, action: PreferenceAction) {
        match action {
            PreferenceAction::ToggleReducedMotion => self.toggle_reduced_motion(),
            PreferenceAction::ToggleHighContrast => self.toggle_high_contrast(),
            PreferenceAction::SetFontSize(size) => self.set_font_size(size),
            PreferenceAction::Reset => self.reset_preferences(),
            PreferenceAction::SystemChanged(preference, matches) => self.on_system_change(preference, matches),
        }
    }

    pub fn announce(&self, message: &str) {
        self.announcer.announce(message);
    }

    pub fn subscribe(&mut self, listener: PreferenceListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn load_saved(&self) -> Result<Option<SavedPreferences>, PreferenceError> {
        match self.storage.load()? {
            Some(raw) => SavedPreferences::from_json(&raw).map(Some),
            None => Ok(None),
        }
    }

    fn commit(&mut self) {
        debug!("accessibility preferences updated: {:?}", self.preferences);
        self.apply();
        self.persist();
        self.notify();
    }

    fn apply(&self) {
        debug!("applying mode classes {:?}", self.preferences.mode_classes());
        for (class, present) in self.preferences.mode_class_states() {
            self.root.set_class(class, present);
        }
    }

    fn persist(&self) {
        let result = SavedPreferences::from(&self.preferences)
            .to_json()
            .and_then(|raw| self.storage.save(&raw));
        if let Err(e) = result {
            warn!("Failed to save accessibility preferences: {}", e);
        }
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.preferences);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeSet;
    use std::rc::Rc;

    use super::*;
    use crate::accessibility::preferences::SystemSignals;

    #[derive(Clone, Default)]
    pub struct MemoryStorage {
        pub entry: Rc<RefCell<Option<String>>>,
        pub fail: Rc<Cell<bool>>,
    }

    impl PreferenceStorage for MemoryStorage {
        fn load(&self) -> Result<Option<String>, PreferenceError> {
            if self.fail.get() {
                return Err(PreferenceError::StorageUnavailable);
            }
            Ok(self.entry.borrow().clone())
        }

        fn save(&self, raw: &str) -> Result<(), PreferenceError> {
            if self.fail.get() {
                return Err(PreferenceError::Storage("quota exceeded".into()));
            }
            *self.entry.borrow_mut() = Some(raw.to_string());
            Ok(())
        }

        fn clear(&self) -> Result<(), PreferenceError> {
            if self.fail.get() {
                return Err(PreferenceError::StorageUnavailable);
            }
            *self.entry.borrow_mut() = None;
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    pub struct ClassList(pub Rc<RefCell<BTreeSet<String>>>);

    impl ClassList {
        pub fn contains(&self, class: &str) -> bool {
            self.0.borrow().contains(class)
        }

        pub fn snapshot(&self) -> BTreeSet<String> {
            self.0.borrow().clone()
        }
    }

    impl ModeClassTarget for ClassList {
        fn set_class(&self, class: &str, present: bool) {
            if present {
                self.0.borrow_mut().insert(class.to_string());
            } else {
                self.0.borrow_mut().remove(class);
            }
        }
    }

    pub struct FixedProbe(pub SystemSignals);

    impl SystemProbe for FixedProbe {
        fn signals(&self) -> SystemSignals {
            self.0
        }
    }

    #[derive(Clone, Default)]
    pub struct RecordingAnnouncer(pub Rc<RefCell<Vec<String>>>);

    impl Announcer for RecordingAnnouncer {
        fn announce(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    pub struct Harness {
        pub store: PreferenceStore,
        pub storage: MemoryStorage,
        pub classes: ClassList,
        pub announcements: RecordingAnnouncer,
    }

    pub fn harness(system: SystemSignals, saved: Option<&str>) -> Harness {
        let storage = MemoryStorage::default();
        *storage.entry.borrow_mut() = saved.map(str::to_string);
        let classes = ClassList::default();
        let announcements = RecordingAnnouncer::default();
        let store = PreferenceStore::new(
            Box::new(storage.clone()),
            Box::new(classes.clone()),
            Box::new(FixedProbe(system)),
            Box::new(announcements.clone()),
        );
        Harness { store, storage, classes, announcements }
    }
}
