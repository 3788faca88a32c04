//! Browser capabilities the preference store depends on.
//!
//! The store only talks to these traits, so it can be exercised with in-memory
//! fakes. The `Browser*` / `DocumentRoot` / `LocalPreferenceStorage` types are
//! the web-sys backed implementations used by the running page.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::accessibility::media;
use crate::accessibility::preferences::{looks_like_screen_reader, SystemPreference, SystemSignals};
use crate::error::PreferenceError;

/// Raw persisted entry access. JSON encoding happens in the store.
pub trait PreferenceStorage {
    fn load(&self) -> Result<Option<String>, PreferenceError>;
    fn save(&self, raw: &str) -> Result<(), PreferenceError>;
    fn clear(&self) -> Result<(), PreferenceError>;
}

/// Where mode classes end up, normally `<html>`.
pub trait ModeClassTarget {
    fn set_class(&self, class: &str, present: bool);
}

pub trait SystemProbe {
    fn signals(&self) -> SystemSignals;
}

/// Speaks a message through a polite live region.
pub trait Announcer {
    fn announce(&self, message: &str);
}

pub struct LocalPreferenceStorage {
    key: &'static str,
}

impl LocalPreferenceStorage {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage(&self) -> Result<Storage, PreferenceError> {
        web_sys::window()
            .ok_or(PreferenceError::StorageUnavailable)?
            .local_storage()
            .map_err(PreferenceError::storage)?
            .ok_or(PreferenceError::StorageUnavailable)
    }
}

impl PreferenceStorage for LocalPreferenceStorage {
    fn load(&self) -> Result<Option<String>, PreferenceError> {
        self.storage()?.get_item(self.key).map_err(PreferenceError::storage)
    }

    fn save(&self, raw: &str) -> Result<(), PreferenceError> {
        self.storage()?.set_item(self.key, raw).map_err(PreferenceError::storage)
    }

    fn clear(&self) -> Result<(), PreferenceError> {
        self.storage()?.remove_item(self.key).map_err(PreferenceError::storage)
    }
}

/// The `<html>` element of the current document.
#[derive(Default)]
pub struct DocumentRoot;

impl ModeClassTarget for DocumentRoot {
    fn set_class(&self, class: &str, present: bool) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            log::warn!("no document root, skipping mode class {}", class);
            return;
        };

        let class_list = root.class_list();
        let result = if present {
            class_list.add_1(class)
        } else {
            class_list.remove_1(class)
        };
        if let Err(e) = result {
            log::warn!("failed to update mode class {}: {:?}", class, e);
        }
    }
}

#[derive(Default)]
pub struct BrowserProbe;

impl SystemProbe for BrowserProbe {
    fn signals(&self) -> SystemSignals {
        let Some(window) = web_sys::window() else {
            return SystemSignals::default();
        };

        let user_agent = window.navigator().user_agent().unwrap_or_default();
        let has_speech_synthesis = window
            .speech_synthesis()
            .map(|synth| {
                let value: &JsValue = synth.as_ref();
                !value.is_undefined() && !value.is_null()
            })
            .unwrap_or(false);

        SystemSignals {
            reduced_motion: media::matches(SystemPreference::ReducedMotion.media_query()),
            high_contrast: media::matches(SystemPreference::HighContrast.media_query()),
            screen_reader: looks_like_screen_reader(&user_agent, has_speech_synthesis),
        }
    }
}
