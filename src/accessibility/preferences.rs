use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PreferenceError;

pub const REDUCE_MOTION_CLASS: &str = "reduce-motion";
pub const HIGH_CONTRAST_CLASS: &str = "high-contrast";
pub const SCREEN_READER_CLASS: &str = "screen-reader";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }

    /// Marker class placed on the document root. Exactly one is present at a time.
    pub fn mode_class(self) -> &'static str {
        match self {
            FontSize::Small => "font-small",
            FontSize::Medium => "font-medium",
            FontSize::Large => "font-large",
        }
    }

    /// One-letter label shown on the radio buttons.
    pub fn short_label(self) -> &'static str {
        match self {
            FontSize::Small => "P",
            FontSize::Medium => "M",
            FontSize::Large => "G",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FontSize::Small => "Pequena",
            FontSize::Medium => "Média",
            FontSize::Large => "Grande",
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontSize {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(FontSize::Small),
            "medium" => Ok(FontSize::Medium),
            "large" => Ok(FontSize::Large),
            other => Err(PreferenceError::UnknownFontSize(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessibilityPreferences {
    pub reduced_motion: bool,
    pub high_contrast: bool,
    pub font_size: FontSize,
    /// Best-effort guess from the user agent. Never persisted and never used
    /// to gate behaviour beyond the `screen-reader` marker class.
    pub screen_reader_detected: bool,
}

impl AccessibilityPreferences {
    /// Merges what was saved last session with what the OS reports now.
    /// Saved values win field by field; the screen reader flag always comes
    /// from the fresh probe.
    pub fn resolve(saved: Option<SavedPreferences>, system: SystemSignals) -> Self {
        let saved = saved.unwrap_or_default();
        Self {
            reduced_motion: saved.reduced_motion.unwrap_or(system.reduced_motion),
            high_contrast: saved.high_contrast.unwrap_or(system.high_contrast),
            font_size: saved.font_size.unwrap_or_default(),
            screen_reader_detected: system.screen_reader,
        }
    }

    /// Root classes that must be present for these preferences.
    pub fn mode_classes(&self) -> Vec<&'static str> {
        let mut classes = vec![self.font_size.mode_class()];
        if self.reduced_motion {
            classes.push(REDUCE_MOTION_CLASS);
        }
        if self.high_contrast {
            classes.push(HIGH_CONTRAST_CLASS);
        }
        if self.screen_reader_detected {
            classes.push(SCREEN_READER_CLASS);
        }
        classes
    }

    /// Every marker class paired with whether it should be on the root.
    /// Applying the whole list is idempotent and keeps the font classes
    /// mutually exclusive.
    pub fn mode_class_states(&self) -> [(&'static str, bool); 6] {
        [
            (FontSize::Small.mode_class(), self.font_size == FontSize::Small),
            (FontSize::Medium.mode_class(), self.font_size == FontSize::Medium),
            (FontSize::Large.mode_class(), self.font_size == FontSize::Large),
            (REDUCE_MOTION_CLASS, self.reduced_motion),
            (HIGH_CONTRAST_CLASS, self.high_contrast),
            (SCREEN_READER_CLASS, self.screen_reader_detected),
        ]
    }
}

/// The persisted subset. Every field is optional so an entry written by an
/// older build (or edited by hand) still merges per field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_contrast: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
}

impl SavedPreferences {
    pub fn from_json(raw: &str) -> Result<Self, PreferenceError> {
        serde_json::from_str(raw).map_err(PreferenceError::Malformed)
    }

    pub fn to_json(&self) -> Result<String, PreferenceError> {
        serde_json::to_string(self).map_err(PreferenceError::Serialize)
    }
}

impl From<&AccessibilityPreferences> for SavedPreferences {
    fn from(prefs: &AccessibilityPreferences) -> Self {
        Self {
            reduced_motion: Some(prefs.reduced_motion),
            high_contrast: Some(prefs.high_contrast),
            font_size: Some(prefs.font_size),
        }
    }
}

/// Snapshot of the OS / browser level signals read at initialization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemSignals {
    pub reduced_motion: bool,
    pub high_contrast: bool,
    pub screen_reader: bool,
}

/// OS preferences the store keeps listening to after initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SystemPreference {
    ReducedMotion,
    HighContrast,
}

impl SystemPreference {
    pub const ALL: [SystemPreference; 2] = [SystemPreference::ReducedMotion, SystemPreference::HighContrast];

    pub fn media_query(self) -> &'static str {
        match self {
            SystemPreference::ReducedMotion => "(prefers-reduced-motion: reduce)",
            SystemPreference::HighContrast => "(prefers-contrast: high)",
        }
    }
}

/// Heuristic used for `screen_reader_detected`: a known assistive technology
/// marker in the user agent, or a speech synthesis API on the window.
pub fn looks_like_screen_reader(user_agent: &str, has_speech_synthesis: bool) -> bool {
    user_agent.contains("NVDA") || user_agent.contains("JAWS") || has_speech_synthesis
}
