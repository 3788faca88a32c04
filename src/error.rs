use thiserror::Error;

/// Everything that can go wrong while reading, writing or validating
/// accessibility preferences. None of these are fatal: the store logs them
/// and falls back to defaults.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("local storage is not available in this browsing context")]
    StorageUnavailable,

    #[error("storage access failed: {0}")]
    Storage(String),

    #[error("failed to serialize preferences: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("saved preferences are malformed: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("unknown font size `{0}` (expected small, medium or large)")]
    UnknownFontSize(String),
}

impl PreferenceError {
    /// Wraps a JS exception thrown by the Storage API.
    pub fn storage(err: wasm_bindgen::JsValue) -> Self {
        Self::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}
