use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};

/// Current value of a media query, `false` when it cannot be evaluated.
pub fn matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map_or(false, |list| list.matches())
}

/// Keeps a `change` listener attached to a media query list until dropped.
pub struct MediaQueryWatcher {
    list: MediaQueryList,
    listener: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl MediaQueryWatcher {
    pub fn watch(query: &str, on_change: impl Fn(bool) + 'static) -> Option<Self> {
        let list = web_sys::window()?.match_media(query).ok().flatten()?;

        let listener = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            on_change(event.matches());
        }) as Box<dyn FnMut(MediaQueryListEvent)>);

        if let Err(e) = list.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref()) {
            log::warn!("could not watch media query {}: {:?}", query, e);
            return None;
        }

        log::debug!("watching media query {}", query);
        Some(Self { list, listener })
    }
}

impl Drop for MediaQueryWatcher {
    fn drop(&mut self) {
        if let Err(e) = self
            .list
            .remove_event_listener_with_callback("change", self.listener.as_ref().unchecked_ref())
        {
            log::warn!("could not stop watching media query: {:?}", e);
        }
    }
}
