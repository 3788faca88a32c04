use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::keyboard::focus::FocusHost;

pub const FOCUSABLE_SELECTORS: &str = "button:not([disabled]), \
    input:not([disabled]), \
    textarea:not([disabled]), \
    select:not([disabled]), \
    a[href], \
    [tabindex]:not([tabindex=\"-1\"]), \
    [contenteditable=\"true\"], \
    summary, \
    iframe, \
    object, \
    embed, \
    area[href], \
    audio[controls], \
    video[controls]";

/// [`FocusHost`] over a live container element.
pub struct DomFocusHost {
    container: Element,
}

impl DomFocusHost {
    pub fn new(container: Element) -> Self {
        Self { container }
    }
}

impl FocusHost for DomFocusHost {
    type Element = HtmlElement;

    fn candidates(&self) -> Vec<HtmlElement> {
        let Ok(node_list) = self.container.query_selector_all(FOCUSABLE_SELECTORS) else {
            return Vec::new();
        };

        (0..node_list.length())
            .filter_map(|idx| node_list.get(idx))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn is_visible(&self, element: &HtmlElement) -> bool {
        if element.offset_width() <= 0 || element.offset_height() <= 0 {
            return false;
        }
        let Some(style) = web_sys::window().and_then(|w| w.get_computed_style(element).ok().flatten()) else {
            return true;
        };
        let display = style.get_property_value("display").unwrap_or_default();
        let visibility = style.get_property_value("visibility").unwrap_or_default();
        display != "none" && visibility != "hidden"
    }

    fn active_element(&self) -> Option<HtmlElement> {
        web_sys::window()?
            .document()?
            .active_element()?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn focus(&self, element: &HtmlElement) {
        if let Err(e) = element.focus() {
            log::warn!("failed to move focus: {:?}", e);
        }
    }
}
