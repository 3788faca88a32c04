use web_sys::Event;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

/// Percentage of the page scrolled, clamped to `0..=100`.
///
/// A page shorter than the viewport reports 0.
pub fn reading_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Text for the screen-reader only status line under the bar.
pub fn progress_announcement(progress: f64) -> Option<String> {
    if progress >= 100.0 {
        Some("Você chegou ao final da página".to_string())
    } else if progress > 0.0 {
        Some(format!("Progresso da leitura: {}%", progress.round()))
    } else {
        None
    }
}

fn measure() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return 0.0;
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let scroll_top = window.scroll_y().unwrap_or(0.0);

    reading_progress(scroll_top, root.scroll_height() as f64, viewport_height)
}

#[derive(Properties, PartialEq)]
pub struct ScrollProgressProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("bg-primary-500"))]
    pub color: AttrValue,
    /// Bar height in pixels.
    #[prop_or(3)]
    pub height: u32,
}

#[function_component(ScrollProgress)]
pub fn scroll_progress(props: &ScrollProgressProps) -> Html {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                progress.set(measure());
                || ()
            },
            (),
        );
    }

    {
        let progress = progress.clone();
        use_event_with_window("scroll", move |_: Event| {
            progress.set(measure());
        });
    }

    let value = *progress;
    let rounded = value.round();

    html! {
        <div
            class={classes!("fixed", "top-0", "left-0", "right-0", "z-50", "bg-neutral-200", props.class.clone())}
            style={format!("height: {}px", props.height)}
            role="progressbar"
            aria-valuenow={rounded.to_string()}
            aria-valuemin="0"
            aria-valuemax="100"
            aria-label={format!("Progresso da leitura: {}%", rounded)}
        >
            <div
                class={classes!("h-full", "transition-all", "duration-150", "ease-out", props.color.to_string())}
                style={format!("width: {}%", value)}
            />
            <div class="sr-only" aria-live="polite" aria-atomic="true">
                { progress_announcement(value).unwrap_or_default() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_a_percentage_of_scrollable_height() {
        assert_eq!(reading_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(reading_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(reading_progress(1000.0, 2000.0, 1000.0), 100.0);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(reading_progress(1200.0, 2000.0, 1000.0), 100.0);
        assert_eq!(reading_progress(-40.0, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn short_pages_report_zero() {
        assert_eq!(reading_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(reading_progress(0.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn announcements() {
        assert_eq!(progress_announcement(0.0), None);
        assert_eq!(progress_announcement(42.4).as_deref(), Some("Progresso da leitura: 42%"));
        assert_eq!(progress_announcement(100.0).as_deref(), Some("Você chegou ao final da página"));
    }
}
