use std::rc::Rc;

use web_sys::{Event, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::components::{Button, ButtonSize, ButtonVariant, Container, ContainerPadding, ContainerSize};
use crate::config;
use crate::keyboard::{use_keyboard_navigation, KeyboardNavigationOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationItem {
    pub label: &'static str,
    pub href: &'static str,
    pub external: bool,
}

pub const NAVIGATION_ITEMS: [NavigationItem; 5] = [
    NavigationItem { label: "Sobre", href: "#sobre", external: false },
    NavigationItem { label: "Perfis", href: "#perfis", external: false },
    NavigationItem { label: "Recursos", href: "#recursos", external: false },
    NavigationItem { label: "Segurança", href: "#seguranca", external: false },
    NavigationItem { label: "Contato", href: "#contato", external: false },
];

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    ItemClick,
    Escape,
}

impl Reducible for MenuState {
    type Action = MenuEvent;

    fn reduce(self: Rc<Self>, action: MenuEvent) -> Rc<Self> {
        let open = match action {
            MenuEvent::Toggle => !self.open,
            MenuEvent::ItemClick | MenuEvent::Escape => false,
        };
        if open == self.open {
            self
        } else {
            Rc::new(MenuState { open })
        }
    }
}

pub fn scrolled_past_threshold(scroll_y: f64) -> bool {
    scroll_y > config::SCROLLED_THRESHOLD_PX
}

/// Keeps the contents of a closed mobile menu out of the tab order.
pub fn closed_menu_tab_index(open: bool) -> Option<&'static str> {
    (!open).then_some("-1")
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let menu = use_reducer(MenuState::default);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            let scroll_y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            is_scrolled.set(scrolled_past_threshold(scroll_y));
        });
    }

    {
        let menu = menu.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu.dispatch(MenuEvent::Escape);
            }
        });
    }

    let desktop_links = {
        let menu = menu.clone();
        let options = KeyboardNavigationOptions {
            enable_arrow_keys: true,
            ..KeyboardNavigationOptions::default()
        };
        use_keyboard_navigation(options.with_escape(Callback::from(move |_| menu.dispatch(MenuEvent::Escape))))
    };

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuEvent::Toggle))
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuEvent::ItemClick))
    };

    let menu_open = menu.open;
    let nav_classes = classes!(
        "sticky",
        "top-0",
        "z-40",
        "transition-all",
        "duration-200",
        if *is_scrolled {
            classes!("bg-white/95", "backdrop-blur-sm", "shadow-soft", "border-b", "border-neutral-200")
        } else {
            classes!("bg-transparent")
        },
        props.class.clone()
    );

    let link = |item: &NavigationItem, class: &'static str, tab_index: Option<&'static str>| -> Html {
        html! {
            <a
                key={item.href}
                href={item.href}
                class={class}
                target={item.external.then_some("_blank")}
                rel={item.external.then_some("noopener noreferrer")}
                tabindex={tab_index}
                onclick={close_menu.clone()}
            >
                { item.label }
            </a>
        }
    };

    let desktop_link_class = "px-4 py-2 text-sm font-medium text-neutral-700 hover:text-primary-600 hover:bg-primary-50 \
        rounded-lg transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-primary-500 focus:ring-offset-2";
    let mobile_link_class = "block px-4 py-3 text-base font-medium text-neutral-700 hover:text-primary-600 hover:bg-primary-50 \
        rounded-lg transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-primary-500 focus:ring-offset-2";
    let mobile_tab_index = closed_menu_tab_index(menu_open);

    html! {
        <nav id="navigation" role="navigation" aria-label="Navegação principal" class={nav_classes}>
            <Container size={ContainerSize::Lg} padding={ContainerPadding::Md}>
                <div class="flex items-center justify-between h-16">
                    <div class="flex-shrink-0">
                        <a
                            href="#"
                            class="flex items-center space-x-2 text-xl font-bold text-primary-600 hover:text-primary-700 transition-colors focus:outline-none focus:ring-2 focus:ring-primary-500 focus:ring-offset-2 rounded-md px-2 py-1"
                            aria-label="AcolheMente - Página inicial"
                        >
                            <div class="w-8 h-8 bg-primary-500 rounded-lg flex items-center justify-center">
                                <span class="text-white font-bold text-sm">{"A"}</span>
                            </div>
                            <span>{"AcolheMente"}</span>
                        </a>
                    </div>

                    <div class="hidden md:block">
                        <div ref={desktop_links.container_ref.clone()} class="flex items-center space-x-1">
                            { for NAVIGATION_ITEMS.iter().map(|item| link(item, desktop_link_class, None)) }
                        </div>
                    </div>

                    <div class="hidden md:block">
                        <Button variant={ButtonVariant::Primary} size={ButtonSize::Sm}>
                            {"Começar Agora"}
                        </Button>
                    </div>

                    <div class="md:hidden">
                        <button
                            type="button"
                            onclick={toggle_menu}
                            class="inline-flex items-center justify-center p-2 rounded-lg text-neutral-700 hover:text-primary-600 hover:bg-primary-50 focus:outline-none focus:ring-2 focus:ring-primary-500 focus:ring-offset-2 transition-colors"
                            aria-expanded={menu_open.to_string()}
                            aria-controls="mobile-menu"
                            aria-label={if menu_open { "Fechar menu" } else { "Abrir menu" }}
                        >
                            <span class="sr-only">
                                { if menu_open { "Fechar menu principal" } else { "Abrir menu principal" } }
                            </span>
                            <svg
                                class={classes!("h-6", "w-6", "transition-transform", "duration-200", menu_open.then_some("rotate-90"))}
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                                aria-hidden="true"
                            >
                                if menu_open {
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                                } else {
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                                }
                            </svg>
                        </button>
                    </div>
                </div>

                <div
                    id="mobile-menu"
                    class={classes!(
                        "md:hidden",
                        "transition-all",
                        "duration-300",
                        "ease-in-out",
                        if menu_open {
                            classes!("max-h-96", "opacity-100", "visible")
                        } else {
                            classes!("max-h-0", "opacity-0", "invisible", "overflow-hidden")
                        }
                    )}
                    aria-hidden={(!menu_open).to_string()}
                    hidden={!menu_open}
                >
                    <div class="px-2 pt-2 pb-3 space-y-1 bg-white rounded-lg shadow-soft border border-neutral-200 mt-2">
                        { for NAVIGATION_ITEMS.iter().map(|item| link(item, mobile_link_class, mobile_tab_index)) }
                        <div class="pt-2 border-t border-neutral-200">
                            <Button
                                variant={ButtonVariant::Primary}
                                full_width={true}
                                class={classes!("mx-4")}
                                tab_index={mobile_tab_index}
                            >
                                {"Começar Agora"}
                            </Button>
                        </div>
                    </div>
                </div>
            </Container>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: &[MenuEvent]) -> MenuState {
        events
            .iter()
            .fold(Rc::new(MenuState::default()), |state, event| state.reduce(*event))
            .as_ref()
            .clone()
    }

    #[test]
    fn toggle_opens_and_closes() {
        assert!(run(&[MenuEvent::Toggle]).open);
        assert!(!run(&[MenuEvent::Toggle, MenuEvent::Toggle]).open);
    }

    #[test]
    fn item_click_and_escape_close() {
        assert!(!run(&[MenuEvent::Toggle, MenuEvent::ItemClick]).open);
        assert!(!run(&[MenuEvent::Toggle, MenuEvent::Escape]).open);
        assert!(!run(&[MenuEvent::Escape]).open);
    }

    #[test]
    fn unchanged_state_is_reused() {
        let closed = Rc::new(MenuState::default());
        let after = closed.clone().reduce(MenuEvent::Escape);
        assert!(Rc::ptr_eq(&closed, &after));
    }

    #[test]
    fn scroll_threshold() {
        assert!(!scrolled_past_threshold(0.0));
        assert!(!scrolled_past_threshold(10.0));
        assert!(scrolled_past_threshold(10.5));
    }

    #[test]
    fn closed_menu_is_out_of_tab_order() {
        assert_eq!(closed_menu_tab_index(false), Some("-1"));
        assert_eq!(closed_menu_tab_index(true), None);
    }

    #[test]
    fn navigation_items_are_in_page_anchors() {
        assert!(NAVIGATION_ITEMS.iter().all(|item| item.href.starts_with('#') && !item.external));
    }
}
