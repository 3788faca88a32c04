use web_sys::MouseEvent;
use yew::prelude::*;

use crate::accessibility::{use_accessibility, AccessibilityContext, FontSize};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::keyboard::{use_focus_trap, use_list_navigation};

pub const PANEL_OPENED_MESSAGE: &str = "Controles de acessibilidade abertos";
pub const PREFERENCES_RESET_MESSAGE: &str = "Preferências de acessibilidade redefinidas";

pub fn motion_announcement(enabled: bool) -> String {
    format!("Movimento reduzido {}", if enabled { "ativado" } else { "desativado" })
}

pub fn contrast_announcement(enabled: bool) -> String {
    format!("Alto contraste {}", if enabled { "ativado" } else { "desativado" })
}

pub fn font_size_announcement(size: FontSize) -> String {
    format!("Tamanho da fonte alterado para {}", size.label().to_lowercase())
}

/// Closed panels are hidden with `visibility: hidden` so their controls leave the tab order.
pub fn panel_classes(open: bool) -> Classes {
    classes!(
        "mt-2",
        "bg-white",
        "rounded-xl",
        "shadow-large",
        "border",
        "border-neutral-200",
        "p-4",
        "min-w-[280px]",
        "transition-all",
        "duration-300",
        "ease-in-out",
        if open {
            classes!("opacity-100", "visible", "transform", "translate-y-0")
        } else {
            classes!("opacity-0", "invisible", "transform", "-translate-y-2", "pointer-events-none")
        }
    )
}

fn select_font_size(accessibility: &AccessibilityContext, size: FontSize) {
    accessibility.set_font_size(size);
    accessibility.announce_to_screen_reader(font_size_announcement(size));
}

#[derive(Properties, PartialEq)]
pub struct SwitchProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub description: AttrValue,
    /// Screen-reader text completing "Ativar"/"Desativar".
    pub action_label: AttrValue,
    pub checked: bool,
    pub ontoggle: Callback<MouseEvent>,
}

#[function_component(Switch)]
fn switch(props: &SwitchProps) -> Html {
    let description_id = format!("{}-description", props.id);
    let track = classes!(
        "relative",
        "inline-flex",
        "h-6",
        "w-11",
        "items-center",
        "rounded-full",
        "transition-colors",
        "focus:outline-none",
        "focus:ring-2",
        "focus:ring-primary-500",
        "focus:ring-offset-2",
        if props.checked { "bg-primary-500" } else { "bg-neutral-300" }
    );
    let thumb = classes!(
        "inline-block",
        "h-4",
        "w-4",
        "transform",
        "rounded-full",
        "bg-white",
        "transition-transform",
        if props.checked { "translate-x-6" } else { "translate-x-1" }
    );

    html! {
        <>
            <div class="flex items-center justify-between">
                <label for={props.id.clone()} class="text-sm text-neutral-700 font-medium">
                    { props.label.clone() }
                </label>
                <button
                    id={props.id.clone()}
                    type="button"
                    onclick={props.ontoggle.clone()}
                    class={track}
                    role="switch"
                    aria-checked={props.checked.to_string()}
                    aria-describedby={description_id.clone()}
                >
                    <span class="sr-only">
                        { format!("{} {}", if props.checked { "Desativar" } else { "Ativar" }, props.action_label) }
                    </span>
                    <span class={thumb} />
                </button>
            </div>
            <p id={description_id} class="text-xs text-neutral-500">{ props.description.clone() }</p>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct AccessibilityControlsProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Floating panel with the motion, contrast and font size controls.
#[function_component(AccessibilityControls)]
pub fn accessibility_controls(props: &AccessibilityControlsProps) -> Html {
    let accessibility = use_accessibility();
    let is_open = use_state(|| false);
    let preferences = accessibility.preferences;

    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: ()| is_open.set(false))
    };
    let panel = use_focus_trap(*is_open, Some(close.clone()));

    let font_sizes = {
        let accessibility = accessibility.clone();
        use_list_navigation(
            Some(Callback::from(move |index: usize| {
                if let Some(size) = FontSize::ALL.get(index) {
                    select_font_size(&accessibility, *size);
                }
            })),
            None,
        )
    };

    let on_toggle_panel = {
        let is_open = is_open.clone();
        let accessibility = accessibility.clone();
        Callback::from(move |_: MouseEvent| {
            let opening = !*is_open;
            is_open.set(opening);
            if opening {
                accessibility.announce_to_screen_reader(PANEL_OPENED_MESSAGE);
            }
        })
    };

    let on_reduced_motion = {
        let accessibility = accessibility.clone();
        Callback::from(move |_: MouseEvent| {
            accessibility.toggle_reduced_motion();
            accessibility.announce_to_screen_reader(motion_announcement(!preferences.reduced_motion));
        })
    };

    let on_high_contrast = {
        let accessibility = accessibility.clone();
        Callback::from(move |_: MouseEvent| {
            accessibility.toggle_high_contrast();
            accessibility.announce_to_screen_reader(contrast_announcement(!preferences.high_contrast));
        })
    };

    let on_reset = {
        let accessibility = accessibility.clone();
        Callback::from(move |_: MouseEvent| {
            accessibility.reset_preferences();
            accessibility.announce_to_screen_reader(PREFERENCES_RESET_MESSAGE);
        })
    };

    let on_close = close.reform(|_: MouseEvent| ());

    let panel_class = panel_classes(*is_open);

    html! {
        <div class={classes!("fixed", "right-4", "top-20", "z-50", props.class.clone())}>
            <Button
                variant={ButtonVariant::Primary}
                size={ButtonSize::Sm}
                onclick={on_toggle_panel}
                class={classes!("rounded-full", "w-12", "h-12", "p-0", "shadow-medium", "hover:shadow-large")}
                aria_label={if *is_open { "Fechar controles de acessibilidade" } else { "Abrir controles de acessibilidade" }}
                aria_expanded={*is_open}
                aria_controls="accessibility-panel"
            >
                <svg
                    class={classes!("w-5", "h-5", "transition-transform", "duration-200", is_open.then_some("rotate-45"))}
                    fill="none"
                    viewBox="0 0 24 24"
                    stroke="currentColor"
                    aria-hidden="true"
                >
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M12 6V4m0 2a2 2 0 100 4m0-4a2 2 0 110 4m-6 8a2 2 0 100-4m0 4a2 2 0 100 4m0-4v2m0-6V4m6 6v10m6-2a2 2 0 100-4m0 4a2 2 0 100 4m0-4v2m0-6V4"
                    />
                </svg>
            </Button>

            <div
                id="accessibility-panel"
                ref={panel.container_ref.clone()}
                class={panel_class}
                aria-hidden={(!*is_open).to_string()}
                hidden={!*is_open}
                role="dialog"
                aria-labelledby="accessibility-title"
            >
                <div class="space-y-4">
                    <h3 id="accessibility-title" class="text-sm font-semibold text-neutral-900 mb-3">
                        {"Controles de Acessibilidade"}
                    </h3>

                    <Switch
                        id="reduced-motion"
                        label="Movimento Reduzido"
                        description="Reduz animações e transições para usuários sensíveis ao movimento"
                        action_label="movimento reduzido"
                        checked={preferences.reduced_motion}
                        ontoggle={on_reduced_motion}
                    />

                    <Switch
                        id="high-contrast"
                        label="Alto Contraste"
                        description="Aumenta o contraste para melhor legibilidade"
                        action_label="alto contraste"
                        checked={preferences.high_contrast}
                        ontoggle={on_high_contrast}
                    />

                    <div>
                        <span id="font-size-label" class="text-sm text-neutral-700 font-medium block mb-2">
                            {"Tamanho da Fonte"}
                        </span>
                        <div
                            ref={font_sizes.container_ref.clone()}
                            class="flex space-x-1"
                            role="radiogroup"
                            aria-labelledby="font-size-label"
                        >
                            { for FontSize::ALL.iter().map(|size| {
                                let size = *size;
                                let checked = preferences.font_size == size;
                                let onclick = {
                                    let accessibility = accessibility.clone();
                                    Callback::from(move |_: MouseEvent| select_font_size(&accessibility, size))
                                };
                                html! {
                                    <button
                                        key={size.as_str()}
                                        type="button"
                                        onclick={onclick}
                                        class={classes!(
                                            "flex-1", "py-2", "px-3", "text-sm", "font-medium", "rounded-lg",
                                            "transition-all", "duration-200", "focus:outline-none", "focus:ring-2",
                                            "focus:ring-primary-500", "focus:ring-offset-2",
                                            if checked {
                                                classes!("bg-primary-500", "text-white")
                                            } else {
                                                classes!("bg-neutral-100", "text-neutral-700", "hover:bg-neutral-200")
                                            }
                                        )}
                                        role="radio"
                                        aria-checked={checked.to_string()}
                                        aria-label={format!("Tamanho da fonte {}", size.label())}
                                    >
                                        { size.short_label() }
                                    </button>
                                }
                            }) }
                        </div>
                        <p class="text-xs text-neutral-500 mt-1">{"Ajusta o tamanho do texto em toda a página"}</p>
                    </div>

                    <div class="pt-2 border-t border-neutral-200 flex gap-2">
                        <Button
                            variant={ButtonVariant::Ghost}
                            size={ButtonSize::Sm}
                            onclick={on_reset}
                            class={classes!("flex-1", "text-neutral-600", "hover:text-neutral-800")}
                        >
                            {"Redefinir"}
                        </Button>
                        <Button
                            variant={ButtonVariant::Ghost}
                            size={ButtonSize::Sm}
                            onclick={on_close}
                            class={classes!("flex-1", "text-neutral-600", "hover:text-neutral-800")}
                        >
                            {"Fechar"}
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}
