use web_sys::MouseEvent;
use yew::prelude::*;

const BASE_CLASSES: &str = "inline-flex items-center justify-center font-medium rounded-lg \
    transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 \
    disabled:opacity-60 disabled:cursor-not-allowed min-h-[44px] min-w-[44px] select-none";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Accent,
    Outline,
    Ghost,
}

impl ButtonVariant {
    /// Unknown names fall back to [`ButtonVariant::Primary`].
    pub fn parse_or_default(name: &str) -> Self {
        match name {
            "secondary" => Self::Secondary,
            "accent" => Self::Accent,
            "outline" => Self::Outline,
            "ghost" => Self::Ghost,
            _ => Self::Primary,
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Primary => {
                "bg-primary-500 text-white hover:bg-primary-600 focus:ring-primary-500 \
                 shadow-soft hover:shadow-medium disabled:hover:bg-primary-500"
            }
            Self::Secondary => {
                "bg-secondary-100 text-secondary-800 hover:bg-secondary-200 focus:ring-secondary-500 \
                 shadow-soft hover:shadow-medium disabled:hover:bg-secondary-100"
            }
            Self::Accent => {
                "bg-accent-500 text-white hover:bg-accent-600 focus:ring-accent-500 \
                 shadow-soft hover:shadow-medium disabled:hover:bg-accent-500"
            }
            Self::Outline => {
                "bg-transparent text-primary-600 border-2 border-primary-500 \
                 hover:bg-primary-50 focus:ring-primary-500 focus:bg-primary-50 disabled:hover:bg-transparent"
            }
            Self::Ghost => "bg-transparent text-neutral-700 hover:bg-neutral-100 focus:ring-neutral-500 disabled:hover:bg-transparent",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    /// Unknown names fall back to [`ButtonSize::Md`].
    pub fn parse_or_default(name: &str) -> Self {
        match name {
            "sm" => Self::Sm,
            "lg" => Self::Lg,
            _ => Self::Md,
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Sm => "px-4 py-2 text-sm gap-2",
            Self::Md => "px-6 py-3 text-base gap-2",
            Self::Lg => "px-8 py-4 text-lg gap-3",
        }
    }
}

pub fn button_classes(variant: ButtonVariant, size: ButtonSize, full_width: bool, extra: &Classes) -> Classes {
    let mut classes = Classes::from(BASE_CLASSES);
    classes.push(variant.classes());
    classes.push(size.classes());
    if full_width {
        classes.push("w-full");
    }
    classes.push(extra.clone());
    classes
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    /// Shows a spinner and disables the button.
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub full_width: bool,
    #[prop_or_default]
    pub left_icon: Option<Html>,
    #[prop_or_default]
    pub right_icon: Option<Html>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub aria_expanded: Option<bool>,
    #[prop_or_default]
    pub aria_controls: Option<AttrValue>,
    #[prop_or_default]
    pub tab_index: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let is_disabled = props.disabled || props.loading;
    let classes = button_classes(props.variant, props.size, props.full_width, &props.class);
    let onclick = if is_disabled { None } else { props.onclick.clone() };

    let icon = |slot: &Option<Html>| -> Html {
        match slot {
            Some(icon) if !props.loading => html! {
                <span class="flex-shrink-0" aria-hidden="true">{ icon.clone() }</span>
            },
            _ => html! {},
        }
    };

    html! {
        <button
            type={props.button_type.clone()}
            id={props.id.clone()}
            class={classes}
            disabled={is_disabled}
            aria-disabled={is_disabled.to_string()}
            aria-label={props.aria_label.clone()}
            aria-expanded={props.aria_expanded.map(|expanded| expanded.to_string())}
            aria-controls={props.aria_controls.clone()}
            tabindex={props.tab_index.clone()}
            onclick={onclick}
        >
            if props.loading {
                <Spinner />
            }
            { icon(&props.left_icon) }
            <span class={classes!(props.loading.then_some("opacity-70"))}>
                { for props.children.iter() }
            </span>
            { icon(&props.right_icon) }
        </button>
    }
}

#[function_component(Spinner)]
fn spinner() -> Html {
    html! {
        <svg
            class="animate-spin -ml-1 mr-2 h-4 w-4"
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" />
            <path
                class="opacity-75"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
            />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_fall_back_to_defaults() {
        assert_eq!(ButtonVariant::parse_or_default("outline"), ButtonVariant::Outline);
        assert_eq!(ButtonVariant::parse_or_default("neon"), ButtonVariant::Primary);
        assert_eq!(ButtonSize::parse_or_default("lg"), ButtonSize::Lg);
        assert_eq!(ButtonSize::parse_or_default("xxl"), ButtonSize::Md);
    }

    #[test]
    fn classes_combine_variant_size_and_width() {
        let classes = button_classes(ButtonVariant::Outline, ButtonSize::Lg, true, &classes!("extra"));
        for class in ["border-primary-500", "px-8", "w-full", "extra", "min-h-[44px]"] {
            assert!(classes.contains(class), "missing {class} in {:?}", classes);
        }
        assert!(!classes.contains("bg-primary-500"));
    }

    #[test]
    fn classes_are_deterministic() {
        let a = button_classes(ButtonVariant::Ghost, ButtonSize::Sm, false, &Classes::new());
        let b = button_classes(ButtonVariant::Ghost, ButtonSize::Sm, false, &Classes::new());
        assert_eq!(a.to_string(), b.to_string());
        assert!(!a.contains("w-full"));
    }
}
