use yew::prelude::*;

const BASE_CLASSES: &str = "bg-white rounded-2xl border border-neutral-200 transition-all duration-200";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Interactive,
    Elevated,
}

impl CardVariant {
    pub fn parse_or_default(name: &str) -> Self {
        match name {
            "interactive" => Self::Interactive,
            "elevated" => Self::Elevated,
            _ => Self::Default,
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Default => "shadow-soft",
            Self::Interactive => {
                "shadow-soft hover:shadow-medium cursor-pointer hover:border-primary-300 hover:-translate-y-0.5 \
                 focus-within:border-primary-500 focus-within:ring-2 focus-within:ring-primary-500 \
                 focus-within:ring-offset-2"
            }
            Self::Elevated => "shadow-medium",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardPadding {
    None,
    Sm,
    #[default]
    Md,
    Lg,
}

impl CardPadding {
    pub fn parse_or_default(name: &str) -> Self {
        match name {
            "none" => Self::None,
            "sm" => Self::Sm,
            "lg" => Self::Lg,
            _ => Self::Md,
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Sm => "p-4",
            Self::Md => "p-6",
            Self::Lg => "p-8",
        }
    }
}

/// Element a card renders as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardElement {
    #[default]
    Div,
    Article,
    Section,
}

impl CardElement {
    fn tag(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Article => "article",
            Self::Section => "section",
        }
    }
}

pub fn card_classes(variant: CardVariant, padding: CardPadding, extra: &Classes) -> Classes {
    let mut classes = Classes::from(BASE_CLASSES);
    classes.push(variant.classes());
    classes.push(padding.classes());
    classes.push(extra.clone());
    classes
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub variant: CardVariant,
    #[prop_or_default]
    pub padding: CardPadding,
    #[prop_or_default]
    pub element: CardElement,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let classes = card_classes(props.variant, props.padding, &props.class);

    html! {
        <@{props.element.tag()} id={props.id.clone()} class={classes}>
            { for props.children.iter() }
        </@>
    }
}

/// Props shared by the simple card sections.
#[derive(Properties, PartialEq)]
pub struct CardPartProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CardHeader)]
pub fn card_header(props: &CardPartProps) -> Html {
    html! {
        <div class={classes!("flex", "flex-col", "space-y-1.5", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl Default for HeadingLevel {
    fn default() -> Self {
        HeadingLevel::H3
    }
}

impl HeadingLevel {
    fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CardTitleProps {
    #[prop_or_default]
    pub level: HeadingLevel,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CardTitle)]
pub fn card_title(props: &CardTitleProps) -> Html {
    let classes = classes!(
        "text-xl",
        "font-semibold",
        "leading-none",
        "tracking-tight",
        "text-neutral-900",
        props.class.clone()
    );

    html! {
        <@{props.level.tag()} class={classes}>
            { for props.children.iter() }
        </@>
    }
}

#[function_component(CardDescription)]
pub fn card_description(props: &CardPartProps) -> Html {
    html! {
        <p class={classes!("text-sm", "text-neutral-600", "leading-relaxed", props.class.clone())}>
            { for props.children.iter() }
        </p>
    }
}

#[function_component(CardContent)]
pub fn card_content(props: &CardPartProps) -> Html {
    html! {
        <div class={classes!("pt-0", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(CardFooter)]
pub fn card_footer(props: &CardPartProps) -> Html {
    html! {
        <div class={classes!("flex", "items-center", "pt-6", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
