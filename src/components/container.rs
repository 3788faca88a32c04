use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContainerSize {
    Xs,
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
    Full,
}

impl ContainerSize {
    pub fn parse_or_default(name: &str) -> Self {
        match name {
            "xs" => Self::Xs,
            "sm" => Self::Sm,
            "md" => Self::Md,
            "xl" => Self::Xl,
            "full" => Self::Full,
            _ => Self::Lg,
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Xs => "max-w-2xl",
            Self::Sm => "max-w-4xl",
            Self::Md => "max-w-5xl",
            Self::Lg => "max-w-7xl",
            Self::Xl => "max-w-screen-2xl",
            Self::Full => "max-w-none",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContainerPadding {
    None,
    Sm,
    #[default]
    Md,
    Lg,
}

impl ContainerPadding {
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
            Self::Sm => "px-4 sm:px-6",
            Self::Md => "px-4 sm:px-6 lg:px-8",
            Self::Lg => "px-6 sm:px-8 lg:px-12",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContainerElement {
    #[default]
    Div,
    Main,
    Section,
    Article,
    Header,
    Footer,
}

impl ContainerElement {
    fn tag(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Main => "main",
            Self::Section => "section",
            Self::Article => "article",
            Self::Header => "header",
            Self::Footer => "footer",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionSpacing {
    None,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl SectionSpacing {
    pub fn parse_or_default(name: &str) -> Self {
        match name {
            "none" => Self::None,
            "sm" => Self::Sm,
            "lg" => Self::Lg,
            "xl" => Self::Xl,
            _ => Self::Md,
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Sm => "py-12",
            Self::Md => "py-16",
            Self::Lg => "py-24",
            Self::Xl => "py-32",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionBackground {
    #[default]
    Transparent,
    Neutral,
    Primary,
    Secondary,
}

impl SectionBackground {
    pub fn parse_or_default(name: &str) -> Self {
        match name {
            "neutral" => Self::Neutral,
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            _ => Self::Transparent,
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Transparent => "",
            Self::Neutral => "bg-neutral-50",
            Self::Primary => "bg-primary-50",
            Self::Secondary => "bg-secondary-50",
        }
    }
}

pub fn container_classes(
    size: ContainerSize,
    padding: ContainerPadding,
    center_content: bool,
    extra: &Classes,
) -> Classes {
    let mut classes = classes!("mx-auto");
    classes.push(size.classes());
    classes.push(padding.classes());
    if center_content {
        classes.push(classes!("flex", "flex-col", "items-center", "justify-center"));
    }
    classes.push(extra.clone());
    classes
}

pub fn section_classes(spacing: SectionSpacing, background: SectionBackground, extra: &Classes) -> Classes {
    let mut classes = Classes::from(spacing.classes());
    classes.push(background.classes());
    classes.push(extra.clone());
    classes
}

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    #[prop_or_default]
    pub size: ContainerSize,
    #[prop_or_default]
    pub padding: ContainerPadding,
    #[prop_or_default]
    pub element: ContainerElement,
    #[prop_or_default]
    pub center_content: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Container)]
pub fn container(props: &ContainerProps) -> Html {
    let classes = container_classes(props.size, props.padding, props.center_content, &props.class);

    html! {
        <@{props.element.tag()} id={props.id.clone()} class={classes}>
            { for props.children.iter() }
        </@>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub spacing: SectionSpacing,
    #[prop_or_default]
    pub background: SectionBackground,
    #[prop_or_default]
    pub size: ContainerSize,
    #[prop_or_default]
    pub padding: ContainerPadding,
    #[prop_or(ContainerElement::Section)]
    pub element: ContainerElement,
    #[prop_or_default]
    pub center_content: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// A [`Container`] with vertical spacing and a background band, rendered as `<section>` by default.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let classes = section_classes(props.spacing, props.background, &props.class);

    html! {
        <Container
            size={props.size}
            padding={props.padding}
            element={props.element}
            center_content={props.center_content}
            class={classes}
            id={props.id.clone()}
        >
            { for props.children.iter() }
        </Container>
    }
}
