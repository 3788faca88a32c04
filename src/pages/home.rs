use web_sys::MouseEvent;
use yew::prelude::*;

use crate::accessibility::use_accessibility;
use crate::components::card::{CardElement, CardPadding, HeadingLevel};
use crate::components::container::ContainerElement;
use crate::components::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    CardVariant, Container, ContainerSize, Section, SectionBackground, SectionSpacing,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        id: "perfis",
        icon: "🤝",
        title: "Perfis de apoio",
        description: "Encontre pessoas e profissionais que acolhem sem julgamentos, no seu ritmo.",
    },
    Feature {
        id: "recursos",
        icon: "♿",
        title: "Acessível por padrão",
        description: "Navegação completa por teclado, alto contraste e texto ajustável em todas as páginas.",
    },
    Feature {
        id: "seguranca",
        icon: "🔒",
        title: "Espaço seguro",
        description: "Suas preferências ficam apenas no seu navegador. Nada é compartilhado sem o seu consentimento.",
    },
];

#[function_component(Hero)]
fn hero() -> Html {
    let accessibility = use_accessibility();
    let on_start = Callback::from(move |_: MouseEvent| {
        accessibility.announce_to_screen_reader("Bem-vindo ao AcolheMente");
    });

    html! {
        <Section id="sobre" spacing={SectionSpacing::Xl} background={SectionBackground::Primary} center_content={true}>
            <div class="text-center max-w-3xl">
                <h1 class="text-4xl md:text-5xl font-bold text-neutral-900 mb-6">
                    {"Cuidado em saúde mental, com acolhimento e acessibilidade"}
                </h1>
                <p class="text-lg text-neutral-600 mb-8 leading-relaxed">
                    {"O AcolheMente conecta você a uma rede de apoio pensada para todas as pessoas, \
                      incluindo quem usa leitores de tela, teclado ou precisa de menos movimento."}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <Button variant={ButtonVariant::Primary} size={ButtonSize::Lg} onclick={on_start}>
                        {"Começar Agora"}
                    </Button>
                    <Button variant={ButtonVariant::Outline} size={ButtonSize::Lg}>
                        {"Saiba Mais"}
                    </Button>
                </div>
            </div>
        </Section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <Section id="recursos" spacing={SectionSpacing::Lg}>
            <h2 class="text-3xl font-bold text-neutral-900 text-center mb-12">{"Como cuidamos de você"}</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                { for FEATURES.iter().map(|feature| html! {
                    <Card
                        key={feature.id}
                        id={feature.id}
                        variant={CardVariant::Interactive}
                        element={CardElement::Article}
                    >
                        <CardHeader>
                            <span class="text-3xl" aria-hidden="true">{ feature.icon }</span>
                            <CardTitle>{ feature.title }</CardTitle>
                        </CardHeader>
                        <CardContent class={classes!("mt-4")}>
                            <CardDescription>{ feature.description }</CardDescription>
                        </CardContent>
                    </Card>
                }) }
            </div>
        </Section>
    }
}

#[function_component(ComponentShowcase)]
fn component_showcase() -> Html {
    let loading = use_state(|| false);
    let on_toggle_loading = {
        let loading = loading.clone();
        Callback::from(move |_: MouseEvent| loading.set(!*loading))
    };

    html! {
        <Section spacing={SectionSpacing::Lg} background={SectionBackground::Neutral}>
            <Card variant={CardVariant::Elevated} padding={CardPadding::Lg} element={CardElement::Section}>
                <CardHeader>
                    <CardTitle level={HeadingLevel::H2}>{"Componentes acessíveis"}</CardTitle>
                    <CardDescription>
                        {"Todos os botões podem ser usados pelo teclado e anunciam seu estado para leitores de tela."}
                    </CardDescription>
                </CardHeader>
                <CardContent class={classes!("mt-6")}>
                    <div class="flex flex-wrap gap-3">
                        <Button variant={ButtonVariant::Primary}>{"Primário"}</Button>
                        <Button variant={ButtonVariant::Secondary}>{"Secundário"}</Button>
                        <Button variant={ButtonVariant::Accent}>{"Destaque"}</Button>
                        <Button variant={ButtonVariant::Outline}>{"Contorno"}</Button>
                        <Button variant={ButtonVariant::Ghost}>{"Discreto"}</Button>
                    </div>
                    <div class="flex flex-wrap items-center gap-3 mt-6">
                        <Button size={ButtonSize::Sm}>{"Pequeno"}</Button>
                        <Button size={ButtonSize::Md}>{"Médio"}</Button>
                        <Button size={ButtonSize::Lg}>{"Grande"}</Button>
                    </div>
                </CardContent>
                <CardFooter class={classes!("gap-3", "flex-wrap")}>
                    <Button variant={ButtonVariant::Secondary} loading={*loading}>
                        {"Salvando"}
                    </Button>
                    <Button variant={ButtonVariant::Outline} disabled={true}>
                        {"Indisponível"}
                    </Button>
                    <Button variant={ButtonVariant::Ghost} onclick={on_toggle_loading}>
                        { if *loading { "Parar carregamento" } else { "Simular carregamento" } }
                    </Button>
                </CardFooter>
            </Card>
        </Section>
    }
}

#[function_component(CallToAction)]
fn call_to_action() -> Html {
    html! {
        <Container id="contato" size={ContainerSize::Md} element={ContainerElement::Section} class={classes!("py-16")}>
            <Card variant={CardVariant::Default} padding={CardPadding::Lg} class={classes!("text-center")}>
                <CardTitle level={HeadingLevel::H2} class={classes!("mb-4")}>
                    {"Você não precisa passar por isso sozinho"}
                </CardTitle>
                <CardDescription class={classes!("mb-8")}>
                    {"Crie seu perfil gratuitamente e encontre apoio quando precisar."}
                </CardDescription>
                <Button variant={ButtonVariant::Accent} size={ButtonSize::Lg}>
                    {"Criar meu perfil"}
                </Button>
            </Card>
        </Container>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <Hero />
            <Features />
            <ComponentShowcase />
            <CallToAction />
        </>
    }
}
