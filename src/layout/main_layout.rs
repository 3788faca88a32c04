use yew::prelude::*;

use super::{AccessibilityControls, Navigation, ScrollProgress};
use crate::components::{Container, ContainerPadding, ContainerSize};
use crate::utils::is_valid_email;

pub const CONTACT_EMAIL: &str = "contato@acolhemente.com";

const SKIP_LINK_CLASSES: &str = "sr-only focus:not-sr-only focus:absolute focus:top-4 focus:left-4 focus:z-50 \
    focus:px-4 focus:py-2 focus:bg-primary-500 focus:text-white focus:rounded-lg focus:shadow-lg \
    focus:outline-none focus:ring-2 focus:ring-primary-300";

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    #[prop_or(true)]
    pub show_navigation: bool,
    #[prop_or(true)]
    pub show_accessibility_controls: bool,
    #[prop_or(true)]
    pub show_scroll_progress: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MainLayout)]
pub fn main_layout(props: &MainLayoutProps) -> Html {
    html! {
        <div class={classes!("min-h-screen", "flex", "flex-col", props.class.clone())}>
            <div class="sr-only focus-within:not-sr-only">
                <a href="#main-content" class={SKIP_LINK_CLASSES}>
                    {"Pular para o conteúdo principal"}
                </a>
                if props.show_navigation {
                    <a href="#navigation" class={SKIP_LINK_CLASSES}>
                        {"Pular para a navegação"}
                    </a>
                }
            </div>

            if props.show_scroll_progress {
                <ScrollProgress />
            }

            if props.show_navigation {
                <header role="banner">
                    <Navigation />
                </header>
            }

            if props.show_accessibility_controls {
                <AccessibilityControls />
            }

            <main id="main-content" class="flex-1 focus:outline-none" tabindex="-1" role="main">
                { for props.children.iter() }
            </main>

            <Footer />
        </div>
    }
}

fn contact_link(email: &'static str) -> Html {
    if is_valid_email(email) {
        html! {
            <a
                href={format!("mailto:{}", email)}
                class="hover:text-white transition-colors focus:outline-none focus:ring-2 focus:ring-primary-400 rounded"
            >
                { email }
            </a>
        }
    } else {
        html! { <span>{ email }</span> }
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let link_class = "hover:text-white transition-colors focus:outline-none focus:ring-2 focus:ring-primary-400 rounded";

    html! {
        <footer class="bg-neutral-900 text-neutral-300" role="contentinfo">
            <Container size={ContainerSize::Lg} padding={ContainerPadding::Md}>
                <div class="py-12">
                    <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                        <div class="col-span-1 md:col-span-2">
                            <div class="flex items-center space-x-2 mb-4">
                                <div class="w-8 h-8 bg-primary-500 rounded-lg flex items-center justify-center">
                                    <span class="text-white font-bold text-sm">{"A"}</span>
                                </div>
                                <span class="text-xl font-bold text-white">{"AcolheMente"}</span>
                            </div>
                            <p class="text-neutral-400 mb-4 max-w-md">
                                {"Uma plataforma acolhedora para apoio em saúde mental, \
                                  construída com foco em acessibilidade e segurança."}
                            </p>
                            <p class="text-sm text-neutral-500">
                                {"Em caso de emergência, ligue para o CVV: 188 (24 horas, gratuito)."}
                            </p>
                        </div>

                        <div>
                            <h2 class="text-sm font-semibold text-white uppercase tracking-wider mb-4">
                                {"Navegação"}
                            </h2>
                            <ul class="space-y-2">
                                <li><a href="#sobre" class={link_class}>{"Sobre"}</a></li>
                                <li><a href="#recursos" class={link_class}>{"Recursos"}</a></li>
                                <li><a href="#seguranca" class={link_class}>{"Segurança"}</a></li>
                            </ul>
                        </div>

                        <div>
                            <h2 class="text-sm font-semibold text-white uppercase tracking-wider mb-4">
                                {"Contato"}
                            </h2>
                            <ul class="space-y-2">
                                <li>{ contact_link(CONTACT_EMAIL) }</li>
                                <li><a href="#acessibilidade" class={link_class}>{"Declaração de acessibilidade"}</a></li>
                            </ul>
                        </div>
                    </div>

                    <div class="border-t border-neutral-800 mt-8 pt-8 text-sm text-neutral-500 text-center">
                        {"© AcolheMente. Todos os direitos reservados."}
                    </div>
                </div>
            </Container>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_address_is_mailable() {
        assert!(is_valid_email(CONTACT_EMAIL));
    }
}
