use log::info;
use yew::prelude::*;

mod accessibility;
mod components;
mod config;
mod error;
mod keyboard;
mod layout;
mod scheduler;
mod utils;
mod pages {
    pub mod home;
}

use accessibility::AccessibilityProvider;
use layout::MainLayout;
use pages::home::Home;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AccessibilityProvider>
            <MainLayout>
                <Home />
            </MainLayout>
        </AccessibilityProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logger
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
