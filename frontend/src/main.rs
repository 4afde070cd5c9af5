use log::info;
use yew::prelude::*;

mod booking;
mod config;
mod content;
mod state;
mod components {
    pub mod benefit_item;
    pub mod fallback_image;
    pub mod icon;
    pub mod nav_link;
    pub mod process_step;
    pub mod service_card;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    info!("Rendering landing page");
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
