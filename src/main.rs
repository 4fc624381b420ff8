use yew::prelude::*;
use log::{info, Level};

mod config;
mod reveal;
mod scroll;
mod selection;
mod submission;
mod pages {
    pub mod landing;
}
mod components {
    pub mod contact_form;
    pub mod nav;
    pub mod program_cards;
    pub mod success_overlay;
}

use components::nav::{MenuHandle, MenuState, Nav};
use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    let menu = use_state(MenuState::default);

    html! {
        <ContextProvider<MenuHandle> context={menu}>
            <Nav />
            <Landing />
        </ContextProvider<MenuHandle>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
