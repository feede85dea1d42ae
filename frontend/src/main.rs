use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod api;
mod config;
mod error;
mod quiz {
    pub mod lead;
    pub mod machine;
    pub mod questions;
}
mod components {
    pub mod nav;
    pub mod quiz;
    pub mod toast;
}
mod pages {
    pub mod hero;
    pub mod home;
    pub mod services;
}

use components::{nav::Nav, toast::ToastProvider};
use pages::{
    home::Home,
    services::{Insurance, Recruiting, Retirement},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/insurance")]
    Insurance,
    #[at("/retirement")]
    Retirement,
    #[at("/recruiting")]
    Recruiting,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Insurance => {
            info!("Rendering Insurance page");
            html! { <Insurance /> }
        },
        Route::Retirement => {
            info!("Rendering Retirement page");
            html! { <Retirement /> }
        },
        Route::Recruiting => {
            info!("Rendering Recruiting page");
            html! { <Recruiting /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Nav />
                <Switch<Route> render={switch} />
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
