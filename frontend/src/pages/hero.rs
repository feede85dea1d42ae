use log::warn;
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

fn open_intro_video() {
    let opened = window()
        .and_then(|w| w.open_with_url_and_target(config::INTRO_VIDEO_URL, "_blank").ok())
        .flatten();
    if opened.is_none() {
        warn!("Browser refused to open the intro video window");
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let navigator = use_navigator();

    let on_explore = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::Insurance);
        }
    });

    let on_watch = Callback::from(|_: MouseEvent| open_intro_video());

    html! {
        <header class="hero">
            <div class="hero-background"></div>
            <div class="hero-content">
                <div class="hero-header">
                    <h1>{"Protect What Matters. Build What Lasts."}</h1>
                    <p class="hero-subtitle">
                        {"Life insurance, retirement income and wealth strategies built around your family, not a sales quota."}
                    </p>
                </div>
                <div class="hero-cta-group">
                    <button class="hero-cta" onclick={on_explore}>
                        {"Explore Coverage"}
                    </button>
                    <button class="hero-secondary" onclick={on_watch}>
                        {"▶️ Watch How It Works"}
                    </button>
                </div>
            </div>
        </header>
    }
}
