use yew::prelude::*;

use crate::components::quiz::InteractiveQuiz;
use crate::pages::hero::HeroSection;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <HeroSection />
            <InteractiveQuiz />
        </div>
    }
}
