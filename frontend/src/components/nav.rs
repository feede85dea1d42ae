use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const SCROLLED_THRESHOLD_PX: i32 = 80;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    pub fn class(self) -> &'static str {
        if self.open {
            "nav-right mobile-menu-open"
        } else {
            "nav-right"
        }
    }
}

const NAV_LINKS: [(Route, &str); 4] = [
    (Route::Home, "Home"),
    (Route::Insurance, "Insurance"),
    (Route::Retirement, "Retirement"),
    (Route::Recruiting, "Careers"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(MobileMenu::default);
    let is_scrolled = use_state(|| false);
    let navigator = use_navigator();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = window.clone().map(|window| {
                Closure::wrap(Box::new(move || {
                    let scroll_top = window
                        .document()
                        .and_then(|d| d.document_element())
                        .map(|e| e.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > SCROLLED_THRESHOLD_PX);
                }) as Box<dyn FnMut()>)
            });

            if let (Some(window), Some(callback)) = (window.as_ref(), scroll_callback.as_ref()) {
                let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            }

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggled());
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.closed());
        })
    };

    let on_cta = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.closed());
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Insurance);
            }
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Summit Financial Partners"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Toggle menu" aria-expanded={menu.is_open().to_string()} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu.class()}>
                    { for NAV_LINKS.iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route.clone()} classes="nav-link">
                                {*label}
                            </Link<Route>>
                        </div>
                    }) }
                    <button class="nav-cta" onclick={on_cta}>
                        {"Get a Free Quote"}
                    </button>
                </div>
            </div>
        </nav>
    }
}
