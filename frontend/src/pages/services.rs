use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
struct ServicePanelProps {
    title: &'static str,
    intro: &'static str,
    points: &'static [&'static str],
}

#[function_component(ServicePanel)]
fn service_panel(props: &ServicePanelProps) -> Html {
    html! {
        <div class="service-page">
            <section class="service-panel">
                <h1>{props.title}</h1>
                <p class="service-intro">{props.intro}</p>
                <ul class="feature-list">
                    { for props.points.iter().map(|point| html! { <li>{*point}</li> }) }
                </ul>
                <Link<Route> to={Route::Home} classes="forward-link">
                    <button class="hero-cta">{"Take the 60-Second Quiz"}</button>
                </Link<Route>>
            </section>
        </div>
    }
}

const INSURANCE_POINTS: &[&str] = &[
    "Income replacement for your family",
    "Living benefits for critical and chronic illness",
    "Mortgage and debt protection",
];

const RETIREMENT_POINTS: &[&str] = &[
    "Annuities with guaranteed lifetime income",
    "401(k) and IRA rollovers",
    "Tax-efficient withdrawal planning",
];

const RECRUITING_POINTS: &[&str] = &[
    "Flexible schedule, full or part time",
    "Licensing support and ongoing training",
    "Leadership and agency ownership paths",
];

#[function_component(Insurance)]
pub fn insurance() -> Html {
    html! {
        <ServicePanel
            title="Life Insurance"
            intro="Term, whole and indexed universal life policies compared side by side, so you only pay for the protection you need."
            points={INSURANCE_POINTS}
        />
    }
}

#[function_component(Retirement)]
pub fn retirement() -> Html {
    html! {
        <ServicePanel
            title="Retirement Planning"
            intro="Turn savings into dependable income with strategies that protect against market downturns and longevity risk."
            points={RETIREMENT_POINTS}
        />
    }
}

#[function_component(Recruiting)]
pub fn recruiting() -> Html {
    html! {
        <ServicePanel
            title="Build a Career With Us"
            intro="Licensed or new to the industry, we train and mentor agents who want to help families and grow their own business."
            points={RECRUITING_POINTS}
        />
    }
}
