use yew::prelude::*;

use crate::components::{use_layout, ConfigLink};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let config = use_layout();

    html! {
        <main class="page home-page">
            <div class="hero">
                <h1>{ config.brand.clone() }</h1>
                <p class="tagline">
                    { "Plan, plant and look after every bed in one place." }
                </p>
                <div class="hero-actions">
                    <ConfigLink link={config.pricing.clone()} classes="hero-link" />
                </div>
            </div>
        </main>
    }
}
