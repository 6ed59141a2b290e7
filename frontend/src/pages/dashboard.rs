use shared::SessionState;
use yew::prelude::*;

use crate::components::{use_layout, use_session, ConfigLink};

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let session = use_session();
    let config = use_layout();

    let body = match &session.state {
        SessionState::NotLoaded => html! {
            <div class="loading">
                <div class="spinner"></div>
                <p>{ "Loading..." }</p>
            </div>
        },
        SessionState::LoggedOut => html! {
            <div class="dashboard-signed-out">
                <h1>{ "Dashboard" }</h1>
                <p>{ "Create an account to keep track of your projects." }</p>
                <ConfigLink link={config.sign_up.clone()} classes="sign-up-button" />
            </div>
        },
        SessionState::LoggedIn(user) => html! {
            <div class="dashboard-welcome">
                <h1>{ "Dashboard" }</h1>
                <p>{ format!("Welcome back, {}.", user.name.as_deref().unwrap_or(&user.email)) }</p>
            </div>
        },
    };

    html! {
        <main class="page dashboard-page">
            { body }
        </main>
    }
}
