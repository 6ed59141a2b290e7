use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="page not-found-page">
            <h1>{ "Page not found" }</h1>
            <p>{ "The page you were looking for does not exist." }</p>
            <Link<Route> to={Route::Home} classes="header-link">{ "Back to home" }</Link<Route>>
        </main>
    }
}
