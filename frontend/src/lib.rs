pub mod api;
mod components;
mod hooks;
pub mod navigation;
mod pages;
pub mod utils;

use components::{DashboardLayout, SessionProvider};
use pages::{
    dashboard::DashboardPage,
    home::HomePage,
    info::{InfoPage, MenuEntryPage},
    not_found::NotFoundPage,
};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/pricing")]
    Pricing,
    #[at("/sign-up")]
    SignUp,
    #[at("/dashboard")]
    Dashboard,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    /// Destinations of the configurable header menus
    #[at("/:slug")]
    Placeholder { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Pricing => html! {
            <InfoPage title="Pricing">
                <p>{ "Plans for hobby plots and community gardens alike." }</p>
            </InfoPage>
        },
        Route::SignUp => html! {
            <InfoPage title="Sign Up">
                <p>{ "Create an account to start planning your garden projects." }</p>
            </InfoPage>
        },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::About => html! {
            <InfoPage title="About">
                <p>{ "Garden Projects helps growers organise ideas, projects and upkeep." }</p>
            </InfoPage>
        },
        Route::Contact => html! {
            <InfoPage title="Contact">
                <p>{ "Questions or feedback? We would love to hear from you." }</p>
            </InfoPage>
        },
        Route::Placeholder { slug } => html! { <MenuEntryPage {slug} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <DashboardLayout>
                    <Switch<Route> render={switch} />
                </DashboardLayout>
            </SessionProvider>
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    yew::Renderer::<App>::new().render();
}
