use yew::prelude::*;

use super::{Footer, Header};

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    #[prop_or_default]
    pub children: Html,
}

/// Header, page content, footer, stacked vertically.
#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    html! {
        <section class="dashboard-layout">
            <Header />
            { props.children.clone() }
            <Footer />
        </section>
    }
}
