use shared::NavLink;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::navigation::route_for;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ConfigLinkProps {
    pub link: NavLink,
    #[prop_or_default]
    pub classes: Classes,
    /// Rendered before the link text (icons)
    #[prop_or_default]
    pub children: Html,
}

/// A configured link: client-side navigation when the router knows the
/// path, a plain anchor otherwise.
#[function_component(ConfigLink)]
pub fn config_link(props: &ConfigLinkProps) -> Html {
    let content = html! {
        <>
            { props.children.clone() }
            <span>{ props.link.text.clone() }</span>
        </>
    };

    match route_for(&props.link.path) {
        Some(route) => html! {
            <Link<Route> to={route} classes={props.classes.clone()}>
                { content }
            </Link<Route>>
        },
        None => html! {
            <a href={props.link.path.clone()} class={props.classes.clone()}>
                { content }
            </a>
        },
    }
}
