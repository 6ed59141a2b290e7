//! Simple content pages: pricing, sign-up, about, contact and the
//! destinations of the header menus.

use shared::LayoutConfig;
use yew::prelude::*;

use super::not_found::NotFoundPage;
use crate::components::use_layout;

#[derive(Properties, PartialEq)]
pub struct InfoPageProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(InfoPage)]
pub fn info_page(props: &InfoPageProps) -> Html {
    html! {
        <main class="page info-page">
            <h1>{ props.title.clone() }</h1>
            { props.children.clone() }
        </main>
    }
}

/// Text of the menu entry pointing at `/{slug}`, if any.
pub fn menu_entry_title<'a>(config: &'a LayoutConfig, slug: &str) -> Option<&'a str> {
    let path = format!("/{}", slug);
    config
        .menus
        .iter()
        .flat_map(|menu| menu.items.iter())
        .find(|item| item.path == path)
        .map(|item| item.text.as_str())
}

#[derive(Properties, PartialEq)]
pub struct MenuEntryPageProps {
    pub slug: String,
}

/// Landing page for a header menu destination.
#[function_component(MenuEntryPage)]
pub fn menu_entry_page(props: &MenuEntryPageProps) -> Html {
    let config = use_layout();

    match menu_entry_title(&config, &props.slug) {
        Some(title) => html! {
            <InfoPage title={title.to_string()}>
                <p>{ "Nothing here yet." }</p>
            </InfoPage>
        },
        None => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{NavLink, NavMenu};

    #[test]
    fn finds_default_menu_entries() {
        let config = LayoutConfig::default();
        assert_eq!(menu_entry_title(&config, "option1"), Some("Option 1"));
        assert_eq!(menu_entry_title(&config, "option6"), Some("Option 6"));
    }

    #[test]
    fn unknown_slug_has_no_entry() {
        let config = LayoutConfig::default();
        assert_eq!(menu_entry_title(&config, "option7"), None);
        // Footer links are not menu entries
        assert_eq!(menu_entry_title(&config, "about"), None);
    }

    #[test]
    fn follows_configured_menus() {
        let config = LayoutConfig {
            menus: vec![NavMenu::new(
                "Beds",
                vec![NavLink::new("Raised beds", "/raised")],
            )],
            ..LayoutConfig::default()
        };
        assert_eq!(menu_entry_title(&config, "raised"), Some("Raised beds"));
        assert_eq!(menu_entry_title(&config, "option1"), None);
    }
}
