//! Site header: brand, pricing link and the session-dependent area.

use shared::{CurrentUser, LayoutConfig, NavLink, NavMenu, SessionState};
use yew::prelude::*;
use yew_router::prelude::*;

use super::{use_layout, use_session, AccountMenu, ConfigLink, Dropdown};
use crate::Route;

/// One entry of the session-dependent part of the header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeaderItem<'a> {
    /// Call to action for visitors who are not signed in
    SignUp(&'a NavLink),
    Menu(&'a NavMenu),
    Account(&'a CurrentUser),
}

/// What the header shows next to the pricing link for a given session.
///
/// Nothing while the session is loading, the sign-up link when signed
/// out, every configured menu followed by the account menu when signed in.
pub fn session_items<'a>(
    config: &'a LayoutConfig,
    state: &'a SessionState,
) -> Vec<HeaderItem<'a>> {
    match state {
        SessionState::NotLoaded => Vec::new(),
        SessionState::LoggedOut => vec![HeaderItem::SignUp(&config.sign_up)],
        SessionState::LoggedIn(user) => config
            .menus
            .iter()
            .map(HeaderItem::Menu)
            .chain(std::iter::once(HeaderItem::Account(user)))
            .collect(),
    }
}

#[derive(Properties, PartialEq)]
struct NavDropdownProps {
    menu: NavMenu,
}

#[function_component(NavDropdown)]
fn nav_dropdown(props: &NavDropdownProps) -> Html {
    let menu = &props.menu;
    html! {
        <Dropdown class="nav-menu" trigger={html! { { menu.label.clone() } }}>
            {
                menu.items.iter().map(|item| html! {
                    <div key={item.path.clone()} role="menuitem" class="dropdown-item">
                        <ConfigLink link={item.clone()} classes="dropdown-link" />
                    </div>
                }).collect::<Html>()
            }
        </Dropdown>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let session = use_session();
    let config = use_layout();

    let items = session_items(&config, &session.state)
        .into_iter()
        .map(|item| match item {
            HeaderItem::SignUp(link) => html! {
                <ConfigLink key="sign-up" link={link.clone()} classes="sign-up-button" />
            },
            HeaderItem::Menu(menu) => html! {
                <NavDropdown key={menu.label.clone()} menu={menu.clone()} />
            },
            HeaderItem::Account(user) => html! {
                <AccountMenu key="account" user={user.clone()} />
            },
        })
        .collect::<Html>();

    html! {
        <header class="site-header">
            <div class="site-header-inner">
                <Link<Route> to={Route::Home} classes="brand">
                    <span class="brand-logo" aria-hidden="true">{ "\u{273f}" }</span>
                    <span class="brand-name">{ config.brand.clone() }</span>
                </Link<Route>>
                <nav class="header-nav">
                    <ConfigLink link={config.pricing.clone()} classes="header-link" />
                    { items }
                </nav>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_session_shows_neither_branch() {
        let config = LayoutConfig::default();
        assert!(session_items(&config, &SessionState::NotLoaded).is_empty());
    }

    #[test]
    fn signed_out_shows_only_sign_up() {
        let config = LayoutConfig::default();
        let items = session_items(&config, &SessionState::LoggedOut);
        assert_eq!(items.len(), 1);
        match items[0] {
            HeaderItem::SignUp(link) => assert_eq!(link.path, "/sign-up"),
            other => panic!("unexpected item {:?}", other),
        }
    }

    #[test]
    fn signed_in_shows_static_menus_then_account() {
        let config = LayoutConfig::default();
        let state = SessionState::LoggedIn(CurrentUser::new("a@b.com"));
        let items = session_items(&config, &state);

        assert_eq!(items.len(), 4);
        for (item, expected) in items.iter().zip(&config.menus) {
            assert_eq!(*item, HeaderItem::Menu(expected));
        }
        match items[3] {
            HeaderItem::Account(user) => assert_eq!(user.avatar_fallback(), "a"),
            other => panic!("unexpected item {:?}", other),
        }
        assert!(!items.iter().any(|i| matches!(i, HeaderItem::SignUp(_))));
    }

    #[test]
    fn menus_do_not_depend_on_who_is_signed_in() {
        let config = LayoutConfig::default();
        let first = SessionState::LoggedIn(CurrentUser::new("a@b.com"));
        let second =
            SessionState::LoggedIn(CurrentUser::new("root@garden.example").with_name("Root"));

        let menus = |state: &SessionState| -> Vec<NavMenu> {
            session_items(&config, state)
                .into_iter()
                .filter_map(|item| match item {
                    HeaderItem::Menu(menu) => Some(menu.clone()),
                    _ => None,
                })
                .collect()
        };
        assert_eq!(menus(&first), menus(&second));
        assert_eq!(menus(&first), config.menus);
    }
}
