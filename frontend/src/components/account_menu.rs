//! Account Menu
//!
//! Avatar dropdown for the signed-in user with a dashboard link and sign out.

use shared::CurrentUser;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use super::{use_layout, use_session, ConfigLink, Dropdown};
use crate::api::HttpSessionApi;
use crate::navigation::RouterNavigation;

#[derive(Properties, PartialEq)]
pub struct AccountMenuProps {
    pub user: CurrentUser,
}

#[function_component(AccountMenu)]
pub fn account_menu(props: &AccountMenuProps) -> Html {
    let session = use_session();
    let config = use_layout();
    let navigator = use_navigator();

    let on_sign_out = {
        let refresh = session.refresh.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(navigator) = navigator.clone() else {
                log::error!("Sign out requested outside of a router");
                return;
            };
            let nav = RouterNavigation::new(navigator, refresh.clone());
            spawn_local(async move {
                log::info!("Signing out");
                if let Err(e) = shared::sign_out(&HttpSessionApi::new(), &nav).await {
                    log::error!("Failed to sign out: {}", e);
                }
            });
        })
    };

    let user = &props.user;
    let avatar = html! {
        <span class="avatar" title={user.avatar_alt().to_string()}>
            <span class="avatar-fallback">{ user.avatar_fallback() }</span>
        </span>
    };

    html! {
        <Dropdown class="account-menu" trigger={avatar} trigger_label={AttrValue::from("Account")}>
            <div role="menuitem" class="dropdown-item">
                <ConfigLink link={config.dashboard.clone()} classes="dropdown-link">
                    <span class="icon icon-home" aria-hidden="true">{ "\u{2302}" }</span>
                </ConfigLink>
            </div>
            <button type="button" role="menuitem" class="dropdown-item sign-out" onclick={on_sign_out}>
                <span class="icon icon-sign-out" aria-hidden="true">{ "\u{21e5}" }</span>
                <span>{ "Sign out" }</span>
            </button>
        </Dropdown>
    }
}
