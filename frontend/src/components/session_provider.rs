//! Session Provider
//!
//! Owns the current-user state and the layout configuration for the whole
//! app and hands them to descendants through Yew contexts.

use shared::{LayoutConfig, SessionState};
use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::{use_current_user, use_layout_config};

/// The session as seen by the header and pages.
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub state: SessionState,
    /// Discard the loaded session and fetch it again
    pub refresh: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let current_user = use_current_user();
    let config = use_layout_config();

    let session = SessionContext {
        state: current_user.state,
        refresh: current_user.refresh,
    };

    html! {
        <ContextProvider<SessionContext> context={session}>
            <ContextProvider<Rc<LayoutConfig>> context={config}>
                { props.children.clone() }
            </ContextProvider<Rc<LayoutConfig>>>
        </ContextProvider<SessionContext>>
    }
}

/// Current session; `NotLoaded` with a no-op refresh outside a provider.
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        log::warn!("use_session called outside of a SessionProvider");
        SessionContext {
            state: SessionState::NotLoaded,
            refresh: Callback::from(|_| ()),
        }
    })
}

/// Layout configuration; the built-in table outside a provider.
#[hook]
pub fn use_layout() -> Rc<LayoutConfig> {
    use_context::<Rc<LayoutConfig>>().unwrap_or_default()
}
