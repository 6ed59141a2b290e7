//! Render components to HTML strings for host-side tests.

use shared::SessionState;
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::Router;

use super::session_provider::SessionContext;

#[derive(Properties, PartialEq)]
struct HarnessProps {
    /// `None` renders without a session provider
    session: Option<SessionState>,
    children: Html,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let history = use_state(|| AnyHistory::from(MemoryHistory::new()));
    let content = props.children.clone();

    let content = match &props.session {
        Some(state) => {
            let session = SessionContext {
                state: state.clone(),
                refresh: Callback::from(|_| ()),
            };
            html! {
                <ContextProvider<SessionContext> context={session}>
                    { content }
                </ContextProvider<SessionContext>>
            }
        }
        None => content,
    };

    html! {
        <Router history={(*history).clone()}>
            { content }
        </Router>
    }
}

async fn render(props: HarnessProps) -> String {
    tokio::task::LocalSet::new()
        .run_until(
            LocalServerRenderer::<Harness>::with_props(props)
                .hydratable(false)
                .render(),
        )
        .await
}

/// Render inside a router, with no session provider above it.
pub async fn render_in_router(children: Html) -> String {
    render(HarnessProps {
        session: None,
        children,
    })
    .await
}

/// Render inside a router with `state` as the current session.
pub async fn render_with_session(state: SessionState, children: Html) -> String {
    render(HarnessProps {
        session: Some(state),
        children,
    })
    .await
}
