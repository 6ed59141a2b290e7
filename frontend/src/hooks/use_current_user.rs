//! Hook for loading the signed-in user from the session backend.

use shared::{SessionApi, SessionState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::HttpSessionApi;

/// Return value from the use_current_user hook.
pub struct UseCurrentUser {
    /// What is currently known about the session
    pub state: SessionState,
    /// Drop the loaded user and ask the backend again
    pub refresh: Callback<()>,
}

/// Tracks which user lookup is the latest one.
///
/// A lookup started before a refresh may resolve after it; only the answer
/// to the newest lookup is allowed to land.
#[derive(Debug, Default)]
pub struct LookupGuard {
    latest: u32,
}

impl LookupGuard {
    /// Register a new lookup and return its ticket.
    pub fn start(&mut self) -> u32 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn is_current(&self, ticket: u32) -> bool {
        self.latest == ticket
    }
}

/// Hook for fetching the current user.
///
/// Starts as [`SessionState::NotLoaded`] and fetches on mount. Calling
/// `refresh` resets to `NotLoaded` before fetching again, so nothing rendered
/// from the previous user survives a sign-out.
///
/// A failed fetch is logged and treated as signed out.
#[hook]
pub fn use_current_user() -> UseCurrentUser {
    let state = use_state(SessionState::default);
    let refresh_trigger = use_state(|| 0u32);
    let guard = use_mut_ref(LookupGuard::default);

    {
        let state = state.clone();
        let generation = *refresh_trigger;
        use_effect_with(generation, move |_| {
            let ticket = guard.borrow_mut().start();
            state.set(SessionState::NotLoaded);
            spawn_local(async move {
                let resolved = match HttpSessionApi::new().current_user().await {
                    Ok(user) => SessionState::from(user),
                    Err(e) => {
                        log::error!("Failed to load current user: {}", e);
                        SessionState::LoggedOut
                    }
                };
                if !guard.borrow().is_current(ticket) {
                    log::debug!("Discarding superseded user lookup");
                    return;
                }
                state.set(resolved);
            });
            || ()
        });
    }

    let refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| {
            refresh_trigger.set(*refresh_trigger + 1);
        })
    };

    UseCurrentUser {
        state: (*state).clone(),
        refresh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_lookup_is_current() {
        let mut guard = LookupGuard::default();
        let before_refresh = guard.start();
        assert!(guard.is_current(before_refresh));

        let after_refresh = guard.start();
        assert!(!guard.is_current(before_refresh));
        assert!(guard.is_current(after_refresh));
    }

    #[test]
    fn stale_answer_arriving_last_is_rejected() {
        let mut guard = LookupGuard::default();
        let first = guard.start();
        let second = guard.start();
        // The newer lookup answers first, the older one afterwards
        assert!(guard.is_current(second));
        assert!(!guard.is_current(first));
    }

    #[test]
    fn tickets_survive_wraparound() {
        let mut guard = LookupGuard { latest: u32::MAX };
        let ticket = guard.start();
        assert_eq!(ticket, 0);
        assert!(guard.is_current(ticket));
    }
}
