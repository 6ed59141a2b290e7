//! Sign-out sequencing.
//!
//! The session backend is told first. Only once it has answered is the
//! navigation layer asked to drop its cached view state and go home.

use crate::api::{ApiError, SessionApi};

/// Where the user lands after signing out
pub const HOME_PATH: &str = "/";

/// The client-side navigation operations sign-out relies on.
pub trait ClientNavigation {
    /// Discard any cached view state (e.g. the loaded current user)
    fn refresh(&self);

    /// Navigate to `path` without a full page load
    fn push(&self, path: &str);
}

/// Sign the current user out, then refresh and navigate to [`HOME_PATH`].
///
/// An `Auth` error from the backend means the session is already gone, so
/// navigation still happens. Any other error is returned before the
/// navigation layer is touched.
pub async fn sign_out<A, N>(api: &A, nav: &N) -> Result<(), ApiError>
where
    A: SessionApi,
    N: ClientNavigation,
{
    match api.sign_out().await {
        Ok(()) => {}
        Err(e) if e.is_session_invalid() => {
            log::warn!("Session already invalid at sign-out: {}", e);
        }
        Err(e) => return Err(e),
    }
    nav.refresh();
    nav.push(HOME_PATH);
    Ok(())
}
