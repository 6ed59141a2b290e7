//! Router-backed navigation used by sign-out.

use shared::ClientNavigation;
use yew::Callback;
use yew_router::prelude::*;

use crate::{utils, Route};

/// Map a configured path onto a client-side route.
///
/// Returns `None` when the router would fall through to the not-found page,
/// in which case callers use a plain anchor or a hard navigation.
pub fn route_for(path: &str) -> Option<Route> {
    Route::recognize(path).filter(|route| *route != Route::NotFound)
}

pub struct RouterNavigation {
    navigator: Navigator,
    refresh: Callback<()>,
}

impl RouterNavigation {
    /// `refresh` should discard whatever the app cached about the session.
    pub fn new(navigator: Navigator, refresh: Callback<()>) -> Self {
        Self { navigator, refresh }
    }
}

impl ClientNavigation for RouterNavigation {
    fn refresh(&self) {
        self.refresh.emit(());
    }

    fn push(&self, path: &str) {
        match route_for(path) {
            Some(route) => self.navigator.push(&route),
            None => utils::set_location(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_paths_map_to_routes() {
        assert_eq!(route_for("/"), Some(Route::Home));
        assert_eq!(route_for("/dashboard"), Some(Route::Dashboard));
        assert_eq!(route_for("/sign-up"), Some(Route::SignUp));
        assert_eq!(route_for("/contact"), Some(Route::Contact));
    }

    #[test]
    fn placeholder_paths_map_to_slug_route() {
        assert_eq!(
            route_for("/option3"),
            Some(Route::Placeholder {
                slug: "option3".to_string()
            })
        );
    }

    #[test]
    fn every_default_destination_is_routable() {
        let config = shared::LayoutConfig::default();
        for path in config.destinations() {
            assert!(route_for(path).is_some(), "no route for {}", path);
        }
    }

    #[test]
    fn nested_unknown_paths_are_not_routable() {
        assert_eq!(route_for("/beds/north/raised"), None);
    }
}
