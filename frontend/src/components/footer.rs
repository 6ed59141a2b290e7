use yew::prelude::*;

use super::{use_layout, ConfigLink};

/// Static footer. Reads only the layout configuration, never the session.
#[function_component(Footer)]
pub fn footer() -> Html {
    let config = use_layout();

    html! {
        <footer class="site-footer">
            <div class="site-footer-inner">
                <span class="copyright">{ config.copyright.clone() }</span>
                <div class="footer-links">
                    {
                        config.footer_links.iter().map(|link| html! {
                            <ConfigLink key={link.path.clone()} link={link.clone()} classes="footer-link" />
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::render_with_session;
    use shared::{CurrentUser, SessionState};

    #[tokio::test]
    async fn footer_is_identical_for_every_session_state() {
        let states = [
            SessionState::NotLoaded,
            SessionState::LoggedOut,
            SessionState::LoggedIn(CurrentUser::new("a@b.com").with_name("Ada")),
        ];

        let mut rendered = Vec::new();
        for state in states {
            rendered.push(render_with_session(state, html! { <Footer /> }).await);
        }

        assert!(rendered[0].contains("2023 Garden Projects. All rights reserved."));
        assert!(rendered[0].contains(r#"href="/about""#));
        assert!(rendered[0].contains(r#"href="/contact""#));
        assert!(rendered.iter().all(|html| *html == rendered[0]));
    }
}
