//! Navigation configuration for the dashboard shell.
//!
//! The header menus, call-to-action links and footer are plain data so the
//! frontend can iterate them generically. The backend may override the
//! built-in table through `/api/config`; every field falls back to the
//! default when omitted.

use serde::{Deserialize, Serialize};

use crate::sign_out::HOME_PATH;

/// A single navigation destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub text: String,
    pub path: String,
}

impl NavLink {
    pub fn new(text: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            path: path.into(),
        }
    }
}

/// A labeled dropdown holding a fixed list of links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavMenu {
    pub label: String,
    pub items: Vec<NavLink>,
}

impl NavMenu {
    pub fn new(label: impl Into<String>, items: Vec<NavLink>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }
}

/// Everything the header and footer render that is not session-derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Brand name shown next to the logo, linking to the home page
    pub brand: String,
    /// Always-visible link next to the session area
    pub pricing: NavLink,
    /// Call to action shown when nobody is signed in
    pub sign_up: NavLink,
    /// Menus shown to signed-in users, in display order
    pub menus: Vec<NavMenu>,
    /// First entry of the account menu
    pub dashboard: NavLink,
    pub copyright: String,
    pub footer_links: Vec<NavLink>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            brand: "Garden Projects".to_string(),
            pricing: NavLink::new("Pricing", "/pricing"),
            sign_up: NavLink::new("Sign Up", "/sign-up"),
            menus: vec![
                NavMenu::new(
                    "Ideas",
                    vec![
                        NavLink::new("Option 1", "/option1"),
                        NavLink::new("Option 2", "/option2"),
                    ],
                ),
                NavMenu::new(
                    "Projects",
                    vec![
                        NavLink::new("Option 3", "/option3"),
                        NavLink::new("Option 4", "/option4"),
                    ],
                ),
                NavMenu::new(
                    "Maintenance",
                    vec![
                        NavLink::new("Option 5", "/option5"),
                        NavLink::new("Option 6", "/option6"),
                    ],
                ),
            ],
            dashboard: NavLink::new("Dashboard", "/dashboard"),
            copyright: "\u{a9} 2023 Garden Projects. All rights reserved.".to_string(),
            footer_links: vec![
                NavLink::new("About", "/about"),
                NavLink::new("Contact", "/contact"),
            ],
        }
    }
}

impl LayoutConfig {
    /// Every path the header and footer can send the user to, starting
    /// with the home page behind the brand link.
    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        std::iter::once(HOME_PATH)
            .chain(std::iter::once(self.pricing.path.as_str()))
            .chain(std::iter::once(self.sign_up.path.as_str()))
            .chain(
                self.menus
                    .iter()
                    .flat_map(|m| m.items.iter().map(|i| i.path.as_str())),
            )
            .chain(std::iter::once(self.dashboard.path.as_str()))
            .chain(self.footer_links.iter().map(|l| l.path.as_str()))
    }
}
