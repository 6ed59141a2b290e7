mod account_menu;
mod config_link;
mod dashboard_layout;
mod dropdown;
mod footer;
mod header;
mod session_provider;

pub use account_menu::AccountMenu;
pub use config_link::ConfigLink;
pub use dashboard_layout::DashboardLayout;
pub use dropdown::Dropdown;
pub use footer::Footer;
pub use header::Header;
pub use session_provider::{use_layout, use_session, SessionProvider};

#[cfg(test)]
mod testing;
