//! Custom Yew hooks for the frontend application.
//!
//! These hooks encapsulate reusable state logic to keep components clean and focused.

mod use_current_user;
mod use_layout_config;

pub use use_current_user::use_current_user;
pub use use_layout_config::use_layout_config;
