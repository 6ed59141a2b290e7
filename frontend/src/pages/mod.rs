pub mod dashboard;
pub mod home;
pub mod info;
pub mod not_found;
