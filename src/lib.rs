pub mod category;
pub mod compare;
pub mod config;
pub mod error;
pub mod layout;
pub mod loader;
pub mod record;
pub mod shade;
pub mod tooltip;
pub mod view;
// cmd and reports are binary modules (declared in main.rs).
