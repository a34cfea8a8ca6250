pub mod cache;
pub mod config;
pub mod embed;
pub mod error;
pub mod fetch;
pub mod handler;
pub mod i18n;
pub mod ical;
pub mod loader;
pub mod markup;
pub mod model;
pub mod notify;
pub mod prefs;
pub mod router;
pub mod state;
pub mod views;
