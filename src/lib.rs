pub mod app;
pub mod auth;
pub mod config;
pub mod domain;
pub mod snow;
pub mod store;
pub mod terminal;
