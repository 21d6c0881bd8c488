pub mod api;
pub mod config;
pub mod derive;
pub mod errors;
pub mod models;
pub mod progress;
pub mod session;
pub mod stats;
pub mod ui;
