//! Platform shell around the pure controller: event loop, effect execution,
//! logging, configuration and console rendering.

mod app;
mod config;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
