//! Terminal frontend for the Stonehaven client.
//!
//! Screens are full-terminal location views over the shared store; every
//! server interaction is a spawned task reporting back through the dispatch
//! and ui channels, keeping all state mutation on the event loop.
pub mod app;
pub mod config;
pub mod event;
pub mod logging;
pub mod presentation;
pub mod state;

pub use app::CliApp;
pub use config::CliConfig;
