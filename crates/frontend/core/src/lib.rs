//! Cross-frontend client state for the Stonehaven UI.
//!
//! Houses the reducer-managed store, the single-writer dispatch channel, and
//! the quest synchronization service that composes API calls with store
//! updates. Terminal and future graphical frontends both build on these.
pub mod actions;
pub mod config;
pub mod dispatcher;
pub mod greetings;
pub mod quests;
pub mod session;
pub mod store;

pub use actions::{Danger, LocationAction};
pub use config::ClientConfig;
pub use dispatcher::Dispatcher;
pub use quests::QuestService;
pub use session::DialogSession;
pub use store::{GameStore, QuestPatch, StoreEvent, StoreState};
