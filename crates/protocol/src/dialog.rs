//! Dialog messages exchanged with the NPC conversation backend.
use serde::{Deserialize, Serialize};

use crate::quest::QuestAction;

/// One utterance in a conversation or in the store's notice log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DialogMessage {
    pub speaker: String,
    pub text: String,
    #[serde(default)]
    pub options: Vec<DialogOption>,
}

impl DialogMessage {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            options: Vec::new(),
        }
    }

    /// Generic failure message shown when a call raised instead of returning
    /// an in-band rejection.
    pub fn system(text: impl Into<String>) -> Self {
        Self::new("System", text)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DialogOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub action: Option<String>,
}

/// Contextual payload sent along with a dialog utterance so the generation
/// backend can ground its reply in current player state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DialogContext {
    pub character: String,
    pub player_stats: PlayerSummary,
    #[serde(default)]
    pub available_quest_actions: Vec<QuestAction>,
}

/// The slice of player state the dialog backend cares about.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub level: u32,
    pub gold: i64,
    pub health: i64,
    pub location: String,
}
