//! Ephemeral dialog sessions for NPC conversations.
//!
//! A session is identified by character plus open timestamp and owns its own
//! message list, independent of the store's rolling notice log and of any
//! other open session.
use std::time::{SystemTime, UNIX_EPOCH};

use stonehaven_protocol::{DialogContext, DialogMessage, PlayerSummary, QuestAction};

use crate::greetings::greeting;
use crate::store::StoreState;

#[derive(Clone, Debug)]
pub struct DialogSession {
    /// `{character}_{unix_millis}`, the key the dialog backend tracks
    /// history under.
    pub session_id: String,
    pub character: String,
    pub character_name: String,
    pub messages: Vec<DialogMessage>,
    /// True while a reply is in flight; gates the input line.
    pub waiting: bool,
}

impl DialogSession {
    pub fn open(character: &str, character_name: &str) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or(0);
        Self {
            session_id: format!("{character}_{millis}"),
            character: character.to_string(),
            character_name: character_name.to_string(),
            messages: Vec::new(),
            waiting: false,
        }
    }

    /// Install fetched history, or seed the per-character greeting when there
    /// is none.
    pub fn install_history(&mut self, history: Vec<DialogMessage>) {
        if history.is_empty() {
            self.seed_greeting();
        } else {
            self.messages = history;
        }
    }

    /// Reset the transcript to the single greeting keyed by this character.
    pub fn seed_greeting(&mut self) {
        self.messages = vec![DialogMessage::new(
            self.character_name.clone(),
            greeting(&self.character),
        )];
    }

    pub fn push(&mut self, message: DialogMessage) {
        self.messages.push(message);
    }
}

/// Contextual payload sent with each utterance: the character addressed, the
/// slice of player state the backend grounds replies in, and the quest hints
/// relevant at the current location.
pub fn build_context(
    character: &str,
    state: &StoreState,
    quest_actions: &[QuestAction],
) -> DialogContext {
    DialogContext {
        character: character.to_string(),
        player_stats: PlayerSummary {
            level: state.player.level,
            gold: state.player.gold,
            health: state.player.health,
            location: state.current_location.as_str().to_string(),
        },
        available_quest_actions: quest_actions.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_merchant_session_seeds_single_greeting() {
        let mut session = DialogSession::open("merchant", "Erik");
        session.install_history(Vec::new());

        assert_eq!(session.messages.len(), 1);
        assert_eq!(session.messages[0].speaker, "Erik");
        assert_eq!(session.messages[0].text, greeting("merchant"));
    }

    #[test]
    fn sessions_are_isolated_from_each_other() {
        let mut merchant = DialogSession::open("merchant", "Erik");
        merchant.install_history(Vec::new());
        merchant.push(DialogMessage::new("Player", "hello"));

        let mut guard = DialogSession::open("guard", "Guard");
        guard.install_history(Vec::new());

        assert_ne!(merchant.session_id, guard.session_id);
        assert_eq!(guard.messages.len(), 1);
        assert_eq!(guard.messages[0].text, greeting("guard"));
    }

    #[test]
    fn server_history_wins_over_greeting() {
        let mut session = DialogSession::open("blacksmith", "Anja");
        session.install_history(vec![
            DialogMessage::new("Anja", "Back again?"),
            DialogMessage::new("Player", "Aye."),
        ]);
        assert_eq!(session.messages.len(), 2);
    }

    #[test]
    fn context_carries_player_slice_and_hints() {
        let state = StoreState::default();
        let context = build_context("merchant", &state, &[]);
        assert_eq!(context.character, "merchant");
        assert_eq!(context.player_stats.gold, 100);
        assert_eq!(context.player_stats.location, "mainPage");
        assert!(context.available_quest_actions.is_empty());
    }
}
