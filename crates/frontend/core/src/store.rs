//! The single in-memory snapshot shared across all screens.
//!
//! The store mirrors a subset of server-owned state. It never performs I/O:
//! every change arrives as a [`StoreEvent`] and is applied by the pure
//! [`reduce`] function, so each update is atomic from the perspective of the
//! single-threaded event loop that owns the [`GameStore`].
use stonehaven_protocol::{
    DialogMessage, LocationId, Player, PlayerStats, Quest, QuestObjective, QuestStatus,
};

/// Snapshot of everything the screens read.
#[derive(Clone, Debug, PartialEq)]
pub struct StoreState {
    pub player: Player,
    pub current_location: LocationId,
    pub active_quests: Vec<Quest>,
    pub completed_quests: Vec<Quest>,
    /// Rolling notice log, append-only within a page session.
    pub dialog_history: Vec<DialogMessage>,
    /// Gates the full-screen spinner overlay during in-flight calls.
    pub is_loading: bool,
}

impl Default for StoreState {
    /// Placeholder snapshot shown until the first player fetch resolves.
    fn default() -> Self {
        Self {
            player: placeholder_player(),
            current_location: LocationId::MainPage,
            active_quests: Vec::new(),
            completed_quests: Vec::new(),
            dialog_history: Vec::new(),
            is_loading: false,
        }
    }
}

fn placeholder_player() -> Player {
    Player {
        name: "Hero".to_string(),
        level: 1,
        health: 100,
        max_health: 100,
        mana: 50,
        max_mana: 50,
        experience: 0,
        gold: 100,
        inventory: Vec::new(),
        equipped_items: Default::default(),
        stats: PlayerStats {
            strength: 10,
            dexterity: 10,
            intelligence: 10,
            vitality: 10,
        },
    }
}

/// Discrete update events. Each is a pure, total function of
/// `(old snapshot, payload) -> new snapshot`.
#[derive(Clone, Debug)]
pub enum StoreEvent {
    /// Overwrite the whole player record (after any call returning one).
    SetPlayer(Player),
    SetLocation(LocationId),
    /// Append to the active list; ignored when the id is already active so
    /// duplicate entries cannot occur.
    AddQuest(Quest),
    /// Move a quest from active to completed, tagging it; no-op if absent.
    CompleteQuest(String),
    /// Remove a quest from the active list; no-op if absent.
    AbandonQuest(String),
    /// Merge a partial patch into the matching active quest; no-op if absent.
    UpdateQuestProgress { quest_id: String, patch: QuestPatch },
    /// Overwrite the active list wholesale after a refresh round-trip.
    SetActiveQuests(Vec<Quest>),
    AddDialogMessage(DialogMessage),
    ClearDialog,
    SetLoading(bool),
    /// Overwrite health with the given absolute value, clamped to
    /// `[0, max_health]`. The clamp is the one domain invariant the client
    /// applies itself rather than trusting the payload verbatim.
    SetHealth(i64),
    /// As [`StoreEvent::SetHealth`], clamped to `[0, max_mana]`.
    SetMana(i64),
    /// Overwrite gold, clamped to a minimum of 0.
    SetGold(i64),
}

/// Partial-quest patch carried by [`StoreEvent::UpdateQuestProgress`].
#[derive(Clone, Debug, Default)]
pub struct QuestPatch {
    pub description: Option<String>,
    pub objectives: Option<Vec<QuestObjective>>,
    pub status: Option<QuestStatus>,
}

/// Produce the next snapshot. Pure; unknown ids and out-of-range values are
/// absorbed rather than rejected.
pub fn reduce(state: StoreState, event: StoreEvent) -> StoreState {
    let mut next = state;
    match event {
        StoreEvent::SetPlayer(player) => next.player = player,
        StoreEvent::SetLocation(location) => next.current_location = location,
        StoreEvent::AddQuest(quest) => {
            if !next.active_quests.iter().any(|q| q.id == quest.id) {
                next.active_quests.push(quest);
            }
        }
        StoreEvent::CompleteQuest(quest_id) => {
            if let Some(index) = next.active_quests.iter().position(|q| q.id == quest_id) {
                let mut quest = next.active_quests.remove(index);
                quest.status = Some(QuestStatus::Completed);
                next.completed_quests.push(quest);
            }
        }
        StoreEvent::AbandonQuest(quest_id) => {
            next.active_quests.retain(|q| q.id != quest_id);
        }
        StoreEvent::UpdateQuestProgress { quest_id, patch } => {
            if let Some(quest) = next.active_quests.iter_mut().find(|q| q.id == quest_id) {
                if let Some(description) = patch.description {
                    quest.description = description;
                }
                if let Some(objectives) = patch.objectives {
                    quest.objectives = objectives;
                }
                if let Some(status) = patch.status {
                    quest.status = Some(status);
                }
            }
        }
        StoreEvent::SetActiveQuests(quests) => next.active_quests = quests,
        StoreEvent::AddDialogMessage(message) => next.dialog_history.push(message),
        StoreEvent::ClearDialog => next.dialog_history.clear(),
        StoreEvent::SetLoading(loading) => next.is_loading = loading,
        StoreEvent::SetHealth(value) => {
            next.player.health = value.clamp(0, next.player.max_health.max(0));
        }
        StoreEvent::SetMana(value) => {
            next.player.mana = value.clamp(0, next.player.max_mana.max(0));
        }
        StoreEvent::SetGold(value) => {
            next.player.gold = value.max(0);
        }
    }
    next
}

/// Owner of the current snapshot. Mutated exclusively through
/// [`GameStore::dispatch`]; screens read through [`GameStore::state`].
#[derive(Debug, Default)]
pub struct GameStore {
    state: StoreState,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn dispatch(&mut self, event: StoreEvent) {
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stonehaven_protocol::Quest;

    fn quest(id: &str) -> Quest {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Quest {id}"),
        }))
        .unwrap()
    }

    #[test]
    fn initial_snapshot_is_the_placeholder_hero() {
        let store = GameStore::new();
        let state = store.state();
        assert_eq!(state.player.level, 1);
        assert_eq!(state.player.health, 100);
        assert_eq!(state.player.max_health, 100);
        assert_eq!(state.player.gold, 100);
        assert_eq!(state.current_location, LocationId::MainPage);
        assert!(!state.is_loading);
        assert!(state.active_quests.is_empty());
    }

    #[test]
    fn resource_events_respect_clamp_invariants() {
        let mut store = GameStore::new();
        // 0 <= health <= max_health, 0 <= mana <= max_mana, gold >= 0,
        // for every sequence of adjustment events.
        let values = [-50, 0, 30, 100, 250, i64::MAX, i64::MIN, 7];
        for value in values {
            store.dispatch(StoreEvent::SetHealth(value));
            store.dispatch(StoreEvent::SetMana(value));
            store.dispatch(StoreEvent::SetGold(value));

            let player = &store.state().player;
            assert!(player.health >= 0 && player.health <= player.max_health);
            assert!(player.mana >= 0 && player.mana <= player.max_mana);
            assert!(player.gold >= 0);
        }
    }

    #[test]
    fn add_quest_ignores_duplicate_ids() {
        let mut store = GameStore::new();
        store.dispatch(StoreEvent::AddQuest(quest("q1")));
        store.dispatch(StoreEvent::AddQuest(quest("q1")));
        assert_eq!(store.state().active_quests.len(), 1);
    }

    #[test]
    fn complete_quest_moves_and_tags() {
        let mut store = GameStore::new();
        store.dispatch(StoreEvent::AddQuest(quest("q1")));
        store.dispatch(StoreEvent::CompleteQuest("q1".to_string()));

        let state = store.state();
        assert!(state.active_quests.is_empty());
        assert_eq!(state.completed_quests.len(), 1);
        assert_eq!(state.completed_quests[0].status, Some(QuestStatus::Completed));
    }

    #[test]
    fn absent_ids_leave_the_store_unchanged() {
        let mut store = GameStore::new();
        store.dispatch(StoreEvent::AddQuest(quest("q1")));
        let before = store.state().clone();

        store.dispatch(StoreEvent::CompleteQuest("missing".to_string()));
        store.dispatch(StoreEvent::AbandonQuest("missing".to_string()));
        store.dispatch(StoreEvent::UpdateQuestProgress {
            quest_id: "missing".to_string(),
            patch: QuestPatch {
                status: Some(QuestStatus::Failed),
                ..Default::default()
            },
        });

        assert_eq!(store.state(), &before);
    }

    #[test]
    fn quest_progress_patch_merges_fields() {
        let mut store = GameStore::new();
        store.dispatch(StoreEvent::AddQuest(quest("q1")));
        store.dispatch(StoreEvent::UpdateQuestProgress {
            quest_id: "q1".to_string(),
            patch: QuestPatch {
                description: Some("updated".to_string()),
                ..Default::default()
            },
        });

        let quest = &store.state().active_quests[0];
        assert_eq!(quest.description, "updated");
        assert_eq!(quest.title, "Quest q1");
    }

    #[test]
    fn set_player_replaces_placeholder_and_loading_clears() {
        let mut store = GameStore::new();
        let server_player: Player = serde_json::from_value(serde_json::json!({
            "name": "Hero",
            "level": 3,
            "health": 80,
            "maxHealth": 120,
            "mana": 30,
            "maxMana": 60,
            "experience": 310,
            "gold": 45
        }))
        .unwrap();

        store.dispatch(StoreEvent::SetLoading(true));
        assert!(store.state().is_loading);

        store.dispatch(StoreEvent::SetPlayer(server_player.clone()));
        store.dispatch(StoreEvent::SetLoading(false));

        assert_eq!(store.state().player, server_player);
        assert!(!store.state().is_loading);
    }

    #[test]
    fn dialog_log_appends_and_clears() {
        let mut store = GameStore::new();
        store.dispatch(StoreEvent::AddDialogMessage(DialogMessage::new(
            "Innkeeper",
            "Welcome!",
        )));
        store.dispatch(StoreEvent::AddDialogMessage(DialogMessage::system(
            "Something went wrong.",
        )));
        assert_eq!(store.state().dialog_history.len(), 2);

        store.dispatch(StoreEvent::ClearDialog);
        assert!(store.state().dialog_history.is_empty());
    }
}
