//! Quest synchronization service.
//!
//! Composes quest API calls with store updates so screens never talk to the
//! API client directly for quest mutations. Within one operation the player
//! replacement is always dispatched before the operation returns, so a
//! screen reading the store right after awaiting it observes the post-action
//! snapshot. No ordering holds across concurrently running operations.
use std::sync::Arc;

use stonehaven_api::{ApiError, GameApi};
use stonehaven_protocol::{LocationId, Quest, QuestAction, QuestActionResponse};

use crate::dispatcher::Dispatcher;
use crate::store::StoreEvent;

pub struct QuestService<A: GameApi> {
    api: Arc<A>,
    dispatcher: Dispatcher,
}

impl<A: GameApi> Clone for QuestService<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            dispatcher: self.dispatcher.clone(),
        }
    }
}

impl<A: GameApi> QuestService<A> {
    pub fn new(api: Arc<A>, dispatcher: Dispatcher) -> Self {
        Self { api, dispatcher }
    }

    /// Accept a quest, add it to the active list, and re-sync the player
    /// (accepting may have side effects on player state).
    pub async fn accept(&self, quest_id: &str) -> Result<Quest, ApiError> {
        let quest = self.api.accept_quest(quest_id).await?;
        self.dispatcher.dispatch(StoreEvent::AddQuest(quest.clone()));

        let player = self.api.get_player().await?;
        self.dispatcher.dispatch(StoreEvent::SetPlayer(player));

        Ok(quest)
    }

    /// Abandon a quest, drop it from the active list, and re-sync the player.
    pub async fn abandon(&self, quest_id: &str) -> Result<(), ApiError> {
        self.api.abandon_quest(quest_id).await?;
        self.dispatcher
            .dispatch(StoreEvent::AbandonQuest(quest_id.to_string()));

        let player = self.api.get_player().await?;
        self.dispatcher.dispatch(StoreEvent::SetPlayer(player));

        Ok(())
    }

    /// Perform a quest-linked action at a location.
    ///
    /// Prefers the in-band player snapshot when the response carries one,
    /// falling back to a fresh fetch otherwise; then always replaces the
    /// whole active list, because a single action may silently complete or
    /// progress several quests at once.
    pub async fn perform(
        &self,
        action: &str,
        location: LocationId,
        quest_id: Option<&str>,
    ) -> Result<QuestActionResponse, ApiError> {
        let response = self
            .api
            .perform_quest_action(action, location, quest_id)
            .await?;

        match response.player.clone() {
            Some(player) => self.dispatcher.dispatch(StoreEvent::SetPlayer(player)),
            None => {
                let player = self.api.get_player().await?;
                self.dispatcher.dispatch(StoreEvent::SetPlayer(player));
            }
        }

        let active = self.api.active_quests().await?;
        self.dispatcher.dispatch(StoreEvent::SetActiveQuests(active));

        Ok(response)
    }

    /// Quest hints available at a location. Deliberately lenient: this feeds
    /// optional UI hints, so a failed call resolves to an empty list instead
    /// of propagating.
    pub async fn actions_for(&self, location: LocationId) -> Vec<QuestAction> {
        match self.api.quest_actions(location).await {
            Ok(actions) => actions,
            Err(error) => {
                tracing::warn!(%location, %error, "quest action listing failed");
                Vec::new()
            }
        }
    }

    /// Fetch the active list and replace the store's copy wholesale.
    pub async fn load_active(&self) -> Result<(), ApiError> {
        let active = self.api.active_quests().await?;
        self.dispatcher.dispatch(StoreEvent::SetActiveQuests(active));
        Ok(())
    }

    /// Thin pass-through to quest generation.
    pub async fn generate(&self, quest_type: Option<&str>) -> Result<Quest, ApiError> {
        self.api.generate_quest(quest_type).await
    }

    /// Thin pass-through to the refresh endpoint; the caller merges the
    /// returned list into its view state.
    pub async fn refresh(&self) -> Result<Vec<Quest>, ApiError> {
        self.api.refresh_quests().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stonehaven_api::MockApi;
    use stonehaven_protocol::Player;
    use tokio::sync::mpsc;

    use crate::store::{GameStore, StoreEvent};

    fn quest(id: &str) -> Quest {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Quest {id}"),
        }))
        .unwrap()
    }

    fn service() -> (
        QuestService<MockApi>,
        Arc<MockApi>,
        mpsc::UnboundedReceiver<StoreEvent>,
    ) {
        let api = Arc::new(MockApi::new());
        let (dispatcher, rx) = Dispatcher::channel();
        (QuestService::new(Arc::clone(&api), dispatcher), api, rx)
    }

    fn drain(store: &mut GameStore, rx: &mut mpsc::UnboundedReceiver<StoreEvent>) {
        while let Ok(event) = rx.try_recv() {
            store.dispatch(event);
        }
    }

    #[tokio::test]
    async fn accept_adds_quest_then_replaces_player() {
        let (service, api, mut rx) = service();
        api.set_available_quests(vec![quest("q1")]);

        let accepted = service.accept("q1").await.unwrap();
        assert_eq!(accepted.id, "q1");

        // Dispatch order within the operation: quest first, player second.
        assert!(matches!(rx.try_recv().unwrap(), StoreEvent::AddQuest(_)));
        assert!(matches!(rx.try_recv().unwrap(), StoreEvent::SetPlayer(_)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn perform_resyncs_active_list_with_server() {
        let (service, api, mut rx) = service();
        let server_active = vec![quest("q1"), quest("q3")];
        api.set_active_quests(server_active.clone());

        let mut store = GameStore::new();
        store.dispatch(StoreEvent::AddQuest(quest("q2")));

        service
            .perform("explore", LocationId::Forest, None)
            .await
            .unwrap();
        drain(&mut store, &mut rx);

        // The store's active list exactly matches the server's latest
        // listing; the stale local entry is gone.
        assert_eq!(store.state().active_quests, server_active);
    }

    #[tokio::test]
    async fn perform_prefers_in_band_player_snapshot() {
        let (service, api, mut rx) = service();
        let mut snapshot: Player = MockApi::sample_player();
        snapshot.gold = 77;
        api.set_quest_action_response(QuestActionResponse {
            success: true,
            message: "done".to_string(),
            quest_completed: None,
            rewards: None,
            player: Some(snapshot.clone()),
        });

        let mut store = GameStore::new();
        service
            .perform("rest", LocationId::Tavern, None)
            .await
            .unwrap();
        drain(&mut store, &mut rx);

        assert_eq!(store.state().player, snapshot);
        // No redundant player fetch when the response carried a snapshot.
        assert!(!api.calls().iter().any(|call| call == "get_player"));
    }

    #[tokio::test]
    async fn perform_falls_back_to_player_fetch() {
        let (service, api, mut rx) = service();

        let mut store = GameStore::new();
        service
            .perform("rest", LocationId::Tavern, None)
            .await
            .unwrap();
        drain(&mut store, &mut rx);

        assert!(api.calls().iter().any(|call| call == "get_player"));
    }

    #[tokio::test]
    async fn actions_for_swallows_failures_into_empty_list() {
        let (service, api, _rx) = service();
        api.fail_quest_actions(true);

        let actions = service.actions_for(LocationId::Tavern).await;
        assert!(actions.is_empty());
    }

    #[tokio::test]
    async fn abandon_removes_quest_and_resyncs_player() {
        let (service, api, mut rx) = service();
        api.set_active_quests(vec![quest("q1")]);

        let mut store = GameStore::new();
        store.dispatch(StoreEvent::AddQuest(quest("q1")));

        service.abandon("q1").await.unwrap();
        drain(&mut store, &mut rx);

        assert!(store.state().active_quests.is_empty());
    }
}
