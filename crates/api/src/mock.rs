//! In-memory [`GameApi`] for testing without a server.
//!
//! Records every call by name so tests can assert that a guarded operation
//! was (or was not) issued, and lets individual endpoint families be toggled
//! into a failing state.
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use stonehaven_protocol::{
    ActionResponse, DialogContext, DialogMessage, InventoryItem, LocationId, Player, Quest,
    QuestAction, QuestActionResponse, RecipesResponse, TradeResponse,
};

use crate::error::{ApiError, Result};
use crate::traits::GameApi;

#[derive(Clone)]
pub struct MockApi {
    player: Arc<Mutex<Player>>,
    available_quests: Arc<Mutex<Vec<Quest>>>,
    active_quests: Arc<Mutex<Vec<Quest>>>,
    shop_items: Arc<Mutex<Vec<InventoryItem>>>,
    quest_actions: Arc<Mutex<Vec<QuestAction>>>,
    quest_action_response: Arc<Mutex<QuestActionResponse>>,
    action_response: Arc<Mutex<Option<ActionResponse>>>,
    dialog_history: Arc<Mutex<Vec<DialogMessage>>>,
    fail_quest_actions: Arc<Mutex<bool>>,
    fail_actions: Arc<Mutex<bool>>,
    fail_dialog: Arc<Mutex<bool>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            player: Arc::new(Mutex::new(Self::sample_player())),
            available_quests: Arc::new(Mutex::new(Vec::new())),
            active_quests: Arc::new(Mutex::new(Vec::new())),
            shop_items: Arc::new(Mutex::new(Vec::new())),
            quest_actions: Arc::new(Mutex::new(Vec::new())),
            quest_action_response: Arc::new(Mutex::new(QuestActionResponse {
                success: true,
                message: String::new(),
                quest_completed: None,
                rewards: None,
                player: None,
            })),
            action_response: Arc::new(Mutex::new(None)),
            dialog_history: Arc::new(Mutex::new(Vec::new())),
            fail_quest_actions: Arc::new(Mutex::new(false)),
            fail_actions: Arc::new(Mutex::new(false)),
            fail_dialog: Arc::new(Mutex::new(false)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A plain level-1 player matching the server's starting snapshot.
    pub fn sample_player() -> Player {
        serde_json::from_value(json!({
            "name": "Hero",
            "level": 1,
            "health": 100,
            "maxHealth": 100,
            "mana": 50,
            "maxMana": 50,
            "experience": 0,
            "gold": 100
        }))
        .unwrap()
    }

    pub fn set_player(&self, player: Player) {
        *self.player.lock().unwrap() = player;
    }

    pub fn set_available_quests(&self, quests: Vec<Quest>) {
        *self.available_quests.lock().unwrap() = quests;
    }

    pub fn set_active_quests(&self, quests: Vec<Quest>) {
        *self.active_quests.lock().unwrap() = quests;
    }

    pub fn set_shop_items(&self, items: Vec<InventoryItem>) {
        *self.shop_items.lock().unwrap() = items;
    }

    pub fn set_quest_actions(&self, actions: Vec<QuestAction>) {
        *self.quest_actions.lock().unwrap() = actions;
    }

    pub fn set_quest_action_response(&self, response: QuestActionResponse) {
        *self.quest_action_response.lock().unwrap() = response;
    }

    pub fn set_dialog_history(&self, history: Vec<DialogMessage>) {
        *self.dialog_history.lock().unwrap() = history;
    }

    /// Canned response for `perform_action`, replacing the echo default.
    pub fn set_action_response(&self, response: ActionResponse) {
        *self.action_response.lock().unwrap() = Some(response);
    }

    /// Make the quest-action listing endpoint fail, for testing the lenient
    /// `actions_for` contract.
    pub fn fail_quest_actions(&self, fail: bool) {
        *self.fail_quest_actions.lock().unwrap() = fail;
    }

    /// Make `perform_action` fail with a simulated transport error.
    pub fn fail_actions(&self, fail: bool) {
        *self.fail_actions.lock().unwrap() = fail;
    }

    /// Make `send_dialog` fail with a simulated transport error.
    pub fn fail_dialog(&self, fail: bool) {
        *self.fail_dialog.lock().unwrap() = fail;
    }

    /// Names of the operations invoked so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, name: &str) {
        self.calls.lock().unwrap().push(name.to_string());
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameApi for MockApi {
    async fn get_player(&self) -> Result<Player> {
        self.record("get_player");
        Ok(self.player.lock().unwrap().clone())
    }

    async fn update_player(&self, _patch: &Value) -> Result<Player> {
        self.record("update_player");
        Ok(self.player.lock().unwrap().clone())
    }

    async fn available_quests(&self) -> Result<Vec<Quest>> {
        self.record("available_quests");
        Ok(self.available_quests.lock().unwrap().clone())
    }

    async fn active_quests(&self) -> Result<Vec<Quest>> {
        self.record("active_quests");
        Ok(self.active_quests.lock().unwrap().clone())
    }

    async fn generate_quest(&self, _quest_type: Option<&str>) -> Result<Quest> {
        self.record("generate_quest");
        self.available_quests
            .lock()
            .unwrap()
            .first()
            .cloned()
            .ok_or_else(|| ApiError::Simulated("no quests configured".to_string()))
    }

    async fn refresh_quests(&self) -> Result<Vec<Quest>> {
        self.record("refresh_quests");
        Ok(self.available_quests.lock().unwrap().clone())
    }

    async fn accept_quest(&self, quest_id: &str) -> Result<Quest> {
        self.record("accept_quest");
        let mut available = self.available_quests.lock().unwrap();
        let index = available
            .iter()
            .position(|quest| quest.id == quest_id)
            .ok_or_else(|| ApiError::Simulated(format!("unknown quest {quest_id}")))?;
        let quest = available.remove(index);
        self.active_quests.lock().unwrap().push(quest.clone());
        Ok(quest)
    }

    async fn abandon_quest(&self, quest_id: &str) -> Result<()> {
        self.record("abandon_quest");
        self.active_quests
            .lock()
            .unwrap()
            .retain(|quest| quest.id != quest_id);
        Ok(())
    }

    async fn quest_progress(&self, _quest_id: &str) -> Result<Value> {
        self.record("quest_progress");
        Ok(json!({}))
    }

    async fn quest_actions(&self, _location: LocationId) -> Result<Vec<QuestAction>> {
        self.record("quest_actions");
        if *self.fail_quest_actions.lock().unwrap() {
            return Err(ApiError::Simulated("quest actions unavailable".to_string()));
        }
        Ok(self.quest_actions.lock().unwrap().clone())
    }

    async fn perform_quest_action(
        &self,
        _action: &str,
        _location: LocationId,
        _quest_id: Option<&str>,
    ) -> Result<QuestActionResponse> {
        self.record("perform_quest_action");
        Ok(self.quest_action_response.lock().unwrap().clone())
    }

    async fn shop_items(&self) -> Result<Vec<InventoryItem>> {
        self.record("shop_items");
        Ok(self.shop_items.lock().unwrap().clone())
    }

    async fn buy_item(&self, _item_id: &str, _quantity: u32) -> Result<TradeResponse> {
        self.record("buy_item");
        Ok(TradeResponse {
            success: true,
            message: "Sold!".to_string(),
        })
    }

    async fn sell_item(&self, _item_id: &str, _quantity: u32) -> Result<TradeResponse> {
        self.record("sell_item");
        Ok(TradeResponse {
            success: true,
            message: "A pleasure doing business.".to_string(),
        })
    }

    async fn smithy_recipes(&self) -> Result<RecipesResponse> {
        self.record("smithy_recipes");
        Ok(RecipesResponse {
            success: true,
            recipes: Vec::new(),
            message: None,
        })
    }

    async fn perform_action(
        &self,
        _location: LocationId,
        action: &str,
        _extra: Option<Value>,
    ) -> Result<ActionResponse> {
        self.record(&format!("perform_action:{action}"));
        if *self.fail_actions.lock().unwrap() {
            return Err(ApiError::Simulated("action endpoint unavailable".to_string()));
        }
        if let Some(response) = self.action_response.lock().unwrap().clone() {
            return Ok(response);
        }
        Ok(ActionResponse {
            success: true,
            message: format!("{action} done"),
            data: None,
        })
    }

    async fn use_item(&self, _item_index: usize) -> Result<ActionResponse> {
        self.record("use_item");
        Ok(ActionResponse {
            success: true,
            message: "Used.".to_string(),
            data: None,
        })
    }

    async fn unequip_item(&self, _slot: &str) -> Result<ActionResponse> {
        self.record("unequip_item");
        Ok(ActionResponse {
            success: true,
            message: "Unequipped.".to_string(),
            data: None,
        })
    }

    async fn send_dialog(
        &self,
        _session_id: &str,
        message: &str,
        context: Option<DialogContext>,
    ) -> Result<DialogMessage> {
        self.record("send_dialog");
        if *self.fail_dialog.lock().unwrap() {
            return Err(ApiError::Simulated("dialog backend unavailable".to_string()));
        }
        let speaker = context
            .map(|ctx| ctx.character)
            .unwrap_or_else(|| "NPC".to_string());
        Ok(DialogMessage::new(speaker, format!("You said: {message}")))
    }

    async fn dialog_history(&self, _session_id: &str) -> Result<Vec<DialogMessage>> {
        self.record("dialog_history");
        Ok(self.dialog_history.lock().unwrap().clone())
    }

    async fn conversation_stats(&self) -> Result<Value> {
        self.record("conversation_stats");
        Ok(json!({}))
    }

    async fn quality_report(&self) -> Result<Value> {
        self.record("quality_report");
        Ok(json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_calls_in_order() {
        let api = MockApi::new();
        let _ = api.get_player().await.unwrap();
        let _ = api.update_player(&json!({ "gold": 10 })).await.unwrap();
        let _ = api.quest_progress("q1").await.unwrap();
        let _ = api.conversation_stats().await.unwrap();
        let _ = api.quality_report().await.unwrap();

        assert_eq!(
            api.calls(),
            [
                "get_player",
                "update_player",
                "quest_progress",
                "conversation_stats",
                "quality_report"
            ]
        );
    }

    #[tokio::test]
    async fn accept_moves_quest_between_listings() {
        let api = MockApi::new();
        let quest: Quest =
            serde_json::from_value(json!({ "id": "q1", "title": "Rats" })).unwrap();
        api.set_available_quests(vec![quest]);

        let accepted = api.accept_quest("q1").await.unwrap();
        assert_eq!(accepted.id, "q1");
        assert!(api.available_quests().await.unwrap().is_empty());
        assert_eq!(api.active_quests().await.unwrap().len(), 1);

        api.abandon_quest("q1").await.unwrap();
        assert!(api.active_quests().await.unwrap().is_empty());
    }
}
