//! The typed endpoint catalog.
use async_trait::async_trait;
use serde_json::Value;

use stonehaven_protocol::{
    ActionResponse, DialogContext, DialogMessage, InventoryItem, LocationId, Player, Quest,
    QuestAction, QuestActionResponse, RecipesResponse, TradeResponse,
};

use crate::error::Result;

/// One method per server capability.
///
/// Implementations perform exactly one request per call and never catch
/// errors on the caller's behalf; screens and services own error handling.
#[async_trait]
pub trait GameApi: Send + Sync {
    /// `GET /api/player`
    async fn get_player(&self) -> Result<Player>;

    /// `PUT /api/player` with a partial player body.
    async fn update_player(&self, patch: &Value) -> Result<Player>;

    /// `GET /api/quests/available`
    async fn available_quests(&self) -> Result<Vec<Quest>>;

    /// `GET /api/quests/active`
    async fn active_quests(&self) -> Result<Vec<Quest>>;

    /// `POST /api/quests/generate`
    async fn generate_quest(&self, quest_type: Option<&str>) -> Result<Quest>;

    /// `POST /api/quests/refresh`
    async fn refresh_quests(&self) -> Result<Vec<Quest>>;

    /// `POST /api/quests/{id}/accept`
    async fn accept_quest(&self, quest_id: &str) -> Result<Quest>;

    /// `POST /api/quests/{id}/abandon`. The response body carries nothing
    /// the client uses.
    async fn abandon_quest(&self, quest_id: &str) -> Result<()>;

    /// `GET /api/quests/{id}/progress` (implementation-defined body)
    async fn quest_progress(&self, quest_id: &str) -> Result<Value>;

    /// `GET /api/quests/actions/{location}`
    async fn quest_actions(&self, location: LocationId) -> Result<Vec<QuestAction>>;

    /// `POST /api/quests/action`
    async fn perform_quest_action(
        &self,
        action: &str,
        location: LocationId,
        quest_id: Option<&str>,
    ) -> Result<QuestActionResponse>;

    /// `GET /api/shop/items`
    async fn shop_items(&self) -> Result<Vec<InventoryItem>>;

    /// `POST /api/merchant/buy`
    async fn buy_item(&self, item_id: &str, quantity: u32) -> Result<TradeResponse>;

    /// `POST /api/merchant/sell`
    async fn sell_item(&self, item_id: &str, quantity: u32) -> Result<TradeResponse>;

    /// `GET /api/smithy/recipes`
    async fn smithy_recipes(&self) -> Result<RecipesResponse>;

    /// `POST /api/action` with an optional free-form payload merged into the
    /// body.
    async fn perform_action(
        &self,
        location: LocationId,
        action: &str,
        extra: Option<Value>,
    ) -> Result<ActionResponse>;

    /// `POST /api/inventory/use` by inventory index.
    async fn use_item(&self, item_index: usize) -> Result<ActionResponse>;

    /// `POST /api/inventory/unequip` by slot name.
    async fn unequip_item(&self, slot: &str) -> Result<ActionResponse>;

    /// `POST /api/dialog`
    async fn send_dialog(
        &self,
        session_id: &str,
        message: &str,
        context: Option<DialogContext>,
    ) -> Result<DialogMessage>;

    /// `GET /api/dialog/{session_id}/history`
    async fn dialog_history(&self, session_id: &str) -> Result<Vec<DialogMessage>>;

    /// `GET /api/conversation_stats` (implementation-defined body)
    async fn conversation_stats(&self) -> Result<Value>;

    /// `GET /api/quality_report` (implementation-defined body)
    async fn quality_report(&self) -> Result<Value>;
}
