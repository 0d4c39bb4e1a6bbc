//! HTTP implementation of [`GameApi`] using `reqwest`.
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use stonehaven_protocol::{
    ActionResponse, DialogContext, DialogMessage, InventoryItem, LocationId, Player, Quest,
    QuestAction, QuestActionResponse, QuestActionsResponse, QuestListResponse, RecipesResponse,
    ShopInventory, TradeResponse,
};

use crate::error::{ApiError, Result};
use crate::traits::GameApi;

/// Game server client bound to a single base URL.
///
/// Every call is fire-and-forget from the caller's perspective: no retries,
/// no timeout policy, no caching.
pub struct HttpApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(path, "GET");
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    async fn post_json<T: DeserializeOwned>(&self, path: &str, body: &Value) -> Result<T> {
        tracing::debug!(path, "POST");
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(path, "POST (empty body)");
        let response = self.http.post(self.url(path)).send().await?;
        Self::decode(response).await
    }

    async fn put_json<T: DeserializeOwned>(&self, path: &str, body: &Value) -> Result<T> {
        tracing::debug!(path, "PUT");
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Status { status, body });
        }
        Ok(response.json::<T>().await?)
    }
}

/// `POST /api/quests/action` body; `quest_id` is omitted entirely when the
/// action is not tied to a specific quest.
fn quest_action_body(action: &str, location: LocationId, quest_id: Option<&str>) -> Value {
    let mut body = json!({
        "action": action,
        "location": location.as_str(),
    });
    if let (Some(id), Some(map)) = (quest_id, body.as_object_mut()) {
        map.insert("quest_id".to_string(), Value::String(id.to_string()));
    }
    body
}

/// `POST /api/action` body: location and action plus any free-form extra
/// fields merged in at the top level.
fn location_action_body(location: LocationId, action: &str, extra: Option<Value>) -> Value {
    let mut body = json!({
        "location": location.as_str(),
        "action": action,
    });
    if let (Some(Value::Object(fields)), Some(map)) = (extra, body.as_object_mut()) {
        for (key, value) in fields {
            map.insert(key, value);
        }
    }
    body
}

fn dialog_body(session_id: &str, message: &str, context: Option<DialogContext>) -> Value {
    match context {
        Some(context) => json!({
            "session_id": session_id,
            "message": message,
            "context": context,
        }),
        None => json!({
            "session_id": session_id,
            "message": message,
        }),
    }
}

#[async_trait]
impl GameApi for HttpApi {
    async fn get_player(&self) -> Result<Player> {
        self.get_json("/api/player").await
    }

    async fn update_player(&self, patch: &Value) -> Result<Player> {
        self.put_json("/api/player", patch).await
    }

    async fn available_quests(&self) -> Result<Vec<Quest>> {
        let listing: QuestListResponse = self.get_json("/api/quests/available").await?;
        Ok(listing.quests)
    }

    async fn active_quests(&self) -> Result<Vec<Quest>> {
        let listing: QuestListResponse = self.get_json("/api/quests/active").await?;
        Ok(listing.quests)
    }

    async fn generate_quest(&self, quest_type: Option<&str>) -> Result<Quest> {
        let body = match quest_type {
            Some(kind) => json!({ "quest_type": kind }),
            None => json!({}),
        };
        self.post_json("/api/quests/generate", &body).await
    }

    async fn refresh_quests(&self) -> Result<Vec<Quest>> {
        let listing: QuestListResponse = self.post_empty("/api/quests/refresh").await?;
        Ok(listing.quests)
    }

    async fn accept_quest(&self, quest_id: &str) -> Result<Quest> {
        self.post_empty(&format!("/api/quests/{quest_id}/accept"))
            .await
    }

    async fn abandon_quest(&self, quest_id: &str) -> Result<()> {
        let _: Value = self
            .post_empty(&format!("/api/quests/{quest_id}/abandon"))
            .await?;
        Ok(())
    }

    async fn quest_progress(&self, quest_id: &str) -> Result<Value> {
        self.get_json(&format!("/api/quests/{quest_id}/progress"))
            .await
    }

    async fn quest_actions(&self, location: LocationId) -> Result<Vec<QuestAction>> {
        let listing: QuestActionsResponse = self
            .get_json(&format!("/api/quests/actions/{}", location.as_str()))
            .await?;
        Ok(listing.actions)
    }

    async fn perform_quest_action(
        &self,
        action: &str,
        location: LocationId,
        quest_id: Option<&str>,
    ) -> Result<QuestActionResponse> {
        let body = quest_action_body(action, location, quest_id);
        self.post_json("/api/quests/action", &body).await
    }

    async fn shop_items(&self) -> Result<Vec<InventoryItem>> {
        let inventory: ShopInventory = self.get_json("/api/shop/items").await?;
        Ok(inventory.items)
    }

    async fn buy_item(&self, item_id: &str, quantity: u32) -> Result<TradeResponse> {
        let body = json!({ "item_id": item_id, "quantity": quantity });
        self.post_json("/api/merchant/buy", &body).await
    }

    async fn sell_item(&self, item_id: &str, quantity: u32) -> Result<TradeResponse> {
        let body = json!({ "item_id": item_id, "quantity": quantity });
        self.post_json("/api/merchant/sell", &body).await
    }

    async fn smithy_recipes(&self) -> Result<RecipesResponse> {
        self.get_json("/api/smithy/recipes").await
    }

    async fn perform_action(
        &self,
        location: LocationId,
        action: &str,
        extra: Option<Value>,
    ) -> Result<ActionResponse> {
        let body = location_action_body(location, action, extra);
        self.post_json("/api/action", &body).await
    }

    async fn use_item(&self, item_index: usize) -> Result<ActionResponse> {
        let body = json!({ "itemId": item_index });
        self.post_json("/api/inventory/use", &body).await
    }

    async fn unequip_item(&self, slot: &str) -> Result<ActionResponse> {
        let body = json!({ "equipment_slot": slot });
        self.post_json("/api/inventory/unequip", &body).await
    }

    async fn send_dialog(
        &self,
        session_id: &str,
        message: &str,
        context: Option<DialogContext>,
    ) -> Result<DialogMessage> {
        let body = dialog_body(session_id, message, context);
        self.post_json("/api/dialog", &body).await
    }

    async fn dialog_history(&self, session_id: &str) -> Result<Vec<DialogMessage>> {
        self.get_json(&format!("/api/dialog/{session_id}/history"))
            .await
    }

    async fn conversation_stats(&self) -> Result<Value> {
        self.get_json("/api/conversation_stats").await
    }

    async fn quality_report(&self) -> Result<Value> {
        self.get_json("/api/quality_report").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = HttpApi::new("http://localhost:5000/");
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(api.url("/api/player"), "http://localhost:5000/api/player");
    }

    #[test]
    fn quest_action_body_omits_absent_quest_id() {
        let body = quest_action_body("rest", LocationId::Tavern, None);
        assert_eq!(body["action"], "rest");
        assert_eq!(body["location"], "tavern");
        assert!(body.get("quest_id").is_none());

        let body = quest_action_body("explore", LocationId::Forest, Some("q1"));
        assert_eq!(body["quest_id"], "q1");
    }

    #[test]
    fn location_action_body_merges_extra_fields() {
        let body = location_action_body(
            LocationId::Tavern,
            "rest",
            Some(json!({ "cost": 10 })),
        );
        assert_eq!(body["location"], "tavern");
        assert_eq!(body["action"], "rest");
        assert_eq!(body["cost"], 10);
    }

    #[test]
    fn dialog_body_omits_absent_context() {
        let body = dialog_body("merchant_1", "hello", None);
        assert!(body.get("context").is_none());
        assert_eq!(body["session_id"], "merchant_1");
    }
}
