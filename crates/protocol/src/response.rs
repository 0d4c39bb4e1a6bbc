//! Response envelopes for the server endpoints.
//!
//! Business-rule rejections arrive in-band as `{success: false, message}`
//! rather than as HTTP errors, so `success` and `message` are modeled
//! explicitly instead of being folded into the transport error type.
use serde::{Deserialize, Serialize};

use crate::crafting::CraftingRecipe;
use crate::item::InventoryItem;
use crate::player::Player;
use crate::quest::{Quest, QuestAction, QuestReward};

/// Generic `{success, message, data?}` envelope returned by `POST /api/action`
/// and the inventory endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<ActionData>,
}

/// Loose payload attached to an [`ActionResponse`]. Which fields are present
/// depends on the action; absent fields decode to `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionData {
    #[serde(default)]
    pub gold: Option<i64>,
    #[serde(default)]
    pub health: Option<i64>,
    #[serde(default)]
    pub mana: Option<i64>,
    #[serde(default)]
    pub player: Option<Player>,
}

/// Envelope for `POST /api/quests/action`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestActionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub quest_completed: Option<bool>,
    #[serde(default)]
    pub rewards: Option<QuestReward>,
    /// Updated player snapshot, when the action touched player state.
    #[serde(default)]
    pub player: Option<Player>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestListResponse {
    #[serde(default)]
    pub quests: Vec<Quest>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestActionsResponse {
    #[serde(default)]
    pub actions: Vec<QuestAction>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopInventory {
    #[serde(default)]
    pub items: Vec<InventoryItem>,
}

/// Envelope for `/api/merchant/buy` and `/api/merchant/sell`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TradeResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Envelope for `GET /api/smithy/recipes`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipesResponse {
    pub success: bool,
    #[serde(default)]
    pub recipes: Vec<CraftingRecipe>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_data_subset_decodes() {
        let response: ActionResponse = serde_json::from_str(
            r#"{"success": true, "message": "You rest by the fire.", "data": {"gold": 90, "health": 100, "mana": 50}}"#,
        )
        .unwrap();
        let data = response.data.unwrap();
        assert_eq!(data.gold, Some(90));
        assert!(data.player.is_none());
    }

    #[test]
    fn rejection_without_data_decodes() {
        let response: ActionResponse =
            serde_json::from_str(r#"{"success": false, "message": "Not enough gold"}"#).unwrap();
        assert!(!response.success);
        assert!(response.data.is_none());
    }

    #[test]
    fn empty_quest_listings_default() {
        let listing: QuestActionsResponse = serde_json::from_str("{}").unwrap();
        assert!(listing.actions.is_empty());
        let quests: QuestListResponse = serde_json::from_str("{}").unwrap();
        assert!(quests.quests.is_empty());
    }
}
