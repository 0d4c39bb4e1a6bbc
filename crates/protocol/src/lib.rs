//! Wire data model shared between the Stonehaven client crates.
//!
//! Every type here mirrors server-owned truth: the client deserializes these
//! records from HTTP responses and never computes their values on its own.
//! Optional fields are tolerated when absent so a partial server payload
//! degrades to defaults instead of a decode failure.
pub mod crafting;
pub mod dialog;
pub mod item;
pub mod location;
pub mod player;
pub mod quest;
pub mod response;

pub use crafting::{CraftingMaterial, CraftingRecipe};
pub use dialog::{DialogContext, DialogMessage, DialogOption, PlayerSummary};
pub use item::InventoryItem;
pub use location::LocationId;
pub use player::{EquippedItems, Player, PlayerStats};
pub use quest::{Quest, QuestAction, QuestObjective, QuestReward, QuestStatus, QuestStep};
pub use response::{
    ActionData, ActionResponse, QuestActionResponse, QuestActionsResponse, QuestListResponse,
    RecipesResponse, ShopInventory, TradeResponse,
};
