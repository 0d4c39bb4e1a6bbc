//! Crafting recipes served by the smithy.
use serde::{Deserialize, Serialize};

use crate::item::InventoryItem;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CraftingRecipe {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub cost: i64,
    #[serde(default)]
    pub level_required: u32,
    #[serde(default)]
    pub crafting_time: String,
    #[serde(default)]
    pub materials: Vec<CraftingMaterial>,
    pub result: InventoryItem,
    /// Server-computed: whether the player currently meets the requirements.
    #[serde(default)]
    pub can_craft: bool,
    #[serde(default)]
    pub craft_message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CraftingMaterial {
    pub id: String,
    pub name: String,
    pub quantity: u32,
}
