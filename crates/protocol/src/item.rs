//! Inventory item record.
use serde::{Deserialize, Serialize};

use crate::player::PlayerStats;

/// A stackable inventory entry. Identity for lookups is the (id, name) pair;
/// `quantity` carries the stack size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub value: Option<i64>,
    #[serde(default)]
    pub rarity: Option<String>,
    /// Partial stat modifiers granted while equipped.
    #[serde(default)]
    pub stats: Option<PlayerStats>,
    #[serde(default)]
    pub damage: Option<i64>,
    #[serde(default)]
    pub armor: Option<i64>,
    #[serde(default)]
    pub mining_bonus: Option<i64>,
    #[serde(default)]
    pub sell_value: Option<i64>,
    #[serde(default)]
    pub condition: Option<f64>,
    #[serde(default)]
    pub upgrade_level: Option<u32>,
}

fn default_quantity() -> u32 {
    1
}

impl InventoryItem {
    /// Whether the smithy can work on this item.
    pub fn is_equipment(&self) -> bool {
        matches!(self.kind.as_str(), "weapon" | "armor")
    }

    /// Price when buying from a shop; items without a listed value cannot be
    /// bought.
    pub fn buy_price(&self) -> Option<i64> {
        self.value
    }

    /// Price when selling to a merchant, falling back to the listed value.
    pub fn sell_price(&self) -> Option<i64> {
        self.sell_value.or(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_defaults_to_one() {
        let item: InventoryItem =
            serde_json::from_str(r#"{"id":"herb","name":"Herb","type":"consumable"}"#).unwrap();
        assert_eq!(item.quantity, 1);
        assert!(item.stats.is_none());
    }

    #[test]
    fn partial_stat_modifiers_decode() {
        let item: InventoryItem = serde_json::from_str(
            r#"{"id":"sword","name":"Iron Sword","type":"weapon","stats":{"strength":2}}"#,
        )
        .unwrap();
        let stats = item.stats.unwrap();
        assert_eq!(stats.strength, 2);
        assert_eq!(stats.vitality, 0);
        assert!(item.is_equipment());
    }

    #[test]
    fn sell_price_falls_back_to_value() {
        let item: InventoryItem = serde_json::from_str(
            r#"{"id":"ore","name":"Ore","type":"material","value":12}"#,
        )
        .unwrap();
        assert_eq!(item.sell_price(), Some(12));
    }
}
