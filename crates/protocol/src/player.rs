//! Player snapshot and related records.
use serde::{Deserialize, Serialize};

use crate::item::InventoryItem;

/// Server-owned player snapshot.
///
/// Invariants (`0 <= health <= max_health`, `0 <= mana <= max_mana`,
/// `gold >= 0`) are enforced authoritatively by the server; the store's
/// resource events re-apply them as clamps when merging loose payloads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub level: u32,
    pub health: i64,
    pub max_health: i64,
    pub mana: i64,
    pub max_mana: i64,
    pub experience: i64,
    pub gold: i64,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
    #[serde(default)]
    pub equipped_items: EquippedItems,
    #[serde(default)]
    pub stats: PlayerStats,
}

impl Player {
    /// Locate an inventory item by its (id, name) identity pair.
    pub fn find_item(&self, id: &str, name: &str) -> Option<usize> {
        self.inventory
            .iter()
            .position(|item| item.id == id && item.name == name)
    }

    /// Fraction of maximum health remaining, in `[0.0, 1.0]`.
    /// Returns 0.0 when the maximum is unknown or zero.
    pub fn health_fraction(&self) -> f64 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (self.health.max(0) as f64 / self.max_health as f64).min(1.0)
    }
}

/// Map of equipped-item slots.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EquippedItems {
    #[serde(default)]
    pub weapon: Option<InventoryItem>,
    #[serde(default)]
    pub armor: Option<InventoryItem>,
    #[serde(default)]
    pub accessory: Option<InventoryItem>,
}

impl EquippedItems {
    /// Slot names paired with their current contents, in display order.
    /// Slot keys match the wire strings expected by `/api/inventory/unequip`.
    pub fn slots(&self) -> [(&'static str, Option<&InventoryItem>); 3] {
        [
            ("weapon", self.weapon.as_ref()),
            ("armor", self.armor.as_ref()),
            ("accessory", self.accessory.as_ref()),
        ]
    }
}

/// Base attribute block. Also used as a partial stat-modifier payload on
/// items, where absent attributes decode to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(default)]
    pub strength: i64,
    #[serde(default)]
    pub dexterity: i64,
    #[serde(default)]
    pub intelligence: i64,
    #[serde(default)]
    pub vitality: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_payload() {
        let raw = r#"{
            "name": "Hero",
            "level": 3,
            "health": 80,
            "maxHealth": 120,
            "mana": 40,
            "maxMana": 60,
            "experience": 250,
            "gold": 75,
            "inventory": [],
            "equippedItems": {},
            "stats": {"strength": 12, "dexterity": 10, "intelligence": 8, "vitality": 11}
        }"#;

        let player: Player = serde_json::from_str(raw).unwrap();
        assert_eq!(player.level, 3);
        assert_eq!(player.max_health, 120);
        assert_eq!(player.stats.strength, 12);
        assert!(player.equipped_items.weapon.is_none());
    }

    #[test]
    fn missing_optional_sections_default() {
        let raw = r#"{
            "name": "Hero",
            "level": 1,
            "health": 100,
            "maxHealth": 100,
            "mana": 50,
            "maxMana": 50,
            "experience": 0,
            "gold": 100
        }"#;

        let player: Player = serde_json::from_str(raw).unwrap();
        assert!(player.inventory.is_empty());
        assert_eq!(player.stats, PlayerStats::default());
    }

    #[test]
    fn health_fraction_handles_degenerate_maximum() {
        let mut player: Player = serde_json::from_str(
            r#"{"name":"x","level":1,"health":50,"maxHealth":100,"mana":0,"maxMana":0,"experience":0,"gold":0}"#,
        )
        .unwrap();
        assert!((player.health_fraction() - 0.5).abs() < f64::EPSILON);

        player.max_health = 0;
        assert_eq!(player.health_fraction(), 0.0);
    }
}
