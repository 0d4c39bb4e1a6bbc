//! Quest records and the location-scoped quest action hint.
use serde::{Deserialize, Serialize};

use crate::item::InventoryItem;

/// A quest as reported by the server.
///
/// Lifecycle: available (offered, not yet in the store) -> active (accepted)
/// -> completed or abandoned. The client never transitions a quest locally
/// except by list manipulation immediately after a confirmed server call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub objectives: Vec<QuestObjective>,
    /// Some endpoints report objective state under `progress` instead.
    #[serde(default)]
    pub progress: Vec<QuestObjective>,
    #[serde(default)]
    pub steps: Vec<QuestStep>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub reward_gold: Option<i64>,
    #[serde(default)]
    pub reward_exp: Option<i64>,
    #[serde(default)]
    pub reward: Option<QuestReward>,
    #[serde(default)]
    pub required_items: Vec<String>,
    #[serde(default)]
    pub status: Option<QuestStatus>,
}

impl Quest {
    /// Objectives to display, preferring the `progress` variant when present.
    pub fn visible_objectives(&self) -> &[QuestObjective] {
        if self.progress.is_empty() {
            &self.objectives
        } else {
            &self.progress
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestStatus {
    Available,
    Active,
    Completed,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestObjective {
    #[serde(default)]
    pub id: Option<String>,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub progress: Option<i64>,
    #[serde(default)]
    pub target: Option<i64>,
    #[serde(default)]
    pub is_current: Option<bool>,
    #[serde(default)]
    pub missing_items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestStep {
    pub action: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub required_items: Vec<String>,
    #[serde(default)]
    pub consumes_items: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestReward {
    #[serde(default)]
    pub experience: Option<i64>,
    #[serde(default)]
    pub gold: Option<i64>,
    #[serde(default)]
    pub items: Vec<InventoryItem>,
}

/// A hint that a quest can be advanced by a specific action at the current
/// location. Purely advisory; never mutates state itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestAction {
    pub action: String,
    pub description: String,
    pub quest_id: String,
    pub quest_title: String,
    #[serde(default)]
    pub step_index: Option<usize>,
    #[serde(default)]
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_quest_payload_decodes() {
        let quest: Quest =
            serde_json::from_str(r#"{"id":"q1","title":"Wolf Cull"}"#).unwrap();
        assert!(quest.objectives.is_empty());
        assert!(quest.status.is_none());
        assert!(quest.visible_objectives().is_empty());
    }

    #[test]
    fn progress_variant_wins_when_present() {
        let quest: Quest = serde_json::from_str(
            r#"{
                "id": "q2",
                "title": "Herbs",
                "objectives": [{"description": "stale", "completed": false}],
                "progress": [{"description": "Gather herbs", "completed": true, "progress": 3, "target": 3}]
            }"#,
        )
        .unwrap();
        let visible = quest.visible_objectives();
        assert_eq!(visible.len(), 1);
        assert!(visible[0].completed);
        assert_eq!(visible[0].target, Some(3));
    }

    #[test]
    fn status_strings_map_to_variants() {
        let quest: Quest = serde_json::from_str(
            r#"{"id":"q3","title":"x","status":"completed"}"#,
        )
        .unwrap();
        assert_eq!(quest.status, Some(QuestStatus::Completed));
    }
}
