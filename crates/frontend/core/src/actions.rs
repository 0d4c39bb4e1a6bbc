//! Client-side catalogs of location actions and their preconditions.
//!
//! These mirror what the server accepts at each location; the costs and
//! danger ratings exist so screens can refuse an action locally (and skip
//! the network call entirely) when the player clearly cannot afford it.
use stonehaven_protocol::Player;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Danger {
    Low,
    Medium,
    High,
}

impl Danger {
    pub fn label(self) -> &'static str {
        match self {
            Danger::Low => "low",
            Danger::Medium => "medium",
            Danger::High => "high",
        }
    }
}

/// One selectable action at a location.
#[derive(Clone, Copy, Debug)]
pub struct LocationAction {
    /// Wire id sent to the server.
    pub id: &'static str,
    /// Gesture name used for the quest follow-up. Usually the same as `id`;
    /// the forest names its quest gestures differently.
    pub quest_gesture: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Gold charged by the server; checked client-side before the call.
    pub gold_cost: i64,
    /// Mana (stamina) required; checked client-side before the call.
    pub stamina_cost: i64,
    pub danger: Danger,
}

impl LocationAction {
    const fn new(id: &'static str, name: &'static str, description: &'static str) -> Self {
        Self {
            id,
            quest_gesture: id,
            name,
            description,
            gold_cost: 0,
            stamina_cost: 0,
            danger: Danger::Low,
        }
    }

    const fn gesture(mut self, quest_gesture: &'static str) -> Self {
        self.quest_gesture = quest_gesture;
        self
    }

    const fn gold(mut self, cost: i64) -> Self {
        self.gold_cost = cost;
        self
    }

    const fn stamina(mut self, cost: i64) -> Self {
        self.stamina_cost = cost;
        self
    }

    const fn danger(mut self, danger: Danger) -> Self {
        self.danger = danger;
        self
    }

    pub fn affordable(&self, player: &Player) -> bool {
        player.gold >= self.gold_cost
    }

    pub fn has_stamina(&self, player: &Player) -> bool {
        player.mana >= self.stamina_cost
    }

    /// High-danger actions are blocked below the screen's health threshold.
    pub fn too_dangerous(&self, player: &Player, threshold: f64) -> bool {
        self.danger == Danger::High && player.health_fraction() < threshold
    }
}

/// Cost of a night's rest at the tavern, in gold.
pub const TAVERN_REST_COST: i64 = 10;

pub const TAVERN_ACTIONS: &[LocationAction] = &[
    LocationAction::new("rest", "Rest (10 gold)", "Restore health and mana")
        .gold(TAVERN_REST_COST),
    LocationAction::new(
        "talk_innkeeper",
        "Talk to Innkeeper",
        "Get local information and rumors",
    ),
    LocationAction::new(
        "talk_regular",
        "Talk to Regular",
        "Chat with local tavern regulars",
    ),
];

pub const FOREST_ACTIONS: &[LocationAction] = &[
    LocationAction::new(
        "explore",
        "Explore Deeper",
        "Search for resources and hidden treasures",
    )
    .gesture("explore_forest"),
    LocationAction::new(
        "hunt",
        "Hunt Creatures",
        "Battle forest creatures for experience and loot",
    )
    .gesture("hunt_creatures")
    .danger(Danger::Medium),
    LocationAction::new(
        "gather",
        "Gather Materials",
        "Collect herbs, wood, and other crafting materials",
    )
    .gesture("gather_materials"),
    LocationAction::new(
        "search_treasure",
        "Search for Treasure",
        "Look for hidden chests and valuable items",
    )
    .danger(Danger::High),
];

pub const MINE_ACTIONS: &[LocationAction] = &[
    LocationAction::new(
        "shallow_mining",
        "Mine Shallow Tunnels",
        "Safe mining in the upper levels of the mine",
    )
    .stamina(10),
    LocationAction::new(
        "deep_mining",
        "Deep Mining",
        "Venture into the dangerous depths for rare materials",
    )
    .stamina(20)
    .danger(Danger::High),
    LocationAction::new(
        "gem_hunting",
        "Search for Gems",
        "Look for precious gems and crystals",
    )
    .stamina(15)
    .danger(Danger::Medium),
    LocationAction::new(
        "abandoned_exploration",
        "Explore Abandoned Shafts",
        "Investigate old mining tunnels for treasures",
    )
    .stamina(25)
    .danger(Danger::High),
];

/// Health fraction below which high-danger forest actions are disabled.
pub const FOREST_DANGER_THRESHOLD: f64 = 0.5;
/// Health fraction below which high-danger mine actions are disabled.
pub const MINE_DANGER_THRESHOLD: f64 = 0.4;
/// Health fraction below which the forest shows its low-health warning.
pub const LOW_HEALTH_WARNING: f64 = 0.3;
/// Mana level below which the mine shows its fatigue warning.
pub const MINE_FATIGUE_WARNING: i64 = 20;

#[cfg(test)]
mod tests {
    use super::*;
    use stonehaven_protocol::Player;

    fn player(gold: i64, health: i64, mana: i64) -> Player {
        serde_json::from_value(serde_json::json!({
            "name": "Hero",
            "level": 1,
            "health": health,
            "maxHealth": 100,
            "mana": mana,
            "maxMana": 50,
            "experience": 0,
            "gold": gold
        }))
        .unwrap()
    }

    #[test]
    fn rest_requires_ten_gold() {
        let rest = &TAVERN_ACTIONS[0];
        assert!(!rest.affordable(&player(5, 100, 50)));
        assert!(rest.affordable(&player(10, 100, 50)));
    }

    #[test]
    fn mine_actions_check_stamina() {
        let deep = MINE_ACTIONS
            .iter()
            .find(|a| a.id == "deep_mining")
            .unwrap();
        assert!(!deep.has_stamina(&player(0, 100, 19)));
        assert!(deep.has_stamina(&player(0, 100, 20)));
    }

    #[test]
    fn danger_gating_uses_per_screen_thresholds() {
        let treasure = FOREST_ACTIONS
            .iter()
            .find(|a| a.id == "search_treasure")
            .unwrap();
        // 45% health: blocked in the forest (50%) but fine in the mine (40%).
        let hurt = player(0, 45, 50);
        assert!(treasure.too_dangerous(&hurt, FOREST_DANGER_THRESHOLD));
        assert!(!treasure.too_dangerous(&hurt, MINE_DANGER_THRESHOLD));

        let explore = FOREST_ACTIONS.iter().find(|a| a.id == "explore").unwrap();
        assert!(!explore.too_dangerous(&hurt, FOREST_DANGER_THRESHOLD));
    }

    #[test]
    fn forest_quest_gestures_differ_from_wire_ids() {
        let gestures: Vec<_> = FOREST_ACTIONS.iter().map(|a| a.quest_gesture).collect();
        assert_eq!(
            gestures,
            [
                "explore_forest",
                "hunt_creatures",
                "gather_materials",
                "search_treasure"
            ]
        );
        // Everywhere else the two names coincide.
        for action in TAVERN_ACTIONS.iter().chain(MINE_ACTIONS) {
            assert_eq!(action.id, action.quest_gesture);
        }
    }
}
