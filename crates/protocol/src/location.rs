//! Location identifiers driving navigation and wire paths.
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Identifier of a game location / screen.
///
/// Wire strings match the server's location keys exactly, including the one
/// legacy camelCase key (`mainPage`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, EnumIter)]
pub enum LocationId {
    #[serde(rename = "mainPage")]
    MainPage,
    #[serde(rename = "tavern")]
    Tavern,
    #[serde(rename = "shop")]
    Shop,
    #[serde(rename = "smithy")]
    Smithy,
    #[serde(rename = "forest")]
    Forest,
    #[serde(rename = "mine_entrance")]
    Mine,
    #[serde(rename = "inventory")]
    Inventory,
    #[serde(rename = "quest")]
    Quest,
}

impl LocationId {
    /// Wire key used in request paths and bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            LocationId::MainPage => "mainPage",
            LocationId::Tavern => "tavern",
            LocationId::Shop => "shop",
            LocationId::Smithy => "smithy",
            LocationId::Forest => "forest",
            LocationId::Mine => "mine_entrance",
            LocationId::Inventory => "inventory",
            LocationId::Quest => "quest",
        }
    }

    /// Human-readable name for navigation and headers.
    pub fn title(self) -> &'static str {
        match self {
            LocationId::MainPage => "Market Square",
            LocationId::Tavern => "Tavern",
            LocationId::Shop => "Shop",
            LocationId::Smithy => "Smithy",
            LocationId::Forest => "Forest",
            LocationId::Mine => "Mine Entrance",
            LocationId::Inventory => "Inventory",
            LocationId::Quest => "Quests",
        }
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn wire_keys_round_trip() {
        for location in LocationId::iter() {
            let encoded = serde_json::to_string(&location).unwrap();
            assert_eq!(encoded, format!("\"{}\"", location.as_str()));
            let decoded: LocationId = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, location);
        }
    }
}
