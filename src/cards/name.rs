//! Card names: the closed sets of plant, pest, and action card kinds.
//!
//! Effects are resolved by exhaustive matches on these enums
//! (see `engine::effects`), so adding a card is a compile-checked change:
//! the catalog entry and the resolver arm must both exist.

use serde::{Deserialize, Serialize};

/// Plant and building card names.
///
/// `Compost` and `Pond` are buildings: they occupy a cell and grant
/// resources on placement, but they are not plants for neighbor-counting
/// effects and can never be grown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlantName {
    Lavender,
    Sunflower,
    Mushroom,
    Tree,
    Daisy,
    Cactus,
    Bamboo,
    Vine,
    Fern,
    LemonTree,
    WaterLily,
    Honeysuckle,
    Pumpkin,
    BeanPlant,
    Compost,
    Pond,
}

impl PlantName {
    /// All plant and building names, in catalog order.
    pub const ALL: [PlantName; 16] = [
        PlantName::Lavender,
        PlantName::Sunflower,
        PlantName::Mushroom,
        PlantName::Tree,
        PlantName::Daisy,
        PlantName::Cactus,
        PlantName::Bamboo,
        PlantName::Vine,
        PlantName::Fern,
        PlantName::LemonTree,
        PlantName::WaterLily,
        PlantName::Honeysuckle,
        PlantName::Pumpkin,
        PlantName::BeanPlant,
        PlantName::Compost,
        PlantName::Pond,
    ];

    /// True for living plants; false for buildings (`Compost`, `Pond`).
    ///
    /// Neighbor-counting growth effects only count living plants.
    #[must_use]
    pub fn is_plant(self) -> bool {
        !matches!(self, PlantName::Compost | PlantName::Pond)
    }
}

impl std::fmt::Display for PlantName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlantName::Lavender => "Lavender",
            PlantName::Sunflower => "Sunflower",
            PlantName::Mushroom => "Mushroom",
            PlantName::Tree => "Tree",
            PlantName::Daisy => "Daisy",
            PlantName::Cactus => "Cactus",
            PlantName::Bamboo => "Bamboo",
            PlantName::Vine => "Vine",
            PlantName::Fern => "Fern",
            PlantName::LemonTree => "LemonTree",
            PlantName::WaterLily => "WaterLily",
            PlantName::Honeysuckle => "Honeysuckle",
            PlantName::Pumpkin => "Pumpkin",
            PlantName::BeanPlant => "BeanPlant",
            PlantName::Compost => "Compost",
            PlantName::Pond => "Pond",
        };
        write!(f, "{name}")
    }
}

/// Pest card names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PestName {
    Aphid,
    Locust,
}

impl PestName {
    /// All pest names, in catalog order.
    pub const ALL: [PestName; 2] = [PestName::Aphid, PestName::Locust];
}

impl std::fmt::Display for PestName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PestName::Aphid => "Aphid",
            PestName::Locust => "Locust",
        };
        write!(f, "{name}")
    }
}

/// Action card names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionName {
    Fertilizer,
    Watering,
    Pruning,
    Composting,
    WeatherBoost,
}

impl ActionName {
    /// All action card names, in catalog order.
    pub const ALL: [ActionName; 5] = [
        ActionName::Fertilizer,
        ActionName::Watering,
        ActionName::Pruning,
        ActionName::Composting,
        ActionName::WeatherBoost,
    ];
}

impl std::fmt::Display for ActionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionName::Fertilizer => "Fertilizer",
            ActionName::Watering => "Watering",
            ActionName::Pruning => "Pruning",
            ActionName::Composting => "Composting",
            ActionName::WeatherBoost => "WeatherBoost",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buildings_are_not_plants() {
        assert!(!PlantName::Compost.is_plant());
        assert!(!PlantName::Pond.is_plant());
        assert!(PlantName::Tree.is_plant());
        assert!(PlantName::Lavender.is_plant());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(PlantName::LemonTree.to_string(), "LemonTree");
        assert_eq!(PestName::Locust.to_string(), "Locust");
        assert_eq!(ActionName::WeatherBoost.to_string(), "WeatherBoost");
    }

    #[test]
    fn test_all_lists_are_exhaustive() {
        assert_eq!(PlantName::ALL.len(), 16);
        assert_eq!(PestName::ALL.len(), 2);
        assert_eq!(ActionName::ALL.len(), 5);
    }
}
