//! The card library: read-only catalogs of every card definition.
//!
//! The library is built once per game and never changes at runtime. Catalog
//! order is fixed (deck generation iterates it, and shuffling must be the
//! only source of randomness in setup); lookup by name goes through
//! `FxHashMap` indices.

use rustc_hash::FxHashMap;

use super::definition::{ActionDef, PestDef, PlantDef};
use super::name::{ActionName, PestName, PlantName};
use crate::core::resources::{Resource, ResourceCost};

/// Read-only catalogs of plant, pest, and action card definitions.
#[derive(Clone, Debug)]
pub struct CardLibrary {
    plants: Vec<PlantDef>,
    pests: Vec<PestDef>,
    actions: Vec<ActionDef>,
    plant_index: FxHashMap<PlantName, usize>,
    pest_index: FxHashMap<PestName, usize>,
    action_index: FxHashMap<ActionName, usize>,
}

impl CardLibrary {
    /// Build the standard library.
    #[must_use]
    pub fn standard() -> Self {
        let plants = plant_catalog();
        let pests = pest_catalog();
        let actions = action_catalog();

        let plant_index = plants.iter().enumerate().map(|(i, d)| (d.name, i)).collect();
        let pest_index = pests.iter().enumerate().map(|(i, d)| (d.name, i)).collect();
        let action_index = actions.iter().enumerate().map(|(i, d)| (d.name, i)).collect();

        Self {
            plants,
            pests,
            actions,
            plant_index,
            pest_index,
            action_index,
        }
    }

    /// Look up a plant definition.
    ///
    /// Every `PlantName` is registered, so this never fails for library
    /// builds that pass the exhaustiveness test below.
    #[must_use]
    pub fn plant(&self, name: PlantName) -> &PlantDef {
        &self.plants[self.plant_index[&name]]
    }

    /// Look up a pest definition.
    #[must_use]
    pub fn pest(&self, name: PestName) -> &PestDef {
        &self.pests[self.pest_index[&name]]
    }

    /// Look up an action card definition.
    #[must_use]
    pub fn action(&self, name: ActionName) -> &ActionDef {
        &self.actions[self.action_index[&name]]
    }

    /// Iterate over plant definitions in catalog order.
    pub fn plants(&self) -> impl Iterator<Item = &PlantDef> {
        self.plants.iter()
    }

    /// Iterate over pest definitions in catalog order.
    pub fn pests(&self) -> impl Iterator<Item = &PestDef> {
        self.pests.iter()
    }

    /// Iterate over action card definitions in catalog order.
    pub fn actions(&self) -> impl Iterator<Item = &ActionDef> {
        self.actions.iter()
    }
}

fn plant_catalog() -> Vec<PlantDef> {
    vec![
        PlantDef {
            name: PlantName::Lavender,
            growth_cost: ResourceCost::of(&[(Resource::Water, 1), (Resource::Light, 1)]),
            base_points: 2,
            place_gain: None,
            effect: "+1 point for each plant neighbor (excluding Lavender)",
            description: "Thrives near other plants, but not near other Lavenders.",
        },
        PlantDef {
            name: PlantName::Sunflower,
            growth_cost: ResourceCost::of(&[(Resource::Water, 1)]),
            base_points: 2,
            place_gain: None,
            effect: "+2 light if at least 1 plant neighbor, +1 point",
            description: "Loves light, even more when near other plants.",
        },
        PlantDef {
            name: PlantName::Mushroom,
            growth_cost: ResourceCost::of(&[(Resource::Compost, 2)]),
            base_points: 1,
            place_gain: None,
            effect: "+1 point for each Tree neighbor",
            description: "Grows well near trees.",
        },
        PlantDef {
            name: PlantName::Tree,
            growth_cost: ResourceCost::free(),
            base_points: 3,
            place_gain: None,
            effect: "No special effect",
            description: "Strong and steady. Provides shade for some plants.",
        },
        PlantDef {
            name: PlantName::Daisy,
            growth_cost: ResourceCost::of(&[(Resource::Water, 1), (Resource::Light, 1)]),
            base_points: 1,
            place_gain: None,
            effect: "+1 point for each plant neighbor",
            description: "Loves being around other plants.",
        },
        PlantDef {
            name: PlantName::Cactus,
            growth_cost: ResourceCost::of(&[(Resource::Light, 2)]),
            base_points: 1,
            place_gain: None,
            effect: "+1 point for each empty adjacent space (no plants or pests)",
            description: "Thrives in isolation from both plants and pests.",
        },
        PlantDef {
            name: PlantName::Bamboo,
            growth_cost: ResourceCost::of(&[(Resource::Water, 1), (Resource::Compost, 1)]),
            base_points: 2,
            place_gain: None,
            effect: "+2 points for each adjacent Bamboo",
            description: "Grows in clusters with other bamboo.",
        },
        PlantDef {
            name: PlantName::Vine,
            growth_cost: ResourceCost::of(&[(Resource::Water, 1), (Resource::Light, 1)]),
            base_points: 0,
            place_gain: None,
            effect: "+1 point for each grown plant neighbor",
            description: "Benefits from grown plants nearby.",
        },
        PlantDef {
            name: PlantName::Fern,
            growth_cost: ResourceCost::of(&[(Resource::Water, 1)]),
            base_points: 1,
            place_gain: None,
            effect: "+1 light and +1 point if next to a Tree",
            description: "Grows in tree shade.",
        },
        PlantDef {
            name: PlantName::LemonTree,
            growth_cost: ResourceCost::of(&[
                (Resource::Water, 1),
                (Resource::Light, 1),
                (Resource::Compost, 1),
            ]),
            base_points: 1,
            place_gain: None,
            effect: "+5 points and +1 pest to place",
            description: "Beautiful but attracts pests.",
        },
        PlantDef {
            name: PlantName::WaterLily,
            growth_cost: ResourceCost::of(&[(Resource::Light, 1)]),
            base_points: 1,
            place_gain: None,
            effect: "+1 water per empty space, +1 point",
            description: "Collects water from open surroundings.",
        },
        PlantDef {
            name: PlantName::Honeysuckle,
            growth_cost: ResourceCost::of(&[(Resource::Compost, 1)]),
            base_points: 1,
            place_gain: None,
            effect: "+1 water per plant neighbor, +1 point if 2+ plant neighbors",
            description: "Draws water from nearby plants.",
        },
        PlantDef {
            name: PlantName::Pumpkin,
            growth_cost: ResourceCost::of(&[(Resource::Water, 1), (Resource::Light, 1)]),
            base_points: 2,
            place_gain: None,
            effect: "+1 compost (+3 if next to Mushroom) and +1 point",
            description: "Thrives with fungi.",
        },
        PlantDef {
            name: PlantName::BeanPlant,
            growth_cost: ResourceCost::of(&[(Resource::Water, 1)]),
            base_points: 1,
            place_gain: None,
            effect: "+1 compost per grown neighbor, +1 point if any grown neighbor",
            description: "Improves soil around mature plants.",
        },
        PlantDef {
            name: PlantName::Compost,
            growth_cost: ResourceCost::free(),
            base_points: 0,
            place_gain: Some((Resource::Compost, 1)),
            effect: "+1 compost resource",
            description: "Compost is a nutritious resource that can be used to grow plants.",
        },
        PlantDef {
            name: PlantName::Pond,
            growth_cost: ResourceCost::free(),
            base_points: 0,
            place_gain: Some((Resource::Water, 2)),
            effect: "+2 water resources",
            description: "Ponds are a source of water.",
        },
    ]
}

fn pest_catalog() -> Vec<PestDef> {
    vec![
        PestDef {
            name: PestName::Aphid,
            damage: 1,
            effect: "Reduces plant points by 1",
            description: "Small but persistent pest that weakens plants.",
        },
        PestDef {
            name: PestName::Locust,
            damage: 3,
            effect: "Destroys plant completely",
            description: "Devastating pest that completely destroys plants.",
        },
    ]
}

fn action_catalog() -> Vec<ActionDef> {
    vec![
        ActionDef {
            name: ActionName::Fertilizer,
            cost: ResourceCost::of(&[(Resource::Compost, 1)]),
            effect: "Grow a plant instantly without paying its growth cost",
            description: "Rich nutrients that accelerate plant growth.",
        },
        ActionDef {
            name: ActionName::Watering,
            cost: ResourceCost::free(),
            effect: "+3 water resources",
            description: "Abundant water for your garden.",
        },
        ActionDef {
            name: ActionName::Pruning,
            cost: ResourceCost::of(&[(Resource::Light, 1)]),
            effect: "+2 points for each grown plant",
            description: "Careful maintenance improves plant health.",
        },
        ActionDef {
            name: ActionName::Composting,
            cost: ResourceCost::free(),
            effect: "+2 compost resources",
            description: "Natural fertilizer from organic waste.",
        },
        ActionDef {
            name: ActionName::WeatherBoost,
            cost: ResourceCost::free(),
            effect: "+2 light resources and +1 point",
            description: "Perfect weather conditions boost your garden.",
        },
    ]
}
