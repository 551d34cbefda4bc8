//! Effect resolution: the pure dispatch tables for card behavior.
//!
//! Card definitions are plain data; behavior lives here, in exhaustive
//! matches keyed on the card name enums. Each resolver is a pure function
//! of its parameters: the four-neighbor context (owned, in the fixed
//! up/down/left/right order) and the mutable player state it targets. The
//! engine is the only caller, guarantees a growth effect runs at most once
//! per tile (the `grown` flag), and deducts resource costs *before*
//! invoking a resolver, so resolvers never re-validate affordability.
//!
//! All resource gains go through the bounded pool, so effects can never
//! push a count past the configured maximum.

use crate::cards::name::{ActionName, PestName, PlantName};
use crate::core::resources::Resource;
use crate::engine::state::PlayerState;
use crate::garden::Neighbor;

fn plant_neighbors(neighbors: &[Neighbor; 4]) -> i64 {
    neighbors.iter().filter(|n| n.is_plant()).count() as i64
}

fn empty_neighbors(neighbors: &[Neighbor; 4]) -> i64 {
    neighbors.iter().filter(|n| n.is_empty()).count() as i64
}

fn grown_neighbors(neighbors: &[Neighbor; 4]) -> i64 {
    neighbors.iter().filter(|n| n.is_grown_plant()).count() as i64
}

fn named_neighbors(neighbors: &[Neighbor; 4], name: PlantName) -> i64 {
    neighbors
        .iter()
        .filter(|n| n.plant_name() == Some(name))
        .count() as i64
}

/// Run a plant's growth effect against the acting player.
pub(crate) fn resolve_growth(
    name: PlantName,
    neighbors: &[Neighbor; 4],
    player: &mut PlayerState,
) {
    match name {
        // +1 point for each plant neighbor that is not Lavender.
        PlantName::Lavender => {
            let count = neighbors
                .iter()
                .filter(|n| n.is_plant() && n.plant_name() != Some(PlantName::Lavender))
                .count() as i64;
            player.score += count;
        }
        // +2 light and +1 point if at least one plant neighbor.
        PlantName::Sunflower => {
            if plant_neighbors(neighbors) > 0 {
                player.resources.gain(Resource::Light, 2);
                player.score += 1;
            }
        }
        // +1 point if next to a Tree.
        PlantName::Mushroom => {
            if named_neighbors(neighbors, PlantName::Tree) > 0 {
                player.score += 1;
            }
        }
        // Trees and buildings have no growth effect; they can never be
        // grown (empty growth cost).
        PlantName::Tree | PlantName::Compost | PlantName::Pond => {}
        // +1 point for each plant neighbor.
        PlantName::Daisy => {
            player.score += plant_neighbors(neighbors);
        }
        // +1 point for each empty adjacent space.
        PlantName::Cactus => {
            player.score += empty_neighbors(neighbors);
        }
        // +2 points for each adjacent Bamboo.
        PlantName::Bamboo => {
            player.score += named_neighbors(neighbors, PlantName::Bamboo) * 2;
        }
        // +1 point for each grown plant neighbor.
        PlantName::Vine => {
            player.score += grown_neighbors(neighbors);
        }
        // +1 light and +1 point if next to a Tree.
        PlantName::Fern => {
            if named_neighbors(neighbors, PlantName::Tree) > 0 {
                player.resources.gain(Resource::Light, 1);
                player.score += 1;
            }
        }
        // +5 points, but the player now owes a pest placement.
        PlantName::LemonTree => {
            player.score += 5;
            player.pest_to_place += 1;
        }
        // +1 water per empty neighbor, +1 point.
        PlantName::WaterLily => {
            player.resources.gain(Resource::Water, empty_neighbors(neighbors) as u8);
            player.score += 1;
        }
        // +1 water per plant neighbor, +1 point when clustered.
        PlantName::Honeysuckle => {
            let count = plant_neighbors(neighbors);
            player.resources.gain(Resource::Water, count as u8);
            if count >= 2 {
                player.score += 1;
            }
        }
        // +1 compost (+3 if next to a Mushroom) and +1 point.
        PlantName::Pumpkin => {
            let compost = if named_neighbors(neighbors, PlantName::Mushroom) > 0 {
                3
            } else {
                1
            };
            player.resources.gain(Resource::Compost, compost);
            player.score += 1;
        }
        // +1 compost per grown neighbor, +1 point if any.
        PlantName::BeanPlant => {
            let count = grown_neighbors(neighbors);
            player.resources.gain(Resource::Compost, count as u8);
            if count > 0 {
                player.score += 1;
            }
        }
    }
}

/// Run a pest's area spread effect against the target player.
pub(crate) fn resolve_spread(
    name: PestName,
    neighbors: &[Neighbor; 4],
    target: &mut PlayerState,
) {
    match name {
        // Aphids weaken every adjacent plant: -1 point each.
        PestName::Aphid => {
            target.score -= plant_neighbors(neighbors);
        }
        // Locusts do all their damage up front; no spread.
        PestName::Locust => {}
    }
}

/// Run an action card's immediate effect against the acting player.
///
/// `grown_plants` is the count of grown plants in the player's garden,
/// collected by the engine before mutation begins. Fertilizer is the one
/// action that mutates a tile, so the engine resolves it directly through
/// [`resolve_growth`] after flipping the target's `grown` flag.
pub(crate) fn resolve_action(name: ActionName, grown_plants: i64, player: &mut PlayerState) {
    match name {
        ActionName::Fertilizer => {
            debug_assert!(false, "fertilizer is resolved by the engine");
        }
        // +3 water.
        ActionName::Watering => {
            player.resources.gain(Resource::Water, 3);
        }
        // +2 points per grown plant.
        ActionName::Pruning => {
            player.score += grown_plants * 2;
        }
        // +2 compost.
        ActionName::Composting => {
            player.resources.gain(Resource::Compost, 2);
        }
        // +2 light and +1 point.
        ActionName::WeatherBoost => {
            player.resources.gain(Resource::Light, 2);
            player.score += 1;
        }
    }
}
