//! Card definitions - static card data.
//!
//! A definition holds the immutable properties shared by every instance of
//! a card kind: costs, points, damage, and display text. Behavior is *not*
//! stored here - effects are resolved by pure functions keyed on the card
//! name (see `engine::effects`), keeping definitions plain data.
//!
//! Instance-specific state (the `grown` flag, tile ids) lives in
//! `cards::instance`.

use serde::{Deserialize, Serialize};

use super::name::{ActionName, PestName, PlantName};
use crate::core::resources::{Resource, ResourceCost};

/// The three card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Plant,
    Pest,
    Action,
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardKind::Plant => "plant",
            CardKind::Pest => "pest",
            CardKind::Action => "action",
        };
        write!(f, "{name}")
    }
}

/// Static definition of a plant or building card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlantDef {
    pub name: PlantName,

    /// Resources required to grow this plant. Empty means the plant can
    /// never be grown - it only scores its base points at placement.
    pub growth_cost: ResourceCost,

    /// Points scored when the tile is placed.
    pub base_points: i64,

    /// Resource granted on placement (buildings only).
    pub place_gain: Option<(Resource, u8)>,

    /// One-line effect summary for display.
    pub effect: &'static str,

    /// Flavor description for display.
    pub description: &'static str,
}

/// Static definition of a pest card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PestDef {
    pub name: PestName,

    /// Points removed from the target's score when the pest lands on a
    /// plant.
    pub damage: i64,

    /// One-line effect summary for display.
    pub effect: &'static str,

    /// Flavor description for display.
    pub description: &'static str,
}

/// Static definition of an action card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActionDef {
    pub name: ActionName,

    /// Resources spent to play this card.
    pub cost: ResourceCost,

    /// One-line effect summary for display.
    pub effect: &'static str,

    /// Flavor description for display.
    pub description: &'static str,
}
