//! Card instances - runtime card state.
//!
//! An instance is one physical card in a game. Instances are minted when the
//! deck is generated and then *move* between zones: deck, draft zone, grid
//! cell. Ownership transfers with the move, so a tile id exists in exactly
//! one place at any time.
//!
//! Mutable per-instance state is minimal: plants track a `grown` flag,
//! set at most once.

use serde::{Deserialize, Serialize};

use super::definition::CardKind;
use super::name::{ActionName, PestName, PlantName};

/// Unique identifier for a card instance within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A plant or building card instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantTile {
    pub id: TileId,
    pub name: PlantName,
    /// Set permanently when the plant's growth effect has run.
    pub grown: bool,
}

impl PlantTile {
    #[must_use]
    pub fn new(id: TileId, name: PlantName) -> Self {
        Self {
            id,
            name,
            grown: false,
        }
    }
}

/// A pest card instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PestTile {
    pub id: TileId,
    pub name: PestName,
}

/// An action card instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCard {
    pub id: TileId,
    pub name: ActionName,
}

/// A tile occupying a garden grid cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Tile {
    Plant(PlantTile),
    Pest(PestTile),
}

impl Tile {
    /// The instance id of this tile.
    #[must_use]
    pub fn id(&self) -> TileId {
        match self {
            Tile::Plant(plant) => plant.id,
            Tile::Pest(pest) => pest.id,
        }
    }

    /// The tile's kind tag.
    #[must_use]
    pub fn kind(&self) -> CardKind {
        match self {
            Tile::Plant(_) => CardKind::Plant,
            Tile::Pest(_) => CardKind::Pest,
        }
    }
}

/// A card sitting in the deck or draft zone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DraftCard {
    Plant(PlantTile),
    Pest(PestTile),
    Action(ActionCard),
}

impl DraftCard {
    /// The instance id of this card.
    #[must_use]
    pub fn id(&self) -> TileId {
        match self {
            DraftCard::Plant(plant) => plant.id,
            DraftCard::Pest(pest) => pest.id,
            DraftCard::Action(action) => action.id,
        }
    }

    /// The card's kind tag.
    #[must_use]
    pub fn kind(&self) -> CardKind {
        match self {
            DraftCard::Plant(_) => CardKind::Plant,
            DraftCard::Pest(_) => CardKind::Pest,
            DraftCard::Action(_) => CardKind::Action,
        }
    }
}

impl std::fmt::Display for DraftCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftCard::Plant(plant) => write!(f, "{}", plant.name),
            DraftCard::Pest(pest) => write!(f, "{}", pest.name),
            DraftCard::Action(action) => write!(f, "{}", action.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_plants_are_ungrown() {
        let tile = PlantTile::new(TileId(1), PlantName::Daisy);
        assert!(!tile.grown);
        assert_eq!(tile.id, TileId(1));
    }

    #[test]
    fn test_tile_kind_and_id() {
        let plant = Tile::Plant(PlantTile::new(TileId(3), PlantName::Tree));
        assert_eq!(plant.kind(), CardKind::Plant);
        assert_eq!(plant.id(), TileId(3));

        let pest = Tile::Pest(PestTile {
            id: TileId(4),
            name: PestName::Aphid,
        });
        assert_eq!(pest.kind(), CardKind::Pest);
        assert_eq!(pest.id(), TileId(4));
    }

    #[test]
    fn test_draft_card_display() {
        let card = DraftCard::Action(ActionCard {
            id: TileId(9),
            name: ActionName::Pruning,
        });
        assert_eq!(card.to_string(), "Pruning");
        assert_eq!(card.kind(), CardKind::Action);
    }

    #[test]
    fn test_tile_serialization_tags_kind() {
        let tile = Tile::Plant(PlantTile::new(TileId(7), PlantName::Fern));
        let json = serde_json::to_string(&tile).unwrap();
        assert!(json.contains("\"type\":\"plant\""));
    }
}
