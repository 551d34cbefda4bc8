//! The garden: a fixed-size square grid of tiles, one per player.
//!
//! Cells start empty and are written at most once, except for the pest
//! overwrite case, which destroys the prior occupant as part of the pest's
//! effect. Neighbor lookup returns the four orthogonally adjacent cells in
//! a fixed order (up, down, left, right) so effects that enumerate
//! neighbors are deterministic; positions outside the grid read as empty.

use serde::{Deserialize, Serialize};

use crate::cards::{PestName, PlantName, Tile};
use crate::engine::error::GameError;

/// An owned, copyable summary of one neighboring cell.
///
/// Effect resolution holds the four-neighbor context while mutating the
/// player's state, so the context must not borrow the garden.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Neighbor {
    Empty,
    Plant { name: PlantName, grown: bool },
    Pest { name: PestName },
}

impl Neighbor {
    fn of(cell: Option<&Tile>) -> Self {
        match cell {
            None => Neighbor::Empty,
            Some(Tile::Plant(plant)) => Neighbor::Plant {
                name: plant.name,
                grown: plant.grown,
            },
            Some(Tile::Pest(pest)) => Neighbor::Pest { name: pest.name },
        }
    }

    /// True for an empty (or out-of-bounds) cell.
    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, Neighbor::Empty)
    }

    /// True for a living plant (buildings don't count).
    #[must_use]
    pub fn is_plant(self) -> bool {
        matches!(self, Neighbor::Plant { name, .. } if name.is_plant())
    }

    /// True for a grown living plant.
    #[must_use]
    pub fn is_grown_plant(self) -> bool {
        matches!(self, Neighbor::Plant { name, grown: true } if name.is_plant())
    }

    /// True for a pest tile.
    #[must_use]
    pub fn is_pest(self) -> bool {
        matches!(self, Neighbor::Pest { .. })
    }

    /// The plant name, if this neighbor is a plant or building.
    #[must_use]
    pub fn plant_name(self) -> Option<PlantName> {
        match self {
            Neighbor::Plant { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// A square grid of cells, each empty or holding exactly one tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Garden {
    size: u8,
    cells: Vec<Option<Tile>>,
}

impl Garden {
    /// Create an empty garden with the given side length.
    #[must_use]
    pub fn new(size: u8) -> Self {
        Self {
            size,
            cells: vec![None; size as usize * size as usize],
        }
    }

    /// The grid side length.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// True iff `0 <= x, y < size`.
    #[must_use]
    pub fn in_bounds(&self, x: u8, y: u8) -> bool {
        x < self.size && y < self.size
    }

    fn index(&self, x: u8, y: u8) -> usize {
        y as usize * self.size as usize + x as usize
    }

    /// Get the tile at a position, if any. Out of bounds reads as empty.
    #[must_use]
    pub fn get(&self, x: u8, y: u8) -> Option<&Tile> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells[self.index(x, y)].as_ref()
    }

    /// Get a mutable reference to the tile at a position, if any.
    pub fn get_mut(&mut self, x: u8, y: u8) -> Option<&mut Tile> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let idx = self.index(x, y);
        self.cells[idx].as_mut()
    }

    /// Place a tile into an empty cell.
    ///
    /// Fails if the position is out of bounds or the cell is occupied.
    pub fn place(&mut self, x: u8, y: u8, tile: Tile) -> Result<(), GameError> {
        if !self.in_bounds(x, y) {
            return Err(GameError::OutOfBounds { x, y });
        }
        let idx = self.index(x, y);
        if self.cells[idx].is_some() {
            return Err(GameError::CellOccupied { x, y });
        }
        self.cells[idx] = Some(tile);
        Ok(())
    }

    /// Overwrite a cell with a tile, returning the prior occupant.
    ///
    /// Only the pest placement rule is allowed to do this; the prior tile
    /// is destroyed by the caller.
    pub(crate) fn overwrite(&mut self, x: u8, y: u8, tile: Tile) -> Option<Tile> {
        debug_assert!(self.in_bounds(x, y));
        let idx = self.index(x, y);
        self.cells[idx].replace(tile)
    }

    /// The four orthogonal neighbors of a cell, in fixed order:
    /// up, down, left, right. Out-of-bounds positions read as empty.
    #[must_use]
    pub fn neighbors(&self, x: u8, y: u8) -> [Neighbor; 4] {
        let up = y.checked_sub(1).map_or(Neighbor::Empty, |ny| Neighbor::of(self.get(x, ny)));
        let down = Neighbor::of(self.get(x, y.wrapping_add(1)));
        let left = x.checked_sub(1).map_or(Neighbor::Empty, |nx| Neighbor::of(self.get(nx, y)));
        let right = Neighbor::of(self.get(x.wrapping_add(1), y));
        [up, down, left, right]
    }

    /// True when every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Count of grown living plants in the garden.
    #[must_use]
    pub fn grown_plant_count(&self) -> i64 {
        self.tiles()
            .filter(|tile| matches!(tile, Tile::Plant(p) if p.grown && p.name.is_plant()))
            .count() as i64
    }

    /// Iterate over all occupied cells.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().filter_map(Option::as_ref)
    }
}
