//! Game configuration.
//!
//! `GameConfig` collects the tunable rules of a match: board size, resource
//! and infestation caps, draft-zone capacity, and how many copies of each
//! catalog entry go into the deck per seated player.
//!
//! Defaults match the reference rule set (5x5 grid, 20 resource cap,
//! 3 infestations, draft zone of 5).

use serde::{Deserialize, Serialize};

/// Tunable rules for one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of each player's square garden grid.
    pub grid_size: u8,

    /// Per-resource cap; resource counts never exceed this.
    pub max_resources: u8,

    /// Infestation cap; reaching it ends that player's participation.
    pub max_infestations: u8,

    /// Capacity of the shared draft zone.
    pub draft_size: u8,

    /// Copies of each plant definition per seated player.
    pub plant_copies: u32,

    /// Copies of each pest definition per seated player.
    pub pest_copies: u32,

    /// Copies of each action card definition per seated player.
    pub action_copies: u32,

    /// Starting count of each resource kind.
    pub starting_resources: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 5,
            max_resources: 20,
            max_infestations: 3,
            draft_size: 5,
            plant_copies: 3,
            pest_copies: 8,
            action_copies: 4,
            starting_resources: 1,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the garden grid side length.
    #[must_use]
    pub fn with_grid_size(mut self, size: u8) -> Self {
        assert!(size >= 1, "Grid must be at least 1x1");
        self.grid_size = size;
        self
    }

    /// Set the per-resource cap.
    #[must_use]
    pub fn with_max_resources(mut self, max: u8) -> Self {
        self.max_resources = max;
        self
    }

    /// Set the infestation cap.
    #[must_use]
    pub fn with_max_infestations(mut self, max: u8) -> Self {
        assert!(max >= 1, "Infestation cap must be at least 1");
        self.max_infestations = max;
        self
    }

    /// Set the draft zone capacity.
    #[must_use]
    pub fn with_draft_size(mut self, size: u8) -> Self {
        assert!(size >= 1, "Draft zone must hold at least 1 card");
        self.draft_size = size;
        self
    }

    /// Set the per-player deck composition.
    #[must_use]
    pub fn with_deck_copies(mut self, plants: u32, pests: u32, actions: u32) -> Self {
        self.plant_copies = plants;
        self.pest_copies = pests;
        self.action_copies = actions;
        self
    }

    /// Set the starting count of each resource kind.
    #[must_use]
    pub fn with_starting_resources(mut self, count: u8) -> Self {
        self.starting_resources = count;
        self
    }
}
