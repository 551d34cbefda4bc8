//! Game state: per-player state and the shared match state.
//!
//! All state types derive serde so hosts can hand read-only snapshots to a
//! renderer or transport. There is exactly one mutable `GameState` per
//! match, owned by the `GardenGame` engine; every read and write goes
//! through that engine's operations.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{DraftCard, TileId};
use crate::core::config::GameConfig;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::resources::ResourcePool;
use crate::engine::phase::TurnPhase;
use crate::garden::Garden;

/// One player's state, created at game construction and mutated in place
/// for the whole match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,

    /// The player's personal garden grid.
    pub garden: Garden,

    /// Victory points. May go negative under pest pressure.
    pub score: i64,

    /// Bounded resource counts.
    pub resources: ResourcePool,

    /// Pest pressure counter; monotonically non-decreasing, capped at the
    /// configured maximum. Reaching the cap ends this player's game.
    pub infestation: u8,

    /// Current turn phase.
    pub phase: TurnPhase,

    /// Pests this player must place before finishing the grow phase.
    pub pest_to_place: u32,
}

impl PlayerState {
    /// Create a fresh player state per the game configuration.
    #[must_use]
    pub fn new(id: PlayerId, config: &GameConfig) -> Self {
        Self {
            id,
            garden: Garden::new(config.grid_size),
            score: 0,
            resources: ResourcePool::new(config.starting_resources, config.max_resources),
            infestation: 0,
            phase: TurnPhase::Place,
            pest_to_place: 0,
        }
    }

    /// The done predicate: a full garden, or the infestation cap reached.
    #[must_use]
    pub fn is_done_playing(&self, max_infestations: u8) -> bool {
        self.garden.is_full() || self.infestation >= max_infestations
    }

    /// Raise infestation by one, saturating at the cap.
    pub(crate) fn raise_infestation(&mut self, max_infestations: u8) {
        self.infestation = self.infestation.saturating_add(1).min(max_infestations);
    }
}

/// The shared state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Player states, indexed in seating order.
    pub players: PlayerMap<PlayerState>,

    /// Remaining deck; cards are drawn from the end.
    pub deck: Vec<DraftCard>,

    /// The shared draft zone, visible to all players.
    pub draft_zone: SmallVec<[DraftCard; 8]>,

    /// Round counter; starts at 1 and increments once per full round.
    pub current_turn: u32,

    /// The player whose turn it is.
    pub current_player: PlayerId,

    /// Append-only human-readable log. Informational only; never used for
    /// control flow.
    pub log: Vec<String>,

    /// Winner, set once when the game ends.
    pub winner: Option<PlayerId>,

    pub(crate) next_tile_id: u32,
}

impl GameState {
    /// Create the initial match state (empty deck and draft zone; the
    /// engine populates both during construction).
    #[must_use]
    pub(crate) fn new(player_count: usize, config: &GameConfig) -> Self {
        Self {
            players: PlayerMap::new(player_count, |id| PlayerState::new(id, config)),
            deck: Vec::new(),
            draft_zone: SmallVec::new(),
            current_turn: 1,
            current_player: PlayerId::new(0),
            log: Vec::new(),
            winner: None,
            next_tile_id: 0,
        }
    }

    /// Allocate a fresh tile id.
    pub(crate) fn alloc_tile_id(&mut self) -> TileId {
        let id = TileId(self.next_tile_id);
        self.next_tile_id += 1;
        id
    }

    /// Append a log entry tagged with the current round number.
    pub(crate) fn push_log(&mut self, message: impl AsRef<str>) {
        self.log.push(format!("[Turn {}] {}", self.current_turn, message.as_ref()));
    }

    /// True when any player other than `player` is still playing.
    #[must_use]
    pub fn has_active_opponent(&self, player: PlayerId) -> bool {
        self.players
            .iter()
            .any(|(id, state)| id != player && !state.phase.is_done())
    }
}
