//! The engine's error taxonomy.
//!
//! Every rejected operation surfaces one of these variants with a stable,
//! descriptive message, and leaves the game state unchanged: validation
//! always runs before mutation. All errors are recoverable by the caller;
//! none are fatal to the engine.

use thiserror::Error;

use crate::cards::{ActionName, CardKind};
use crate::core::player::PlayerId;
use crate::core::resources::Resource;
use crate::engine::phase::TurnPhase;

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;

/// A rejected operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    // === Turn / phase violations ===
    /// The acting player is not the game's current player.
    #[error("not your turn: current player is {current}")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    /// The player (or target) has already finished playing.
    #[error("{player} has already finished playing")]
    PlayerDone { player: PlayerId },

    /// The operation is not legal in the player's current phase.
    #[error("wrong phase: operation requires {required}, player is in {actual}")]
    WrongPhase {
        required: TurnPhase,
        actual: TurnPhase,
    },

    // === Placement violations ===
    /// Position outside the garden grid.
    #[error("position ({x}, {y}) is out of bounds")]
    OutOfBounds { x: u8, y: u8 },

    /// A tile already occupies the cell.
    #[error("a tile already exists at ({x}, {y})")]
    CellOccupied { x: u8, y: u8 },

    /// No card at this draft zone index.
    #[error("invalid draft index {index}")]
    InvalidDraftIndex { index: usize },

    /// The draft card is not of the kind the operation requires.
    #[error("draft card at index {index} has kind {actual}, expected {required}")]
    WrongCardKind {
        index: usize,
        required: CardKind,
        actual: CardKind,
    },

    // === Resource violations ===
    /// The action card requires a target cell and none was given.
    #[error("{action} requires a target cell")]
    ActionNeedsTarget { action: ActionName },

    /// A cost component cannot be paid.
    #[error("not enough {resource}: need {needed}, have {available}")]
    InsufficientResources {
        resource: Resource,
        needed: u8,
        available: u8,
    },

    // === Target violations ===
    /// The targeted cell is empty.
    #[error("no tile at ({x}, {y})")]
    EmptyCell { x: u8, y: u8 },

    /// The targeted tile is not a plant.
    #[error("tile at ({x}, {y}) is not a plant")]
    NotAPlant { x: u8, y: u8 },

    /// The plant has already been grown; growth is single-shot per tile.
    #[error("plant at ({x}, {y}) is already grown")]
    AlreadyGrown { x: u8, y: u8 },

    /// The plant has an empty growth cost and can never be grown.
    #[error("plant at ({x}, {y}) has no growth cost and cannot be grown")]
    NoGrowthCost { x: u8, y: u8 },

    /// Pests may never be stacked on other pests.
    #[error("cannot place a pest on another pest at ({x}, {y})")]
    PestOnPest { x: u8, y: u8 },

    /// Pests target an opponent's garden, never the acting player's own.
    #[error("cannot place a pest on your own garden")]
    PestTargetSelf,

    /// The player id does not refer to a seated player.
    #[error("unknown player: {player}")]
    UnknownPlayer { player: PlayerId },

    // === Construction ===
    /// Games require 2 to 8 seated players.
    #[error("game requires between 2 and 8 players, got {count}")]
    InvalidPlayerCount { count: usize },
}
