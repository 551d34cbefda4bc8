//! The game engine: state, phases, effects, and the operations that tie
//! them together.

pub mod effects;
pub mod error;
pub mod game;
pub mod phase;
pub mod state;

mod draft;

pub use error::{GameError, Result};
pub use game::GardenGame;
pub use phase::TurnPhase;
pub use state::{GameState, PlayerState};
