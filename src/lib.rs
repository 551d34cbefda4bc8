//! A turn-based engine for a competitive garden-building tile game.
//!
//! Players take turns drafting plant and action cards from a shared draft
//! zone into their own garden grids, growing plants for points, and
//! unleashing pests on each other's gardens. A player leaves the game when
//! their garden fills up or their infestation hits the cap; when everyone
//! is out, the highest score wins.
//!
//! ## Design
//!
//! - **One owned game object**: a [`GardenGame`] holds all match state and
//!   is mutated only through its operations. There is no global state;
//!   hosts run as many concurrent games as they like.
//! - **Data-driven cards**: card definitions are plain data, and behavior
//!   is dispatched by exhaustive matches on closed name enums. Adding a
//!   card means adding an enum variant and the compiler points at every
//!   match that needs a new arm.
//! - **Deterministic**: all randomness flows through a single seeded RNG,
//!   so a match is reproducible from its seed and operation sequence.
//! - **Serializable state**: the full [`GameState`] round-trips through
//!   serde for snapshots, transports, and renderers.
//!
//! ## Example
//!
//! ```
//! use verdant::cards::CardKind;
//! use verdant::{GameConfig, GardenGame, PlayerId};
//!
//! let mut game = GardenGame::new(2, GameConfig::default(), 42)?;
//! let player = game.current_player();
//! assert_eq!(player, PlayerId::new(0));
//!
//! // Pick a plant from the draft zone and place it mid-garden.
//! let index = game
//!     .state()
//!     .draft_zone
//!     .iter()
//!     .position(|card| card.kind() == CardKind::Plant);
//! if let Some(index) = index {
//!     game.place_card(player, index, 2, 2)?;
//!     assert!(game.state().players[player].garden.get(2, 2).is_some());
//! }
//! # Ok::<(), verdant::GameError>(())
//! ```

pub mod cards;
pub mod core;
pub mod engine;
pub mod garden;

pub use cards::CardLibrary;
pub use core::{GameConfig, PlayerId};
pub use engine::{GameError, GameState, GardenGame, PlayerState, Result, TurnPhase};
pub use garden::Garden;
