//! Core types: players, resources, configuration, RNG.

pub mod config;
pub mod player;
pub mod resources;
pub mod rng;

pub use config::GameConfig;
pub use player::{PlayerId, PlayerMap};
pub use resources::{Resource, ResourceCost, ResourcePool};
pub use rng::GameRng;
