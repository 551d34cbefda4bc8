//! Card system: names, static definitions, the library, and instances.

pub mod definition;
pub mod instance;
pub mod library;
pub mod name;

pub use definition::{ActionDef, CardKind, PestDef, PlantDef};
pub use instance::{ActionCard, DraftCard, PestTile, PlantTile, Tile, TileId};
pub use library::CardLibrary;
pub use name::{ActionName, PestName, PlantName};
