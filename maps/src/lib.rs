pub mod assets;
mod error;
pub mod map_data;
pub mod maps;
pub mod registry;
pub mod types;

pub use assets::{ImageAsset, LoadedOverlays, load_overlays};
pub use error::*;
pub use map_data::{FloorInfo, MapDefinition, MetaInfo};
pub use maps::{ALL_MAPS, DE_DUST2};
pub use registry::MapRegistry;
pub use types::{MapName, Offset, RadarPos, RadarTransform, WorldPos};
