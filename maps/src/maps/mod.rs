//! Shipped map records. One file per map, each exporting a single `static`.

mod de_dust2;

pub use de_dust2::DE_DUST2;

use crate::map_data::MapDefinition;

/// Every shipped map, in registration order.
pub static ALL_MAPS: &[&MapDefinition] = &[&DE_DUST2];
