use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::assets::ImageAsset;
use crate::types::{MapName, Offset, RadarPos, RadarTransform, WorldPos};

/// Radar overlay metadata for one map.
///
/// Field names serialize in the shared `LoadedMap` shape (`mapName`,
/// `metaInfo`, `overlayRadar`, ...) so the record can be handed to consumers
/// that only know that contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDefinition {
    pub map_name: MapName,
    pub display_name: Cow<'static, str>,
    pub meta_info: MetaInfo,
    pub overlay_buyzones: ImageAsset,
    pub overlay_radar: ImageAsset,
}

/// Coordinate-transform parameters for the radar image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaInfo {
    /// World units per radar pixel. Always positive.
    pub resolution: f64,
    pub offset: Offset,
    /// Empty for single-level maps.
    pub floors: Cow<'static, [FloorInfo]>,
}

/// One level of a map with vertically stacked playable areas.
///
/// A position belongs to the floor when `min_z <= z < max_z`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorInfo {
    pub name: Cow<'static, str>,
    pub min_z: f64,
    pub max_z: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Offset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<f64>,
}

impl FloorInfo {
    pub fn contains(&self, z: f64) -> bool {
        z >= self.min_z && z < self.max_z
    }
}

impl MapDefinition {
    pub fn name(&self) -> &str {
        self.map_name.as_str()
    }

    pub fn is_multi_level(&self) -> bool {
        !self.meta_info.floors.is_empty()
    }

    /// Transform for the map as a whole, ignoring floors.
    pub fn transform(&self) -> RadarTransform {
        RadarTransform {
            resolution: self.meta_info.resolution,
            offset: self.meta_info.offset,
        }
    }

    /// First floor whose height band contains `z`.
    pub fn floor_for(&self, z: f64) -> Option<&FloorInfo> {
        self.meta_info.floors.iter().find(|floor| floor.contains(z))
    }

    /// Transform at height `z`, with the matching floor's overrides applied.
    pub fn transform_for(&self, z: f64) -> RadarTransform {
        let base = self.transform();
        match self.floor_for(z) {
            Some(floor) => RadarTransform {
                resolution: floor.resolution.unwrap_or(base.resolution),
                offset: floor.offset.unwrap_or(base.offset),
            },
            None => base,
        }
    }

    /// Convert world coordinates to radar pixels.
    /// Origin is the bottom-left corner of the radar image, Y grows upward.
    pub fn world_to_radar(&self, pos: WorldPos) -> RadarPos {
        self.transform_for(pos.z).apply(pos)
    }

    /// Convert world coordinates to bitmap pixels for an image `image_height` tall.
    /// Flips Y: bitmap row 0 is the top of the radar.
    pub fn world_to_image(&self, pos: WorldPos, image_height: u32) -> RadarPos {
        let radar = self.world_to_radar(pos);
        RadarPos {
            x: radar.x,
            y: image_height as f64 - radar.y,
        }
    }
}
