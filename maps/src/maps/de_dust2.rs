use std::borrow::Cow;

use crate::assets::ImageAsset;
use crate::map_data::{MapDefinition, MetaInfo};
use crate::types::{MapName, Offset};

pub static DE_DUST2: MapDefinition = MapDefinition {
    map_name: MapName::from_static("de_dust2"),
    display_name: Cow::Borrowed("Dust 2"),
    meta_info: MetaInfo {
        resolution: 4.4,
        offset: Offset::new(2470.0, 1255.0),
        floors: Cow::Borrowed(&[]),
    },
    overlay_buyzones: ImageAsset::from_static("de_dust2/buyzones.png"),
    overlay_radar: ImageAsset::from_static("de_dust2/radar.png"),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RadarPos, WorldPos};

    #[test]
    fn identity() {
        assert_eq!(DE_DUST2.map_name, "de_dust2");
        assert!(!DE_DUST2.name().is_empty());
        assert_eq!(DE_DUST2.display_name, "Dust 2");
    }

    #[test]
    fn transform_parameters() {
        let meta = &DE_DUST2.meta_info;
        assert!(meta.resolution > 0.0);
        assert!(meta.offset.x.is_finite() && meta.offset.y.is_finite());
        assert_eq!(meta.offset, Offset::new(2470.0, 1255.0));
    }

    #[test]
    fn single_level() {
        assert!(DE_DUST2.meta_info.floors.is_empty());
        assert!(!DE_DUST2.is_multi_level());
        // Any height uses the base transform.
        assert_eq!(DE_DUST2.transform_for(-300.0), DE_DUST2.transform());
    }

    #[test]
    fn asset_references_present() {
        assert!(!DE_DUST2.overlay_radar.as_str().is_empty());
        assert!(!DE_DUST2.overlay_buyzones.as_str().is_empty());
        assert_ne!(DE_DUST2.overlay_radar, DE_DUST2.overlay_buyzones);
    }

    #[test]
    fn projects_offset_origin_to_corner() {
        let pos = DE_DUST2.world_to_radar(WorldPos::flat(-2470.0, -1255.0));
        assert_eq!(pos, RadarPos { x: 0.0, y: 0.0 });
    }

    #[test]
    fn json_uses_loaded_map_shape() {
        let value = serde_json::to_value(&DE_DUST2).unwrap();
        assert_eq!(value["mapName"], "de_dust2");
        assert_eq!(value["displayName"], "Dust 2");
        assert_eq!(value["metaInfo"]["resolution"], 4.4);
        assert_eq!(value["metaInfo"]["offset"]["x"], 2470.0);
        assert_eq!(value["metaInfo"]["offset"]["y"], 1255.0);
        assert_eq!(value["metaInfo"]["floors"], serde_json::json!([]));
        assert_eq!(value["overlayRadar"], "de_dust2/radar.png");
        assert_eq!(value["overlayBuyzones"], "de_dust2/buyzones.png");
    }

    #[test]
    fn json_round_trip() {
        let json = serde_json::to_string(&DE_DUST2).unwrap();
        let back: MapDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DE_DUST2);
    }

    #[test]
    fn toml_round_trip() {
        let text = toml::to_string(&DE_DUST2).unwrap();
        let back: MapDefinition = toml::from_str(&text).unwrap();
        assert_eq!(back, DE_DUST2);
    }
}
