use radar_maps::{MapDefinition, RadarPos, WorldPos};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::{OutputError, PositionError};

/// Text format for printed map records.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

/// One world-to-radar conversion, as printed by `project`.
#[derive(Debug, Clone, Serialize)]
pub struct Projection<'a> {
    pub map: &'a str,
    pub world: WorldPos,
    pub radar: RadarPos,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<&'a str>,
}

impl<'a> Projection<'a> {
    pub fn new(def: &'a MapDefinition, world: WorldPos, image_height: Option<u32>) -> Self {
        let radar = match image_height {
            Some(height) => def.world_to_image(world, height),
            None => def.world_to_radar(world),
        };
        Projection {
            map: def.name(),
            world,
            radar,
            floor: def.floor_for(world.z).map(|floor| &*floor.name),
        }
    }
}

pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, OutputError> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Toml => toml::to_string_pretty(value)?,
    };
    Ok(text)
}

/// Parse `x,y` or `x,y,z` world coordinates. Height defaults to 0.
pub fn parse_world_pos(s: &str) -> Result<WorldPos, PositionError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if !(2..=3).contains(&parts.len()) {
        return Err(PositionError::Components(parts.len()));
    }
    let mut coords = [0.0f64; 3];
    for (slot, part) in coords.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| PositionError::Number(part.to_string()))?;
    }
    Ok(WorldPos::new(coords[0], coords[1], coords[2]))
}

/// One line per map: `name<TAB>display name`.
pub fn map_listing<'a>(defs: impl IntoIterator<Item = &'a MapDefinition>) -> String {
    let mut out = String::new();
    for def in defs {
        out.push_str(def.name());
        out.push('\t');
        out.push_str(&def.display_name);
        out.push('\n');
    }
    out
}
