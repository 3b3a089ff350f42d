use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{MapError, Result};
use crate::map_data::MapDefinition;

/// Reference to a packaged bitmap, relative to an asset root.
/// e.g. `de_dust2/radar.png`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageAsset(Cow<'static, str>);

impl ImageAsset {
    pub const fn from_static(path: &'static str) -> Self {
        ImageAsset(Cow::Borrowed(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(self.0.as_ref())
    }

    /// Read and decode the bitmap under `root`.
    pub fn load(&self, root: &Path) -> Result<RgbaImage> {
        let path = self.resolve(root);
        let buf = std::fs::read(&path).map_err(|err| MapError::AssetIo {
            path: path.clone(),
            err,
        })?;
        let img = image::load_from_memory(&buf)
            .map_err(|err| MapError::AssetDecode { path, err })?;
        Ok(img.to_rgba8())
    }
}

impl fmt::Display for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ImageAsset {
    fn from(v: String) -> Self {
        ImageAsset(Cow::Owned(v))
    }
}

/// Both overlay bitmaps of one map, decoded.
pub struct LoadedOverlays {
    pub radar: RgbaImage,
    pub buyzones: RgbaImage,
}

impl LoadedOverlays {
    pub fn radar_size(&self) -> (u32, u32) {
        self.radar.dimensions()
    }
}

pub fn load_overlays(def: &MapDefinition, root: &Path) -> Result<LoadedOverlays> {
    let radar = def.overlay_radar.load(root).inspect_err(|e| {
        warn!("could not load radar for {}: {e}", def.map_name);
    })?;
    let buyzones = def.overlay_buyzones.load(root).inspect_err(|e| {
        warn!("could not load buy zones for {}: {e}", def.map_name);
    })?;

    if radar.dimensions() != buyzones.dimensions() {
        // Buy zones are drawn over the radar 1:1, a mismatch will misalign them.
        warn!(
            "overlay size mismatch for {}: radar {:?}, buyzones {:?}",
            def.map_name,
            radar.dimensions(),
            buyzones.dimensions()
        );
    }

    debug!(
        "loaded overlays for {}: {}x{}",
        def.map_name,
        radar.width(),
        radar.height()
    );

    Ok(LoadedOverlays { radar, buyzones })
}
