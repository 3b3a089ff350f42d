use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;

/// Canonical map key, e.g. `de_dust2`. Unique within a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapName(Cow<'static, str>);

impl MapName {
    pub const fn from_static(name: &'static str) -> Self {
        MapName(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MapName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for MapName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MapName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for MapName {
    fn from(v: &'static str) -> Self {
        MapName(Cow::Borrowed(v))
    }
}

impl From<String> for MapName {
    fn from(v: String) -> Self {
        MapName(Cow::Owned(v))
    }
}

impl PartialEq<str> for MapName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MapName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// World position in game-engine units.
/// X/Y span the ground plane, Z is height. Used to pick a floor on stacked maps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl WorldPos {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        WorldPos { x, y, z }
    }

    /// Ground-plane position with no height information.
    pub fn flat(x: f64, y: f64) -> Self {
        WorldPos { x, y, z: 0.0 }
    }
}

/// Pixel position on the radar bitmap.
/// Fractional so callers decide how to round.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarPos {
    pub x: f64,
    pub y: f64,
}

impl RadarPos {
    /// Integer pixel containing this position: pixel `n` covers `[n, n + 1)`.
    pub fn pixel(self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}

impl fmt::Display for RadarPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Translation applied to world coordinates before scaling.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const fn new(x: f64, y: f64) -> Self {
        Offset { x, y }
    }
}

/// The affine world-to-radar mapping for one map level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarTransform {
    /// World units per radar pixel.
    pub resolution: f64,
    pub offset: Offset,
}

impl RadarTransform {
    /// Radar pixel for `pos`, origin at the bottom-left of the radar image.
    pub fn apply(&self, pos: WorldPos) -> RadarPos {
        RadarPos {
            x: (pos.x + self.offset.x) / self.resolution,
            y: (pos.y + self.offset.y) / self.resolution,
        }
    }

    /// Inverse of [`RadarTransform::apply`]. Height is not recoverable and is left at 0.
    pub fn invert(&self, pos: RadarPos) -> WorldPos {
        WorldPos::flat(
            pos.x * self.resolution - self.offset.x,
            pos.y * self.resolution - self.offset.y,
        )
    }
}
