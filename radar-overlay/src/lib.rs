pub mod config;
pub mod drawing;
mod error;
pub mod output;

/// Config file picked up next to the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "radar_overlay.toml";

pub use config::RadarConfig;
pub use drawing::RadarCanvas;
pub use error::{OutputError, PositionError};
pub use output::{OutputFormat, Projection};
