use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Overlay tool configuration, loadable from a TOML file.
///
/// All fields default to their standard values. CLI flags override config file values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// Directory the overlay asset references are relative to.
    pub asset_root: PathBuf,
    /// Map used when a command is not given one.
    pub default_map: String,
    pub output_format: OutputFormat,
    /// Report projected positions in bitmap coordinates (row 0 at the top)
    /// instead of radar coordinates (origin bottom-left).
    pub flip_y: bool,
    /// Radar bitmap height used for flipping and for blank plots.
    pub image_size: u32,
    /// Draw buy zones over the radar when plotting.
    pub show_buyzones: bool,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("assets"),
            default_map: "de_dust2".to_string(),
            output_format: OutputFormat::Json,
            flip_y: false,
            image_size: 1024,
            show_buyzones: true,
        }
    }
}

impl RadarConfig {
    /// Load config from a TOML file.
    pub fn load(path: &std::path::Path) -> Result<Self, rootcause::Report> {
        use rootcause::prelude::*;
        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;
        let config: Self = toml::from_str(&contents).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Image height to project against, if Y should be flipped.
    pub fn flip_height(&self) -> Option<u32> {
        self.flip_y.then_some(self.image_size)
    }

    /// Generate a commented default TOML config string.
    pub fn generate_default_toml() -> String {
        r#"# Radar Overlay Configuration
# Place this file as radar_overlay.toml next to the executable,
# or specify with --config <path>.

# Directory containing the packaged overlay images (e.g. de_dust2/radar.png)
asset_root = "assets"

# Map used when a command is run without one
default_map = "de_dust2"

# Output format for `show` and `project`: "json" or "toml"
output_format = "json"

# Report projected positions with row 0 at the top of the bitmap
flip_y = false

# Radar bitmap height in pixels
image_size = 1024

# Draw buy zones over the radar when plotting
show_buyzones = true
"#
        .to_string()
    }

    /// Apply CLI flag overrides.
    #[cfg(feature = "bin")]
    pub fn apply_cli_overrides(
        &mut self,
        matches: &clap::ArgMatches,
    ) -> Result<(), rootcause::Report> {
        use rootcause::prelude::*;
        use std::str::FromStr;
        if let Some(dir) = matches.value_of("ASSETS") {
            self.asset_root = PathBuf::from(dir);
        }
        if let Some(format) = matches.value_of("FORMAT") {
            self.output_format = OutputFormat::from_str(format).context("Invalid output format")?;
        }
        if matches.is_present("FLIP_Y") {
            self.flip_y = true;
        }
        if matches.is_present("NO_BUYZONES") {
            self.show_buyzones = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_toml_matches_default() {
        let parsed: RadarConfig = toml::from_str(&RadarConfig::generate_default_toml()).unwrap();
        assert_eq!(parsed, RadarConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let parsed: RadarConfig = toml::from_str("output_format = \"toml\"\nflip_y = true\n").unwrap();
        assert_eq!(parsed.output_format, OutputFormat::Toml);
        assert_eq!(parsed.flip_height(), Some(1024));
        assert_eq!(parsed.default_map, "de_dust2");
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("radar_overlay.toml");
        std::fs::write(&path, "asset_root = \"/opt/radar\"\n").unwrap();
        let config = RadarConfig::load(&path).unwrap();
        assert_eq!(config.asset_root, PathBuf::from("/opt/radar"));
        assert_eq!(config.flip_height(), None);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(RadarConfig::load(&dir.path().join("missing.toml")).is_err());
    }

    #[cfg(feature = "bin")]
    fn cli_matches(args: &[&str]) -> clap::ArgMatches<'static> {
        use clap::{App, Arg};
        App::new("radar_overlay")
            .arg(Arg::with_name("ASSETS").long("assets").takes_value(true))
            .arg(Arg::with_name("FORMAT").long("format").takes_value(true))
            .arg(Arg::with_name("FLIP_Y").long("flip-y"))
            .arg(Arg::with_name("NO_BUYZONES").long("no-buyzones"))
            .get_matches_from(args)
    }

    #[cfg(feature = "bin")]
    #[test]
    fn cli_flags_override_config() {
        let mut config = RadarConfig::default();
        let matches = cli_matches(&[
            "radar_overlay",
            "--assets",
            "/data/radar",
            "--format",
            "TOML",
            "--flip-y",
            "--no-buyzones",
        ]);
        config.apply_cli_overrides(&matches).unwrap();
        assert_eq!(config.asset_root, PathBuf::from("/data/radar"));
        assert_eq!(config.output_format, OutputFormat::Toml);
        assert_eq!(config.flip_height(), Some(1024));
        assert!(!config.show_buyzones);
        assert_eq!(config.default_map, "de_dust2");
    }

    #[cfg(feature = "bin")]
    #[test]
    fn no_cli_flags_keep_config() {
        let mut config = RadarConfig::default();
        config
            .apply_cli_overrides(&cli_matches(&["radar_overlay"]))
            .unwrap();
        assert_eq!(config, RadarConfig::default());
    }

    #[cfg(feature = "bin")]
    #[test]
    fn bad_format_flag_fails() {
        let mut config = RadarConfig::default();
        let matches = cli_matches(&["radar_overlay", "--format", "yaml"]);
        assert!(config.apply_cli_overrides(&matches).is_err());
    }
}
