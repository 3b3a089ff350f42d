use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use rootcause::prelude::*;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use radar_maps::{MapDefinition, MapRegistry, load_overlays};
use radar_overlay::output::{self, Projection, parse_world_pos};
use radar_overlay::{DEFAULT_CONFIG_FILE, RadarCanvas, RadarConfig};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<RadarConfig, Report> {
    let mut config = match matches.value_of("CONFIG") {
        Some(path) => RadarConfig::load(Path::new(path))?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            info!("Using config from {}", DEFAULT_CONFIG_FILE);
            RadarConfig::load(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => RadarConfig::default(),
    };
    config.apply_cli_overrides(matches)?;
    Ok(config)
}

fn select_map(
    matches: &ArgMatches,
    config: &RadarConfig,
) -> Result<&'static MapDefinition, Report> {
    let name = matches.value_of("MAP").unwrap_or(&config.default_map);
    let def = MapRegistry::builtin()
        .require(name)
        .context("Map lookup failed")?;
    Ok(def)
}

fn map_arg() -> Arg<'static, 'static> {
    Arg::with_name("MAP")
        .help("Map name, e.g. de_dust2 (defaults to default_map from the config)")
        .index(1)
}

fn main() -> Result<(), Report> {
    init_logging();

    let matches = App::new("Radar Overlay")
        .about("Inspects radar overlay metadata and projects world positions onto radar images")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("CONFIG")
                .help("Path to a TOML config file")
                .short("c")
                .long("config")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("ASSETS")
                .help("Directory containing the overlay images")
                .short("a")
                .long("assets")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("FORMAT")
                .help("Output format: json or toml")
                .short("f")
                .long("format")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("FLIP_Y")
                .help("Report bitmap coordinates (row 0 at the top) instead of radar coordinates")
                .long("flip-y"),
        )
        .arg(
            Arg::with_name("NO_BUYZONES")
                .help("Do not draw buy zones when plotting")
                .long("no-buyzones"),
        )
        .subcommand(SubCommand::with_name("list").about("Lists every known map"))
        .subcommand(
            SubCommand::with_name("show")
                .about("Prints a map's radar metadata")
                .arg(map_arg()),
        )
        .subcommand(
            SubCommand::with_name("project")
                .about("Converts a world position to radar pixels")
                .arg(
                    Arg::with_name("POSITION")
                        .help("World position as x,y or x,y,z")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("MAP")
                        .help("Map name (defaults to default_map from the config)")
                        .short("m")
                        .long("map")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("check-assets")
                .about("Loads a map's overlay images and prints their sizes")
                .arg(map_arg()),
        )
        .subcommand(
            SubCommand::with_name("plot")
                .about("Draws world positions onto a map's radar and writes a PNG")
                .arg(
                    Arg::with_name("OUTPUT")
                        .help("Output PNG file path")
                        .short("o")
                        .long("output")
                        .takes_value(true)
                        .required(true),
                )
                .arg(
                    Arg::with_name("AT")
                        .help("World position to mark, as x,y or x,y,z (repeatable)")
                        .long("at")
                        .takes_value(true)
                        .multiple(true)
                        .number_of_values(1)
                        .allow_hyphen_values(true),
                )
                .arg(map_arg()),
        )
        .subcommand(
            SubCommand::with_name("generate-config").about("Prints a commented default config"),
        )
        .get_matches();

    let config = load_config(&matches)?;
    let registry = MapRegistry::builtin();

    match matches.subcommand() {
        ("list", _) => print!("{}", output::map_listing(registry.iter())),
        ("show", Some(sub)) => {
            let def = select_map(sub, &config)?;
            let text = output::render(def, config.output_format).context("Failed to render map")?;
            println!("{text}");
        }
        ("project", Some(sub)) => {
            let def = select_map(sub, &config)?;
            let world = parse_world_pos(sub.value_of("POSITION").unwrap())
                .context("Invalid position")?;
            let projection = Projection::new(def, world, config.flip_height());
            let text = output::render(&projection, config.output_format)
                .context("Failed to render projection")?;
            println!("{text}");
        }
        ("check-assets", Some(sub)) => {
            let def = select_map(sub, &config)?;
            let overlays =
                load_overlays(def, &config.asset_root).context("Failed to load overlays")?;
            let (w, h) = overlays.radar_size();
            println!("{}: radar {}x{}", def.map_name, w, h);
            println!(
                "{}: buyzones {}x{}",
                def.map_name,
                overlays.buyzones.width(),
                overlays.buyzones.height()
            );
        }
        ("plot", Some(sub)) => {
            let def = select_map(sub, &config)?;
            let out = sub.value_of("OUTPUT").unwrap();

            let mut canvas = match load_overlays(def, &config.asset_root) {
                Ok(overlays) => RadarCanvas::new(def, overlays, config.show_buyzones),
                Err(e) => {
                    warn!("{e}, using blank background");
                    RadarCanvas::blank(def, config.image_size)
                }
            };

            let mut plotted = 0;
            for value in sub.values_of("AT").into_iter().flatten() {
                let pos = parse_world_pos(value).context("Invalid position")?;
                if canvas.plot(pos) {
                    plotted += 1;
                } else {
                    warn!("{value} is outside the radar for {}", def.map_name);
                }
            }

            canvas
                .image()
                .save(out)
                .context("Failed to write plot image")?;
            info!("Plotted {plotted} positions to {out}");
        }
        ("generate-config", _) => print!("{}", RadarConfig::generate_default_toml()),
        (other, _) => unreachable!("clap requires a subcommand, got {other:?}"),
    }

    Ok(())
}
