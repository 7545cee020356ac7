use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use clap::{value_parser, Arg, ArgAction, ArgMatches, ColorChoice, Command};
use skyplot::prelude::{Duration, GroundPosition, SkyplotConfig};

use crate::Error;

/// Default observer: Castelldefels (ES), WGS84
const DEFAULT_OBSERVER: (f64, f64, f64) = (41.2750, 1.9876, 80.0);

pub struct Cli {
    /// Arguments passed by user
    pub matches: ArgMatches,
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

impl Cli {
    /// Build new command line interface
    pub fn new() -> Self {
        Self {
            matches: Self::command().get_matches(),
        }
    }
    fn command() -> Command {
        Command::new("skyplot")
            .author("Guillaume W. Bres <guillaume.bressaix@gmail.com>")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Broadcast ephemeris skyplot")
            .long_about("skyplot parses a NAV RINEX file, propagates every broadcast
ephemeris and reports the azimuth and elevation of each satellite,
as seen from a ground observer.")
            .arg_required_else_help(true)
            .color(ColorChoice::Always)
            .arg(Arg::new("filepath")
                .value_name("FILE")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("NAV RINEX file (.gz files are supported)"))
            .next_help_heading("Observer")
            .arg(Arg::new("lat")
                .long("lat")
                .value_name("DEG")
                .requires("lon")
                .conflicts_with("ecef")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64))
                .help("Observer latitude in decimal degrees"))
            .arg(Arg::new("lon")
                .long("lon")
                .value_name("DEG")
                .requires("lat")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64))
                .help("Observer longitude in decimal degrees"))
            .arg(Arg::new("alt")
                .long("alt")
                .value_name("M")
                .requires("lat")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64))
                .help("Observer altitude above the ellipsoid, in meters (80 when omitted)"))
            .arg(Arg::new("ecef")
                .long("ecef")
                .value_name("X,Y,Z")
                .allow_hyphen_values(true)
                .help("Observer ECEF WGS84 coordinates, in meters")
                .long_help("Define the observer by its ECEF WGS84 coordinates, comma separated.
When no observer is defined, we use Castelldefels (41.2750°N, 1.9876°E, 80m)."))
            .next_help_heading("Sampling")
            .arg(Arg::new("step")
                .long("step")
                .value_name("DURATION")
                .help("Sampling period, for example \"15 min\" (default)"))
            .arg(Arg::new("validity")
                .long("validity")
                .value_name("DURATION")
                .help("Ephemeris validity around its reference epoch, \"4 h\" by default"))
            .arg(Arg::new("mask")
                .long("mask")
                .value_name("DEG")
                .value_parser(value_parser!(f64))
                .help("Elevation mask in degrees. Only samples strictly above are kept (0° default)"))
            .next_help_heading("Session")
            .arg(Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Disable all terminal output"))
            .arg(Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Dump the tracks as JSON as well"))
            .arg(Arg::new("workspace")
                .short('w')
                .long("workspace")
                .value_name("FOLDER")
                .value_parser(value_parser!(PathBuf))
                .help("Define custom workspace location. See --help for more information.")
                .long_help("Workspace is where Output Products are to be generated.
The $SKYPLOT_WORKSPACE variable is automatically picked up by this application and always prefered.
Use --workspace,-w to define it at runtime if you prefer.
When no workspace is defined, we simply a create local folder."))
    }
    /// Input file path
    pub fn input_path(&self) -> &Path {
        self.matches
            .get_one::<PathBuf>("filepath")
            .map(|p| p.as_path())
            .unwrap_or(Path::new(""))
    }
    pub fn quiet(&self) -> bool {
        self.matches.get_flag("quiet")
    }
    pub fn json(&self) -> bool {
        self.matches.get_flag("json")
    }
    pub fn workspace(&self) -> Option<&PathBuf> {
        self.matches.get_one::<PathBuf>("workspace")
    }
    /// Returns the [GroundPosition] defined by user
    pub fn observer(&self) -> Result<GroundPosition, Error> {
        if let Some(ecef) = self.matches.get_one::<String>("ecef") {
            return parse_ecef(ecef).map(GroundPosition::from_ecef_wgs84);
        }
        match (
            self.matches.get_one::<f64>("lat"),
            self.matches.get_one::<f64>("lon"),
        ) {
            (Some(lat), Some(lon)) => {
                if !(-90.0..=90.0).contains(lat) {
                    return Err(Error::InvalidPosition(format!("latitude {}", lat)));
                }
                let alt = self
                    .matches
                    .get_one::<f64>("alt")
                    .copied()
                    .unwrap_or(DEFAULT_OBSERVER.2);
                Ok(GroundPosition::from_geodetic_degrees(*lat, *lon, alt))
            },
            _ => {
                let (lat, lon, alt) = DEFAULT_OBSERVER;
                Ok(GroundPosition::from_geodetic_degrees(lat, lon, alt))
            },
        }
    }
    /// Returns the [SkyplotConfig] defined by user
    pub fn skyplot_config(&self) -> Result<SkyplotConfig, Error> {
        let mut cfg = SkyplotConfig::default();
        if let Some(step) = self.matches.get_one::<String>("step") {
            cfg = cfg.with_step(parse_duration(step)?);
        }
        if let Some(validity) = self.matches.get_one::<String>("validity") {
            cfg = cfg.with_validity(parse_duration(validity)?);
        }
        if let Some(mask) = self.matches.get_one::<f64>("mask") {
            cfg = cfg.with_elevation_mask(*mask);
        }
        Ok(cfg)
    }
}

fn parse_duration(content: &str) -> Result<Duration, Error> {
    Duration::from_str(content.trim()).map_err(|_| Error::InvalidDuration(content.to_string()))
}

fn parse_ecef(content: &str) -> Result<(f64, f64, f64), Error> {
    let coords = content
        .split(',')
        .map(|c| c.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| Error::InvalidPosition(content.to_string()))?;
    match coords[..] {
        [x, y, z] => Ok((x, y, z)),
        _ => Err(Error::InvalidPosition(content.to_string())),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    fn parse(args: &[&str]) -> Cli {
        Cli {
            matches: Cli::command()
                .try_get_matches_from(args)
                .unwrap_or_else(|e| panic!("{}", e)),
        }
    }
    #[test]
    fn default_observer() {
        let cli = parse(&["skyplot", "brdc.rnx"]);
        assert_eq!(cli.input_path(), Path::new("brdc.rnx"));
        assert!(!cli.quiet());
        assert!(!cli.json());
        let (lat, lon, alt) = cli.observer().unwrap().to_geodetic_degrees();
        assert!((lat - 41.2750).abs() < 1.0E-9);
        assert!((lon - 1.9876).abs() < 1.0E-9);
        assert_eq!(alt, 80.0);
        assert_eq!(cli.skyplot_config().unwrap(), SkyplotConfig::default());
    }
    #[test]
    fn custom_observer() {
        let cli = parse(&["skyplot", "brdc.rnx", "--lat", "-33.87", "--lon", "151.21"]);
        let (lat, lon, alt) = cli.observer().unwrap().to_geodetic_degrees();
        assert!((lat + 33.87).abs() < 1.0E-9);
        assert!((lon - 151.21).abs() < 1.0E-9);
        assert_eq!(alt, 80.0);

        let cli = parse(&[
            "skyplot", "brdc.rnx", "--lat", "10.0", "--lon", "20.0", "--alt", "-12.5",
        ]);
        let (_, _, alt) = cli.observer().unwrap().to_geodetic_degrees();
        assert_eq!(alt, -12.5);

        let cli = parse(&["skyplot", "brdc.rnx", "--ecef", "6378137.0,0,0"]);
        let (lat, lon, alt) = cli.observer().unwrap().to_geodetic_degrees();
        assert!(lat.abs() < 1.0E-6);
        assert!(lon.abs() < 1.0E-6);
        assert!(alt.abs() < 1.0E-3);

        let cli = parse(&["skyplot", "brdc.rnx", "--ecef", "1,2"]);
        assert!(cli.observer().is_err());
    }
    #[test]
    fn sampling_options() {
        let cli = parse(&[
            "skyplot", "brdc.rnx", "--step", "5 min", "--validity", "2 h", "--mask", "10",
            "--json", "-q",
        ]);
        let cfg = cli.skyplot_config().unwrap();
        assert_eq!(cfg.step, Duration::from_seconds(300.0));
        assert_eq!(cfg.validity, Duration::from_seconds(7200.0));
        assert_eq!(cfg.elevation_mask_deg, 10.0);
        assert!(cli.json());
        assert!(cli.quiet());

        let cli = parse(&["skyplot", "brdc.rnx", "--step", "soon"]);
        assert!(cli.skyplot_config().is_err());
    }
}
