//! Command line tool to compute the skyplot of a broadcast navigation file.
//! Refer to README for command line arguments.
//! Homepage: <https://github.com/georust/rinex>

mod cli; // command line interface
mod export;
mod workspace;

use cli::Cli;
use workspace::Workspace;

use skyplot::prelude::{NavFile, Skyplot};

use env_logger::{Builder, Target};

#[macro_use]
extern crate log;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    StdioError(#[from] std::io::Error),
    #[error(transparent)]
    SkyplotError(#[from] skyplot::Error),
    #[error("csv export error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("json export error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("invalid observer position: {0}")]
    InvalidPosition(String),
    #[error("invalid duration \"{0}\"")]
    InvalidDuration(String),
}

pub fn main() {
    let mut builder = Builder::from_default_env();
    builder
        .target(Target::Stdout)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let cli = Cli::new();
    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let quiet = cli.quiet();
    let path = cli.input_path();

    let nav = NavFile::from_file(path)?;
    if nav.is_empty() {
        if !quiet {
            println!("no satellite data");
        }
        return Ok(());
    }

    if !quiet {
        println!("{}", nav.summary());
    }

    let observer = cli.observer()?;
    let config = cli.skyplot_config()?;
    info!("observer: {}", observer);
    debug!("{:?}", config);

    let tracks = Skyplot::new(observer).with_config(config).tracks(&nav.record);
    if tracks.is_empty() {
        warn!("no satellite ever rises above the elevation mask");
    }

    let stem = export::file_stem(path);
    let workspace = Workspace::new(cli)?;

    let csv_path = workspace.root.join(format!("skyplot_{}.csv", stem));
    export::write_csv(&tracks, &csv_path)?;
    info!("\"{}\" has been generated", csv_path.display());

    if cli.json() {
        let json_path = workspace.root.join(format!("skyplot_{}.json", stem));
        export::write_json(&tracks, &json_path)?;
        info!("\"{}\" has been generated", json_path.display());
    }

    if !quiet {
        println!("{} satellites tracked", tracks.len());
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;
    #[test]
    fn error_reports() {
        let path = PathBuf::from("/no/such/brdc.rnx");
        let e = Error::from(skyplot::Error::FileNotFound(path));
        assert_eq!(e.to_string(), "file not found: /no/such/brdc.rnx");

        let e = Error::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "WORKSPACE is read only",
        ));
        assert!(e.to_string().contains("WORKSPACE is read only"));
    }
}
