#![doc(html_logo_url = "https://raw.githubusercontent.com/georust/meta/master/logo/logo.png")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::type_complexity)]

//! Broadcast ephemeris toolkit.
//!
//! This crate parses the body of NAV RINEX files (legacy 8-line LNAV
//! ephemeris blocks), propagates each broadcast ephemeris with the
//! GPS ICD Keplerian model and projects the resulting positions onto
//! the local sky of a ground observer.
//!
//! ```no_run
//! use skyplot::prelude::*;
//!
//! let nav = NavFile::from_file("brdc0010.22n").unwrap();
//! let observer = GroundPosition::from_geodetic_degrees(41.2750, 1.9876, 80.0);
//! let tracks = Skyplot::new(observer).tracks(&nav.record);
//! for (sv, track) in tracks.iter() {
//!     println!("{}: {} visible samples", sv, track.samples.len());
//! }
//! ```

/*
 * Skyplot builds on top of the Geo-Rust / RTK-rs framework.
 * Authors: Guillaume W. Bres <guillaume.bressaix@gmail.com> et al.
 * This framework is shipped under the Mozilla Public V2 license.
 */

extern crate gnss_rs as gnss;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate log;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

pub mod ground_position;
pub mod header;
pub mod navigation;
pub mod skyplot;
pub mod summary;
pub mod version;

mod constants;
mod epoch;
mod error;

#[cfg(test)]
mod tests;

use std::{
    borrow::Cow,
    fs::File,
    io::{BufRead, BufReader, ErrorKind},
    path::Path,
};

#[cfg(feature = "flate2")]
use flate2::read::GzDecoder;

use header::Header;
use navigation::{parsing::BlockParser, Record};
use summary::Summary;

/// Package to include all basic structures
pub mod prelude {
    pub use crate::{
        error::{Error, ParsingError},
        ground_position::{AzElRange, GroundPosition},
        header::Header,
        navigation::{
            field::{parse_rinex_float, NumericField},
            Ephemeris, Helper, Kepler, NavRecord, OrbitField, Perturbations, Record,
        },
        skyplot::{AngleSample, PositionSample, Skyplot, SkyplotConfig, TimeWindow, Track},
        summary::Summary,
        version::Version,
        NavFile,
    };

    // pub re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale, TimeSeries};
    pub use nalgebra::Vector3;
}

pub use error::{Error, ParsingError};

/// [NavFile] is a parsed navigation (broadcast ephemeris) file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavFile {
    /// Header section, decoded on a best effort basis
    pub header: Header,
    /// Ephemerides, per satellite, in order of appearance
    pub record: Record,
}

impl NavFile {
    /// Parses a navigation file from any [BufRead]able interface.
    /// Malformed blocks are logged and skipped, only I/O failures
    /// are reported. Bytes that are not valid UTF-8 are replaced
    /// and the line is decoded like any other.
    pub fn parse<R: BufRead>(mut reader: R) -> Result<Self, Error> {
        let mut parser = BlockParser::default();
        let mut buf = Vec::<u8>::with_capacity(128);
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.ends_with(b"\n") {
                buf.pop();
                if buf.ends_with(b"\r") {
                    buf.pop();
                }
            }
            let line = String::from_utf8_lossy(&buf);
            if matches!(line, Cow::Owned(_)) {
                trace!("invalid UTF-8 content replaced: \"{}\"", line);
            }
            parser.feed(&line);
        }
        let (header, record) = parser.finish();
        Ok(Self { header, record })
    }

    /// Parses a navigation file from local path.
    /// When built with the "flate2" feature, files terminated by ".gz"
    /// are decompressed on the fly.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();

        #[cfg(feature = "flate2")]
        if path.extension().map(|ext| ext == "gz").unwrap_or(false) {
            return Self::from_gzip_file(path);
        }

        let fd = Self::open(path)?;
        Self::parse(BufReader::new(fd))
    }

    /// Parses a gzip compressed navigation file from local path.
    #[cfg(feature = "flate2")]
    #[cfg_attr(docsrs, doc(cfg(feature = "flate2")))]
    pub fn from_gzip_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let fd = Self::open(path.as_ref())?;
        Self::parse(BufReader::new(GzDecoder::new(fd)))
    }

    fn open(path: &Path) -> Result<File, Error> {
        File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::Unreadable(path.to_path_buf(), e),
        })
    }

    /// Returns true if no ephemeris could be recovered
    pub fn is_empty(&self) -> bool {
        self.record.is_empty()
    }

    /// Returns the [Summary] of this file
    pub fn summary(&self) -> Summary {
        Summary::from_record(&self.record)
    }
}
