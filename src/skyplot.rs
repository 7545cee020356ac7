//! Skyplot: satellite tracks seen from a ground observer.
//!
//! Each satellite is evaluated with its most recent [Ephemeris] only,
//! across a [TimeWindow] shared by all satellites. Samples are gated
//! by the ephemeris validity, then by the elevation mask.
use std::collections::BTreeMap;

use crate::{
    ground_position::GroundPosition,
    navigation::{Ephemeris, NavRecord, Record},
    prelude::{Duration, Epoch, TimeSeries, Vector3, SV},
};

/// Track sampling configuration
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkyplotConfig {
    /// Sampling period
    pub step: Duration,
    /// Ephemeris validity: samples further than this
    /// from the ephemeris reference epoch are not evaluated
    pub validity: Duration,
    /// Samples at or below this elevation (°) are discarded
    pub elevation_mask_deg: f64,
    /// Satellites with fewer visible samples are discarded
    pub min_samples: usize,
}

impl Default for SkyplotConfig {
    fn default() -> Self {
        Self {
            step: Duration::from_seconds(15.0 * 60.0),
            validity: Duration::from_seconds(4.0 * 3600.0),
            elevation_mask_deg: 0.0,
            min_samples: 2,
        }
    }
}

impl SkyplotConfig {
    /// Copies and returns Self with desired sampling period
    pub fn with_step(&self, step: Duration) -> Self {
        let mut s = *self;
        s.step = step;
        s
    }
    /// Copies and returns Self with desired ephemeris validity
    pub fn with_validity(&self, validity: Duration) -> Self {
        let mut s = *self;
        s.validity = validity;
        s
    }
    /// Copies and returns Self with desired elevation mask (°)
    pub fn with_elevation_mask(&self, elevation_mask_deg: f64) -> Self {
        let mut s = *self;
        s.elevation_mask_deg = elevation_mask_deg;
        s
    }
    /// Copies and returns Self with desired minimal number of samples
    pub fn with_min_samples(&self, min_samples: usize) -> Self {
        let mut s = *self;
        s.min_samples = min_samples;
        s
    }
}

/// Evaluation window, shared by all satellites
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TimeWindow {
    /// First sampled [Epoch]
    pub start: Epoch,
    /// Last [Epoch] (included)
    pub end: Epoch,
}

impl TimeWindow {
    /// Builds the global window: from the earliest to the latest
    /// reference epoch, across all ephemerides of all satellites.
    /// Returns None on empty [Record].
    pub fn global(record: &Record) -> Option<Self> {
        let (start, end) = record.epoch_range()?;
        Some(Self { start, end })
    }
    /// Returns the window duration
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
    /// Returns the sampling epochs, `step` apart, end included
    /// when aligned. A null or negative step yields no epoch.
    pub fn sampling(&self, step: Duration) -> Box<dyn Iterator<Item = Epoch>> {
        if step <= Duration::ZERO {
            warn!("invalid sampling period {}", step);
            return Box::new(std::iter::empty());
        }
        Box::new(TimeSeries::inclusive(self.start, self.end, step))
    }
}

/// Satellite ECEF position at one [Epoch]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PositionSample {
    /// Sampling [Epoch]
    pub epoch: Epoch,
    /// ECEF position (m)
    pub position: Vector3<f64>,
}

/// Satellite angles at one [Epoch]
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AngleSample {
    /// Sampling [Epoch]
    pub epoch: Epoch,
    /// Azimuth (°) in [0, 360)
    pub azimuth_deg: f64,
    /// Elevation (°) in [-90, 90]
    pub elevation_deg: f64,
}

/// Visible samples of one satellite
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Track {
    /// Reference epoch of the [Ephemeris] that was evaluated
    pub ephemeris_epoch: Epoch,
    /// Visible samples, in chronological order
    pub samples: Vec<AngleSample>,
}

impl Track {
    /// Returns the sample with the highest elevation
    pub fn culmination(&self) -> Option<&AngleSample> {
        self.samples
            .iter()
            .max_by(|a, b| a.elevation_deg.total_cmp(&b.elevation_deg))
    }
}

/// [Skyplot] projects broadcast orbits onto the sky of a ground observer
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Skyplot {
    /// Ground observer
    pub observer: GroundPosition,
    /// Sampling configuration
    pub config: SkyplotConfig,
}

impl Skyplot {
    /// Builds a [Skyplot] with default [SkyplotConfig]
    pub fn new(observer: GroundPosition) -> Self {
        Self {
            observer,
            config: SkyplotConfig::default(),
        }
    }

    /// Copies and returns Self with desired [SkyplotConfig]
    pub fn with_config(&self, config: SkyplotConfig) -> Self {
        let mut s = *self;
        s.config = config;
        s
    }

    /// Samples the [TimeWindow] and propagates this [Ephemeris]
    /// at each epoch within its validity.
    pub fn positions(&self, eph: &Ephemeris, window: &TimeWindow) -> Vec<PositionSample> {
        window
            .sampling(self.config.step)
            .filter_map(|epoch| {
                let dt = epoch - eph.epoch;
                if dt.abs() > self.config.validity {
                    return None;
                }
                Some(PositionSample {
                    epoch,
                    position: eph.kepler2position(dt.to_seconds()),
                })
            })
            .collect()
    }

    /// Forms the [Track] of this [Ephemeris]: samples above the elevation mask
    pub fn track(&self, eph: &Ephemeris, window: &TimeWindow) -> Track {
        let samples = self
            .positions(eph, window)
            .iter()
            .map(|sample| {
                let azel = self.observer.azel(&sample.position);
                AngleSample {
                    epoch: sample.epoch,
                    azimuth_deg: azel.azimuth_deg,
                    elevation_deg: azel.elevation_deg,
                }
            })
            .filter(|sample| sample.elevation_deg > self.config.elevation_mask_deg)
            .collect();
        Track {
            ephemeris_epoch: eph.epoch,
            samples,
        }
    }

    /// Forms all satellite [Track]s over the global [TimeWindow],
    /// each satellite being evaluated with its latest [Ephemeris].
    /// Satellites with too few visible samples are not reported.
    pub fn tracks(&self, record: &Record) -> BTreeMap<SV, Track> {
        let mut tracks = BTreeMap::new();
        let window = match TimeWindow::global(record) {
            Some(window) => window,
            None => return tracks,
        };

        debug!(
            "skyplot window: {} - {} ({})",
            window.start,
            window.end,
            window.duration()
        );

        for sv in record.keys() {
            let eph = match record.latest_ephemeris(sv) {
                Some(eph) => eph,
                None => continue,
            };
            let track = self.track(eph, &window);
            if track.samples.len() < self.config.min_samples {
                debug!("{}: {} visible sample(s), discarded", sv, track.samples.len());
                continue;
            }
            tracks.insert(*sv, track);
        }
        tracks
    }
}
