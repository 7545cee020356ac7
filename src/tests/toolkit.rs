use crate::prelude::*;
use rand::{distributions::Alphanumeric, Rng};
use std::path::PathBuf;

/*
 * Returns path to desired test resource
 */
pub fn test_resource(name: &str) -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("test_resources")
        .join("NAV")
        .join("V3")
        .join(name)
}

/*
 * Tool to generate random names when we need to produce a file
 */
pub fn random_name(size: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .map(char::from)
        .collect()
}

/*
 * Castelldefels (Spain) ground station
 */
pub fn castelldefels() -> GroundPosition {
    GroundPosition::from_geodetic_degrees(41.2750, 1.9876, 80.0)
}

/*
 * Verifies generic track properties
 */
pub fn generic_track_test(track: &Track, config: &SkyplotConfig) {
    assert!(track.samples.len() >= config.min_samples);
    for sample in track.samples.iter() {
        assert!(sample.elevation_deg > config.elevation_mask_deg);
        assert!(sample.elevation_deg <= 90.0);
        assert!(sample.azimuth_deg >= 0.0 && sample.azimuth_deg < 360.0);
        let dt = (sample.epoch - track.ephemeris_epoch).abs();
        assert!(dt <= config.validity);
    }
    for pair in track.samples.windows(2) {
        assert!(pair[0].epoch < pair[1].epoch, "samples not in chronological order");
    }
}
