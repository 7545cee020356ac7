//! Ground observer and topocentric projection
use crate::{constants::Constants, prelude::Vector3};
use map_3d::{ecef2geodetic, Ellipsoid};

/// Geodetic position of a ground observer, WGS84 ellipsoid
#[derive(Default, Copy, Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroundPosition {
    /// Latitude (rad)
    pub latitude_rad: f64,
    /// Longitude (rad)
    pub longitude_rad: f64,
    /// Altitude above the ellipsoid (m)
    pub altitude_m: f64,
}

/// Azimuth, elevation and range of a target, as seen from a [GroundPosition]
#[derive(Default, Copy, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AzElRange {
    /// Azimuth (°), clockwise from north, in [0, 360)
    pub azimuth_deg: f64,
    /// Elevation (°) above local horizon, in [-90, 90]
    pub elevation_deg: f64,
    /// Slant range (m)
    pub range_m: f64,
}

impl GroundPosition {
    /// Builds Self from geodetic coordinates: latitude and longitude
    /// in decimal degrees, altitude in meters
    pub fn from_geodetic_degrees(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_rad: latitude_deg.to_radians(),
            longitude_rad: longitude_deg.to_radians(),
            altitude_m,
        }
    }
    /// Builds Self from ECEF WGS84 coordinates (m)
    pub fn from_ecef_wgs84(pos: (f64, f64, f64)) -> Self {
        let (latitude_rad, longitude_rad, altitude_m) =
            ecef2geodetic(pos.0, pos.1, pos.2, Ellipsoid::WGS84);
        Self {
            latitude_rad,
            longitude_rad,
            altitude_m,
        }
    }
    /// Returns geodetic coordinates in (ddeg, ddeg, m)
    pub fn to_geodetic_degrees(&self) -> (f64, f64, f64) {
        (
            self.latitude_rad.to_degrees(),
            self.longitude_rad.to_degrees(),
            self.altitude_m,
        )
    }
    /// Converts Self to ECEF WGS84 coordinates (m)
    pub fn to_ecef_wgs84(&self) -> Vector3<f64> {
        let a = Constants::WGS84_SEMI_MAJOR_AXIS;
        let e2 = Constants::WGS84_ECCENTRICITY_SQUARED;
        let (sin_lat, cos_lat) = self.latitude_rad.sin_cos();
        let (sin_lon, cos_lon) = self.longitude_rad.sin_cos();
        // prime vertical radius of curvature
        let n = a / (1.0 - e2 * sin_lat.powi(2)).sqrt();
        Vector3::new(
            (n + self.altitude_m) * cos_lat * cos_lon,
            (n + self.altitude_m) * cos_lat * sin_lon,
            (n * (1.0 - e2) + self.altitude_m) * sin_lat,
        )
    }
    /// Projects an ECEF position (m) onto the local East North Up frame
    pub fn enu(&self, target: &Vector3<f64>) -> Vector3<f64> {
        let delta = target - self.to_ecef_wgs84();
        let (sin_lat, cos_lat) = self.latitude_rad.sin_cos();
        let (sin_lon, cos_lon) = self.longitude_rad.sin_cos();
        let east = -sin_lon * delta[0] + cos_lon * delta[1];
        let north = -sin_lat * cos_lon * delta[0] - sin_lat * sin_lon * delta[1] + cos_lat * delta[2];
        let up = cos_lat * cos_lon * delta[0] + cos_lat * sin_lon * delta[1] + sin_lat * delta[2];
        Vector3::new(east, north, up)
    }
    /// Returns [AzElRange] of an ECEF position (m), seen from Self.
    /// A target located on the observer yields null angles.
    pub fn azel(&self, target: &Vector3<f64>) -> AzElRange {
        let enu = self.enu(target);
        let (east, north, up) = (enu[0], enu[1], enu[2]);

        let mut azimuth_deg = east.atan2(north).to_degrees();
        if azimuth_deg < 0.0 {
            azimuth_deg += 360.0;
        }
        if azimuth_deg >= 360.0 {
            azimuth_deg = 0.0;
        }

        let elevation_deg = up.atan2(east.hypot(north)).to_degrees();

        AzElRange {
            azimuth_deg,
            elevation_deg,
            range_m: enu.norm(),
        }
    }
}

impl std::fmt::Display for GroundPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (lat, lon, alt) = self.to_geodetic_degrees();
        write!(f, "WGS84 ({:.4}°, {:.4}°, {:.1}m)", lat, lon, alt)
    }
}
