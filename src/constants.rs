//! Physical and numerical constants

/// Constants used by the orbit propagator and the topocentric transform.
/// The broadcast model is evaluated with GPS constants for all constellations.
pub(crate) struct Constants;

impl Constants {
    /// Earth gravitational constant (m³.s⁻²), GPS ICD value
    pub const GM_GPS: f64 = 3.9860050E14;

    /// Earth rotation rate (rad.s⁻¹), GPS ICD value
    pub const OMEGA_GPS: f64 = 7.2921151467E-5;

    /// Maximal iteration in the iterative Kepler solver
    pub const MAX_KEPLER_ITER: u8 = 10;

    /// Kepler solver convergence threshold (rad)
    pub const KEPLER_TOLERANCE: f64 = 1.0E-12;

    /// WGS84 semi major axis (m)
    pub const WGS84_SEMI_MAJOR_AXIS: f64 = 6378137.0;

    /// WGS84 first eccentricity squared
    pub const WGS84_ECCENTRICITY_SQUARED: f64 = 6.69437999014E-3;
}
