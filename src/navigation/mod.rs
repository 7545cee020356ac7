//! Navigation (broadcast ephemeris) data
pub mod field;
pub mod layout;

pub(crate) mod parsing;

mod ephemeris;
mod record;

pub use ephemeris::{solve_eccentric_anomaly, Ephemeris, Helper, Kepler, Perturbations};
pub use layout::OrbitField;
pub use record::{NavRecord, Record};
