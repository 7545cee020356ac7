use crate::{
    constants::Constants,
    navigation::Ephemeris,
    prelude::{Epoch, Vector3},
};

mod helper;

pub use helper::Helper;

/// [Kepler] stores all keplerian parameters
#[derive(Default, Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Kepler {
    /// semi major axis (m)
    pub a: f64,
    /// Eccentricity (n.a)
    pub e: f64,
    /// Inclination angle at reference time (rad)
    pub i_0: f64,
    /// Longitude of ascending node at weekly epoch (rad)
    pub omega_0: f64,
    /// Mean anomaly at reference time (rad)
    pub m_0: f64,
    /// argument of perigee (rad)
    pub omega: f64,
    /// Time of ephemeris (seconds of week)
    pub toe: f64,
}

/// Orbit [Perturbations]
#[derive(Default, Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Perturbations {
    /// Mean motion difference from computed value [rad.s⁻¹]
    pub dn: f64,
    /// Inclination rate of change [rad.s⁻¹]
    pub i_dot: f64,
    /// Right ascension rate of change [rad.s⁻¹]
    pub omega_dot: f64,
    /// Amplitude of sine harmonic correction term of the argument
    /// of latitude [rad]
    pub cus: f64,
    /// Amplitude of cosine harmonic correction term of the argument
    /// of latitude [rad]
    pub cuc: f64,
    /// Amplitude of sine harmonic correction term of the angle of inclination [rad]
    pub cis: f64,
    /// Amplitude of cosine harmonic correction term of the angle of inclination [rad]
    pub cic: f64,
    /// Amplitude of sine harmonic correction term of the orbit radius [m]
    pub crs: f64,
    /// Amplitude of cosine harmonic correction term of the orbit radius [m]
    pub crc: f64,
}

/// Solves Kepler's equation `E = M + e sin(E)` by fixed point iteration,
/// starting from `E = M`. Returns (E, number of iterations, converged).
/// Iteration stops once two successive iterates differ by less than
/// 1E-12 rad, or after 10 iterations.
/// The iteration error shrinks by about `e` per step, so the 1E-12 rad
/// tolerance is only guaranteed for small eccentricities (GPS orbits,
/// e < 0.02). Beyond that, the solver may exhaust its 10 iterations
/// and report `converged = false` with a residual around `e^10`.
pub fn solve_eccentric_anomaly(m_k: f64, e: f64) -> (f64, u8, bool) {
    let mut e_k = m_k;
    for iter in 1..=Constants::MAX_KEPLER_ITER {
        let next = m_k + e * e_k.sin();
        let delta = (next - e_k).abs();
        e_k = next;
        if delta < Constants::KEPLER_TOLERANCE {
            return (e_k, iter, true);
        }
    }
    (e_k, Constants::MAX_KEPLER_ITER, false)
}

impl Ephemeris {
    /// Retrieves Orbit Keplerian parameters.
    pub fn kepler(&self) -> Kepler {
        Kepler {
            a: self.sqrt_a.powi(2),
            e: self.e,
            i_0: self.i0,
            omega: self.omega,
            omega_0: self.omega0,
            m_0: self.m0,
            toe: self.toe,
        }
    }

    /// Creates new [Ephemeris] frame from [Kepler]ian parameters
    pub fn with_kepler(&self, kepler: Kepler) -> Self {
        let mut s = self.clone();
        s.sqrt_a = kepler.a.sqrt();
        s.e = kepler.e;
        s.i0 = kepler.i_0;
        s.omega = kepler.omega;
        s.omega0 = kepler.omega_0;
        s.m0 = kepler.m_0;
        s.toe = kepler.toe;
        s
    }

    /// Retrieves Orbit [Perturbations] from [Ephemeris]
    pub fn perturbations(&self) -> Perturbations {
        Perturbations {
            cuc: self.cuc,
            cus: self.cus,
            cic: self.cic,
            cis: self.cis,
            crc: self.crc,
            crs: self.crs,
            dn: self.delta_n,
            i_dot: self.idot,
            omega_dot: self.omega_dot,
        }
    }

    /// Creates new [Ephemeris] with desired Orbit [Perturbations]
    pub fn with_perturbations(&self, perturbations: Perturbations) -> Self {
        let mut s = self.clone();
        s.cuc = perturbations.cuc;
        s.cus = perturbations.cus;
        s.cic = perturbations.cic;
        s.cis = perturbations.cis;
        s.crc = perturbations.crc;
        s.crs = perturbations.crs;
        s.delta_n = perturbations.dn;
        s.idot = perturbations.i_dot;
        s.omega_dot = perturbations.omega_dot;
        s
    }

    /// Returns seconds elapsed between the reference [Epoch] of
    /// this [Ephemeris] and `t`. Negative prior reference epoch.
    pub fn t_k(&self, t: Epoch) -> f64 {
        (t - self.epoch).to_seconds()
    }

    /// Forms the [Helper] at `t_k` seconds from the reference epoch.
    pub fn helper(&self, t_k: f64) -> Helper {
        Helper::new(&self.kepler(), &self.perturbations(), t_k)
    }

    /// Returns ECEF position [Vector3] in meters, `t_k` seconds
    /// away from the reference epoch. This never fails: degenerate
    /// orbits (null semi major axis for example) result in NaN coordinates.
    pub fn kepler2position(&self, t_k: f64) -> Vector3<f64> {
        let helper = self.helper(t_k);
        if !helper.converged {
            debug!(
                "{}({}) - kepler solver did not converge (t_k={}s e={})",
                self.epoch, self.sv, t_k, self.e
            );
        }
        helper.ecef_position()
    }

    /// Returns ECEF position [Vector3] in meters, at desired [Epoch].
    pub fn position(&self, t: Epoch) -> Vector3<f64> {
        self.kepler2position(self.t_k(t))
    }
}
