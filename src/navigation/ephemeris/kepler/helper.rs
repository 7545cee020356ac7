use crate::{
    constants::Constants,
    navigation::ephemeris::kepler::{solve_eccentric_anomaly, Kepler, Perturbations},
    prelude::Vector3,
};

use nalgebra::{Rotation, Rotation3};

/// [Helper] helps calculate satellite orbital state from Keplerian elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Helper {
    /// The difference between the calculated time and the ephemeris reference time
    pub t_k: f64,
    /// Mean anomaly
    pub m_k: f64,
    /// Eccentric anomaly
    pub e_k: f64,
    /// Kepler solver iterations
    pub iterations: u8,
    /// True when the Kepler solver converged
    pub converged: bool,
    /// True anomaly
    pub v_k: f64,
    /// Ascending angle(corrected)
    pub u_k: f64,
    /// Radius(corrected)
    pub r_k: f64,
    /// Orbital inclination(corrected)
    pub i_k: f64,
    /// Ascending node right ascension
    pub omega_k: f64,
    /// Position in orbital plane (meters)
    pub r_sv: (f64, f64, f64),
}

impl Helper {
    /// Evaluates the broadcast orbit model `t_k` seconds away
    /// from the reference epoch.
    pub(crate) fn new(kepler: &Kepler, perturbations: &Perturbations, t_k: f64) -> Self {
        let n0 = (Constants::GM_GPS / kepler.a.powi(3)).sqrt(); // average angular velocity
        let n = n0 + perturbations.dn; // corrected mean angular velocity
        let m_k = kepler.m_0 + n * t_k; // average anomaly

        let (e_k, iterations, converged) = solve_eccentric_anomaly(m_k, kepler.e);

        // true anomaly
        let (sin_e_k, cos_e_k) = e_k.sin_cos();
        let v_k = ((1.0 - kepler.e.powi(2)).sqrt() * sin_e_k).atan2(cos_e_k - kepler.e);

        let phi_k = v_k + kepler.omega; // latitude argument
        let (x2_sin_phi_k, x2_cos_phi_k) = (2.0 * phi_k).sin_cos();

        // latitude argument correction
        let du_k = perturbations.cus * x2_sin_phi_k + perturbations.cuc * x2_cos_phi_k;
        let u_k = phi_k + du_k;

        // orbital radius correction
        let dr_k = perturbations.crs * x2_sin_phi_k + perturbations.crc * x2_cos_phi_k;
        let r_k = kepler.a * (1.0 - kepler.e * cos_e_k) + dr_k;

        // inclination angle correction
        let di_k = perturbations.cis * x2_sin_phi_k + perturbations.cic * x2_cos_phi_k;
        let i_k = kepler.i_0 + di_k + perturbations.i_dot * t_k;

        // ascending node longitude, earth rotation compensated
        let omega_k = kepler.omega_0 + (perturbations.omega_dot - Constants::OMEGA_GPS) * t_k
            - Constants::OMEGA_GPS * kepler.toe;

        // position in orbital plane
        let r_sv = (r_k * u_k.cos(), r_k * u_k.sin(), 0.0);

        Self {
            t_k,
            m_k,
            e_k,
            iterations,
            converged,
            v_k,
            u_k,
            r_k,
            i_k,
            omega_k,
            r_sv,
        }
    }

    /// Returns orbital plane to ECEF [Rotation3] matrix
    fn orbit_to_ecef_rotation_matrix(&self) -> Rotation<f64, 3> {
        // Positive angles mean counterclockwise rotation
        let rotation_x = Rotation3::from_axis_angle(&Vector3::x_axis(), self.i_k);
        let rotation_z = Rotation3::from_axis_angle(&Vector3::z_axis(), self.omega_k);
        rotation_z * rotation_x
    }

    /// Calculate ECEF position [m].
    pub fn ecef_position(&self) -> Vector3<f64> {
        let (x, y, z) = self.r_sv;
        let orbit_xyz = Vector3::new(x, y, z);
        self.orbit_to_ecef_rotation_matrix() * orbit_xyz
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn inclined_orbit_rotation() {
        let kepler = Kepler {
            a: 26_560_000.0,
            e: 0.0,
            i_0: std::f64::consts::FRAC_PI_2,
            omega_0: 0.0,
            m_0: std::f64::consts::FRAC_PI_2,
            omega: 0.0,
            toe: 0.0,
        };
        let helper = Helper::new(&kepler, &Perturbations::default(), 0.0);
        assert!(helper.converged);
        assert!((helper.u_k - std::f64::consts::FRAC_PI_2).abs() < 1.0E-12);
        // polar orbit, a quarter turn past the node: above the north pole
        let pos = helper.ecef_position();
        assert!(pos[0].abs() < 1.0E-3);
        assert!(pos[1].abs() < 1.0E-3);
        assert!((pos[2] - 26_560_000.0).abs() < 1.0E-3);
    }
    #[test]
    fn harmonic_corrections() {
        let kepler = Kepler {
            a: 26_560_000.0,
            ..Default::default()
        };
        let perturbations = Perturbations {
            crc: 100.0,
            cuc: 1.0E-6,
            cic: 1.0E-7,
            ..Default::default()
        };
        // at t_k = 0 and M = 0, phi_k = 0: only cosine terms contribute
        let helper = Helper::new(&kepler, &perturbations, 0.0);
        assert!((helper.r_k - 26_560_100.0).abs() < 1.0E-6);
        assert!((helper.u_k - 1.0E-6).abs() < 1.0E-15);
        assert!((helper.i_k - 1.0E-7).abs() < 1.0E-15);
    }
}
