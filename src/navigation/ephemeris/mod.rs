mod kepler;

pub use kepler::{solve_eccentric_anomaly, Helper, Kepler, Perturbations};

use crate::{
    navigation::{
        field::NumericField,
        layout::{OrbitField, LNAV_LAYOUT},
    },
    prelude::{Duration, Epoch, SV},
};

/// Ephemeris: one broadcast navigation message,
/// keyed by [SV] and reference [Epoch].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Ephemeris {
    /// Satellite vehicle
    pub sv: SV,
    /// Reference (clock) epoch, UTC, second resolution
    pub epoch: Epoch,
    /// Clock bias (in seconds)
    pub clock_bias: f64,
    /// Clock drift (s.s⁻¹)
    pub clock_drift: f64,
    /// Clock drift rate (s.s⁻²)
    pub clock_drift_rate: f64,
    /// Issue of data, ephemeris
    pub iode: f64,
    /// Amplitude of sine harmonic correction term of the orbit radius (m)
    pub crs: f64,
    /// Mean motion difference from computed value (rad.s⁻¹)
    pub delta_n: f64,
    /// Mean anomaly at reference time (rad)
    pub m0: f64,
    /// Amplitude of cosine harmonic correction term of the argument of latitude (rad)
    pub cuc: f64,
    /// Eccentricity
    pub e: f64,
    /// Amplitude of sine harmonic correction term of the argument of latitude (rad)
    pub cus: f64,
    /// Square root of the semi major axis (m^1/2)
    pub sqrt_a: f64,
    /// Time of ephemeris (seconds of week)
    pub toe: f64,
    /// Amplitude of cosine harmonic correction term of the angle of inclination (rad)
    pub cic: f64,
    /// Longitude of ascending node at weekly epoch (rad)
    pub omega0: f64,
    /// Amplitude of sine harmonic correction term of the angle of inclination (rad)
    pub cis: f64,
    /// Inclination angle at reference time (rad)
    pub i0: f64,
    /// Amplitude of cosine harmonic correction term of the orbit radius (m)
    pub crc: f64,
    /// Argument of perigee (rad)
    pub omega: f64,
    /// Rate of right ascension (rad.s⁻¹)
    pub omega_dot: f64,
    /// Rate of inclination angle (rad.s⁻¹)
    pub idot: f64,
    /// Codes on L2 channel
    pub codes_l2: f64,
    /// Week counter, continuous (not mod 1024)
    pub week: f64,
    /// L2 P data flag
    pub l2p_flag: f64,
    /// SV accuracy (m)
    pub sv_accuracy: f64,
    /// SV health bits
    pub sv_health: f64,
    /// Total group delay (s)
    pub tgd: f64,
    /// Issue of data, clock
    pub iodc: f64,
    /// Transmission time of message (seconds of week)
    pub transmission_time: f64,
    /// Fit interval (hours), 0 when not broadcast
    pub fit_interval: f64,
}

impl Ephemeris {
    /// Builds a new [Ephemeris] with all parameters set to zero
    pub fn new(sv: SV, epoch: Epoch) -> Self {
        Self {
            sv,
            epoch,
            clock_bias: 0.0,
            clock_drift: 0.0,
            clock_drift_rate: 0.0,
            iode: 0.0,
            crs: 0.0,
            delta_n: 0.0,
            m0: 0.0,
            cuc: 0.0,
            e: 0.0,
            cus: 0.0,
            sqrt_a: 0.0,
            toe: 0.0,
            cic: 0.0,
            omega0: 0.0,
            cis: 0.0,
            i0: 0.0,
            crc: 0.0,
            omega: 0.0,
            omega_dot: 0.0,
            idot: 0.0,
            codes_l2: 0.0,
            week: 0.0,
            l2p_flag: 0.0,
            sv_accuracy: 0.0,
            sv_health: 0.0,
            tgd: 0.0,
            iodc: 0.0,
            transmission_time: 0.0,
            fit_interval: 0.0,
        }
    }

    /// Decodes all parameters of an 8-line block, following [LNAV_LAYOUT].
    /// This never fails: missing or malformed fields decode as 0.0.
    pub(crate) fn decode(sv: SV, epoch: Epoch, lines: &[&str]) -> Self {
        let mut eph = Self::new(sv, epoch);
        for descriptor in LNAV_LAYOUT.iter() {
            let content = descriptor.extract(lines);
            let field = NumericField::decode(content);
            match field {
                NumericField::Defaulted => {
                    debug!(
                        "{}({}) - {}: \"{}\" substituted by 0.0",
                        epoch,
                        sv,
                        descriptor.field,
                        content.trim()
                    );
                },
                NumericField::Salvaged(value) => {
                    trace!(
                        "{}({}) - {}: salvaged {} from \"{}\"",
                        epoch,
                        sv,
                        descriptor.field,
                        value,
                        content.trim()
                    );
                },
                _ => {},
            }
            eph.set(descriptor.field, field.value());
        }
        eph
    }

    /// Returns the value of given [OrbitField]
    pub fn get(&self, field: OrbitField) -> f64 {
        match field {
            OrbitField::ClockBias => self.clock_bias,
            OrbitField::ClockDrift => self.clock_drift,
            OrbitField::ClockDriftRate => self.clock_drift_rate,
            OrbitField::Iode => self.iode,
            OrbitField::Crs => self.crs,
            OrbitField::DeltaN => self.delta_n,
            OrbitField::M0 => self.m0,
            OrbitField::Cuc => self.cuc,
            OrbitField::E => self.e,
            OrbitField::Cus => self.cus,
            OrbitField::SqrtA => self.sqrt_a,
            OrbitField::Toe => self.toe,
            OrbitField::Cic => self.cic,
            OrbitField::Omega0 => self.omega0,
            OrbitField::Cis => self.cis,
            OrbitField::I0 => self.i0,
            OrbitField::Crc => self.crc,
            OrbitField::Omega => self.omega,
            OrbitField::OmegaDot => self.omega_dot,
            OrbitField::Idot => self.idot,
            OrbitField::CodesL2 => self.codes_l2,
            OrbitField::Week => self.week,
            OrbitField::L2pFlag => self.l2p_flag,
            OrbitField::SvAccuracy => self.sv_accuracy,
            OrbitField::SvHealth => self.sv_health,
            OrbitField::Tgd => self.tgd,
            OrbitField::Iodc => self.iodc,
            OrbitField::TransmissionTime => self.transmission_time,
            OrbitField::FitInterval => self.fit_interval,
        }
    }

    /// Assigns the value of given [OrbitField]
    pub(crate) fn set(&mut self, field: OrbitField, value: f64) {
        let target = match field {
            OrbitField::ClockBias => &mut self.clock_bias,
            OrbitField::ClockDrift => &mut self.clock_drift,
            OrbitField::ClockDriftRate => &mut self.clock_drift_rate,
            OrbitField::Iode => &mut self.iode,
            OrbitField::Crs => &mut self.crs,
            OrbitField::DeltaN => &mut self.delta_n,
            OrbitField::M0 => &mut self.m0,
            OrbitField::Cuc => &mut self.cuc,
            OrbitField::E => &mut self.e,
            OrbitField::Cus => &mut self.cus,
            OrbitField::SqrtA => &mut self.sqrt_a,
            OrbitField::Toe => &mut self.toe,
            OrbitField::Cic => &mut self.cic,
            OrbitField::Omega0 => &mut self.omega0,
            OrbitField::Cis => &mut self.cis,
            OrbitField::I0 => &mut self.i0,
            OrbitField::Crc => &mut self.crc,
            OrbitField::Omega => &mut self.omega,
            OrbitField::OmegaDot => &mut self.omega_dot,
            OrbitField::Idot => &mut self.idot,
            OrbitField::CodesL2 => &mut self.codes_l2,
            OrbitField::Week => &mut self.week,
            OrbitField::L2pFlag => &mut self.l2p_flag,
            OrbitField::SvAccuracy => &mut self.sv_accuracy,
            OrbitField::SvHealth => &mut self.sv_health,
            OrbitField::Tgd => &mut self.tgd,
            OrbitField::Iodc => &mut self.iodc,
            OrbitField::TransmissionTime => &mut self.transmission_time,
            OrbitField::FitInterval => &mut self.fit_interval,
        };
        *target = value;
    }

    /// Returns [SV] onboard clock (bias [s], drift [s/s], drift rate [s/s]).
    pub fn sv_clock(&self) -> (f64, f64, f64) {
        (self.clock_bias, self.clock_drift, self.clock_drift_rate)
    }

    /// Returns TGD as [Duration]
    pub fn tgd(&self) -> Duration {
        Duration::from_seconds(self.tgd)
    }

    /// Returns the fit interval, when broadcast
    pub fn fit_interval(&self) -> Option<Duration> {
        if self.fit_interval > 0.0 {
            Some(Duration::from_seconds(self.fit_interval * 3600.0))
        } else {
            None
        }
    }

    /// Returns true if this vehicle is declared healthy
    pub fn is_healthy(&self) -> bool {
        self.sv_health == 0.0
    }
}
