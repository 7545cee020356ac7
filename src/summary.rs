//! Navigation file summary
use std::collections::BTreeMap;

use crate::{
    navigation::{NavRecord, Record},
    prelude::{Constellation, Epoch},
};

/// [Summary] of a navigation [Record]
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Summary {
    /// Number of distinct satellites
    pub satellites: usize,
    /// Number of distinct reference epochs
    pub epochs: usize,
    /// Earliest reference epoch
    pub first: Option<Epoch>,
    /// Latest reference epoch
    pub last: Option<Epoch>,
    /// Number of satellites per constellation.
    /// SBAS vehicles are gathered under [Constellation::SBAS].
    pub constellations: BTreeMap<Constellation, usize>,
}

impl Summary {
    /// Builds the [Summary] of this [Record]
    pub fn from_record(record: &Record) -> Self {
        let mut constellations = BTreeMap::<Constellation, usize>::new();
        for sv in record.keys() {
            let constellation = if sv.constellation.is_sbas() {
                Constellation::SBAS
            } else {
                sv.constellation
            };
            *constellations.entry(constellation).or_insert(0) += 1;
        }

        let (first, last) = match record.epoch_range() {
            Some((first, last)) => (Some(first), Some(last)),
            None => (None, None),
        };

        Self {
            satellites: record.len(),
            epochs: record.epochs().len(),
            first,
            last,
            constellations,
        }
    }
}

/// Satellite system name, as printed in the console summary
fn system_name(constellation: &Constellation) -> String {
    match constellation {
        Constellation::GPS => "GPS".to_string(),
        Constellation::Glonass => "GLONASS".to_string(),
        Constellation::Galileo => "Galileo".to_string(),
        Constellation::BeiDou => "BeiDou".to_string(),
        Constellation::QZSS => "QZSS".to_string(),
        Constellation::SBAS => "SBAS".to_string(),
        other => format!("{:?}", other),
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "File contains:")?;
        writeln!(f, "- {} unique satellites", self.satellites)?;
        writeln!(f, "- {} unique epochs", self.epochs)?;
        if let (Some(first), Some(last)) = (self.first, self.last) {
            writeln!(f, "- From {} to {}", first, last)?;
        }
        writeln!(f)?;
        writeln!(f, "Satellite systems found:")?;
        for (constellation, count) in self.constellations.iter() {
            writeln!(
                f,
                "- {} ({:x}): {} satellites",
                system_name(constellation),
                constellation,
                count
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{navigation::Ephemeris, prelude::SV};
    use std::str::FromStr;
    #[test]
    fn summary() {
        let t0 = Epoch::from_gregorian_utc(2022, 1, 1, 0, 0, 0, 0);
        let t1 = Epoch::from_gregorian_utc(2022, 1, 1, 2, 0, 0, 0);
        let mut record = Record::new();
        for (sv, epochs) in [
            ("G01", vec![t0, t1]),
            ("G02", vec![t1]),
            ("E11", vec![t0]),
            ("R05", vec![t1]),
            ("S23", vec![t0]),
            ("S36", vec![t0]),
        ] {
            let sv = SV::from_str(sv).unwrap();
            record.insert(
                sv,
                epochs.iter().map(|t| Ephemeris::new(sv, *t)).collect(),
            );
        }
        let summary = Summary::from_record(&record);
        assert_eq!(summary.satellites, 6);
        assert_eq!(summary.epochs, 2);
        assert_eq!(summary.first, Some(t0));
        assert_eq!(summary.last, Some(t1));
        assert_eq!(summary.constellations.get(&Constellation::GPS), Some(&2));
        assert_eq!(summary.constellations.get(&Constellation::Galileo), Some(&1));
        assert_eq!(summary.constellations.get(&Constellation::Glonass), Some(&1));
        assert_eq!(summary.constellations.get(&Constellation::SBAS), Some(&2));

        let text = summary.to_string();
        assert!(text.contains("- 6 unique satellites"));
        assert!(text.contains("- 2 unique epochs"));
        assert!(text.contains("- GPS (G): 2 satellites"));
        assert!(text.contains("- SBAS (S): 2 satellites"));
        assert!(text.contains("- Galileo (E): 1 satellites"));
        assert!(text.contains("- GLONASS (R): 1 satellites"));
    }
    #[test]
    fn empty_summary() {
        let summary = Summary::from_record(&Record::new());
        assert_eq!(summary, Summary::default());
        assert!(!summary.to_string().contains("From"));
    }
}
