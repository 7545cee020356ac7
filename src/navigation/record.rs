use itertools::Itertools;
use std::collections::BTreeMap;

use crate::{
    navigation::Ephemeris,
    prelude::{Epoch, SV},
};

/// Navigation record: [Ephemeris] list per [SV], in order of appearance
pub type Record = BTreeMap<SV, Vec<Ephemeris>>;

/// Methods available on a navigation [Record]
pub trait NavRecord {
    /// Returns the [Ephemeris] of this [SV] with the latest reference epoch
    /// (most recent broadcast). Among identical epochs, the last one
    /// in order of appearance is retained.
    fn latest_ephemeris(&self, sv: &SV) -> Option<&Ephemeris>;
    /// Iterates over all [Ephemeris], [SV] by [SV]
    fn ephemeris_iter(&self) -> Box<dyn Iterator<Item = &Ephemeris> + '_>;
    /// Returns all distinct reference epochs, in chronological order
    fn epochs(&self) -> Vec<Epoch>;
    /// Returns (first, last) reference epochs
    fn epoch_range(&self) -> Option<(Epoch, Epoch)>;
    /// Returns the total number of ephemerides
    fn total_ephemerides(&self) -> usize;
}

impl NavRecord for Record {
    fn latest_ephemeris(&self, sv: &SV) -> Option<&Ephemeris> {
        self.get(sv)?.iter().max_by(|a, b| a.epoch.cmp(&b.epoch))
    }
    fn ephemeris_iter(&self) -> Box<dyn Iterator<Item = &Ephemeris> + '_> {
        Box::new(self.values().flat_map(|ephemerides| ephemerides.iter()))
    }
    fn epochs(&self) -> Vec<Epoch> {
        self.ephemeris_iter().map(|eph| eph.epoch).sorted().dedup().collect()
    }
    fn epoch_range(&self) -> Option<(Epoch, Epoch)> {
        self.ephemeris_iter()
            .map(|eph| eph.epoch)
            .minmax()
            .into_option()
    }
    fn total_ephemerides(&self) -> usize {
        self.values().map(|ephemerides| ephemerides.len()).sum()
    }
}
