//! Scoring table store: the official point grid encoded as typed lookup tables.
//!
//! Tables are `'static` constants. Nothing here is ever written after compilation,
//! so every scoring call can share them without synchronization.

macro_rules! bands {
    ($(($low:expr, $high:expr, $points:expr)),* $(,)?) => {
        BandTable::new(&[$(Band { low: $low, high: $high, points: $points }),*])
    };
}

macro_rules! exact {
    ($(($key:expr, $points:expr)),* $(,)?) => {
        ExactTable::new(&[$(($key, $points)),*])
    };
}

macro_rules! pairs {
    ($(($key:expr, ($single:expr, $with_spouse:expr))),* $(,)?) => {
        PairExactTable::new(&[$((
            $key,
            PointPair {
                single: $single,
                with_spouse: $with_spouse,
            },
        )),*])
    };
}

mod ceilings;
mod tables;

pub use ceilings::CategoryCeilings;
pub use tables::{CategoryCaps, FlatAwards, PointGrid, OFFICIAL_GRID};

use serde::Serialize;

/// Upper bound used for the last, open-ended band of a table.
pub const OPEN_END: i64 = i64::MAX;

/// Half-open interval `[low, high)` mapped to a point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Band {
    pub low: i64,
    pub high: i64,
    pub points: i32,
}

impl Band {
    pub const fn new(low: i64, high: i64, points: i32) -> Self {
        Self { low, high, points }
    }

    pub const fn contains(&self, value: i64) -> bool {
        self.low <= value && value < self.high
    }
}

/// Ordered band list evaluated as "first matching band, else 0".
///
/// Contiguity and non-overlap are authoring invariants of the constants, not runtime checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandTable {
    bands: &'static [Band],
}

impl BandTable {
    pub const fn new(bands: &'static [Band]) -> Self {
        Self { bands }
    }

    /// Table without bands; every lookup misses.
    pub const fn empty() -> Self {
        Self { bands: &[] }
    }

    pub fn points(&self, value: impl Into<i64>) -> i32 {
        let value = value.into();
        self.band_for(value).map(|band| band.points).unwrap_or(0)
    }

    pub fn band_for(&self, value: i64) -> Option<&'static Band> {
        self.bands.iter().find(|band| band.contains(value))
    }

    pub fn bands(&self) -> &'static [Band] {
        self.bands
    }

    /// Best value any input can reach on this table.
    pub fn max_points(&self) -> i32 {
        self.bands
            .iter()
            .map(|band| band.points)
            .max()
            .unwrap_or(0)
    }

    /// Lower bounds of every band after the first, i.e. the values where the award changes.
    pub fn thresholds(&self) -> impl Iterator<Item = i64> + '_ {
        self.bands.iter().skip(1).map(|band| band.low)
    }
}

/// Discrete key to points map. Absent keys score zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactTable<K: 'static> {
    entries: &'static [(K, i32)],
}

impl<K: PartialEq + Copy> ExactTable<K> {
    pub const fn new(entries: &'static [(K, i32)]) -> Self {
        Self { entries }
    }

    pub fn points(&self, key: K) -> i32 {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, points)| *points)
            .unwrap_or(0)
    }

    pub fn max_points(&self) -> i32 {
        self.entries
            .iter()
            .map(|(_, points)| *points)
            .max()
            .unwrap_or(0)
    }
}

/// Key to `(single, with_spouse)` points map. Absent keys score zero in both columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairExactTable<K: 'static> {
    entries: &'static [(K, PointPair)],
}

/// Points awarded to a single applicant and to an applicant with an accompanying spouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointPair {
    pub single: i32,
    pub with_spouse: i32,
}

impl PointPair {
    pub const fn new(single: i32, with_spouse: i32) -> Self {
        Self {
            single,
            with_spouse,
        }
    }

    pub const fn select(self, has_spouse: bool) -> i32 {
        if has_spouse {
            self.with_spouse
        } else {
            self.single
        }
    }
}

impl<K: PartialEq + Copy> PairExactTable<K> {
    pub const fn new(entries: &'static [(K, PointPair)]) -> Self {
        Self { entries }
    }

    pub fn points(&self, key: K, has_spouse: bool) -> i32 {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, pair)| pair.select(has_spouse))
            .unwrap_or(0)
    }

    pub fn max_points(&self, has_spouse: bool) -> i32 {
        self.entries
            .iter()
            .map(|(_, pair)| pair.select(has_spouse))
            .max()
            .unwrap_or(0)
    }
}

/// Pair of band tables selected by household composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HouseholdBands {
    pub single: BandTable,
    pub with_spouse: BandTable,
}

impl HouseholdBands {
    pub const fn select(&self, has_spouse: bool) -> &BandTable {
        if has_spouse {
            &self.with_spouse
        } else {
            &self.single
        }
    }
}
