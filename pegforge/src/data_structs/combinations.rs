use std::collections::BTreeMap;
use std::fmt::Display;

use hashbrown::HashMap;
use itertools::Itertools;
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::record::PegRecord;
use crate::data_structs::typedef::LenType;

/// `(PBS_len, RT_len)` pair a candidate is grouped by.
pub type CombinationKey = (LenType, LenType);

/// One rendered row of the combination report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationEntry {
    pub pbs_len: LenType,
    pub rt_len:  LenType,
    pub count:   u32,
}

/// Occurrence counts of `(PBS_len, RT_len)` combinations in a filtered set.
///
/// A pure summary statistic: equal input multisets produce equal counts
/// regardless of input order. Rendering and serialization are key-sorted for
/// reproducibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinationCounts {
    counts: HashMap<CombinationKey, u32>,
}

impl CombinationCounts {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a PegRecord>, {
        let counts = records
            .into_iter()
            .map(|record| (record.pbs_len(), record.rt_len()))
            .counts()
            .into_iter()
            .map(|(key, count)| (key, count as u32))
            .collect();
        Self { counts }
    }

    pub fn get(
        &self,
        key: &CombinationKey,
    ) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct combinations.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts. Equals the number of records aggregated.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Entries sorted by `(PBS_len, RT_len)` key.
    pub fn sorted_entries(&self) -> Vec<CombinationEntry> {
        self.counts
            .iter()
            .sorted_by_key(|(key, _)| **key)
            .map(|(&(pbs_len, rt_len), &count)| {
                CombinationEntry {
                    pbs_len,
                    rt_len,
                    count,
                }
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CombinationKey, &u32)> {
        self.counts.iter()
    }
}

impl FromIterator<CombinationEntry> for CombinationCounts {
    fn from_iter<T: IntoIterator<Item = CombinationEntry>>(iter: T) -> Self {
        let mut counts: HashMap<CombinationKey, u32> = HashMap::new();
        for entry in iter {
            *counts.entry((entry.pbs_len, entry.rt_len)).or_default() += entry.count;
        }
        Self { counts }
    }
}

/// Serializes as a key-sorted entry sequence for deterministic output.
impl Serialize for CombinationCounts {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer, {
        // BTreeMap round-trip keeps the order stable independent of the
        // hashmap's internal layout.
        let sorted: BTreeMap<CombinationKey, u32> =
            self.counts.iter().map(|(&k, &v)| (k, v)).collect();
        let entries: Vec<CombinationEntry> = sorted
            .into_iter()
            .map(|((pbs_len, rt_len), count)| {
                CombinationEntry {
                    pbs_len,
                    rt_len,
                    count,
                }
            })
            .collect();
        entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CombinationCounts {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>, {
        let entries = Vec::<CombinationEntry>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

impl Display for CombinationCounts {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        writeln!(f, "{:>8}{:>8}{:>7}", "PBS_len", "RT_len", "count")?;
        for entry in self.sorted_entries() {
            writeln!(
                f,
                "{:>8}{:>8}{:>7}",
                entry.pbs_len, entry.rt_len, entry.count
            )?;
        }
        Ok(())
    }
}
