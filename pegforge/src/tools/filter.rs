use std::ops::RangeInclusive;

use crate::data_structs::typedef::{
    LenType,
    RankType,
};
use crate::data_structs::{
    Enzyme,
    PegRecord,
};
use crate::{getter_fn, with_field_fn};

/// Biological acceptance criteria for one target sgRNA rank.
///
/// The default instance carries the screening rules of the pipeline:
/// PBS length 12-13, RT length 13-15, RT template not starting with `C`,
/// enzyme Cas9-NGG, rank 1. The engine itself is rank-agnostic; the pipeline
/// derives one criteria instance per target rank.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pbs_len: RangeInclusive<LenType>,
    rt_len: RangeInclusive<LenType>,
    forbidden_rt_prefix: Option<char>,
    sgrna_rank: RankType,
    enzyme: Enzyme,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            pbs_len: 12..=13,
            rt_len: 13..=15,
            forbidden_rt_prefix: Some('C'),
            sgrna_rank: 1,
            enzyme: Enzyme::Cas9Ngg,
        }
    }
}

impl FilterCriteria {
    /// Default criteria retargeted to `rank`.
    pub fn for_rank(rank: RankType) -> Self {
        Self::default().with_sgrna_rank(rank)
    }

    with_field_fn!(pbs_len, RangeInclusive<LenType>);
    with_field_fn!(rt_len, RangeInclusive<LenType>);
    with_field_fn!(forbidden_rt_prefix, Option<char>);
    with_field_fn!(sgrna_rank, RankType);
    with_field_fn!(enzyme, Enzyme);

    getter_fn!(enzyme, Enzyme);

    pub fn sgrna_rank(&self) -> RankType {
        self.sgrna_rank
    }

    /// Conjunction of all criteria. Range bounds are inclusive; the RT
    /// prefix check compares the exact first character, case-sensitively.
    pub fn matches(
        &self,
        record: &PegRecord,
    ) -> bool {
        self.pbs_len.contains(&record.pbs_len())
            && self.rt_len.contains(&record.rt_len())
            && self
                .forbidden_rt_prefix
                .map_or(true, |prefix| !record.rt_seq().starts_with(prefix))
            && record.sgrna_rank() == self.sgrna_rank
            && *record.enzyme() == self.enzyme
    }

    /// Order-preserving, pure filter over a record slice.
    pub fn apply(
        &self,
        records: &[PegRecord],
    ) -> Vec<PegRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}
