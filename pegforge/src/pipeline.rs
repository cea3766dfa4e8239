//! The batch pipeline driver: normalize, sort, filter per rank, aggregate
//! combinations, then orchestrate linker design over the retained candidates.

use log::info;

use crate::data_structs::typedef::RankType;
use crate::data_structs::{
    CombinationCounts,
    PegRecord,
};
use crate::tools::filter::FilterCriteria;
use crate::tools::linker::{
    LinkerOracle,
    LinkerOrchestrator,
};
use crate::with_field_fn;

/// Filter and aggregation outcome for one target rank.
#[derive(Debug, Clone)]
pub struct RankReport {
    pub rank: RankType,
    pub total: usize,
    pub combinations: CombinationCounts,
    pub records: Vec<PegRecord>,
}

/// Sorted records, per-rank reports and the rank-ordered retained set, before
/// linker assignment.
#[derive(Debug, Clone)]
pub struct PreparedRun {
    pub sorted: Vec<PegRecord>,
    pub reports: Vec<RankReport>,
    pub combined: Vec<PegRecord>,
}

/// Full pipeline result.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// All normalized records, stably sorted by rank.
    pub sorted: Vec<PegRecord>,
    /// One report per target rank, in rank-list order.
    pub reports: Vec<RankReport>,
    /// Retained candidates with linker outcomes, rank-concatenation order.
    pub annotated: Vec<PegRecord>,
}

/// Sequences the screening pipeline over a normalized record set.
///
/// Records are stably sorted by `sgRNA_rank` ascending, filtered once per
/// target rank, aggregated into per-rank combination reports, concatenated in
/// rank order and handed to the linker orchestrator. The concatenated set is
/// never re-sorted; only the pre-filter rank sort applies.
pub struct DesignPipeline<O> {
    orchestrator:  LinkerOrchestrator<O>,
    base_criteria: FilterCriteria,
    ranks: Vec<RankType>,
}

impl<O: LinkerOracle> DesignPipeline<O> {
    pub fn new(orchestrator: LinkerOrchestrator<O>) -> Self {
        Self {
            orchestrator,
            base_criteria: FilterCriteria::default(),
            ranks: vec![1, 2],
        }
    }

    with_field_fn!(base_criteria, FilterCriteria);
    with_field_fn!(ranks, Vec<RankType>);

    pub fn orchestrator(&self) -> &LinkerOrchestrator<O> {
        &self.orchestrator
    }

    /// Runs everything up to (excluding) linker assignment.
    pub fn prepare(
        &self,
        records: Vec<PegRecord>,
    ) -> PreparedRun {
        let mut sorted = records;
        sorted.sort_by_key(|record| record.sgrna_rank());

        let mut reports = Vec::with_capacity(self.ranks.len());
        let mut combined = Vec::new();
        for &rank in &self.ranks {
            let criteria = self.base_criteria.clone().with_sgrna_rank(rank);
            let filtered = criteria.apply(&sorted);
            let combinations = CombinationCounts::from_records(&filtered);
            info!(
                "rank {}: {} candidates across {} (PBS_len, RT_len) combinations",
                rank,
                filtered.len(),
                combinations.len()
            );
            combined.extend(filtered.iter().cloned());
            reports.push(RankReport {
                rank,
                total: filtered.len(),
                combinations,
                records: filtered,
            });
        }

        PreparedRun {
            sorted,
            reports,
            combined,
        }
    }

    /// Runs the full pipeline including linker assignment.
    pub fn run(
        &self,
        records: Vec<PegRecord>,
    ) -> PipelineOutput {
        let prepared = self.prepare(records);
        let annotated = self.orchestrator.assign(prepared.combined);
        info!(
            "assigned linker outcomes to {} retained candidates",
            annotated.len()
        );
        PipelineOutput {
            sorted: prepared.sorted,
            reports: prepared.reports,
            annotated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structs::tests::demo_record;
    use crate::data_structs::LinkerStatus;
    use crate::tools::linker::LinkerRequest;

    fn stub_pipeline() -> DesignPipeline<
        impl Fn(&LinkerRequest) -> anyhow::Result<Vec<String>>,
    > {
        let oracle = |_: &LinkerRequest| -> anyhow::Result<Vec<String>> {
            Ok(vec!["AAGCTT".to_string(), "GGTACC".to_string()])
        };
        DesignPipeline::new(LinkerOrchestrator::new(oracle, "SC"))
    }

    #[test]
    fn test_sort_is_stable() {
        let first = demo_record(12, 13, 1);
        let second = demo_record(12, 14, 1);
        let records =
            vec![demo_record(13, 15, 2), first.clone(), second.clone()];

        let prepared = stub_pipeline().prepare(records);
        assert_eq!(prepared.sorted[0], first);
        assert_eq!(prepared.sorted[1], second);
        assert_eq!(prepared.sorted[2].sgrna_rank(), 2);
    }

    #[test]
    fn test_rank_concatenation_order() {
        let records = vec![
            demo_record(13, 14, 2),
            demo_record(12, 14, 1),
            demo_record(12, 15, 2),
            demo_record(13, 15, 1),
        ];
        let output = stub_pipeline().run(records);

        let ranks: Vec<_> = output
            .annotated
            .iter()
            .map(|r| r.sgrna_rank())
            .collect();
        assert_eq!(ranks, vec![1, 1, 2, 2]);
        assert!(output
            .annotated
            .iter()
            .all(|r| r.linker() == Some(&LinkerStatus::Assigned("AAGCTT".to_string()))));
    }

    #[test]
    fn test_reports_match_filtered_totals() {
        let records = vec![
            demo_record(12, 14, 1),
            demo_record(12, 14, 1),
            demo_record(13, 14, 1),
            demo_record(20, 14, 1), // filtered out
            demo_record(12, 14, 3), // rank outside target list
        ];
        let output = stub_pipeline().run(records);

        assert_eq!(output.reports.len(), 2);
        let rank1 = &output.reports[0];
        assert_eq!(rank1.rank, 1);
        assert_eq!(rank1.total, 3);
        assert_eq!(rank1.combinations.total() as usize, rank1.total);
        assert_eq!(rank1.combinations.get(&(12, 14)), 2);
        assert_eq!(rank1.combinations.get(&(13, 14)), 1);

        let rank2 = &output.reports[1];
        assert_eq!(rank2.total, 0);
        assert!(rank2.combinations.is_empty());

        assert_eq!(output.annotated.len(), 3);
        assert_eq!(output.sorted.len(), 5);
    }

    #[test]
    fn test_custom_rank_list() {
        let records = vec![demo_record(12, 14, 3), demo_record(12, 14, 1)];
        let pipeline = stub_pipeline().with_ranks(vec![3]);
        let output = pipeline.run(records);
        assert_eq!(output.reports.len(), 1);
        assert_eq!(output.reports[0].rank, 3);
        assert_eq!(output.annotated.len(), 1);
        assert_eq!(output.annotated[0].sgrna_rank(), 3);
    }

    #[test]
    fn test_empty_input() {
        let output = stub_pipeline().run(Vec::new());
        assert!(output.sorted.is_empty());
        assert!(output.annotated.is_empty());
        assert_eq!(output.reports.len(), 2);
        assert!(output.reports.iter().all(|r| r.total == 0));
    }
}
