use log::warn;
use rayon::prelude::*;

use crate::data_structs::{
    LinkerStatus,
    PegRecord,
};
use crate::tools::linker::oracle::{
    LinkerOracle,
    LinkerRequest,
};

/// Attaches one linker design outcome to every record of a filtered set.
///
/// The scaffold is fixed per orchestrator instance. Oracle failures and empty
/// candidate lists mark the affected record as [`LinkerStatus::Failed`] and
/// never abort the batch; every input record appears exactly once in the
/// output, in input order.
pub struct LinkerOrchestrator<O> {
    oracle:   O,
    scaffold: String,
}

impl<O: LinkerOracle> LinkerOrchestrator<O> {
    pub fn new(
        oracle: O,
        scaffold: impl Into<String>,
    ) -> Self {
        Self {
            oracle,
            scaffold: scaffold.into(),
        }
    }

    pub fn scaffold(&self) -> &str {
        &self.scaffold
    }

    pub fn request_for(
        &self,
        record: &PegRecord,
    ) -> LinkerRequest {
        LinkerRequest::from_record(record, &self.scaffold)
    }

    /// Designs a linker for one record and attaches the outcome.
    ///
    /// When the oracle returns several candidates the first one is taken.
    /// That choice is fixed, documented policy inherited from the original
    /// screening workflow, not an optimality claim.
    pub fn design(
        &self,
        record: PegRecord,
    ) -> PegRecord {
        let request = self.request_for(&record);
        let status = match self.oracle.design_linker(&request) {
            Ok(linkers) => {
                match linkers.into_iter().next() {
                    Some(linker) => LinkerStatus::Assigned(linker),
                    None => {
                        warn!(
                            "no linker candidates for spacer {}",
                            request.spacer()
                        );
                        LinkerStatus::Failed
                    },
                }
            },
            Err(error) => {
                warn!(
                    "linker design failed for spacer {}: {}",
                    request.spacer(),
                    error
                );
                LinkerStatus::Failed
            },
        };
        record.with_linker(status)
    }

    /// Sequential assignment over a filtered set, in input order.
    pub fn assign(
        &self,
        records: Vec<PegRecord>,
    ) -> Vec<PegRecord> {
        records
            .into_iter()
            .map(|record| self.design(record))
            .collect()
    }

    /// Parallel assignment on the rayon pool.
    ///
    /// Requests are independent, so records fan out across workers; collect
    /// keeps output order identical to input order and failures stay
    /// per-record.
    pub fn assign_parallel(
        &self,
        records: Vec<PegRecord>,
    ) -> Vec<PegRecord>
    where
        O: Sync, {
        records
            .into_par_iter()
            .map(|record| self.design(record))
            .collect()
    }
}
