//! # pegforge
//!
//! `pegforge` is a Rust library and command-line tool for screening prime
//! editing guide RNA (pegRNA) candidate designs. It normalizes tab-separated
//! candidate tables into typed records, applies the biological screening
//! rules (PBS/RT length windows, RT template prefix, enzyme and sgRNA rank),
//! aggregates `(PBS_len, RT_len)` combinations per rank for reporting, and
//! orchestrates an external linker design oracle (pegLIT) to attach a linker
//! sequence to every retained candidate.
//!
//! The pipeline is a deterministic, single-pass batch over a bounded
//! in-memory record set. The only external side effect is the per-record
//! oracle call, kept behind the [`LinkerOracle`](tools::linker::LinkerOracle)
//! trait so it can be replaced by a test double or fanned out over a worker
//! pool without touching the filter or aggregation stages.
//!
//! ## Structure
//!
//! * [`data_structs`]: the typed candidate record ([`PegRecord`]), its
//!   builder, the enzyme and linker-status enumerations and the
//!   `(PBS_len, RT_len)` combination counts.
//! * [`io`]: design table normalization ([`DesignReader`]) and CSV emission
//!   ([`DesignWriter`]).
//! * [`tools`]: the per-rank filter engine ([`FilterCriteria`]) and the
//!   linker design orchestration.
//! * [`pipeline`]: the [`DesignPipeline`] driver sequencing the stages.
//!
//! ## Usage
//!
//! ```no_run
//! use std::fs::File;
//!
//! use pegforge::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let records = DesignReader::new(File::open("design.txt")?).read_lossy()?;
//!
//!     let oracle = PegLitProcess::new("peglit");
//!     let orchestrator = LinkerOrchestrator::new(oracle, SPCAS9_SCAFFOLD);
//!     let output = DesignPipeline::new(orchestrator).run(records);
//!
//!     for report in &output.reports {
//!         println!("Rank {} sgRNAs: {}", report.rank, report.total);
//!         println!("{}", report.combinations);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`PegRecord`]: data_structs::PegRecord
//! [`DesignReader`]: io::design::DesignReader
//! [`DesignWriter`]: io::design::DesignWriter
//! [`FilterCriteria`]: tools::filter::FilterCriteria
//! [`DesignPipeline`]: pipeline::DesignPipeline

pub mod data_structs;
pub mod io;
pub mod pipeline;
pub mod prelude;
pub mod tools;
pub mod utils;
