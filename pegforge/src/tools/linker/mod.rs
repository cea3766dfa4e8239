//! Linker design orchestration.
//!
//! The oracle trait is the request/response seam to the external linker
//! design computation (pegLIT); the orchestrator walks a filtered candidate
//! set and attaches one design outcome per record.

mod oracle;
mod orchestrator;

pub use oracle::{
    LinkerOracle,
    LinkerRequest,
    PegLitProcess,
};
pub use orchestrator::LinkerOrchestrator;

/// SpCas9 sgRNA scaffold shared by every linker request in a run.
///
/// Passed to [`LinkerOrchestrator::new`] as configuration so tests and
/// alternative editing systems can substitute their own scaffold.
pub const SPCAS9_SCAFFOLD: &str = "GTTTTAGAGCTAGAAATAGCAAGTTAAAATAAGGCTAGTCC\
                                   GTTATCAACTTGAAAAAGTGGCACCGAGTCGGTGC";
