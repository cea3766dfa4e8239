//! Screening tools: the per-rank candidate filter and the linker design
//! orchestration around the external pegLIT oracle.

pub mod filter;
pub mod linker;
