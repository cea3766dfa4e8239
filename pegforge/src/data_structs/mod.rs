//! Core data structures for pegRNA candidate screening.
//!
//! - [`PegRecord`] / [`PegRecordBuilder`]: one typed candidate row, built once
//!   at normalization time, with a single-shot linker transition.
//! - [`Enzyme`], [`Orientation`] and [`LinkerStatus`] enumerations.
//! - [`CombinationCounts`]: `(PBS_len, RT_len)` occurrence counts for the
//!   per-rank combination report.
//! - [`typedef`]: aliases for the numeric field types.

mod combinations;
mod enums;
mod record;
pub mod typedef;


pub use combinations::{
    CombinationCounts,
    CombinationEntry,
    CombinationKey,
};
pub use enums::{
    Enzyme,
    LinkerStatus,
    Orientation,
};
pub use record::{
    PegRecord,
    PegRecordBuilder,
};
