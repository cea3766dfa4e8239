//! Type aliases for the numeric fields of a candidate record.

/// Segment length in bases (PBS, RT template).
pub type LenType = u32;
/// sgRNA priority rank. Lower rank means higher priority.
pub type RankType = u32;
/// Continuous per-guide score (GC percent, on-target score).
pub type ScoreType = f64;
