use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::enums::{
    Enzyme,
    LinkerStatus,
    Orientation,
};
use crate::data_structs::typedef::{
    LenType,
    RankType,
    ScoreType,
};
use crate::utils::is_dna;
use crate::{getter_fn, with_field_fn};

/// One pegRNA candidate design row.
///
/// Records are immutable once built. The only permitted state change is the
/// single linker transition via [`PegRecord::with_linker`], which consumes
/// the record and returns the annotated one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PegRecord {
    rt_len: LenType,
    rt_seq: String,
    rt_picked: String,
    pbs_len: LenType,
    pbs_seq: String,
    pbs_picked: String,
    extension3_seq: String,
    extension3_picked: String,
    extension_f_oligo: String,
    extension_r_oligo: String,
    sgrna_seq: String,
    sgrna_rank: RankType,
    sgf_oligo: String,
    sgr_oligo: String,
    sg_orientation: Orientation,
    sg_seed_pam_disrupt: String,
    sg_gc_percent: ScoreType,
    sg_on_target_score: ScoreType,
    enzyme: Enzyme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    linker: Option<LinkerStatus>,
}

impl PegRecord {
    pub fn builder() -> PegRecordBuilder {
        PegRecordBuilder::default()
    }

    pub fn rt_len(&self) -> LenType {
        self.rt_len
    }

    pub fn pbs_len(&self) -> LenType {
        self.pbs_len
    }

    pub fn sgrna_rank(&self) -> RankType {
        self.sgrna_rank
    }

    pub fn sg_gc_percent(&self) -> ScoreType {
        self.sg_gc_percent
    }

    pub fn sg_on_target_score(&self) -> ScoreType {
        self.sg_on_target_score
    }

    getter_fn!(rt_seq, String);
    getter_fn!(rt_picked, String);
    getter_fn!(pbs_seq, String);
    getter_fn!(pbs_picked, String);
    getter_fn!(extension3_seq, String);
    getter_fn!(extension3_picked, String);
    getter_fn!(extension_f_oligo, String);
    getter_fn!(extension_r_oligo, String);
    getter_fn!(sgrna_seq, String);
    getter_fn!(sgf_oligo, String);
    getter_fn!(sgr_oligo, String);
    getter_fn!(sg_orientation, Orientation);
    getter_fn!(sg_seed_pam_disrupt, String);
    getter_fn!(enzyme, Enzyme);

    pub fn linker(&self) -> Option<&LinkerStatus> {
        self.linker.as_ref()
    }

    /// Attaches the linker design outcome.
    ///
    /// Single-writer rule: the orchestrator calls this exactly once per
    /// record, after filtering.
    pub fn with_linker(
        mut self,
        status: LinkerStatus,
    ) -> Self {
        debug_assert!(
            self.linker.is_none(),
            "linker is assigned exactly once per record"
        );
        self.linker = Some(status);
        self
    }

    /// Names of the sequence fields that contain non-ACGT characters.
    pub fn non_dna_fields(&self) -> Vec<&'static str> {
        [
            ("RT_seq", self.rt_seq.as_str()),
            ("PBS_seq", self.pbs_seq.as_str()),
            ("3_extension_seq", self.extension3_seq.as_str()),
            ("sgRNA_seq", self.sgrna_seq.as_str()),
        ]
        .into_iter()
        .filter(|(_, seq)| !is_dna(seq))
        .map(|(name, _)| name)
        .collect()
    }
}

/// Field-by-field constructor for [`PegRecord`].
///
/// Used by the design reader after a raw line has been split and its numeric
/// fields coerced; all downstream access goes through the typed record.
#[derive(Debug, Clone, Default)]
pub struct PegRecordBuilder {
    rt_len: LenType,
    rt_seq: String,
    rt_picked: String,
    pbs_len: LenType,
    pbs_seq: String,
    pbs_picked: String,
    extension3_seq: String,
    extension3_picked: String,
    extension_f_oligo: String,
    extension_r_oligo: String,
    sgrna_seq: String,
    sgrna_rank: RankType,
    sgf_oligo: String,
    sgr_oligo: String,
    sg_orientation: Option<Orientation>,
    sg_seed_pam_disrupt: String,
    sg_gc_percent: ScoreType,
    sg_on_target_score: ScoreType,
    enzyme: Option<Enzyme>,
}

impl PegRecordBuilder {
    with_field_fn!(rt_len, LenType);
    with_field_fn!(rt_seq, String);
    with_field_fn!(rt_picked, String);
    with_field_fn!(pbs_len, LenType);
    with_field_fn!(pbs_seq, String);
    with_field_fn!(pbs_picked, String);
    with_field_fn!(extension3_seq, String);
    with_field_fn!(extension3_picked, String);
    with_field_fn!(extension_f_oligo, String);
    with_field_fn!(extension_r_oligo, String);
    with_field_fn!(sgrna_seq, String);
    with_field_fn!(sgrna_rank, RankType);
    with_field_fn!(sgf_oligo, String);
    with_field_fn!(sgr_oligo, String);
    with_field_fn!(sg_seed_pam_disrupt, String);
    with_field_fn!(sg_gc_percent, ScoreType);
    with_field_fn!(sg_on_target_score, ScoreType);

    pub fn with_sg_orientation(
        mut self,
        value: Orientation,
    ) -> Self {
        self.sg_orientation = Some(value);
        self
    }

    pub fn with_enzyme(
        mut self,
        value: Enzyme,
    ) -> Self {
        self.enzyme = Some(value);
        self
    }

    pub fn build(self) -> PegRecord {
        PegRecord {
            rt_len: self.rt_len,
            rt_seq: self.rt_seq,
            rt_picked: self.rt_picked,
            pbs_len: self.pbs_len,
            pbs_seq: self.pbs_seq,
            pbs_picked: self.pbs_picked,
            extension3_seq: self.extension3_seq,
            extension3_picked: self.extension3_picked,
            extension_f_oligo: self.extension_f_oligo,
            extension_r_oligo: self.extension_r_oligo,
            sgrna_seq: self.sgrna_seq,
            sgrna_rank: self.sgrna_rank,
            sgf_oligo: self.sgf_oligo,
            sgr_oligo: self.sgr_oligo,
            sg_orientation: self
                .sg_orientation
                .unwrap_or_else(|| Orientation::Other(String::new())),
            sg_seed_pam_disrupt: self.sg_seed_pam_disrupt,
            sg_gc_percent: self.sg_gc_percent,
            sg_on_target_score: self.sg_on_target_score,
            enzyme: self.enzyme.unwrap_or_else(|| Enzyme::Other(String::new())),
            linker: None,
        }
    }
}
