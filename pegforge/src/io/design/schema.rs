//! Fixed column schema of the tab-separated pegRNA design table.

/// Number of fields in one raw design line.
pub const DESIGN_FIELD_COUNT: usize = 19;

/// Header names, in raw-line order, as emitted in the CSV artifacts.
pub const DESIGN_COL_NAMES: [&str; DESIGN_FIELD_COUNT] = [
    "RT_len",
    "RT_seq",
    "RT_picked",
    "PBS_len",
    "PBS_seq",
    "PBS_picked",
    "3_extension_seq",
    "3_extension_picked",
    "extensF_oligo",
    "extensR_oligo",
    "sgRNA_seq",
    "sgRNA_rank",
    "sgF_oligo",
    "sgR_oligo",
    "sg_Orientation",
    "sg_Seed/PAM_disrupt",
    "sg_GC%",
    "sg_OnTargetScore",
    "Enzyme",
];

/// Header name of the linker column appended after orchestration.
pub const LINKER_COL_NAME: &str = "linker";

/// Positional indices into a raw design line.
pub(crate) mod col {
    pub const RT_LEN: usize = 0;
    pub const RT_SEQ: usize = 1;
    pub const RT_PICKED: usize = 2;
    pub const PBS_LEN: usize = 3;
    pub const PBS_SEQ: usize = 4;
    pub const PBS_PICKED: usize = 5;
    pub const EXTENSION3_SEQ: usize = 6;
    pub const EXTENSION3_PICKED: usize = 7;
    pub const EXTENS_F_OLIGO: usize = 8;
    pub const EXTENS_R_OLIGO: usize = 9;
    pub const SGRNA_SEQ: usize = 10;
    pub const SGRNA_RANK: usize = 11;
    pub const SGF_OLIGO: usize = 12;
    pub const SGR_OLIGO: usize = 13;
    pub const SG_ORIENTATION: usize = 14;
    pub const SG_SEED_PAM_DISRUPT: usize = 15;
    pub const SG_GC_PERCENT: usize = 16;
    pub const SG_ON_TARGET_SCORE: usize = 17;
    pub const ENZYME: usize = 18;
}
