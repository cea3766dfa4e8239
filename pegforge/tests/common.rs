#![allow(dead_code)]

use pegforge::prelude::*;

/// A candidate record that passes the default rank-1 criteria.
pub fn demo_record(
    pbs_len: LenType,
    rt_len: LenType,
    rank: RankType,
) -> PegRecord {
    PegRecord::builder()
        .with_rt_len(rt_len)
        .with_rt_seq("GCTTACGATT".to_string())
        .with_rt_picked("yes".to_string())
        .with_pbs_len(pbs_len)
        .with_pbs_seq("AGTCAGTCAGTC".to_string())
        .with_pbs_picked("yes".to_string())
        .with_extension3_seq("TTT".to_string())
        .with_extension3_picked("yes".to_string())
        .with_extension_f_oligo("oF".to_string())
        .with_extension_r_oligo("oR".to_string())
        .with_sgrna_seq("GGACGTACGTACGTACGTAC".to_string())
        .with_sgrna_rank(rank)
        .with_sgf_oligo("sgF".to_string())
        .with_sgr_oligo("sgR".to_string())
        .with_sg_orientation(Orientation::from("fwd"))
        .with_sg_seed_pam_disrupt("no".to_string())
        .with_sg_gc_percent(55.2)
        .with_sg_on_target_score(0.87)
        .with_enzyme(Enzyme::Cas9Ngg)
        .build()
}

/// A raw tab-separated design line matching `demo_record`.
pub fn design_line(
    pbs_len: LenType,
    rt_len: LenType,
    rank: RankType,
) -> String {
    [
        rt_len.to_string(),
        "GCTTACGATT".to_string(),
        "yes".to_string(),
        pbs_len.to_string(),
        "AGTCAGTCAGTC".to_string(),
        "yes".to_string(),
        "TTT".to_string(),
        "yes".to_string(),
        "oF".to_string(),
        "oR".to_string(),
        "GGACGTACGTACGTACGTAC".to_string(),
        rank.to_string(),
        "sgF".to_string(),
        "sgR".to_string(),
        "fwd".to_string(),
        "no".to_string(),
        "55.2".to_string(),
        "0.87".to_string(),
        "Cas9-NGG".to_string(),
    ]
    .join("\t")
}
