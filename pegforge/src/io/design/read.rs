use std::io::Read;
use std::str::FromStr;

use csv::{
    ReaderBuilder,
    StringRecord,
};
use log::{
    debug,
    warn,
};
use thiserror::Error;

use crate::data_structs::typedef::ScoreType;
use crate::data_structs::{
    Enzyme,
    Orientation,
    PegRecord,
};
use crate::io::design::schema::{
    col,
    DESIGN_COL_NAMES,
    DESIGN_FIELD_COUNT,
};

/// Row-level failure while normalizing one raw design line.
///
/// Row errors are contained: callers either surface them per row or drop the
/// offending row. A row is never padded, truncated or partially parsed.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("line {line}: expected {expected} tab-separated fields, got {got}")]
    FieldCount {
        line:     u64,
        expected: usize,
        got:      usize,
    },

    #[error("line {line}: cannot parse numeric field {field}: {value:?}")]
    NumericField {
        line:  u64,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Reader for the raw tab-separated design table.
///
/// Lines are split on tabs into exactly [`DESIGN_FIELD_COUNT`] fields and
/// coerced into [`PegRecord`]s; blank lines are skipped. Output order matches
/// input line order.
pub struct DesignReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> DesignReader<R> {
    pub fn new(sink: R) -> Self {
        debug!("creating design reader");
        let reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(sink);
        Self { reader }
    }

    /// Iterates over normalized records in input order.
    pub fn records(
        &mut self
    ) -> impl Iterator<Item = Result<PegRecord, RowError>> + '_ {
        self.reader.records().filter_map(|raw| {
            match raw {
                Ok(record) if is_blank(&record) => None,
                Ok(record) => {
                    let line = line_of(&record);
                    Some(parse_record(&record, line))
                },
                Err(source) => {
                    let line = source
                        .position()
                        .map(|p| p.line())
                        .unwrap_or_default();
                    Some(Err(RowError::Csv { line, source }))
                },
            }
        })
    }

    /// Normalizes the whole input, dropping rows that fail with a warning.
    ///
    /// This is the "coerce then drop unparsable" policy: malformed rows and
    /// integer coercion failures (`PBS_len`, `RT_len`, `sgRNA_rank`) are
    /// excluded from the output, never fatal. Score fields fall back to NaN
    /// instead of dropping the row. Underlying I/O failures still abort the
    /// read.
    pub fn read_lossy(mut self) -> anyhow::Result<Vec<PegRecord>> {
        let mut records = Vec::new();
        for row in self.records() {
            match row {
                Ok(record) => {
                    for field in record.non_dna_fields() {
                        warn!(
                            "record at rank {} has non-ACGT content in {}",
                            record.sgrna_rank(),
                            field
                        );
                    }
                    records.push(record);
                },
                Err(RowError::Csv { line, source }) if source.is_io_error() => {
                    anyhow::bail!("read failed at line {}: {}", line, source);
                },
                Err(error) => {
                    warn!("dropping row: {}", error);
                },
            }
        }
        debug!("normalized {} design records", records.len());
        Ok(records)
    }
}

fn is_blank(record: &StringRecord) -> bool {
    record.len() == 0
        || (record.len() == 1 && record.get(0).unwrap_or("").is_empty())
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or_default()
}

fn field<'a>(
    record: &'a StringRecord,
    idx: usize,
) -> &'a str {
    record.get(idx).unwrap_or("")
}

fn numeric_field<T: FromStr>(
    record: &StringRecord,
    idx: usize,
    line: u64,
) -> Result<T, RowError> {
    let raw = field(record, idx);
    raw.parse().map_err(|_| {
        RowError::NumericField {
            line,
            field: DESIGN_COL_NAMES[idx],
            value: raw.to_string(),
        }
    })
}

/// Lenient score parse. Only the integer fields carry the drop policy; a
/// junk score never touches filtering, so the row is kept with a NaN score.
fn score_field(
    record: &StringRecord,
    idx: usize,
    line: u64,
) -> ScoreType {
    let raw = field(record, idx);
    raw.parse().unwrap_or_else(|_| {
        warn!(
            "line {}: keeping row with non-numeric {} value {:?}",
            line, DESIGN_COL_NAMES[idx], raw
        );
        ScoreType::NAN
    })
}

fn parse_record(
    record: &StringRecord,
    line: u64,
) -> Result<PegRecord, RowError> {
    if record.len() != DESIGN_FIELD_COUNT {
        return Err(RowError::FieldCount {
            line,
            expected: DESIGN_FIELD_COUNT,
            got: record.len(),
        });
    }

    Ok(PegRecord::builder()
        .with_rt_len(numeric_field(record, col::RT_LEN, line)?)
        .with_rt_seq(field(record, col::RT_SEQ).to_string())
        .with_rt_picked(field(record, col::RT_PICKED).to_string())
        .with_pbs_len(numeric_field(record, col::PBS_LEN, line)?)
        .with_pbs_seq(field(record, col::PBS_SEQ).to_string())
        .with_pbs_picked(field(record, col::PBS_PICKED).to_string())
        .with_extension3_seq(field(record, col::EXTENSION3_SEQ).to_string())
        .with_extension3_picked(field(record, col::EXTENSION3_PICKED).to_string())
        .with_extension_f_oligo(field(record, col::EXTENS_F_OLIGO).to_string())
        .with_extension_r_oligo(field(record, col::EXTENS_R_OLIGO).to_string())
        .with_sgrna_seq(field(record, col::SGRNA_SEQ).to_string())
        .with_sgrna_rank(numeric_field(record, col::SGRNA_RANK, line)?)
        .with_sgf_oligo(field(record, col::SGF_OLIGO).to_string())
        .with_sgr_oligo(field(record, col::SGR_OLIGO).to_string())
        .with_sg_orientation(Orientation::from(field(
            record,
            col::SG_ORIENTATION,
        )))
        .with_sg_seed_pam_disrupt(
            field(record, col::SG_SEED_PAM_DISRUPT).to_string(),
        )
        .with_sg_gc_percent(score_field(record, col::SG_GC_PERCENT, line))
        .with_sg_on_target_score(score_field(
            record,
            col::SG_ON_TARGET_SCORE,
            line,
        ))
        .with_enzyme(Enzyme::from(field(record, col::ENZYME)))
        .build())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const VALID_LINE: &str = "13\tGCTTACGATT\tyes\t12\tAGTCAGTCAGTC\tyes\tTTT\t\
                              yes\toF\toR\tGGACGTACGTACGTACGTAC\t1\tsgF\tsgR\t\
                              fwd\tno\t55.2\t0.87\tCas9-NGG";

    #[test]
    fn test_valid_line() {
        let mut reader = DesignReader::new(Cursor::new(VALID_LINE));
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.rt_len(), 13);
        assert_eq!(record.rt_seq(), "GCTTACGATT");
        assert_eq!(record.pbs_len(), 12);
        assert_eq!(record.sgrna_rank(), 1);
        assert_eq!(record.sg_gc_percent(), 55.2);
        assert_eq!(record.sg_on_target_score(), 0.87);
        assert_eq!(*record.enzyme(), Enzyme::Cas9Ngg);
    }

    #[test]
    fn test_field_count_mismatch() {
        let mut reader = DesignReader::new(Cursor::new("a\tb\tc"));
        let err = reader.records().next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            RowError::FieldCount {
                expected: DESIGN_FIELD_COUNT,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_numeric_coercion_failure_dropped() {
        let bad = VALID_LINE.replacen("13\t", "thirteen\t", 1);
        let input = format!("{}\n{}\n", bad, VALID_LINE);
        let records = DesignReader::new(Cursor::new(input))
            .read_lossy()
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rt_len(), 13);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let input = format!("\n{}\n\n{}\n", VALID_LINE, VALID_LINE);
        let records = DesignReader::new(Cursor::new(input))
            .read_lossy()
            .unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_order_preserved() {
        let second = VALID_LINE.replacen("\t1\tsgF", "\t2\tsgF", 1);
        let input = format!("{}\n{}\n", VALID_LINE, second);
        let records = DesignReader::new(Cursor::new(input))
            .read_lossy()
            .unwrap();
        let ranks: Vec<_> = records.iter().map(|r| r.sgrna_rank()).collect();
        assert_eq!(ranks, vec![1, 2]);
    }
}
