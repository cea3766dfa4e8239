use std::fs::File;
use std::io::{
    Cursor,
    Write,
};

use pegforge::prelude::*;
use rstest::rstest;

mod common;
use common::{
    demo_record,
    design_line,
};

#[test]
fn test_normalizer_matches_split_positions() -> anyhow::Result<()> {
    let input = design_line(12, 13, 1);
    let records = DesignReader::new(Cursor::new(input)).read_lossy()?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0], demo_record(12, 13, 1));
    Ok(())
}

#[rstest]
#[case::bad_pbs_len("12", "twelve")]
#[case::bad_rt_len("13", "NaN-ish")]
fn test_non_numeric_row_is_absent(
    #[case] good: &str,
    #[case] bad: &str,
) -> anyhow::Result<()> {
    let valid = design_line(12, 13, 1);
    let broken = valid.replacen(good, bad, 1);
    let input = format!("{}\n{}\n", broken, valid);

    let records = DesignReader::new(Cursor::new(input)).read_lossy()?;
    assert_eq!(records.len(), 1);
    Ok(())
}

#[test]
fn test_non_numeric_rank_is_absent() -> anyhow::Result<()> {
    let valid = design_line(12, 13, 1);
    let broken = valid.replace("\t1\tsgF", "\tfirst\tsgF");
    let input = format!("{}\n{}\n", broken, valid);

    let records = DesignReader::new(Cursor::new(input)).read_lossy()?;
    assert_eq!(records.len(), 1);
    Ok(())
}

#[test]
fn test_non_numeric_score_keeps_row() -> anyhow::Result<()> {
    // Scores never feed the filter, so a junk cell falls back to NaN
    // instead of extending the drop policy to a fourth column.
    let input = design_line(12, 13, 1).replace("\t55.2\t", "\tNA\t");
    let records = DesignReader::new(Cursor::new(input)).read_lossy()?;

    assert_eq!(records.len(), 1);
    assert!(records[0].sg_gc_percent().is_nan());
    assert_eq!(records[0].sg_on_target_score(), 0.87);
    assert!(FilterCriteria::for_rank(1).matches(&records[0]));
    Ok(())
}

#[test]
fn test_orientation_cell_round_trips() -> anyhow::Result<()> {
    let input = design_line(12, 13, 1).replace("\tfwd\t", "\tantisense\t");
    let records = DesignReader::new(Cursor::new(input)).read_lossy()?;
    assert_eq!(
        *records[0].sg_orientation(),
        Orientation::Other("antisense".to_string())
    );

    let mut buffer = Vec::new();
    let mut writer = DesignWriter::new(&mut buffer);
    writer.write_record(&records[0])?;
    writer.finish()?;
    let text = String::from_utf8(buffer)?;
    assert!(text.lines().nth(1).unwrap().contains(",antisense,"));
    Ok(())
}

#[test]
fn test_short_row_is_reported_not_reshaped() {
    let mut reader = DesignReader::new(Cursor::new("only\tthree\tfields"));
    let row = reader.records().next().unwrap();
    match row {
        Err(RowError::FieldCount { expected, got, .. }) => {
            assert_eq!(expected, DESIGN_FIELD_COUNT);
            assert_eq!(got, 3);
        },
        Err(other) => panic!("unexpected error kind: {}", other),
        Ok(_) => panic!("short row should not parse"),
    }
}

#[test]
fn test_blank_lines_between_records() -> anyhow::Result<()> {
    let input = format!(
        "\n{}\n\n\n{}\n\n",
        design_line(12, 13, 1),
        design_line(13, 14, 2)
    );
    let records = DesignReader::new(Cursor::new(input)).read_lossy()?;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].sgrna_rank(), 1);
    assert_eq!(records[1].sgrna_rank(), 2);
    Ok(())
}

#[test]
fn test_file_round_trip() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("converted.csv");

    let records = vec![demo_record(12, 13, 1), demo_record(13, 15, 2)];
    let mut writer = DesignWriter::new(File::create(&path)?);
    writer.write_all(&records)?;
    writer.finish()?;

    let text = std::fs::read_to_string(&path)?;
    let mut lines = text.lines();
    let header = lines.next().unwrap();
    assert_eq!(
        header.split(',').collect::<Vec<_>>(),
        DESIGN_COL_NAMES.to_vec()
    );
    assert_eq!(lines.count(), records.len());
    Ok(())
}

#[test]
fn test_linker_annotated_table() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("with_linkers.csv");

    let records = vec![
        demo_record(12, 13, 1)
            .with_linker(LinkerStatus::Assigned("AAGCTT".to_string())),
        demo_record(13, 15, 1).with_linker(LinkerStatus::Failed),
    ];
    let mut writer = DesignWriter::new(File::create(&path)?).include_linker(true);
    writer.write_all(&records)?;
    writer.finish()?;

    let text = std::fs::read_to_string(&path)?;
    let lines: Vec<_> = text.lines().collect();
    assert!(lines[0].ends_with(&format!(",{}", LINKER_COL_NAME)));
    assert!(lines[1].ends_with(",AAGCTT"));
    assert!(lines[2].ends_with(','));
    Ok(())
}

#[test]
fn test_empty_input_writes_header_only() -> anyhow::Result<()> {
    let mut buffer = Vec::new();
    buffer.write_all(b"")?;
    DesignWriter::new(&mut buffer).finish()?;
    let text = String::from_utf8(buffer)?;
    assert_eq!(text.lines().count(), 1);
    Ok(())
}
