use std::io::Write;

use csv::WriterBuilder;
use log::debug;

use crate::data_structs::PegRecord;
use crate::io::design::schema::{
    DESIGN_COL_NAMES,
    LINKER_COL_NAME,
};

/// CSV writer for converted, sorted and linker-annotated candidate tables.
///
/// Emits a header row with the schema column names; when the linker column is
/// included, records without an assigned linker render an empty cell.
pub struct DesignWriter<W: Write> {
    writer:       csv::Writer<W>,
    with_linker:  bool,
    wrote_header: bool,
}

impl<W: Write> DesignWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = WriterBuilder::new().from_writer(sink);
        Self {
            writer,
            with_linker: false,
            wrote_header: false,
        }
    }

    /// Appends the linker column to the emitted table.
    pub fn include_linker(
        mut self,
        yes: bool,
    ) -> Self {
        self.with_linker = yes;
        self
    }

    fn ensure_header(&mut self) -> anyhow::Result<()> {
        if self.wrote_header {
            return Ok(());
        }
        let mut header: Vec<&str> = DESIGN_COL_NAMES.to_vec();
        if self.with_linker {
            header.push(LINKER_COL_NAME);
        }
        self.writer.write_record(&header)?;
        self.wrote_header = true;
        Ok(())
    }

    pub fn write_record(
        &mut self,
        record: &PegRecord,
    ) -> anyhow::Result<()> {
        self.ensure_header()?;
        self.writer.write_record(record_fields(record, self.with_linker))?;
        Ok(())
    }

    pub fn write_all<'a, I>(
        &mut self,
        records: I,
    ) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = &'a PegRecord>, {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Flushes the writer. An empty table still gets its header row.
    pub fn finish(mut self) -> anyhow::Result<()> {
        self.ensure_header()?;
        self.writer.flush()?;
        debug!("design table written");
        Ok(())
    }
}

fn record_fields(
    record: &PegRecord,
    with_linker: bool,
) -> Vec<String> {
    let mut fields = vec![
        record.rt_len().to_string(),
        record.rt_seq().clone(),
        record.rt_picked().clone(),
        record.pbs_len().to_string(),
        record.pbs_seq().clone(),
        record.pbs_picked().clone(),
        record.extension3_seq().clone(),
        record.extension3_picked().clone(),
        record.extension_f_oligo().clone(),
        record.extension_r_oligo().clone(),
        record.sgrna_seq().clone(),
        record.sgrna_rank().to_string(),
        record.sgf_oligo().clone(),
        record.sgr_oligo().clone(),
        record.sg_orientation().to_string(),
        record.sg_seed_pam_disrupt().clone(),
        record.sg_gc_percent().to_string(),
        record.sg_on_target_score().to_string(),
        record.enzyme().to_string(),
    ];
    if with_linker {
        fields.push(
            record
                .linker()
                .map(|status| status.as_cell().to_string())
                .unwrap_or_default(),
        );
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structs::tests::demo_record;
    use crate::data_structs::LinkerStatus;

    #[test]
    fn test_header_only_for_empty_set() {
        let mut buffer = Vec::new();
        DesignWriter::new(&mut buffer).finish().unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("RT_len,RT_seq"));
    }

    #[test]
    fn test_linker_column() {
        let assigned = demo_record(12, 14, 1)
            .with_linker(LinkerStatus::Assigned("AAGCTT".to_string()));
        let failed = demo_record(13, 14, 1).with_linker(LinkerStatus::Failed);

        let mut buffer = Vec::new();
        let mut writer = DesignWriter::new(&mut buffer).include_linker(true);
        writer.write_all([&assigned, &failed]).unwrap();
        writer.finish().unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert!(lines[0].ends_with(",linker"));
        assert!(lines[1].ends_with(",AAGCTT"));
        assert!(lines[2].ends_with(","));
    }

    #[test]
    fn test_round_trip_through_reader_schema() {
        let record = demo_record(12, 14, 1);
        let mut buffer = Vec::new();
        let mut writer = DesignWriter::new(&mut buffer);
        writer.write_record(&record).unwrap();
        writer.finish().unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let row = text.lines().nth(1).unwrap();
        let fields: Vec<_> = row.split(',').collect();
        assert_eq!(fields.len(), DESIGN_COL_NAMES.len());
        assert_eq!(fields[0], "14"); // RT_len leads the schema
        assert_eq!(fields[3], "12");
        assert_eq!(fields[18], "Cas9-NGG");
    }
}
