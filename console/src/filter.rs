use std::fs::File;
use std::path::PathBuf;

use clap::Args;
use log::info;
use pegforge::prelude::*;

use crate::utils::{
    print_analysis,
    timestamped,
    validate_input,
    write_design,
    UtilsArgs,
};
use crate::PipelineCommand;

#[derive(Args, Debug, Clone)]
pub(crate) struct FilterArgs {
    #[arg(help = "Path to the tab-separated design file.")]
    input: PathBuf,

    #[arg(
        short,
        long,
        default_value = "out",
        help = "Directory for the generated CSV tables."
    )]
    out_dir: PathBuf,

    #[arg(
        short,
        long,
        num_args = 1..,
        value_delimiter = ',',
        default_values_t = vec![1u32, 2],
        help = "sgRNA ranks to keep."
    )]
    ranks: Vec<u32>,
}

impl PipelineCommand for FilterArgs {
    fn run(
        &self,
        _utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        validate_input(&self.input)?;
        std::fs::create_dir_all(&self.out_dir)?;

        let records =
            DesignReader::new(File::open(&self.input)?).read_lossy()?;
        info!(
            "normalized {} candidate rows from {}",
            records.len(),
            self.input.display()
        );
        write_design(
            &timestamped(&self.out_dir, "pegRNAs.csv"),
            &records,
            false,
        )?;

        // Only sorting and filtering happen here, so the oracle is a stub
        // that is never invoked.
        let unreachable_oracle =
            |_: &LinkerRequest| -> anyhow::Result<Vec<String>> { Ok(vec![]) };
        let pipeline = DesignPipeline::new(LinkerOrchestrator::new(
            unreachable_oracle,
            SPCAS9_SCAFFOLD,
        ))
        .with_ranks(self.ranks.clone());

        let prepared = pipeline.prepare(records);
        write_design(
            &timestamped(&self.out_dir, "sortedPeg.csv"),
            &prepared.sorted,
            false,
        )?;
        write_design(
            &timestamped(&self.out_dir, "filtered_pegRNAs.csv"),
            &prepared.combined,
            false,
        )?;
        print_analysis(&prepared.reports);
        Ok(())
    }
}
