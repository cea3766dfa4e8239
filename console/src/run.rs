use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

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
pub(crate) struct RunArgs {
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
        long,
        default_value = "peglit",
        help = "External linker design command."
    )]
    peglit_cmd: String,

    #[arg(
        long,
        default_value_t = 120,
        help = "Per-candidate oracle timeout in seconds."
    )]
    oracle_timeout: u64,

    #[arg(long, help = "Override the SpCas9 scaffold sequence.")]
    scaffold: Option<String>,

    #[arg(
        short,
        long,
        num_args = 1..,
        value_delimiter = ',',
        default_values_t = vec![1u32, 2],
        help = "sgRNA ranks to keep."
    )]
    ranks: Vec<u32>,

    #[arg(
        long,
        default_value_t = false,
        help = "Design linkers in parallel on the rayon pool."
    )]
    parallel: bool,
}

impl PipelineCommand for RunArgs {
    fn run(
        &self,
        utils: &UtilsArgs,
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

        let scaffold = self
            .scaffold
            .clone()
            .unwrap_or_else(|| SPCAS9_SCAFFOLD.to_string());
        let oracle = PegLitProcess::new(self.peglit_cmd.clone())
            .with_timeout(Duration::from_secs(self.oracle_timeout));
        let pipeline =
            DesignPipeline::new(LinkerOrchestrator::new(oracle, scaffold))
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

        let annotated = if self.parallel {
            pipeline.orchestrator().assign_parallel(prepared.combined)
        }
        else {
            let pbar = utils.progress(prepared.combined.len())?;
            let annotated = prepared
                .combined
                .into_iter()
                .map(|record| {
                    let designed = pipeline.orchestrator().design(record);
                    pbar.inc(1);
                    designed
                })
                .collect();
            pbar.finish_and_clear();
            annotated
        };

        write_design(
            &timestamped(&self.out_dir, "pegRNAs_with_linkers.csv"),
            &annotated,
            true,
        )?;

        let failures = annotated
            .iter()
            .filter(|r| r.linker() == Some(&LinkerStatus::Failed))
            .count();
        if failures > 0 {
            eprintln!(
                "{} of {} linker designs failed; see the log for details",
                failures,
                annotated.len()
            );
        }
        Ok(())
    }
}
