use std::fs::File;
use std::path::{
    Path,
    PathBuf,
};

use anyhow::{
    anyhow,
    bail,
};
use chrono::Utc;
use clap::Args;
use console::style;
use indicatif::{
    ProgressBar,
    ProgressStyle,
};
use log::LevelFilter;
use pegforge::prelude::*;

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Verbosity (-v info, -vv debug)"
    )]
    verbose: u8,

    #[arg(
        long,
        default_value_t = 0,
        help = "Worker threads for parallel linker design (0 = all cores)"
    )]
    threads: usize,

    #[arg(long, default_value_t = false, help = "Hide progress bars")]
    no_progress: bool,
}

impl UtilsArgs {
    pub fn setup(&self) -> anyhow::Result<()> {
        let level = match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        };
        pretty_env_logger::formatted_builder()
            .filter_level(level)
            .try_init()
            .ok();

        rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build_global()
            .map_err(|e| anyhow!("failed to initialize thread pool: {}", e))?;
        Ok(())
    }

    pub fn progress(
        &self,
        total: usize,
    ) -> anyhow::Result<ProgressBar> {
        if self.no_progress {
            return Ok(ProgressBar::hidden());
        }
        init_progress(total)
    }
}

pub(crate) fn init_progress(total: usize) -> anyhow::Result<ProgressBar> {
    let progress_bar = ProgressBar::new(total as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}, ETA: {eta}] [{bar:40.cyan/blue}] {pos:>5.green}/{len:5} {msg}")?
            .progress_chars("#>-"),
    );
    progress_bar.set_message("Designing linkers...");
    Ok(progress_bar)
}

pub(crate) fn validate_input(path: &Path) -> anyhow::Result<&Path> {
    if !path.exists() {
        bail!("Path {} does not exist.", style(path.display()).red());
    }
    if !path.is_file() {
        bail!("Path {} is not a file.", style(path.display()).red());
    }
    Ok(path)
}

/// `out/<UTC timestamp>_<base>`, matching the original workflow's artifact
/// naming.
pub(crate) fn timestamped(
    out_dir: &Path,
    base: &str,
) -> PathBuf {
    let stamp = Utc::now().format("%Y%m%d_%H%M");
    out_dir.join(format!("{}_{}", stamp, base))
}

pub(crate) fn write_design(
    path: &Path,
    records: &[PegRecord],
    with_linker: bool,
) -> anyhow::Result<()> {
    let mut writer =
        DesignWriter::new(File::create(path)?).include_linker(with_linker);
    writer.write_all(records)?;
    writer.finish()?;
    log::info!("wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

pub(crate) fn print_analysis(reports: &[RankReport]) {
    println!();
    println!("{}", "=".repeat(50));
    println!("{}", style("pegRNA Design Combinations Analysis").bold());
    println!("{}", "=".repeat(50));

    for report in reports {
        println!();
        println!("Rank {} sgRNAs:", style(report.rank).cyan());
        println!("{}", "-".repeat(20));
        println!("Total candidates: {}", style(report.total).green());
        println!();
        println!("PBS_len x RT_len combinations:");
        if report.combinations.is_empty() {
            println!("{}", style("No combinations found").yellow());
        }
        else {
            print!("{}", report.combinations);
        }
        println!("{}", "-".repeat(50));
    }
}
