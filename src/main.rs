mod error;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::{debug, info, warn};

use crate::error::MaxDiffError;
use crate::model::item::Catalog;
use crate::model::params::{ReportParams, SimulationParams};
use crate::pipeline::stage1_simulate::run_stage1;
use crate::pipeline::stage2_score::score;
use crate::pipeline::stage3_report::{Stage3Input, write_reports};

/// MaxDiff simple-count scores with approximate 95% CI visuals (retail example).
#[derive(Debug, Parser)]
#[command(name = "maxdiff-simplecount", version)]
struct Cli {
    /// Directory to write outputs (CSV, PNGs, summary.json).
    #[arg(long, default_value = "./outputs")]
    out_dir: PathBuf,

    /// Number of respondents to simulate.
    #[arg(long, default_value_t = 20)]
    respondents: u32,

    /// Number of MaxDiff sets per respondent.
    #[arg(long, default_value_t = 5)]
    sets_per_respondent: u32,

    /// Number of items shown per set.
    #[arg(long, default_value_t = 4)]
    items_per_set: usize,

    /// Seed for the simulation RNG.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Use the built-in latent attractiveness profile instead of uniform choices.
    #[arg(long)]
    latent_weights: bool,

    /// Skip PNG chart rendering.
    #[arg(long)]
    no_plots: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn simulation_params(&self) -> SimulationParams {
        SimulationParams {
            respondents: self.respondents,
            sets_per_respondent: self.sets_per_respondent,
            items_per_set: self.items_per_set,
            seed: self.seed,
        }
    }

    fn report_params(&self) -> ReportParams {
        ReportParams {
            out_dir: self.out_dir.clone(),
            render_plots: !self.no_plots,
        }
    }

    fn catalog(&self) -> Catalog {
        if self.latent_weights {
            Catalog::retail_latent_v1()
        } else {
            Catalog::retail_v1()
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), MaxDiffError> {
    let started = Instant::now();
    let catalog = cli.catalog();
    let simulation = cli.simulation_params();

    let stage1 = run_stage1(&simulation, &catalog)?;
    info!(
        records = stage1.records.len(),
        respondents = simulation.respondents,
        items_per_set = simulation.items_per_set,
        seed = simulation.seed,
        latent = !catalog.is_uniform(),
        "simulated choice records"
    );

    let scored = score(&stage1.records, &catalog)?;
    for warning in &scored.warnings {
        warn!("{warning}");
    }
    info!(
        items = scored.scores.len(),
        warnings = scored.warnings.len(),
        "scored items"
    );
    if let Some(top) = scored.scores.first() {
        debug!(item = %top.label, score = top.score, "top item");
    }

    let input = Stage3Input {
        scored: &scored,
        simulation: &simulation,
        latent_weights: cli.latent_weights,
        n_records: stage1.records.len(),
        n_items_catalog: catalog.len(),
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let report_params = cli.report_params();
    let out = write_reports(&input, &report_params)?;
    info!(
        out_dir = %report_params.out_dir.display(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "wrote reports"
    );

    println!("\n=== MaxDiff Simple-Count Results ===");
    print!("{}", out.console_table);
    println!("\nSaved CSV:     {}", out.table_path.display());
    if let Some(path) = &out.ci_chart_path {
        println!("Saved plot:    {}", path.display());
    }
    if let Some(path) = &out.bar_chart_path {
        println!("Saved plot:    {}", path.display());
    }
    println!("Saved summary: {}", out.summary_path.display());

    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
