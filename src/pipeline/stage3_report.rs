use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MaxDiffError;
use crate::model::params::{ReportParams, SimulationParams};
use crate::pipeline::stage2_score::ScoreOutput;
use crate::report::charts::{build_bar, build_lollipop};
use crate::report::json::{OutputFiles, RunSummary, render_summary_json};
use crate::report::plot::{render_bar_png, render_lollipop_png};
use crate::report::table::{build_table, write_csv};
use crate::report::text::render_console_table;
use crate::report::{BAR_CHART_FILE, CI_CHART_FILE, SUMMARY_FILE, TABLE_FILE};

#[derive(Debug, Clone)]
pub struct Stage3Input<'a> {
    pub scored: &'a ScoreOutput,
    pub simulation: &'a SimulationParams,
    pub latent_weights: bool,
    pub n_records: usize,
    pub n_items_catalog: usize,
    pub tool_name: String,
    pub tool_version: String,
}

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub console_table: String,
    pub table_path: PathBuf,
    pub ci_chart_path: Option<PathBuf>,
    pub bar_chart_path: Option<PathBuf>,
    pub summary_path: PathBuf,
}

pub fn write_reports(
    input: &Stage3Input<'_>,
    params: &ReportParams,
) -> Result<Stage3Output, MaxDiffError> {
    fs::create_dir_all(&params.out_dir)?;

    let rows = build_table(&input.scored.scores);
    let table_path = params.out_dir.join(TABLE_FILE);
    write_csv(&rows, &table_path)?;

    let (ci_chart_path, bar_chart_path) = if params.render_plots {
        let ci_path = params.out_dir.join(CI_CHART_FILE);
        render_lollipop_png(&build_lollipop(&input.scored.scores), &ci_path)?;
        let bar_path = params.out_dir.join(BAR_CHART_FILE);
        render_bar_png(&build_bar(&input.scored.scores), &bar_path)?;
        (Some(ci_path), Some(bar_path))
    } else {
        (None, None)
    };

    let summary = RunSummary {
        tool: input.tool_name.clone(),
        version: input.tool_version.clone(),
        params: input.simulation.clone(),
        latent_weights: input.latent_weights,
        n_records: input.n_records,
        n_items_catalog: input.n_items_catalog,
        n_items_scored: input.scored.scores.len(),
        warnings: input.scored.warnings.iter().map(|w| w.to_string()).collect(),
        outputs: OutputFiles {
            table: file_name(&table_path),
            ci_chart: ci_chart_path.as_deref().map(file_name),
            bar_chart: bar_chart_path.as_deref().map(file_name),
        },
    };
    let summary_path = params.out_dir.join(SUMMARY_FILE);
    fs::write(&summary_path, render_summary_json(&summary)?)?;

    Ok(Stage3Output {
        console_table: render_console_table(&rows),
        table_path,
        ci_chart_path,
        bar_chart_path,
        summary_path,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
