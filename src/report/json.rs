use serde::Serialize;

use crate::model::params::SimulationParams;

#[derive(Debug, Clone, Serialize)]
pub struct OutputFiles {
    pub table: String,
    pub ci_chart: Option<String>,
    pub bar_chart: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool: String,
    pub version: String,
    pub params: SimulationParams,
    pub latent_weights: bool,
    pub n_records: usize,
    pub n_items_catalog: usize,
    pub n_items_scored: usize,
    pub warnings: Vec<String>,
    pub outputs: OutputFiles,
}

pub fn render_summary_json(summary: &RunSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}
