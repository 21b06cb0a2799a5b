
use super::*;
use crate::model::item::Catalog;
use crate::pipeline::stage1_simulate::run_stage1;
use crate::pipeline::stage2_score::score;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("maxdiff_report_test_{}_{}", std::process::id(), id));
    dir
}

fn scored_run(params: &SimulationParams) -> (ScoreOutput, usize) {
    let catalog = Catalog::retail_v1();
    let records = run_stage1(params, &catalog).unwrap().records;
    (score(&records, &catalog).unwrap(), records.len())
}

fn input<'a>(scored: &'a ScoreOutput, params: &'a SimulationParams, n: usize) -> Stage3Input<'a> {
    Stage3Input {
        scored,
        simulation: params,
        latent_weights: false,
        n_records: n,
        n_items_catalog: 6,
        tool_name: "maxdiff-simplecount".to_string(),
        tool_version: "test".to_string(),
    }
}

#[test]
fn test_writes_table_and_summary_without_plots() {
    let params = SimulationParams::default_v1();
    let (scored, n) = scored_run(&params);
    let out_dir = make_temp_dir().join("nested");
    let report_params = ReportParams {
        out_dir: out_dir.clone(),
        render_plots: false,
    };

    let out = write_reports(&input(&scored, &params, n), &report_params).unwrap();

    assert_eq!(out.table_path, out_dir.join("maxdiff_simplecount_results.csv"));
    assert!(out.ci_chart_path.is_none());
    assert!(out.bar_chart_path.is_none());

    let csv = std::fs::read_to_string(&out.table_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), scored.scores.len() + 1);
    assert!(lines[1].starts_with("1,"));

    let summary = std::fs::read_to_string(&out.summary_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&summary).unwrap();
    assert_eq!(value["n_records"], 100);
    assert_eq!(value["outputs"]["table"], "maxdiff_simplecount_results.csv");
    assert!(value["outputs"]["ci_chart"].is_null());

    assert_eq!(out.console_table.lines().count(), scored.scores.len() + 1);
}

#[test]
fn test_identical_tables_for_same_seed() {
    let params = SimulationParams::default_v1();
    let mut tables = Vec::new();
    for _ in 0..2 {
        let (scored, n) = scored_run(&params);
        let report_params = ReportParams {
            out_dir: make_temp_dir(),
            render_plots: false,
        };
        let out = write_reports(&input(&scored, &params, n), &report_params).unwrap();
        tables.push(std::fs::read(&out.table_path).unwrap());
    }
    assert_eq!(tables[0], tables[1]);
}

#[test]
fn test_unwritable_out_dir_is_io_error() {
    let params = SimulationParams::default_v1();
    let (scored, n) = scored_run(&params);
    let blocker = make_temp_dir();
    std::fs::create_dir_all(blocker.parent().unwrap()).unwrap();
    std::fs::write(&blocker, b"not a directory").unwrap();
    let report_params = ReportParams {
        out_dir: blocker.join("out"),
        render_plots: false,
    };
    let err = write_reports(&input(&scored, &params, n), &report_params).unwrap_err();
    assert!(matches!(err, MaxDiffError::Io(_)));
}

#[test]
fn test_renders_both_charts_as_png() {
    let params = SimulationParams::default_v1();
    let (scored, n) = scored_run(&params);
    let out_dir = make_temp_dir();
    let report_params = ReportParams {
        out_dir: out_dir.clone(),
        render_plots: true,
    };

    let out = write_reports(&input(&scored, &params, n), &report_params).unwrap();

    let ci_path = out.ci_chart_path.expect("ci chart path");
    let bar_path = out.bar_chart_path.expect("bar chart path");
    assert_eq!(ci_path, out_dir.join("maxdiff_simplecount_ci.png"));
    assert_eq!(bar_path, out_dir.join("maxdiff_scaled_bar.png"));
    for path in [&ci_path, &bar_path] {
        let bytes = std::fs::read(path).unwrap();
        assert!(bytes.len() > 8);
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    let summary = std::fs::read_to_string(&out.summary_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&summary).unwrap();
    assert_eq!(value["outputs"]["ci_chart"], "maxdiff_simplecount_ci.png");
    assert_eq!(value["outputs"]["bar_chart"], "maxdiff_scaled_bar.png");
}
