pub mod charts;
pub mod json;
pub mod plot;
pub mod table;
pub mod text;

pub const TABLE_FILE: &str = "maxdiff_simplecount_results.csv";
pub const CI_CHART_FILE: &str = "maxdiff_simplecount_ci.png";
pub const BAR_CHART_FILE: &str = "maxdiff_scaled_bar.png";
pub const SUMMARY_FILE: &str = "summary.json";

pub fn round3(v: f64) -> f64 {
    let r = (v * 1000.0).round() / 1000.0;
    // Avoid printing "-0.000".
    if r == 0.0 { 0.0 } else { r }
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", round3(v))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
