use serde::Serialize;

use crate::model::scores::ItemScore;

pub const UTILITY_RANGE: (f64, f64) = (0.0, 100.0);

const X_PAD_FRACTION: f64 = 0.10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LollipopPoint {
    pub label: String,
    // rank 1 gets the highest slot
    pub y: usize,
    pub score: f64,
    pub ci_low: f64,
    pub ci_high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LollipopSeries {
    pub title: String,
    pub x_label: String,
    pub baseline: f64,
    pub x_range: (f64, f64),
    pub points: Vec<LollipopPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPoint {
    pub label: String,
    pub y: usize,
    pub utility: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub title: String,
    pub x_label: String,
    pub x_range: (f64, f64),
    pub bars: Vec<BarPoint>,
}

pub fn build_lollipop(scores: &[ItemScore]) -> LollipopSeries {
    let n = scores.len();
    let points = scores
        .iter()
        .enumerate()
        .map(|(i, s)| LollipopPoint {
            label: s.label.clone(),
            y: n - 1 - i,
            score: s.score,
            ci_low: s.ci_low,
            ci_high: s.ci_high,
        })
        .collect::<Vec<_>>();

    let (mut lo, mut hi) = (0.0f64, 0.0f64);
    for p in &points {
        lo = lo.min(p.ci_low).min(p.score);
        hi = hi.max(p.ci_high).max(p.score);
    }
    let mut pad = X_PAD_FRACTION * (hi - lo);
    if pad <= 0.0 {
        pad = 0.1;
    }

    LollipopSeries {
        title: "MaxDiff Simple-Count Scores With Approx. 95% CI".to_string(),
        x_label: "Preference Score (Most - Least) / Shown".to_string(),
        baseline: 0.0,
        x_range: (lo - pad, hi + pad),
        points,
    }
}

pub fn build_bar(scores: &[ItemScore]) -> BarSeries {
    let n = scores.len();
    BarSeries {
        title: "MaxDiff Executive View (Scaled Utilities From Simple Count)".to_string(),
        x_label: "Scaled Preference (0-100)".to_string(),
        x_range: UTILITY_RANGE,
        bars: scores
            .iter()
            .enumerate()
            .map(|(i, s)| BarPoint {
                label: s.label.clone(),
                y: n - 1 - i,
                utility: s.utility,
            })
            .collect(),
    }
}

pub fn slot_label(labels_by_slot: &[String], y: f64) -> String {
    let slot = y.round();
    if (y - slot).abs() > 1e-6 || slot < 0.0 {
        return String::new();
    }
    labels_by_slot
        .get(slot as usize)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/charts.rs"]
mod tests;
