use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::scores::ItemScore;
use crate::report::{format_f64_3, round3};

pub const TABLE_HEADER: [&str; 10] = [
    "rank", "item", "best", "worst", "shown", "score", "ci_low", "ci_high", "se", "utility",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub rank: usize,
    pub item: String,
    pub best: u32,
    pub worst: u32,
    pub shown: u32,
    pub score: f64,
    pub ci_low: f64,
    pub ci_high: f64,
    pub se: f64,
    pub utility: f64,
}

impl From<&ItemScore> for TableRow {
    fn from(s: &ItemScore) -> Self {
        Self {
            rank: s.rank,
            item: s.label.clone(),
            best: s.best_count,
            worst: s.worst_count,
            shown: s.appearances,
            score: round3(s.score),
            ci_low: round3(s.ci_low),
            ci_high: round3(s.ci_high),
            se: round3(s.se),
            utility: round3(s.utility),
        }
    }
}

pub fn build_table(scores: &[ItemScore]) -> Vec<TableRow> {
    scores.iter().map(TableRow::from).collect()
}

impl TableRow {
    fn cells(&self) -> [String; 10] {
        [
            self.rank.to_string(),
            self.item.clone(),
            self.best.to_string(),
            self.worst.to_string(),
            self.shown.to_string(),
            format_f64_3(self.score),
            format_f64_3(self.ci_low),
            format_f64_3(self.ci_high),
            format_f64_3(self.se),
            format_f64_3(self.utility),
        ]
    }
}

pub fn render_csv(rows: &[TableRow]) -> String {
    let mut out = String::new();
    out.push_str(&TABLE_HEADER.join(","));
    out.push('\n');
    for row in rows {
        let cells = row.cells().map(|c| csv_field(&c));
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

pub fn write_csv(rows: &[TableRow], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(render_csv(rows).as_bytes())?;
    w.flush()
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/table.rs"]
mod tests;
