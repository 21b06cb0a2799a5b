use crate::report::format_f64_3;
use crate::report::table::{TABLE_HEADER, TableRow};

pub fn render_console_table(rows: &[TableRow]) -> String {
    let body: Vec<[String; 10]> = rows
        .iter()
        .map(|r| {
            [
                r.rank.to_string(),
                r.item.clone(),
                r.best.to_string(),
                r.worst.to_string(),
                r.shown.to_string(),
                format_f64_3(r.score),
                format_f64_3(r.ci_low),
                format_f64_3(r.ci_high),
                format_f64_3(r.se),
                format_f64_3(r.utility),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADER.map(|h| h.chars().count());
    for cells in &body {
        for (w, c) in widths.iter_mut().zip(cells) {
            *w = (*w).max(c.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &TABLE_HEADER.map(String::from), &widths);
    for cells in &body {
        push_line(&mut out, cells, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 10], widths: &[usize; 10]) {
    let mut parts = Vec::with_capacity(cells.len());
    for (i, (cell, w)) in cells.iter().zip(widths.iter().copied()).enumerate() {
        if i == 1 {
            parts.push(format!("{cell:<w$}"));
        } else {
            parts.push(format!("{cell:>w$}"));
        }
    }
    out.push_str(parts.join("  ").trim_end());
    out.push('\n');
}
