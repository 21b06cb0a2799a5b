use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::error::MaxDiffError;
use crate::report::charts::{BarSeries, LollipopSeries, slot_label};

const CANVAS: (u32, u32) = (1800, 1000);
const BAR_HALF_HEIGHT: f64 = 0.35;

pub fn render_lollipop_png(series: &LollipopSeries, out_path: &Path) -> Result<(), MaxDiffError> {
    draw_lollipop(series, out_path).map_err(|e| MaxDiffError::Render(e.to_string()))
}

pub fn render_bar_png(series: &BarSeries, out_path: &Path) -> Result<(), MaxDiffError> {
    draw_bar(series, out_path).map_err(|e| MaxDiffError::Render(e.to_string()))
}

fn labels_by_slot<'a>(slots: impl Iterator<Item = (usize, &'a str)>, n: usize) -> Vec<String> {
    let mut labels = vec![String::new(); n];
    for (y, label) in slots {
        if let Some(slot) = labels.get_mut(y) {
            *slot = label.to_string();
        }
    }
    labels
}

fn draw_lollipop(series: &LollipopSeries, out_path: &Path) -> Result<(), Box<dyn Error>> {
    let n = series.points.len();
    let labels = labels_by_slot(
        series.points.iter().map(|p| (p.y, p.label.as_str())),
        n,
    );
    let y_fmt = |y: &f64| slot_label(&labels, *y);
    let (x_lo, x_hi) = series.x_range;

    let root = BitMapBackend::new(out_path, CANVAS).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(&series.title, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(260)
        .build_cartesian_2d(x_lo..x_hi, -0.5f64..(n as f64 - 0.5))?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc(series.x_label.as_str())
        .y_labels(n.max(1))
        .y_label_formatter(&y_fmt)
        .draw()?;

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(series.baseline, -0.5), (series.baseline, n as f64 - 0.5)],
        BLACK.mix(0.5),
    )))?;

    for p in &series.points {
        let y = p.y as f64;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(series.baseline, y), (p.score, y)],
            BLACK.mix(0.7),
        )))?;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(p.ci_low, y), (p.ci_high, y)],
            RED.mix(0.6).stroke_width(4),
        )))?;
        chart.draw_series(std::iter::once(Circle::new((p.score, y), 7, BLUE.filled())))?;
    }

    root.present()?;
    Ok(())
}

fn draw_bar(series: &BarSeries, out_path: &Path) -> Result<(), Box<dyn Error>> {
    let n = series.bars.len();
    let labels = labels_by_slot(series.bars.iter().map(|b| (b.y, b.label.as_str())), n);
    let y_fmt = |y: &f64| slot_label(&labels, *y);
    let (x_lo, x_hi) = series.x_range;

    let root = BitMapBackend::new(out_path, CANVAS).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(&series.title, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(260)
        .build_cartesian_2d(x_lo..x_hi, -0.5f64..(n as f64 - 0.5))?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc(series.x_label.as_str())
        .y_labels(n.max(1))
        .y_label_formatter(&y_fmt)
        .draw()?;

    chart.draw_series(series.bars.iter().map(|b| {
        let y = b.y as f64;
        Rectangle::new(
            [(x_lo, y - BAR_HALF_HEIGHT), (b.utility, y + BAR_HALF_HEIGHT)],
            BLUE.mix(0.8).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}
