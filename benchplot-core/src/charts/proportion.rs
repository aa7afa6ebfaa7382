//! Side-by-side pie charts of the per-stage time breakdown

use super::canvas::{titled, Area, Scale};
use crate::constants::{fonts, palette};
use crate::data::BenchmarkData;
use crate::error::Result;
use crate::metrics::DerivedMetrics;
use plotters::element::Pie;
use plotters::prelude::*;

/// Slice label: stage name followed by its rounded share
pub(crate) fn slice_labels(stages: &[String], shares: &[f64]) -> Vec<String> {
    stages
        .iter()
        .zip(shares)
        .map(|(stage, share)| format!("{stage} {share:.0}%"))
        .collect()
}

/// `Secuencial (122s total)`
pub(crate) fn total_title(mode: &str, total: f64) -> String {
    format!("{mode} ({total:.0}s total)")
}

fn pie(
    area: &Area<'_>,
    title: &str,
    values: &[f64],
    labels: &[String],
    colors: &[RGBColor],
    scale: Scale,
) -> Result<()> {
    let body = titled(area, &[title], scale.font(fonts::SUBTITLE, true))?;
    draw_slices(&body, values, labels, colors, scale)
}

/// Slice order for a clockwise pie that should read counter-clockwise
///
/// The first stage ends at the start angle and later stages follow it
/// counter-clockwise.
pub(crate) fn counter_clockwise<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    (0..n).rev().map(|i| items[i % items.len()].clone()).collect()
}

/// Pie centered in `body`, first slice starting at 12 o'clock
fn draw_slices(
    body: &Area<'_>,
    values: &[f64],
    labels: &[String],
    colors: &[RGBColor],
    scale: Scale,
) -> Result<()> {
    // Pie draws at absolute backend coordinates
    let (width, height) = body.dim_in_pixel();
    let (x0, y0) = body.get_base_pixel();
    let center = (x0 + (width / 2) as i32, y0 + (height / 2) as i32);
    let radius = f64::from(width.min(height)) * 0.32;

    let n = values.len();
    let values = counter_clockwise(values, n);
    let colors = counter_clockwise(colors, n);
    let labels = counter_clockwise(labels, n);

    let mut slices = Pie::new(&center, &radius, &values, &colors, &labels);
    slices.start_angle(-90.0);
    slices.label_style(scale.font(fonts::TICK, false).color(&BLACK));
    slices.label_offset(scale.pt(10.0));
    body.draw(&slices)?;
    Ok(())
}

/// Chart 6: stage proportions of the largest dataset, sequential vs parallel
pub(crate) fn distribution(
    area: &Area<'_>,
    data: &BenchmarkData,
    metrics: &DerivedMetrics,
    scale: Scale,
) -> Result<()> {
    let breakdown = &data.breakdown;
    let suptitle = format!("Distribución del Tiempo por Proceso (Set {})", breakdown.dataset);
    let body = titled(area, &[suptitle.as_str()], scale.font(fonts::SUPTITLE, true))?;
    let halves = body.split_evenly((1, 2));

    pie(
        &halves[0],
        &total_title("Secuencial", breakdown.sequential_total()),
        &breakdown.sequential,
        &slice_labels(&breakdown.stages, &metrics.sequential_shares),
        &palette::SEQUENTIAL_STAGES,
        scale,
    )?;
    pie(
        &halves[1],
        &total_title("Paralelo", breakdown.parallel_total()),
        &breakdown.parallel,
        &slice_labels(&breakdown.stages, &metrics.parallel_shares),
        &palette::PARALLEL_STAGES,
        scale,
    )
}
