//! Execution time against data size

use super::bars::{draw_legend, Panel};
use super::canvas::{fixed_bound, grid_style, headroom, titled, Area, Scale};
use super::seconds_label;
use crate::constants::{bounds, fonts, palette};
use crate::data::BenchmarkData;
use crate::error::Result;
use plotters::prelude::*;

#[derive(Clone, Copy)]
enum Marker {
    Circle,
    Square,
}

/// Sequential and parallel times as two marked lines over the data size
pub(crate) fn scalability_panel(
    area: &Area<'_>,
    data: &BenchmarkData,
    panel: &Panel<'_>,
    x_max: f64,
    y_max: f64,
    scale: Scale,
) -> Result<()> {
    let mut builder = ChartBuilder::on(area);
    builder
        .margin(scale.px(8.0))
        .x_label_area_size(scale.px(if panel.compact { 30.0 } else { 40.0 }))
        .y_label_area_size(scale.px(if panel.compact { 36.0 } else { 48.0 }));
    if let Some(caption) = panel.caption {
        builder.caption(caption, scale.font(fonts::SUBTITLE, true));
    }
    let mut chart = builder.build_cartesian_2d(0.0..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .light_line_style(WHITE.mix(0.0))
        .bold_line_style(grid_style())
        .x_label_formatter(&|x| format!("{x:.0}"))
        .y_label_formatter(&|y| format!("{y:.0}"))
        .x_desc(panel.x_desc)
        .y_desc(panel.y_desc)
        .axis_desc_style(scale.font(panel.axis_pt(), !panel.compact))
        .label_style(scale.font(fonts::TICK, false))
        .draw()?;

    let (line_pt, marker_pt) = if panel.compact { (1.0, 3.0) } else { (1.5, 4.5) };
    let sizes = data.sizes_mb();

    for (values, color, marker, label) in [
        (&data.sequential, palette::SEQUENTIAL, Marker::Circle, "Secuencial"),
        (&data.parallel, palette::PARALLEL, Marker::Square, "Paralelo"),
    ] {
        let points: Vec<(f64, f64)> = sizes.iter().copied().zip(values.iter().copied()).collect();
        let line = color.stroke_width(scale.px(line_pt));
        let radius = scale.px(marker_pt) as i32;

        chart
            .draw_series(LineSeries::new(points.clone(), line))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 4 * radius, y)], line));

        match marker {
            Marker::Circle => {
                chart.draw_series(
                    points
                        .iter()
                        .map(|p| Circle::new(*p, radius, color.filled())),
                )?;
            }
            Marker::Square => {
                chart.draw_series(points.iter().map(|p| {
                    EmptyElement::at(*p)
                        + Rectangle::new([(-radius, -radius), (radius, radius)], color.filled())
                }))?;
            }
        }
    }

    if !panel.compact {
        let gap = scale.px(6.0) as i32;
        let above = scale.annotation(fonts::TICK);
        let below = scale.annotation_below(fonts::TICK);
        chart.draw_series(sizes.iter().zip(&data.sequential).map(|(x, y)| {
            EmptyElement::at((*x, *y)) + Text::new(seconds_label(*y), (0, -gap), above.clone())
        }))?;
        chart.draw_series(sizes.iter().zip(&data.parallel).map(|(x, y)| {
            EmptyElement::at((*x, *y)) + Text::new(seconds_label(*y), (0, gap), below.clone())
        }))?;
    }

    draw_legend(&mut chart, SeriesLabelPosition::UpperLeft, scale)
}

/// Chart 4: scalability of both execution modes
pub(crate) fn scalability(area: &Area<'_>, data: &BenchmarkData, scale: Scale) -> Result<()> {
    let body = titled(
        area,
        &["Escalabilidad: Tiempo vs Tamaño de Datos"],
        scale.font(fonts::TITLE, true),
    )?;
    let panel = Panel::full(
        "Tamaño total de datos (MB)",
        "Tiempo de ejecución (segundos)",
    );
    let x_max = fixed_bound(bounds::SIZE_MAX, &data.sizes_mb());
    let y_max = fixed_bound(bounds::TIME_MAX, &data.sequential);
    scalability_panel(&body, data, &panel, x_max, y_max, scale)
}

/// Bounds used by the dashboard's miniature, fitted to the data
pub(crate) fn fitted_bounds(data: &BenchmarkData) -> (f64, f64) {
    (
        headroom(&data.sizes_mb(), 1.05),
        headroom(&data.sequential, 1.1),
    )
}
