//! Bar charts over dataset categories

use super::canvas::{
    category_label, category_range, fixed_bound, gradient, grid_style, headroom, legend_font, titled, Area,
    Scale,
};
use super::{percent_label, seconds_label, speedup_label, whole_seconds_label};
use crate::constants::{bars, bounds, fonts, palette};
use crate::data::BenchmarkData;
use crate::error::Result;
use crate::metrics::DerivedMetrics;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

type Formatter = fn(f64) -> String;

pub(crate) type CategoryChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Axis text of one chart or dashboard panel
pub(crate) struct Panel<'a> {
    pub caption: Option<&'a str>,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
    pub compact: bool,
}

impl<'a> Panel<'a> {
    /// Stand-alone chart; the title is drawn above the plot area
    pub fn full(x_desc: &'a str, y_desc: &'a str) -> Self {
        Self {
            caption: None,
            x_desc,
            y_desc,
            compact: false,
        }
    }

    /// Dashboard cell with its own caption
    pub fn compact(caption: &'a str, x_desc: &'a str, y_desc: &'a str) -> Self {
        Self {
            caption: Some(caption),
            x_desc,
            y_desc,
            compact: true,
        }
    }

    pub fn axis_pt(&self) -> f64 {
        if self.compact {
            fonts::TICK
        } else {
            fonts::AXIS
        }
    }
}

/// One bar series
pub(crate) struct BarSpec<'a> {
    pub values: &'a [f64],
    /// Cycled over the bars
    pub colors: Vec<RGBColor>,
    pub width: f64,
    /// Horizontal shift from the category center
    pub offset: f64,
    pub edges: bool,
    pub legend: Option<&'a str>,
    /// Value formatter and font size in points
    pub annotation: Option<(Formatter, f64)>,
}

impl<'a> BarSpec<'a> {
    pub fn new(values: &'a [f64], color: RGBColor, width: f64) -> Self {
        Self {
            values,
            colors: vec![color],
            width,
            offset: 0.0,
            edges: false,
            legend: None,
            annotation: None,
        }
    }
}

/// Chart with one category per label and a linear value axis from zero
pub(crate) fn category_chart<'a, 'b>(
    area: &'a Area<'b>,
    labels: &[String],
    y_max: f64,
    panel: &Panel<'_>,
    scale: Scale,
) -> Result<CategoryChart<'a, 'b>> {
    let mut builder = ChartBuilder::on(area);
    builder
        .margin(scale.px(8.0))
        .x_label_area_size(scale.px(if panel.compact { 30.0 } else { 40.0 }))
        .y_label_area_size(scale.px(if panel.compact { 36.0 } else { 48.0 }));
    if let Some(caption) = panel.caption {
        builder.caption(caption, scale.font(fonts::SUBTITLE, true));
    }

    let mut chart = builder.build_cartesian_2d(category_range(labels.len()), 0.0..y_max)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(WHITE.mix(0.0))
        .bold_line_style(grid_style())
        .x_labels(labels.len() + 1)
        .x_label_formatter(&|x| category_label(labels, *x))
        .x_desc(panel.x_desc)
        .y_desc(panel.y_desc)
        .axis_desc_style(scale.font(panel.axis_pt(), !panel.compact))
        .label_style(scale.font(fonts::TICK, false))
        .draw()?;

    Ok(chart)
}

pub(crate) fn draw_bars(chart: &mut CategoryChart<'_, '_>, spec: &BarSpec<'_>, scale: Scale) -> Result<()> {
    let half = spec.width / 2.0;
    let span = |i: usize| {
        let center = i as f64 + spec.offset;
        (center - half, center + half)
    };
    let color_of = |i: usize| spec.colors[i % spec.colors.len()];

    let series = chart.draw_series(spec.values.iter().enumerate().map(|(i, value)| {
        let (left, right) = span(i);
        Rectangle::new([(left, 0.0), (right, *value)], color_of(i).filled())
    }))?;
    if let Some(label) = spec.legend {
        let color = color_of(0);
        let size = scale.px(4.0) as i32;
        series.label(label).legend(move |(x, y)| {
            Rectangle::new([(x, y - size), (x + 3 * size, y + size)], color.filled())
        });
    }

    if spec.edges {
        let edge = BLACK.stroke_width(scale.px(0.6));
        chart.draw_series(spec.values.iter().enumerate().map(|(i, value)| {
            let (left, right) = span(i);
            Rectangle::new([(left, 0.0), (right, *value)], edge)
        }))?;
    }

    if let Some((format, points)) = spec.annotation {
        let style = scale.annotation(points);
        let lift = -(scale.px(3.0) as i32);
        chart.draw_series(spec.values.iter().enumerate().map(|(i, value)| {
            let (left, right) = span(i);
            EmptyElement::at(((left + right) / 2.0, *value))
                + Text::new(format(*value), (0, lift), style.clone())
        }))?;
    }

    Ok(())
}

/// Dashed horizontal reference line across the whole category axis
pub(crate) fn draw_baseline(
    chart: &mut CategoryChart<'_, '_>,
    n: usize,
    y: f64,
    legend: Option<&str>,
    scale: Scale,
) -> Result<()> {
    const DASHES: usize = 48;
    let range = category_range(n);
    let step = (range.end - range.start) / DASHES as f64;
    let style = palette::BASELINE.mix(0.5).stroke_width(scale.px(1.0));

    let series = chart.draw_series((0..DASHES).step_by(2).map(|k| {
        let start = range.start + k as f64 * step;
        PathElement::new(vec![(start, y), (start + step, y)], style)
    }))?;
    if let Some(label) = legend {
        let width = scale.px(12.0) as i32;
        series
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + width, y)], style));
    }
    Ok(())
}

pub(crate) fn draw_legend<'a, 'b: 'a>(
    chart: &mut CategoryChart<'a, 'b>,
    position: SeriesLabelPosition,
    scale: Scale,
) -> Result<()> {
    chart
        .configure_series_labels()
        .position(position)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .label_font(legend_font(scale))
        .draw()?;
    Ok(())
}

/// Sequential and parallel bars side by side within each category
pub(crate) fn grouped_times(
    chart: &mut CategoryChart<'_, '_>,
    data: &BenchmarkData,
    annotation_pt: Option<f64>,
    edges: bool,
    scale: Scale,
) -> Result<()> {
    let width = bars::GROUPED_WIDTH;
    let annotation = annotation_pt.map(|pt| (seconds_label as Formatter, pt));

    for (values, color, offset, legend) in [
        (&data.sequential, palette::SEQUENTIAL, -width / 2.0, "Secuencial"),
        (&data.parallel, palette::PARALLEL, width / 2.0, "Paralelo"),
    ] {
        let spec = BarSpec {
            offset,
            edges,
            legend: Some(legend),
            annotation,
            ..BarSpec::new(values, color, width)
        };
        draw_bars(chart, &spec, scale)?;
    }
    Ok(())
}

/// Chart 1: grouped sequential/parallel execution times
pub(crate) fn time_comparison(area: &Area<'_>, data: &BenchmarkData, scale: Scale) -> Result<()> {
    let subtitle = format!("({})", data.workload);
    let body = titled(
        area,
        &[
            "Comparación de Tiempos: Ejecución Secuencial vs Paralela",
            subtitle.as_str(),
        ],
        scale.font(fonts::TITLE, true),
    )?;

    let labels = data.detailed_labels();
    let panel = Panel::full(
        "Tamaño de datos (por archivo / total)",
        "Tiempo de ejecución (segundos)",
    );
    let y_max = fixed_bound(bounds::TIME_MAX, &data.sequential);
    let mut chart = category_chart(&body, &labels, y_max, &panel, scale)?;
    grouped_times(&mut chart, data, Some(fonts::ANNOTATION), true, scale)?;
    draw_legend(&mut chart, SeriesLabelPosition::UpperLeft, scale)
}

/// Speedup bars with the 1x baseline
pub(crate) fn speedup_panel(
    area: &Area<'_>,
    data: &BenchmarkData,
    panel: &Panel<'_>,
    y_max: f64,
    scale: Scale,
) -> Result<()> {
    let labels = data.simple_labels();
    let mut chart = category_chart(area, &labels, y_max, panel, scale)?;

    let annotation_pt = if panel.compact {
        fonts::TICK
    } else {
        fonts::ANNOTATION_LARGE
    };
    let width = if panel.compact { 0.8 } else { bars::SINGLE_WIDTH };
    let spec = BarSpec {
        edges: !panel.compact,
        annotation: Some((speedup_label as Formatter, annotation_pt)),
        ..BarSpec::new(&data.speedup, palette::SPEEDUP, width)
    };
    draw_bars(&mut chart, &spec, scale)?;

    if panel.compact {
        draw_baseline(&mut chart, labels.len(), 1.0, None, scale)
    } else {
        draw_baseline(
            &mut chart,
            labels.len(),
            1.0,
            Some("Baseline (sin mejora)"),
            scale,
        )?;
        draw_legend(&mut chart, SeriesLabelPosition::UpperRight, scale)
    }
}

/// Chart 2: speedup factor per dataset
pub(crate) fn speedup(area: &Area<'_>, data: &BenchmarkData, scale: Scale) -> Result<()> {
    let body = titled(
        area,
        &["Speedup: Paralelo vs Secuencial", "(Mayor es mejor)"],
        scale.font(fonts::TITLE, true),
    )?;
    let panel = Panel::full("Tamaño total de datos", "Speedup (veces más rápido)");
    let y_max = fixed_bound(bounds::SPEEDUP_MAX, &data.speedup);
    speedup_panel(&body, data, &panel, y_max, scale)
}

/// Chart 3: seconds saved per dataset
pub(crate) fn time_saved(
    area: &Area<'_>,
    data: &BenchmarkData,
    metrics: &DerivedMetrics,
    scale: Scale,
) -> Result<()> {
    let body = titled(
        area,
        &["Tiempo Ahorrado usando Ejecución Paralela"],
        scale.font(fonts::TITLE, true),
    )?;

    let labels = data.simple_labels();
    let panel = Panel::full("Tamaño total de datos", "Tiempo ahorrado (segundos)");
    let y_max = headroom(&metrics.time_saved, bounds::HEADROOM);
    let mut chart = category_chart(&body, &labels, y_max, &panel, scale)?;

    let spec = BarSpec {
        edges: true,
        annotation: Some((whole_seconds_label as Formatter, fonts::ANNOTATION_LARGE)),
        ..BarSpec::new(&metrics.time_saved, palette::TIME_SAVED, bars::SINGLE_WIDTH)
    };
    draw_bars(&mut chart, &spec, scale)
}

/// Dashboard cell: time reduction in percent, in graded greens
pub(crate) fn improvement_panel(
    area: &Area<'_>,
    data: &BenchmarkData,
    metrics: &DerivedMetrics,
    panel: &Panel<'_>,
    scale: Scale,
) -> Result<()> {
    let labels = data.simple_labels();
    let y_max = headroom(&metrics.improvement_pct, bounds::HEADROOM).min(110.0);
    let mut chart = category_chart(area, &labels, y_max, panel, scale)?;

    let spec = BarSpec {
        colors: gradient(
            palette::IMPROVEMENT_LIGHT,
            palette::IMPROVEMENT_DARK,
            labels.len(),
        ),
        annotation: Some((percent_label as Formatter, fonts::TICK)),
        ..BarSpec::new(&metrics.improvement_pct, palette::PARALLEL, 0.8)
    };
    draw_bars(&mut chart, &spec, scale)
}
