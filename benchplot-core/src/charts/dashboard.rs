//! 2x2 summary grid

use super::bars::{
    category_chart, draw_legend, grouped_times, improvement_panel, speedup_panel, Panel,
};
use super::canvas::{headroom, titled, Area, Scale};
use super::lines::{fitted_bounds, scalability_panel};
use crate::constants::{bounds, fonts};
use crate::data::BenchmarkData;
use crate::error::Result;
use crate::metrics::DerivedMetrics;
use plotters::prelude::SeriesLabelPosition;

/// Chart 5: execution times, speedup, scalability and time reduction
pub(crate) fn dashboard(
    area: &Area<'_>,
    data: &BenchmarkData,
    metrics: &DerivedMetrics,
    scale: Scale,
) -> Result<()> {
    let subtitle = format!("({})", data.workload);
    let body = titled(
        area,
        &["Dashboard de Resultados: Benchmark de Paralelismo", subtitle.as_str()],
        scale.font(fonts::SUPTITLE, true),
    )?;

    let cells = body.split_evenly((2, 2));
    let labels = data.simple_labels();

    let times = Panel::compact("Tiempos de Ejecución", "Tamaño de datos", "Tiempo (s)");
    let y_max = headroom(&data.sequential, bounds::HEADROOM);
    let mut chart = category_chart(&cells[0], &labels, y_max, &times, scale)?;
    grouped_times(&mut chart, data, None, false, scale)?;
    draw_legend(&mut chart, SeriesLabelPosition::UpperLeft, scale)?;

    let speedup = Panel::compact("Factor de Aceleración", "Tamaño de datos", "Speedup (x)");
    let y_max = headroom(&data.speedup, bounds::HEADROOM);
    speedup_panel(&cells[1], data, &speedup, y_max, scale)?;

    let trend = Panel::compact(
        "Tendencia de Escalabilidad",
        "Tamaño de datos (MB)",
        "Tiempo (s)",
    );
    let (x_max, y_max) = fitted_bounds(data);
    scalability_panel(&cells[2], data, &trend, x_max, y_max, scale)?;

    let reduction = Panel::compact(
        "% de Tiempo Reducido",
        "Tamaño de datos",
        "Reducción de tiempo (%)",
    );
    improvement_panel(&cells[3], data, metrics, &reduction, scale)
}
