//! Figure sizing, fonts and the shared drawing helpers
//!
//! Sizes are expressed the way a print layout would be: figures in inches and
//! fonts in points, converted to pixels with the run's resolution.

use crate::constants::{bounds, fonts, palette};
use crate::error::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;
use std::path::Path;

/// Drawing area of a PNG figure
pub(crate) type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Figure size in inches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    /// Width in inches
    pub width_in: f64,
    /// Height in inches
    pub height_in: f64,
}

impl Figure {
    /// Create a figure size
    pub const fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
        }
    }

    /// Pixel dimensions at the given resolution
    pub fn pixels(&self, dpi: u32) -> (u32, u32) {
        let dpi = f64::from(dpi);
        (
            (self.width_in * dpi).round().max(1.0) as u32,
            (self.height_in * dpi).round().max(1.0) as u32,
        )
    }
}

/// Unit conversion for one rendering resolution
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scale {
    dpi: u32,
}

impl Scale {
    pub fn new(dpi: u32) -> Self {
        Self { dpi: dpi.max(1) }
    }

    /// Points to pixels
    pub fn pt(&self, points: f64) -> f64 {
        points * f64::from(self.dpi) / 72.0
    }

    /// Points to whole pixels
    pub fn px(&self, points: f64) -> u32 {
        self.pt(points).round().max(1.0) as u32
    }

    pub fn font(&self, points: f64, bold: bool) -> FontDesc<'static> {
        let style = if bold {
            FontStyle::Bold
        } else {
            FontStyle::Normal
        };
        FontDesc::new(FontFamily::SansSerif, self.pt(points), style)
    }

    /// Centered text sitting on top of its anchor
    pub fn annotation(&self, points: f64) -> TextStyle<'static> {
        self.font(points, true)
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom))
    }

    /// Centered text hanging below its anchor
    pub fn annotation_below(&self, points: f64) -> TextStyle<'static> {
        self.font(points, false)
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Top))
    }
}

/// Create a PNG figure, hand its drawing area to `draw`, and flush it to disk
pub(crate) fn render_png<F>(path: &Path, figure: Figure, scale: Scale, draw: F) -> Result<()>
where
    F: FnOnce(&Area<'_>) -> Result<()>,
{
    let root = BitMapBackend::new(path, figure.pixels(scale.dpi)).into_drawing_area();
    root.fill(&WHITE)?;

    let pad = scale.px(6.0);
    let inner = root.margin(pad, pad, pad, pad);
    draw(&inner)?;

    root.present()?;
    Ok(())
}

/// Stack title lines on top of an area and return the remaining space
pub(crate) fn titled<'a>(area: &Area<'a>, lines: &[&str], font: FontDesc<'_>) -> Result<Area<'a>> {
    let mut current = area.clone();
    for line in lines {
        current = current.titled(line, font.clone())?;
    }
    Ok(current)
}

/// X range covering `n` categories centered on 0, 1, .., n - 1
pub(crate) fn category_range(n: usize) -> Range<f64> {
    -0.5..(n as f64 - 0.5)
}

/// Tick label for a category axis; empty between categories
pub(crate) fn category_label(labels: &[String], x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels.get(index as usize).cloned().unwrap_or_default()
}

/// Upper axis bound leaving room for annotations above the tallest value
pub(crate) fn headroom(values: &[f64], factor: f64) -> f64 {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    if max > 0.0 {
        max * factor
    } else {
        1.0
    }
}

/// Fixed axis bound, widened only when the data would not fit under it
pub(crate) fn fixed_bound(fixed: f64, values: &[f64]) -> f64 {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    if max * 1.05 <= fixed {
        fixed
    } else {
        headroom(values, bounds::HEADROOM)
    }
}

/// Evenly interpolated colors from `light` to `dark`
pub(crate) fn gradient(light: RGBColor, dark: RGBColor, n: usize) -> Vec<RGBColor> {
    let lerp = |a: u8, b: u8, t: f64| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    (0..n)
        .map(|i| {
            let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 1.0 };
            RGBColor(
                lerp(light.0, dark.0, t),
                lerp(light.1, dark.1, t),
                lerp(light.2, dark.2, t),
            )
        })
        .collect()
}

/// Horizontal grid color
pub(crate) fn grid_style() -> ShapeStyle {
    palette::GRID.mix(0.3).stroke_width(1)
}

/// Legend font
pub(crate) fn legend_font(scale: Scale) -> FontDesc<'static> {
    scale.font(fonts::LEGEND, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_pixels() {
        assert_eq!(Figure::new(12.0, 7.0).pixels(150), (1800, 1050));
        assert_eq!(Figure::new(10.0, 6.0).pixels(100), (1000, 600));
    }

    #[test]
    fn test_points_to_pixels() {
        let scale = Scale::new(144);
        assert_eq!(scale.pt(10.0), 20.0);
        assert_eq!(scale.px(0.1), 1);
    }

    #[test]
    fn test_category_label() {
        let labels = vec!["20MB".to_string(), "99MB".to_string()];
        assert_eq!(category_label(&labels, 0.0), "20MB");
        assert_eq!(category_label(&labels, 1.0), "99MB");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }

    #[test]
    fn test_category_range() {
        assert_eq!(category_range(4), -0.5..3.5);
    }

    #[test]
    fn test_headroom() {
        assert!((headroom(&[10.0, 20.0], 1.5) - 30.0).abs() < 1e-9);
        assert_eq!(headroom(&[], 1.5), 1.0);
    }

    #[test]
    fn test_fixed_bound() {
        assert_eq!(fixed_bound(160.0, &[36.8, 140.0]), 160.0);
        assert!(fixed_bound(160.0, &[200.0]) > 200.0);
    }

    #[test]
    fn test_gradient_endpoints() {
        let light = RGBColor(0, 0, 0);
        let dark = RGBColor(200, 100, 50);
        let colors = gradient(light, dark, 3);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0], light);
        assert_eq!(colors[1], RGBColor(100, 50, 25));
        assert_eq!(colors[2], dark);
        assert_eq!(gradient(light, dark, 1), vec![dark]);
    }
}
