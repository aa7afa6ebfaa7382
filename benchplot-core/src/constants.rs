//! Constants for chart rendering
//!
//! Colors, figure sizes and axis bounds shared by the chart modules, kept in
//! one place to avoid magic numbers.

use plotters::style::RGBColor;

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "docs/charts";

/// Default resolution in dots per inch
pub const DEFAULT_DPI: u32 = 150;

/// Allowed difference between a reported speedup and the measured time ratio
pub const SPEEDUP_TOLERANCE: f64 = 0.1;

/// Series colors
pub mod palette {
    use super::RGBColor;

    /// Sequential series (`#e74c3c`)
    pub const SEQUENTIAL: RGBColor = RGBColor(0xe7, 0x4c, 0x3c);
    /// Parallel series (`#27ae60`)
    pub const PARALLEL: RGBColor = RGBColor(0x27, 0xae, 0x60);
    /// Speedup bars (`#3498db`)
    pub const SPEEDUP: RGBColor = RGBColor(0x34, 0x98, 0xdb);
    /// Time-saved bars (`#9b59b6`)
    pub const TIME_SAVED: RGBColor = RGBColor(0x9b, 0x59, 0xb6);
    /// Baseline reference line
    pub const BASELINE: RGBColor = RGBColor(0xff, 0x00, 0x00);
    /// Grid lines
    pub const GRID: RGBColor = RGBColor(0xb0, 0xb0, 0xb0);

    /// Pie slices for the sequential breakdown
    pub const SEQUENTIAL_STAGES: [RGBColor; 3] = [
        RGBColor(0xe7, 0x4c, 0x3c),
        RGBColor(0xf3, 0x9c, 0x12),
        RGBColor(0x9b, 0x59, 0xb6),
    ];
    /// Pie slices for the parallel breakdown
    pub const PARALLEL_STAGES: [RGBColor; 3] = [
        RGBColor(0x27, 0xae, 0x60),
        RGBColor(0x2e, 0xcc, 0x71),
        RGBColor(0x1a, 0xbc, 0x9c),
    ];

    /// Light and dark ends of the improvement gradient
    pub const IMPROVEMENT_LIGHT: RGBColor = RGBColor(0x8e, 0xd0, 0x8b);
    pub const IMPROVEMENT_DARK: RGBColor = RGBColor(0x1d, 0x85, 0x3f);
}

/// Axis bounds
pub mod bounds {
    /// Upper bound of every time axis (seconds)
    pub const TIME_MAX: f64 = 160.0;
    /// Upper bound of the speedup axis
    pub const SPEEDUP_MAX: f64 = 6.0;
    /// Upper bound of the data-size axis (MB)
    pub const SIZE_MAX: f64 = 1050.0;
    /// Headroom added above the tallest bar when no fixed bound applies
    pub const HEADROOM: f64 = 1.15;
}

/// Bar geometry, in category units
pub mod bars {
    /// Width of a bar in a grouped chart
    pub const GROUPED_WIDTH: f64 = 0.35;
    /// Width of a bar in a single-series chart
    pub const SINGLE_WIDTH: f64 = 0.6;
}

/// Font sizes in points; converted to pixels with the configured resolution
pub mod fonts {
    pub const SUPTITLE: f64 = 14.0;
    pub const TITLE: f64 = 14.0;
    pub const SUBTITLE: f64 = 11.0;
    pub const AXIS: f64 = 12.0;
    pub const TICK: f64 = 10.0;
    pub const ANNOTATION: f64 = 11.0;
    pub const ANNOTATION_LARGE: f64 = 14.0;
    pub const LEGEND: f64 = 11.0;
}
