// Chart View - drawable projection of a chart dataset
//
// Both front-ends draw from a ChartView: categories for the x axis, one value
// vector per series, and a rounded value axis. Building a view is a pure
// function of the ChartSpec, so rendering the same dataset twice always
// yields the same series in the same order.

use crate::content::{ChartKind, ChartSpec, Tone};
use serde::Serialize;

/// Number of intervals on the value axis.
pub const VALUE_AXIS_INTERVALS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesView {
    pub name: String,
    pub tone: Tone,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub kind: ChartKind,
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
    pub series: Vec<SeriesView>,

    /// Lowest value-axis tick (0 unless data goes negative)
    pub floor: f64,

    /// Highest value-axis tick
    pub ceiling: f64,

    pub ticks: Vec<f64>,
}

impl ChartView {
    pub fn from_spec(kind: ChartKind, spec: &ChartSpec) -> Self {
        let categories = spec.points.iter().map(|p| p.period.clone()).collect();

        let series: Vec<SeriesView> = spec
            .series
            .iter()
            .enumerate()
            .map(|(index, s)| SeriesView {
                name: s.name.clone(),
                tone: s.tone,
                values: spec
                    .points
                    .iter()
                    .map(|p| p.values().get(index).copied().unwrap_or(0.0))
                    .collect(),
            })
            .collect();

        let (min, max) = series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

        let (floor, ceiling, ticks) = value_axis(min, max);

        Self {
            kind,
            title: spec.title.clone(),
            description: spec.description.clone(),
            categories,
            series,
            floor,
            ceiling,
            ticks,
        }
    }

    /// Position of `value` on the value axis, 0.0 at floor, 1.0 at ceiling.
    pub fn ratio(&self, value: f64) -> f64 {
        let span = self.ceiling - self.floor;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.floor) / span).clamp(0.0, 1.0)
    }
}

/// Rounded value axis covering `min..=max` with `VALUE_AXIS_INTERVALS` steps.
fn value_axis(min: f64, max: f64) -> (f64, f64, Vec<f64>) {
    let range = max - min;
    if range <= 0.0 {
        return (0.0, 1.0, vec![0.0, 1.0]);
    }

    let step = nice_step(range / VALUE_AXIS_INTERVALS as f64);
    let floor = (min / step).floor() * step;
    let ceiling = (max / step).ceil() * step;
    let intervals = ((ceiling - floor) / step).round() as usize;
    let ticks = (0..=intervals).map(|i| floor + step * i as f64).collect();

    (floor, ceiling, ticks)
}

/// Round `raw` up to 1, 2, 2.5 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10_f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Compact tick label: 1000 -> "1000", 2.5 -> "2.5", 0.25 -> "0.25".
/// Rounded to six decimals so accumulated step error does not leak.
pub fn format_tick(value: f64) -> String {
    let fixed = format!("{:.6}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
