// Inline SVG charts for the HTML page
//
// Fixed-size drawing: dashed grid at every value tick, category labels under
// the plot, legend at the bottom. Geometry is computed here, markup lives in
// `templates/chart.svg`. Output depends only on the ChartView.

use crate::chart::{format_tick, ChartView};
use crate::content::{ChartKind, Tone};
use askama::Template;

pub const WIDTH: f64 = 560.0;
pub const HEIGHT: f64 = 300.0;

const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 60.0;

fn tone_style(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary => "hsl(var(--primary))",
        Tone::Accent => "hsl(var(--accent))",
    }
}

/// Coordinates are written with one decimal.
fn coord(value: f64) -> String {
    format!("{:.1}", value)
}

struct Plot<'a> {
    view: &'a ChartView,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl<'a> Plot<'a> {
    fn new(view: &'a ChartView) -> Self {
        Self {
            view,
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: WIDTH - MARGIN_LEFT - MARGIN_RIGHT,
            height: HEIGHT - MARGIN_TOP - MARGIN_BOTTOM,
        }
    }

    fn band(&self) -> f64 {
        self.width / self.view.categories.len().max(1) as f64
    }

    /// Center of category `index`.
    fn x(&self, index: usize) -> f64 {
        self.left + self.band() * (index as f64 + 0.5)
    }

    fn y(&self, value: f64) -> f64 {
        self.top + self.height * (1.0 - self.view.ratio(value))
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn tooltip(&self, index: usize, value: f64) -> String {
        format!("{}: {}", self.view.categories[index], format_tick(value))
    }
}

struct GridLine {
    x1: String,
    x2: String,
    y: String,
    label_x: String,
    label_y: String,
    label: String,
}

struct AxisLabel<'a> {
    x: String,
    y: String,
    text: &'a str,
}

struct Marker {
    x: String,
    y: String,
    title: String,
}

struct LineSeries {
    color: &'static str,
    points: String,
    markers: Vec<Marker>,
}

struct BarRect {
    x: String,
    y: String,
    width: String,
    height: String,
    color: &'static str,
    title: String,
}

struct LegendEntry<'a> {
    x: String,
    swatch_y: String,
    text_x: String,
    text_y: String,
    color: &'static str,
    name: &'a str,
}

#[derive(Template)]
#[template(path = "chart.svg", escape = "html")]
struct ChartTemplate<'a> {
    kind: &'static str,
    width: f64,
    height: f64,
    title: &'a str,
    grid: Vec<GridLine>,
    categories: Vec<AxisLabel<'a>>,
    lines: Vec<LineSeries>,
    bars: Vec<BarRect>,
    legend: Vec<LegendEntry<'a>>,
}

impl<'a> ChartTemplate<'a> {
    fn frame(plot: &Plot<'a>) -> Self {
        let view = plot.view;

        let grid = view
            .ticks
            .iter()
            .map(|tick| {
                let y = plot.y(*tick);
                GridLine {
                    x1: coord(plot.left),
                    x2: coord(plot.left + plot.width),
                    y: coord(y),
                    label_x: coord(plot.left - 6.0),
                    label_y: coord(y + 4.0),
                    label: format_tick(*tick),
                }
            })
            .collect();

        let categories = view
            .categories
            .iter()
            .enumerate()
            .map(|(i, category)| AxisLabel {
                x: coord(plot.x(i)),
                y: coord(plot.bottom() + 16.0),
                text: category,
            })
            .collect();

        let legend_y = HEIGHT - 14.0;
        let mut x = MARGIN_LEFT;
        let legend = view
            .series
            .iter()
            .map(|series| {
                let entry = LegendEntry {
                    x: coord(x),
                    swatch_y: coord(legend_y - 9.0),
                    text_x: coord(x + 14.0),
                    text_y: coord(legend_y),
                    color: tone_style(series.tone),
                    name: &series.name,
                };
                x += 28.0 + series.name.chars().count() as f64 * 7.0;
                entry
            })
            .collect();

        Self {
            kind: view.kind.as_str(),
            width: WIDTH,
            height: HEIGHT,
            title: &view.title,
            grid,
            categories,
            lines: vec![],
            bars: vec![],
            legend,
        }
    }
}

/// Render `view` as the kind it carries.
pub fn render(view: &ChartView) -> askama::Result<String> {
    match view.kind {
        ChartKind::Line => line_chart(view),
        ChartKind::Bar => bar_chart(view),
    }
}

pub fn line_chart(view: &ChartView) -> askama::Result<String> {
    let plot = Plot::new(view);
    let mut chart = ChartTemplate::frame(&plot);

    chart.lines = view
        .series
        .iter()
        .map(|series| {
            let points: Vec<String> = series
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| format!("{},{}", coord(plot.x(i)), coord(plot.y(*v))))
                .collect();
            LineSeries {
                color: tone_style(series.tone),
                points: points.join(" "),
                markers: series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| Marker {
                        x: coord(plot.x(i)),
                        y: coord(plot.y(*v)),
                        title: plot.tooltip(i, *v),
                    })
                    .collect(),
            }
        })
        .collect();

    chart.render()
}

pub fn bar_chart(view: &ChartView) -> askama::Result<String> {
    let plot = Plot::new(view);
    let mut chart = ChartTemplate::frame(&plot);

    let group = plot.band() * 0.8;
    let bar = group / view.series.len().max(1) as f64;
    let baseline = plot.y(0.0);

    for (s, series) in view.series.iter().enumerate() {
        for (i, v) in series.values.iter().enumerate() {
            let x = plot.x(i) - group / 2.0 + bar * s as f64;
            let y = plot.y(*v);
            let (top, height) = if y <= baseline {
                (y, baseline - y)
            } else {
                (baseline, y - baseline)
            };
            chart.bars.push(BarRect {
                x: coord(x),
                y: coord(top),
                width: coord(bar),
                height: coord(height),
                color: tone_style(series.tone),
                title: plot.tooltip(i, *v),
            });
        }
    }

    chart.render()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::hotel;

    fn hotel_views() -> (ChartView, ChartView) {
        let site = hotel::content();
        (
            ChartView::from_spec(ChartKind::Line, &site.charts.line),
            ChartView::from_spec(ChartKind::Bar, &site.charts.bar),
        )
    }

    #[test]
    fn test_line_chart_structure() {
        let (line, _) = hotel_views();
        let svg = line_chart(&line).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<polyline").count(), 2);
        assert_eq!(svg.matches("<circle").count(), 10);
        for label in ["Q1 2025", "Q4 2025", "Q1 2026"] {
            assert!(svg.contains(label), "missing axis label {}", label);
        }
        assert!(svg.contains("Прогресс %"));
        assert!(svg.contains("Инвестиции"));
    }

    #[test]
    fn test_bar_chart_structure() {
        let (_, bar) = hotel_views();
        let svg = bar_chart(&bar).unwrap();

        // 5 years x 2 series, plus 2 legend swatches
        assert_eq!(svg.matches(r#"<rect class="series""#).count(), 10);
        assert!(svg.contains("chart-bar"));
        assert!(svg.contains("2030"));
        assert!(svg.contains("Загрузка %"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let (line, bar) = hotel_views();
        assert_eq!(render(&line).unwrap(), render(&line).unwrap());
        assert_eq!(render(&bar).unwrap(), render(&bar).unwrap());
        assert_ne!(render(&line).unwrap(), render(&bar).unwrap());
    }

    #[test]
    fn test_labels_are_escaped() {
        let (mut line, _) = hotel_views();
        line.title = "<b>&</b>".to_string();
        let svg = line_chart(&line).unwrap();
        assert!(svg.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
        assert!(!svg.contains("<b>"));
    }
}
