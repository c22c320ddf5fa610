// 📈 Chart datasets - fixed, ordered series shown in the financials section
//
// A ChartSpec is leaf data: a handful of labelled periods, each carrying one
// or two values. Nothing here aggregates or mutates; validation only checks
// the invariants the renderers rely on (non-empty, ordered, consistent arity).

use crate::error::ContentError;
use serde::{Deserialize, Serialize};

// ============================================================================
// CHART POINT
// ============================================================================

/// One labelled row feeding a chart widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Category label shown on the x axis ("Q1 2025", "2026")
    pub period: String,

    /// First series value
    pub primary: f64,

    /// Second series value, absent for single-series charts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<f64>,
}

impl ChartPoint {
    pub fn new(period: &str, primary: f64, secondary: f64) -> Self {
        Self {
            period: period.to_string(),
            primary,
            secondary: Some(secondary),
        }
    }

    pub fn single(period: &str, primary: f64) -> Self {
        Self {
            period: period.to_string(),
            primary,
            secondary: None,
        }
    }

    /// Values in series order.
    pub fn values(&self) -> Vec<f64> {
        let mut values = vec![self.primary];
        if let Some(secondary) = self.secondary {
            values.push(secondary);
        }
        values
    }
}

// ============================================================================
// SERIES / CHART SPEC
// ============================================================================

/// How a dataset is drawn. The page template fixes one kind per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
        }
    }
}

/// Theme role a series is drawn with. Actual colors belong to the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    /// Machine name of the value ("progress", "revenue")
    pub key: String,

    /// Legend label
    pub name: String,

    pub tone: Tone,
}

impl SeriesSpec {
    pub fn new(key: &str, name: &str, tone: Tone) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub description: String,
    pub series: Vec<SeriesSpec>,
    pub points: Vec<ChartPoint>,
}

impl ChartSpec {
    /// Check the invariants the renderers assume.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.points.is_empty() || self.series.is_empty() {
            return Err(ContentError::EmptyChart {
                chart: self.title.clone(),
            });
        }

        let mut previous: Option<(&str, PeriodKey)> = None;
        for point in &self.points {
            let found = point.values().len();
            if found != self.series.len() {
                return Err(ContentError::SeriesArity {
                    chart: self.title.clone(),
                    period: point.period.clone(),
                    expected: self.series.len(),
                    found,
                });
            }

            if point.values().iter().any(|v| !v.is_finite()) {
                return Err(ContentError::NonFiniteValue {
                    chart: self.title.clone(),
                    period: point.period.clone(),
                });
            }

            let key = PeriodKey::parse(&point.period).ok_or_else(|| {
                ContentError::UnrecognizedPeriod {
                    chart: self.title.clone(),
                    period: point.period.clone(),
                }
            })?;

            if let Some((prev_label, prev_key)) = previous {
                if key <= prev_key {
                    return Err(ContentError::PeriodOutOfOrder {
                        chart: self.title.clone(),
                        previous: prev_label.to_string(),
                        period: point.period.clone(),
                    });
                }
            }
            previous = Some((&point.period, key));
        }

        Ok(())
    }

    /// Category labels in display order.
    pub fn categories(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.period.as_str()).collect()
    }
}

// ============================================================================
// PERIOD KEY
// ============================================================================

/// Sortable form of a period label: (year, first month of the period).
///
/// Accepted labels: `2026`, `Q1 2025` .. `Q4 2025`, `H1 2025`, `H2 2025`.
/// A bare year sorts before any quarter of the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PeriodKey {
    pub year: i32,
    pub month: u8,
}

impl PeriodKey {
    pub fn parse(label: &str) -> Option<Self> {
        let parts: Vec<&str> = label.split_whitespace().collect();
        match parts.as_slice() {
            [year] => Some(Self {
                year: parse_year(year)?,
                month: 0,
            }),
            [span, year] => {
                let year = parse_year(year)?;
                let mut chars = span.chars();
                let prefix = chars.next()?;
                let index: u8 = chars.as_str().parse().ok()?;
                let month = match (prefix, index) {
                    ('Q', 1..=4) => (index - 1) * 3 + 1,
                    ('H', 1..=2) => (index - 1) * 6 + 1,
                    _ => return None,
                };
                Some(Self { year, month })
            }
            _ => None,
        }
    }
}

fn parse_year(s: &str) -> Option<i32> {
    if s.len() == 4 && s.chars().all(|c| c.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

// ============================================================================
// TESTS
// ============================================================================
