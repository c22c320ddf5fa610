// Error types for content loading and configuration
//
// Page operations themselves (navigation, form edits, submit) cannot fail.
// Only the ambient layers - reading tenant content and configuration - do.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    /// A chart carries no data points.
    #[error("chart '{chart}' has no data points")]
    EmptyChart { chart: String },

    /// A period label could not be parsed into a sortable key.
    #[error("chart '{chart}': unrecognized period label '{period}'")]
    UnrecognizedPeriod { chart: String, period: String },

    /// Periods must be strictly increasing.
    #[error("chart '{chart}': period '{period}' is not after '{previous}'")]
    PeriodOutOfOrder {
        chart: String,
        previous: String,
        period: String,
    },

    /// Number of values in a point does not match the declared series.
    #[error("chart '{chart}': point '{period}' has {found} values, expected {expected}")]
    SeriesArity {
        chart: String,
        period: String,
        expected: usize,
        found: usize,
    },

    /// A chart value is NaN or infinite.
    #[error("chart '{chart}': point '{period}' has a non-finite value")]
    NonFiniteValue { chart: String, period: String },

    /// A card declares more metrics than the template can display.
    #[error("card '{card}' has {found} metrics, at most {max} allowed")]
    TooManyMetrics {
        card: String,
        found: usize,
        max: usize,
    },

    /// A feature card carries no detail line.
    #[error("feature card '{card}' has no detail")]
    MissingDetail { card: String },

    /// A link points at a section the page does not have.
    #[error("link '{label}' targets unknown section '{target}'")]
    UnknownLinkTarget { label: String, target: String },

    /// The slug is not usable as a URL path segment.
    #[error("slug '{slug}' {reason}")]
    InvalidSlug { slug: String, reason: &'static str },

    /// A required text field is empty.
    #[error("site '{site}': field '{field}' must not be empty")]
    EmptyField { site: String, field: &'static str },

    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse content file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Figment(Box::new(err))
    }
}
