// 🗂️ Cards and small display records
//
// Feature cards (about section), project cards (portfolio), downloadable
// materials, contact details and the investment offer. All immutable leaf
// data; the only checks are the display limits the template has.

use crate::error::ContentError;
use serde::{Deserialize, Serialize};

/// Maximum number of metrics a card can show.
pub const MAX_CARD_METRICS: usize = 2;

/// A label/value pair ("Бюджет проекта" / "850М ₽").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

impl Metric {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

// ============================================================================
// FEATURE CARD
// ============================================================================

/// Card in the "about" section: icon, title, description and one or two
/// highlighted detail lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCard {
    pub title: String,
    pub description: String,

    /// Icon identifier, resolved by the front-end ("Building2", "MapPin")
    pub icon: String,

    pub details: Vec<String>,
}

impl FeatureCard {
    pub fn new(title: &str, description: &str, icon: &str, details: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            details: details.iter().map(|d| d.to_string()).collect(),
        }
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.details.is_empty() {
            return Err(ContentError::MissingDetail {
                card: self.title.clone(),
            });
        }
        check_metric_count(&self.title, self.details.len())
    }
}

// ============================================================================
// PROJECT CARD
// ============================================================================

/// Card in the portfolio section. Hotel renders carry an image and no
/// metrics; product cards carry metrics and no image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub icon: String,

    /// Absolute image URL. Broken links are the image host's problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default)]
    pub metrics: Vec<Metric>,
}

impl ProjectCard {
    pub fn validate(&self) -> Result<(), ContentError> {
        check_metric_count(&self.title, self.metrics.len())
    }
}

fn check_metric_count(card: &str, found: usize) -> Result<(), ContentError> {
    if found > MAX_CARD_METRICS {
        return Err(ContentError::TooManyMetrics {
            card: card.to_string(),
            found,
            max: MAX_CARD_METRICS,
        });
    }
    Ok(())
}

// ============================================================================
// MATERIALS / CONTACT / OFFER
// ============================================================================

/// Downloadable material. The download button is decorative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub title: String,
    pub description: String,
    pub icon: String,

    /// Button caption, e.g. "Скачать PDF (2.4 МБ)"
    pub action_label: String,
}

impl Material {
    pub fn new(title: &str, description: &str, icon: &str, action_label: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            action_label: action_label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetail {
    pub icon: String,
    pub label: String,
    pub value: String,
}

impl ContactDetail {
    pub fn new(icon: &str, label: &str, value: &str) -> Self {
        Self {
            icon: icon.to_string(),
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Highlighted offer block at the bottom of the financials section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentOffer {
    pub title: String,
    pub subtitle: String,
    pub terms: Vec<Metric>,
    pub note: String,
    pub cta_label: String,
}
